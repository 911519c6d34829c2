/// Prints the accepted market identifier vocabulary.
pub fn run() {
    println!("Accepted market identifiers (append _ht for half-time variants):");
    println!();
    println!("  over_{{line}}_ft / under_{{line}}_ft      total goals, e.g. over_2.5_ft");
    println!("  btts_yes / btts_no                    both teams to score");
    println!("  1x2_home / 1x2_draw / 1x2_away        match result");
    println!("  double_chance_1x / _12 / _x2          double chance");
    println!("  corners_over_{{line}} / corners_under_{{line}}");
    println!();
    println!("Whole-number lines (e.g. over_2_ft) push to a void bet on an exact tie.");
}
