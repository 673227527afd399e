//! Named textbook games

use lemke_engine::test_games;
use lemke_engine::Game;

/// Names accepted by [`by_name`], in display order.
pub const NAMES: &[&str] = &[
    "reference",
    "trivial",
    "matching-pennies",
    "rock-paper-scissors",
    "battle-of-the-sexes",
    "prisoners-dilemma",
    "three-by-two",
];

/// Look up a catalog game. Names are case-insensitive and accept `_` for `-`.
pub fn by_name(name: &str) -> Option<Game> {
    let key = name.trim().to_ascii_lowercase().replace('_', "-");
    let game = match key.as_str() {
        "reference" => test_games::reference_game(),
        "trivial" => test_games::trivial_game(),
        "matching-pennies" => test_games::matching_pennies(),
        "rock-paper-scissors" | "rps" => test_games::rock_paper_scissors(),
        "battle-of-the-sexes" => test_games::battle_of_the_sexes(),
        "prisoners-dilemma" => test_games::prisoners_dilemma(),
        "three-by-two" => test_games::three_by_two(),
        _ => return None,
    };
    Some(game)
}
