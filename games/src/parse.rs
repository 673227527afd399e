//! Plain-text bimatrix format
//!
//! ```text
//! # row player
//! 3 0
//! 5 1
//!
//! # column player
//! 2 1
//! 4 3
//! ```
//!
//! Rows of whitespace-separated numbers give A, one or more blank lines end
//! it, and the following rows give B. `#` starts a comment that runs to the
//! end of the line. Comment-only lines do not separate blocks.

use std::fs;
use std::path::Path;

use lemke_engine::{Game, Matrix};

use crate::error::GameError;

/// Parse a game from text.
pub fn parse_game(text: &str) -> Result<Game, GameError> {
    let mut blocks: Vec<Vec<Vec<f64>>> = Vec::new();
    let mut current: Vec<Vec<f64>> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let is_comment = raw.trim_start().starts_with('#');
        let line = raw.split('#').next().unwrap_or("").trim();

        if line.is_empty() {
            if !is_comment && !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| GameError::InvalidNumber {
                    line: line_no,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, GameError>>()?;
        current.push(row);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    if blocks.len() != 2 {
        return Err(GameError::BlockCount(blocks.len()));
    }
    let b = blocks.pop().unwrap_or_default();
    let a = blocks.pop().unwrap_or_default();
    let game = Game::new(Matrix::from_rows(a)?, Matrix::from_rows(b)?)?;
    log::debug!("parsed {}x{} game", game.rows(), game.cols());
    Ok(game)
}

/// Read and parse a game file.
pub fn read_game(path: impl AsRef<Path>) -> Result<Game, GameError> {
    let text = fs::read_to_string(path)?;
    parse_game(&text)
}

/// Render a game in the text format accepted by [`parse_game`].
pub fn render_game(game: &Game) -> String {
    let mut out = String::new();
    for (k, m) in [game.a(), game.b()].into_iter().enumerate() {
        if k > 0 {
            out.push('\n');
        }
        for i in 0..m.rows() {
            let row: Vec<String> = m.row(i).iter().map(|x| x.to_string()).collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemke_engine::test_games::{reference_game, three_by_two};
    use lemke_engine::SolverError;

    #[test]
    fn test_parse_reference_game() {
        let text = "# row player\n3 0\n5 1\n\n# column player\n2 1\n4 3\n";
        assert_eq!(parse_game(text).unwrap(), reference_game());
    }

    #[test]
    fn test_parse_tolerates_extra_blank_lines_and_trailing_comments() {
        let text = "\n\n  3 0   # cooperate\n5 1\n\n\n\n2 1\n4 3\n\n";
        assert_eq!(parse_game(text).unwrap(), reference_game());
    }

    #[test]
    fn test_comment_line_does_not_split_blocks() {
        let text = "3 0\n# still A\n5 1\n\n2 1\n4 3";
        assert_eq!(parse_game(text).unwrap(), reference_game());
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_game("3 x\n5 1\n\n2 1\n4 3").unwrap_err();
        assert!(matches!(err, GameError::InvalidNumber { line: 1, ref token } if token == "x"));
    }

    #[test]
    fn test_wrong_block_count() {
        assert!(matches!(parse_game("1 2\n3 4\n"), Err(GameError::BlockCount(1))));
        assert!(matches!(parse_game(""), Err(GameError::BlockCount(0))));
        assert!(matches!(parse_game("1\n\n2\n\n3"), Err(GameError::BlockCount(3))));
    }

    #[test]
    fn test_ragged_matrix() {
        let err = parse_game("1 2\n3\n\n1 2\n3 4").unwrap_err();
        assert!(matches!(err, GameError::Game(SolverError::RaggedRow { row: 1, .. })));
    }

    #[test]
    fn test_shape_mismatch() {
        let err = parse_game("1 2\n3 4\n\n1 2 3\n4 5 6").unwrap_err();
        assert!(matches!(err, GameError::Game(SolverError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_render_then_parse() {
        let g = three_by_two();
        assert_eq!(parse_game(&render_game(&g)).unwrap(), g);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(read_game("/nonexistent/game.txt"), Err(GameError::Io(_))));
    }
}
