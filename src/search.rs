//! A depth-limited minimax search over board copies

use rand::seq::SliceRandom;

use crate::board::{Board, Cell, GameOutcome};
use crate::eval::score_position;

/// The number of plies searched ahead for the computer's move
pub const SEARCH_DEPTH: u32 = 4;

/// The score of a won game, far beyond anything the evaluator can produce
pub const WIN_SCORE: i32 = 100_000;

/// Searches the game tree to `depth` plies and returns the best column for
/// the side to move together with its score
///
/// The maximizing side plays [`Cell::Ai`] and the minimizing side plays
/// [`Cell::Player`]. The column is `None` exactly when no placement was
/// explored, i.e. on terminal or depth-exhausted boards. Callers must not
/// search a full board; the game loop checks for a draw first.
///
/// # Notes
/// Every candidate move is explored on its own copy of the board, so no
/// speculative placement ever leaks into a sibling branch. The full
/// branching factor is searched at every node; at the fixed depth of 4
/// this is at most 2401 leaf evaluations.
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> (Option<usize>, i32) {
    match board.outcome() {
        GameOutcome::AiWin => return (None, WIN_SCORE),
        GameOutcome::PlayerWin => return (None, -WIN_SCORE),
        GameOutcome::Draw => return (None, 0),
        GameOutcome::InProgress => {}
    }
    if depth == 0 {
        return (None, score_position(board, Cell::Ai));
    }

    let valid_locations = board.valid_locations();
    // arbitrary default, replaced by the first strictly improving candidate
    let mut best_column = *valid_locations
        .choose(&mut rand::thread_rng())
        .unwrap(); // an in-progress board always has an open column

    let (mover, mut best_score) = if maximizing {
        (Cell::Ai, i32::MIN)
    } else {
        (Cell::Player, i32::MAX)
    };

    for &column in &valid_locations {
        let mut child = board.clone();
        // the column is open, so an open row exists
        let row = child.next_open_row(column).unwrap();
        child.place(row, column, mover);

        let (_, score) = minimax(&child, depth - 1, !maximizing);
        // strict inequality keeps the earlier-found column on equal scores
        if (maximizing && score > best_score) || (!maximizing && score < best_score) {
            best_score = score;
            best_column = column;
        }
    }

    (Some(best_column), best_score)
}
