//! A static evaluator for scoring non-terminal positions

use crate::board::{Board, Cell};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

const COMPLETE_WINDOW: i32 = 100;
const THREE_WITH_SPACE: i32 = 5;
const TWO_WITH_SPACE: i32 = 2;
const OPPONENT_THREE: i32 = -4;
const CENTER_TILE: i32 = 3;

/// Scores a single four-cell window for `piece`
///
/// Windows mixing both pieces score nothing for the owning side, but an
/// opponent three-with-a-space is penalised independently
pub fn evaluate_window(window: &[Cell; WIN_LENGTH], piece: Cell) -> i32 {
    let opponent = piece.opponent();
    let own = window.iter().filter(|&&cell| cell == piece).count();
    let theirs = window.iter().filter(|&&cell| cell == opponent).count();
    let empty = window.iter().filter(|cell| cell.is_empty()).count();

    let mut score = 0;

    if own == 4 {
        score += COMPLETE_WINDOW;
    } else if own == 3 && empty == 1 {
        score += THREE_WITH_SPACE;
    } else if own == 2 && empty == 2 {
        score += TWO_WITH_SPACE;
    }

    if theirs == 3 && empty == 1 {
        score += OPPONENT_THREE;
    }

    score
}

/// Sums the window scores of every four-cell line on the board, plus a
/// bonus for tiles in the center column
pub fn score_position(board: &Board, piece: Cell) -> i32 {
    let mut score = 0;

    // center tiles touch the most potential alignments
    let center = WIDTH / 2;
    let center_count = (0..HEIGHT).filter(|&row| board.cell(row, center) == piece).count();
    score += center_count as i32 * CENTER_TILE;

    // horizontal windows
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - WIN_LENGTH {
            let window: [Cell; WIN_LENGTH] =
                std::array::from_fn(|i| board.cell(row, column + i));
            score += evaluate_window(&window, piece);
        }
    }

    // vertical windows
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - WIN_LENGTH {
            let window: [Cell; WIN_LENGTH] =
                std::array::from_fn(|i| board.cell(row + i, column));
            score += evaluate_window(&window, piece);
        }
    }

    // diagonal / windows
    for row in 0..=HEIGHT - WIN_LENGTH {
        for column in 0..=WIDTH - WIN_LENGTH {
            let window: [Cell; WIN_LENGTH] =
                std::array::from_fn(|i| board.cell(row + i, column + i));
            score += evaluate_window(&window, piece);
        }
    }

    // diagonal \ windows
    for row in WIN_LENGTH - 1..HEIGHT {
        for column in 0..=WIDTH - WIN_LENGTH {
            let window: [Cell; WIN_LENGTH] =
                std::array::from_fn(|i| board.cell(row - i, column + i));
            score += evaluate_window(&window, piece);
        }
    }

    score
}
