//! A computer opponent for the board game 'Connect 4'
//!
//! This agent explores placements with a fixed-depth minimax search,
//! scoring non-terminal leaf positions with a static heuristic evaluator.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::board::{Board, Cell};
//! use connect4_minimax::search::{minimax, SEARCH_DEPTH};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! board.drop_piece(3, Cell::Player)?;
//!
//! let (column, _score) = minimax(&board, SEARCH_DEPTH, true);
//! assert!(column.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod eval;

pub mod search;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles that wins the game
pub const WIN_LENGTH: usize = 4;

// ensure a winning line fits on the board in every orientation
const_assert!(WIN_LENGTH <= WIDTH && WIN_LENGTH <= HEIGHT);
