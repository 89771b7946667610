use anyhow::Result;
use rand::Rng;

use std::io::{stdin, stdout, Write};

use connect4_minimax::board::{Board, Cell, GameOutcome};
use connect4_minimax::search::{minimax, SEARCH_DEPTH};
use connect4_minimax::WIDTH;

mod render;

fn main() -> Result<()> {
    let mut board = Board::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // coin flip for which side moves first
    let mut human_turn = rand::thread_rng().gen_bool(0.5);
    if human_turn {
        println!("You move first");
    } else {
        println!("The AI moves first");
    }

    // game loop
    loop {
        render::draw(&board)?;

        match board.outcome() {
            GameOutcome::InProgress => {
                if human_turn {
                    print!("Your turn, choose a column (0-{}) > ", WIDTH - 1);
                    stdout().flush().expect("failed to flush to stdout!");

                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    let column = match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            // try the move again
                            continue;
                        }
                        Ok(column) => column,
                    };

                    if let Err(err) = board.drop_piece(column, Cell::Player) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                } else {
                    println!("AI is thinking...");
                    stdout().flush().expect("failed to flush to stdout!");

                    let (column, _score) = minimax(&board, SEARCH_DEPTH, true);
                    match column {
                        Some(column) if board.is_valid_location(column) => {
                            let row = board.drop_piece(column, Cell::Ai)?;
                            println!("AI placed a piece in column {}, row {}", column, row);
                        }
                        // the search only fails to pick a column on a board
                        // with no legal moves; skip the turn instead of dying
                        _ => {}
                    }
                }
                human_turn = !human_turn;
            }

            // end states
            GameOutcome::PlayerWin => {
                println!("You win!");
                break;
            }
            GameOutcome::AiWin => {
                println!("AI wins!");
                break;
            }
            GameOutcome::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
