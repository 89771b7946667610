use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::board::{Board, Cell};
use connect4_minimax::{HEIGHT, WIDTH};

/// Draws the board to stdout, top row first, each cell as its raw value:
/// 0 for empty, 1 for the player, 2 for the AI
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (0..WIDTH).map(|column| column.to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    // internal row 0 is the bottom of the board
    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            let cell = board.cell(row, column);
            let digit = match cell {
                Cell::Empty => '0',
                Cell::Player => '1',
                Cell::Ai => '2',
            };

            stdout.queue(PrintStyledContent(
                style(digit)
                    .attribute(Attribute::Bold)
                    .with(match cell {
                        Cell::Player => Color::Red,
                        Cell::Ai => Color::Yellow,
                        Cell::Empty => Color::DarkGrey,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
