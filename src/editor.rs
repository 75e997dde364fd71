use std::io;

use crate::canvas::{Canvas, MAX_COLS, MAX_ROWS};
use crate::input::{Direction, KeyEvent};
use crate::terminal::Terminal;

/// Cursor-driven edit loop. The cursor starts at the top-left cell; arrow
/// moves clamp at the canvas bounds, printable keys overwrite the cell
/// under the cursor without advancing it, and ESC is the only exit.
/// Every edit lands on the live canvas immediately.
pub fn edit_canvas<T: Terminal>(canvas: &mut Canvas, term: &mut T) -> io::Result<()> {
    let mut row: usize = 0;
    let mut col: usize = 0;

    loop {
        term.move_to(row as u16, col as u16)?;
        term.flush()?;

        match term.read_key()? {
            KeyEvent::Escape => break,
            KeyEvent::Move(direction) => match direction {
                Direction::Left => {
                    if col > 0 {
                        col -= 1;
                    }
                }
                Direction::Right => {
                    if col < MAX_COLS - 1 {
                        col += 1;
                    }
                }
                Direction::Up => {
                    if row > 0 {
                        row -= 1;
                    }
                }
                Direction::Down => {
                    if row < MAX_ROWS - 1 {
                        row += 1;
                    }
                }
            },
            KeyEvent::Printable(ch) => {
                canvas.set(row, col, ch);
                term.write_char(ch)?;
            }
            KeyEvent::Ignored => (),
        }
    }

    Ok(())
}
