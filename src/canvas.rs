pub const MAX_ROWS: usize = 22;
pub const MAX_COLS: usize = 80;

pub const BLANK: char = ' ';

/// The fixed-size character grid being edited. Every cell holds visible
/// ASCII (space through tilde); there is no uninitialized state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: [[char; MAX_COLS]; MAX_ROWS],
}

impl Canvas {
    pub fn new() -> Canvas {
        Canvas {
            cells: [[BLANK; MAX_COLS]; MAX_ROWS],
        }
    }

    /// Resets every cell to blank.
    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(BLANK);
        }
    }

    /// Overwrites every cell with the corresponding cell of `src`.
    pub fn copy_from(&mut self, src: &Canvas) {
        self.cells = src.cells;
    }

    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        self.cells[row][col] = ch;
    }

    /// Replaces all instances of `old` with `new`.
    pub fn replace(&mut self, old: char, new: char) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == old {
                    *cell = new;
                }
            }
        }
    }

    /// Shifts the contents by `row_delta` rows (positive is down) and
    /// `col_delta` columns (positive is right). Cells whose destination
    /// falls outside the grid are dropped; vacated cells become blank.
    pub fn shift(&mut self, row_delta: i32, col_delta: i32) {
        let mut shifted = Canvas::new();

        for row in 0..MAX_ROWS {
            for col in 0..MAX_COLS {
                let dest_row = row as i32 + row_delta;
                let dest_col = col as i32 + col_delta;

                if dest_row < 0 || dest_row >= MAX_ROWS as i32 {
                    continue;
                }
                if dest_col < 0 || dest_col >= MAX_COLS as i32 {
                    continue;
                }

                shifted.cells[dest_row as usize][dest_col as usize] = self.cells[row][col];
            }
        }

        self.copy_from(&shifted);
    }

    /// One canvas row as a COLS-character string, trailing blanks included.
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row].iter().collect()
    }
}
