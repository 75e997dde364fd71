use std::io;
use std::path::PathBuf;

use log::{info, warn};

use crate::canvas::{Canvas, BLANK, MAX_COLS, MAX_ROWS};
use crate::editor::edit_canvas;
use crate::storage::{self, StorageError};
use crate::terminal::Terminal;

// Screen row of the menu/prompt line, just below the bottom border.
const MENU_ROW: u16 = MAX_ROWS as u16 + 1;
const MESSAGE_WIDTH: u16 = MAX_COLS as u16 + 1;

const MENU: &str = "<E>dit / <M>ove / <R>eplace / <U>ndo / <L>oad / <S>ave / <Q>uit: ";

/// Owns the live canvas and the single undo snapshot, and drives the menu
/// loop. The snapshot is overwritten right before every mutating operation
/// (edit, move, replace, load); Undo copies it back. Save never touches it,
/// so undoing after a save still reverts the last real mutation.
pub struct Session<T: Terminal> {
    canvas: Canvas,
    snapshot: Canvas,
    term: T,
    save_dir: PathBuf,
}

impl<T: Terminal> Session<T> {
    pub fn new(term: T, save_dir: PathBuf) -> Session<T> {
        Session {
            canvas: Canvas::new(),
            snapshot: Canvas::new(),
            term,
            save_dir,
        }
    }

    /// Loads a canvas named on the command line before the menu starts.
    pub fn load_startup(&mut self, name: &str) -> Result<(), StorageError> {
        let path = storage::canvas_path(&self.save_dir, name);
        storage::load(&mut self.canvas, &path)
    }

    pub fn run(&mut self) -> io::Result<()> {
        info!("session started, storage dir {:?}", self.save_dir);

        loop {
            self.display_canvas()?;

            for offset in 1..=3 {
                self.term.clear_region(MENU_ROW + offset - 1, MESSAGE_WIDTH)?;
            }

            self.term.move_to(MENU_ROW, 0)?;
            self.term.write_str(MENU)?;
            self.term.flush()?;

            let choice = match self.term.read_line()?.trim().chars().next() {
                Some(c) => c.to_ascii_lowercase(),
                None => continue,
            };

            match choice {
                'e' => {
                    self.take_snapshot();
                    self.term.clear_region(MENU_ROW, MESSAGE_WIDTH)?;
                    self.term.write_str("Press <ESC> to stop editing")?;
                    edit_canvas(&mut self.canvas, &mut self.term)?;
                }
                'm' => {
                    self.take_snapshot();
                    let cols = self.prompt_i32("Enter column units to move: ")?;
                    let rows = self.prompt_i32("Enter row units to move: ")?;
                    self.canvas.shift(rows, cols);
                }
                'r' => {
                    self.take_snapshot();
                    let old = self.prompt_char("Choose the character to be replaced: ")?;
                    let new = self.prompt_char("Choose a new character to insert: ")?;
                    self.canvas.replace(old, new);
                }
                'u' => self.canvas.copy_from(&self.snapshot),
                'l' => {
                    self.take_snapshot();
                    let name = self.prompt_line("Enter the filename (don't include .txt): ")?;
                    let path = storage::canvas_path(&self.save_dir, &name);
                    if let Err(err) = storage::load(&mut self.canvas, &path) {
                        warn!("load failed: {}", err);
                        self.show_message(&format!("ERROR: {}", err))?;
                    }
                }
                's' => {
                    let name = self.prompt_line("Enter the filename (don't include .txt): ")?;
                    let path = storage::canvas_path(&self.save_dir, &name);
                    match storage::save(&self.canvas, &path) {
                        Ok(()) => self.show_message("File saved!")?,
                        Err(err) => {
                            warn!("save failed: {}", err);
                            self.show_message(&format!("ERROR: {}", err))?;
                        }
                    }
                }
                'q' => break,
                other => {
                    self.show_message(&format!("'{}' is not a valid selection.", other))?;
                }
            }
        }

        info!("session ended");
        self.term.clear_screen()?;
        self.term.flush()
    }

    fn take_snapshot(&mut self) {
        self.snapshot.copy_from(&self.canvas);
    }

    /// Redraws the whole grid with a border along the right and bottom.
    fn display_canvas(&mut self) -> io::Result<()> {
        self.term.clear_screen()?;

        for row in 0..MAX_ROWS {
            self.term.move_to(row as u16, 0)?;
            self.term.write_str(&self.canvas.row_text(row))?;
            self.term.write_char('|')?;
        }

        self.term.move_to(MAX_ROWS as u16, 0)?;
        self.term.write_str(&"-".repeat(MAX_COLS))?;
        self.term.flush()
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        self.term.clear_region(MENU_ROW, MESSAGE_WIDTH)?;
        self.term.write_str(prompt)?;
        self.term.flush()?;
        self.term.read_line()
    }

    /// Prompts until the reply parses as an integer.
    fn prompt_i32(&mut self, prompt: &str) -> io::Result<i32> {
        loop {
            if let Ok(value) = self.prompt_line(prompt)?.trim().parse() {
                return Ok(value);
            }
        }
    }

    /// Prompts for a single character; an empty reply means blank.
    fn prompt_char(&mut self, prompt: &str) -> io::Result<char> {
        Ok(self.prompt_line(prompt)?.chars().next().unwrap_or(BLANK))
    }

    /// Shows a message on the prompt line and waits for a keypress.
    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.term.clear_region(MENU_ROW, MESSAGE_WIDTH)?;
        self.term.write_str(message)?;
        self.term.write_str(" Press any key to continue...")?;
        self.term.flush()?;
        self.term.read_key()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}
