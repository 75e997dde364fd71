use std::io::{self, Stdin, Stdout, Write, stdin, stdout};

use termion::event::Key;
use termion::input::{Keys, TermRead};
use termion::raw::{IntoRawMode, RawTerminal};

use crate::input::KeyEvent;

/// Terminal capability used by the session and the edit loop. Coordinates
/// are zero-based (row, col) from the top-left cell of the screen.
pub trait Terminal {
    fn read_key(&mut self) -> io::Result<KeyEvent>;

    /// Reads a line of input, echoing it at the current cursor position.
    fn read_line(&mut self) -> io::Result<String>;

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()>;

    fn write_str(&mut self, text: &str) -> io::Result<()>;

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.write_str(ch.encode_utf8(&mut buf))
    }

    fn clear_screen(&mut self) -> io::Result<()>;

    /// Blanks `len` characters at the start of `row` and leaves the cursor
    /// at the start of that row.
    fn clear_region(&mut self, row: u16, len: u16) -> io::Result<()> {
        self.move_to(row, 0)?;
        self.write_str(&" ".repeat(len as usize))?;
        self.move_to(row, 0)
    }

    fn flush(&mut self) -> io::Result<()>;
}

/// The real terminal: raw-mode stdout plus termion's key decoder over
/// stdin. Raw mode is restored when this is dropped.
pub struct TermionTerminal {
    stdout: RawTerminal<Stdout>,
    keys: Keys<Stdin>,
}

impl TermionTerminal {
    pub fn new() -> io::Result<TermionTerminal> {
        Ok(TermionTerminal {
            stdout: stdout().into_raw_mode()?,
            keys: stdin().keys(),
        })
    }

    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(result) = self.keys.next() {
                break result;
            }
        }
    }
}

impl Terminal for TermionTerminal {
    fn read_key(&mut self) -> io::Result<KeyEvent> {
        Ok(KeyEvent::from(self.next_key()?))
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();

        loop {
            match self.next_key()? {
                Key::Char('\n') => break,
                Key::Backspace => {
                    if line.pop().is_some() {
                        write!(self.stdout, "\u{8} \u{8}")?;
                        self.stdout.flush()?;
                    }
                }
                Key::Char(c) if crate::input::is_printable(c) => {
                    line.push(c);
                    write!(self.stdout, "{}", c)?;
                    self.stdout.flush()?;
                }
                _ => (),
            }
        }

        Ok(line)
    }

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        // termion is (col, row) and one-based
        write!(self.stdout, "{}", termion::cursor::Goto(col + 1, row + 1))
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        write!(self.stdout, "{}", text)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        write!(
            self.stdout,
            "{}{}",
            termion::clear::All,
            termion::cursor::Goto(1, 1)
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
