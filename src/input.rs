use termion::event::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Semantic key events for the edit loop. Raw byte sequences (escape
/// prefixes, arrow codes, null sentinels) are decoded at the terminal
/// boundary; the editor only ever sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Escape,
    Move(Direction),
    Printable(char),
    Ignored,
}

pub fn is_printable(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> KeyEvent {
        match key {
            Key::Esc => KeyEvent::Escape,
            Key::Left => KeyEvent::Move(Direction::Left),
            Key::Right => KeyEvent::Move(Direction::Right),
            Key::Up => KeyEvent::Move(Direction::Up),
            Key::Down => KeyEvent::Move(Direction::Down),
            Key::Char(c) if is_printable(c) => KeyEvent::Printable(c),
            _ => KeyEvent::Ignored,
        }
    }
}
