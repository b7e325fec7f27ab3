//! Keyboard to keypad mapping
//!
//! | Keyboard            | Keypad      | Keyboard | Keypad |
//! |---------------------|-------------|----------|--------|
//! | `0`-`9`, `.`        | digits, `.` | `q`      | x²     |
//! | Enter               | ENTER       | `n`      | ln     |
//! | Backspace           | DEL         | `l`      | log    |
//! | Delete, Esc         | CLEAR       | `i`      | x⁻¹    |
//! | `_`, `~`            | (-)         | `,`, `e` | EE     |
//! | Tab                 | 2nd         | `s`      | sin    |
//! | `(` `)`             | `(` `)`     | `c`      | cos    |
//! | `a`                 | ALPHA       | `t`      | tan    |
//! | `w`                 | WINDOW      | `m`      | MODE   |
//! | ↑ ↓                 | ↑ ↓         | `d`      | APPS   |
//! | `+` `-` `*` `/` `^` | operators   | `v`      | VARS   |
//! |                     |             | `p`      | PRGM   |

use crate::engine::dispatch::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Ctrl-C, which always quits
pub fn is_interrupt(event: &KeyEvent) -> bool {
    event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Translate a terminal key event to a keypad key
pub fn map_key(event: &KeyEvent) -> Option<Key> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(c @ '0'..='9') => Key::Digit(c as u8 - b'0'),
        KeyCode::Char('.') => Key::DecimalPoint,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Del,
        KeyCode::Delete | KeyCode::Esc => Key::Clear,
        KeyCode::Char('_') | KeyCode::Char('~') => Key::Chs,
        KeyCode::Tab => Key::Second,
        KeyCode::Char('(') => Key::LeftParen,
        KeyCode::Char(')') => Key::RightParen,
        KeyCode::Char('a') => Key::Alpha,
        KeyCode::Char('w') => Key::Window,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Char('m') => Key::Mode,
        KeyCode::Char('d') => Key::Apps,
        KeyCode::Char('v') => Key::Vars,
        KeyCode::Char('p') => Key::Prgm,
        KeyCode::Char('+') => Key::Add,
        KeyCode::Char('-') => Key::Sub,
        KeyCode::Char('*') => Key::Mul,
        KeyCode::Char('/') => Key::Div,
        KeyCode::Char('^') => Key::Power,
        KeyCode::Char('q') => Key::Square,
        KeyCode::Char('n') => Key::Ln,
        KeyCode::Char('l') => Key::Log,
        KeyCode::Char('i') => Key::Recip,
        KeyCode::Char(',') | KeyCode::Char('e') => Key::Comma,
        KeyCode::Char('s') => Key::Sin,
        KeyCode::Char('c') => Key::Cos,
        KeyCode::Char('t') => Key::Tan,
        _ => return None,
    };
    Some(key)
}
