//! Key dispatch
//!
//! A keypad [`Key`] is resolved to an [`Action`] through the table of the
//! active layer ([`resolve_normal`] or [`resolve_secondary`]), then run by
//! [`Calculator::handle_key`]. Layer keys (2nd, Alpha and the theme menu) are
//! handled before the tables, in a fixed order:
//!
//! 1. `2nd` / `(` toggles the secondary layer
//! 2. `Alpha` arms or closes the theme menu
//! 3. `Window` opens an armed menu and is swallowed while the menu is open
//! 4. while selecting, `Up` cycles themes and `Enter` confirms
//! 5. the secondary layer consumes exactly one key (`Mode` / `)` quit)
//! 6. the normal table

use super::calculator::{Calculator, MenuState};
use super::errors::CalcError;
use super::ops::Operator;
use tracing::debug;

/// Keys of the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    DecimalPoint,
    Enter,
    Clear,
    Del,
    /// The `(-)` change-sign key
    Chs,
    Second,
    Alpha,
    LeftParen,
    RightParen,
    Window,
    Up,
    Down,
    Mode,
    Apps,
    Vars,
    Prgm,
    Add,
    Sub,
    Mul,
    Div,
    Power,
    Square,
    Ln,
    Log,
    Recip,
    Comma,
    Sin,
    Cos,
    Tan,
}

/// An engine command a key resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Append(char),
    Commit,
    ClearOrPop,
    Backspace,
    ToggleSign,
    Swap,
    Store,
    Recall,
    Undo,
    Apply(Operator),
    ToggleScientific,
    ToggleAngleUnit,
}

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Key table of the normal layer
pub fn resolve_normal(key: Key) -> Option<Action> {
    let action = match key {
        Key::Mode => Action::ToggleScientific,
        Key::Enter => Action::Commit,
        Key::Clear => Action::ClearOrPop,
        Key::Prgm => Action::Recall,
        Key::Del | Key::RightParen => Action::Backspace,
        Key::Chs => Action::ToggleSign,
        Key::Digit(d) => Action::Append(char::from_digit(u32::from(d), 10)?),
        Key::DecimalPoint => Action::Append('.'),
        Key::Apps => Action::ToggleAngleUnit,
        Key::Vars => Action::Store,
        Key::Down => Action::Swap,
        Key::Add => Action::Apply(Operator::Add),
        Key::Sub => Action::Apply(Operator::Subtract),
        Key::Mul => Action::Apply(Operator::Multiply),
        Key::Div => Action::Apply(Operator::Divide),
        Key::Power => Action::Apply(Operator::Power),
        Key::Square => Action::Apply(Operator::Square),
        Key::Ln => Action::Apply(Operator::Ln),
        Key::Log => Action::Apply(Operator::Log10),
        Key::Recip => Action::Apply(Operator::Reciprocal),
        Key::Comma => Action::Apply(Operator::Scientific),
        Key::Sin => Action::Apply(Operator::Sin),
        Key::Cos => Action::Apply(Operator::Cos),
        Key::Tan => Action::Apply(Operator::Tan),
        Key::Second
        | Key::Alpha
        | Key::LeftParen
        | Key::Window
        | Key::Up => return None,
    };
    Some(action)
}

/// Key table of the secondary (2nd) layer
pub fn resolve_secondary(key: Key) -> Option<Action> {
    let action = match key {
        Key::Square => Action::Apply(Operator::SquareRoot),
        Key::Ln => Action::Apply(Operator::Exp),
        Key::Log => Action::Apply(Operator::TenPow),
        Key::Enter => Action::Undo,
        Key::Power => Action::Apply(Operator::Pi),
        Key::Div => Action::Apply(Operator::Euler),
        Key::Sin => Action::Apply(Operator::Asin),
        Key::Cos => Action::Apply(Operator::Acos),
        Key::Tan => Action::Apply(Operator::Atan),
        _ => return None,
    };
    Some(action)
}

impl Calculator {
    /// Process one key press
    pub fn handle_key(&mut self, key: Key) -> Flow {
        if matches!(key, Key::Second | Key::LeftParen) {
            self.secondary = !self.secondary;
            self.needs_redraw = true;
            return Flow::Continue;
        }

        if key == Key::Alpha {
            self.toggle_menu();
            self.needs_redraw = true;
            return Flow::Continue;
        }

        // Window belongs to the menu while it is open, even with 2nd pending
        if key == Key::Window && self.menu != MenuState::Closed {
            if self.open_theme_menu() {
                self.needs_redraw = true;
            }
            return Flow::Continue;
        }

        if self.menu == MenuState::Selecting {
            match key {
                Key::Up => {
                    self.next_theme();
                    self.needs_redraw = true;
                    return Flow::Continue;
                }
                Key::Enter => {
                    self.confirm_theme();
                    self.needs_redraw = true;
                    return Flow::Continue;
                }
                _ => {}
            }
        }

        if self.secondary {
            if matches!(key, Key::Mode | Key::RightParen) {
                return Flow::Quit;
            }
            if let Some(action) = resolve_secondary(key) {
                self.run_action(action);
            }
            // The layer is one-shot: any key drops back to normal
            self.secondary = false;
            self.needs_redraw = true;
            return Flow::Continue;
        }

        if let Some(action) = resolve_normal(key) {
            self.run_action(action);
        }
        Flow::Continue
    }

    fn run_action(&mut self, action: Action) {
        match self.execute(action) {
            Ok(()) => {
                self.needs_redraw = true;
                debug!(?action, "applied");
            }
            Err(e) => debug!(?action, error = %e, "rejected"),
        }
    }

    /// Run a resolved action
    pub fn execute(&mut self, action: Action) -> Result<(), CalcError> {
        match action {
            Action::Append(c) => self.append(c),
            Action::Commit => self.commit(),
            Action::ClearOrPop => self.clear_or_pop(),
            Action::Backspace => self.backspace(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Swap => self.swap(),
            Action::Store => self.store(),
            Action::Recall => self.recall(),
            Action::Undo => self.restore(),
            Action::Apply(op) => self.apply(op),
            Action::ToggleScientific => {
                self.toggle_scientific();
                Ok(())
            }
            Action::ToggleAngleUnit => {
                self.toggle_angle_unit();
                Ok(())
            }
        }
    }
}
