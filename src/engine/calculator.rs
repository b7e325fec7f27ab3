//! Calculator engine: state, undo slot, mode flags and the stack commands
//!
//! Every public command returns `Result<(), CalcError>`. A command either
//! fails before touching anything or takes a snapshot (when undo-tracked) and
//! then mutates. Typing into the input line is never undo-tracked since
//! nothing has been committed yet.

use super::constants::STACK_SIZE;
use super::errors::CalcError;
use super::ops::Operator;
use crate::memory::input::InputBuffer;
use crate::memory::queue::MemoryQueue;
use crate::memory::real::DisplayMode;
use crate::memory::stack::OperandStack;
use crate::memory::EngineState;
use crate::persist::{records, KeyValueStore};
use crate::snapshot::UndoManager;
use tracing::{info, warn};

/// Startup settings for a [`Calculator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Trigonometry works in radians (degrees otherwise)
    pub radians: bool,
    /// Stack values are shown in scientific notation
    pub scientific: bool,
    /// Number of themes the renderer offers
    pub theme_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            radians: true,
            scientific: true,
            theme_count: 1,
        }
    }
}

/// Progress of the theme selection menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    /// Alpha pressed, waiting for the menu key
    Armed,
    /// Cycling through themes
    Selecting,
}

/// Which key table the dispatcher is currently using
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Normal,
    SecondaryPending,
    MenuPending,
}

/// The RPN calculator
pub struct Calculator {
    pub(crate) state: EngineState,
    undo: UndoManager,
    pub(crate) secondary: bool,
    pub(crate) menu: MenuState,
    scientific: bool,
    pub(crate) radians: bool,
    theme_index: usize,
    theme_count: usize,
    pub(crate) needs_redraw: bool,
    store: Box<dyn KeyValueStore>,
}

impl Calculator {
    /// Create a calculator, loading the saved theme and memory queue from `store`
    pub fn new(store: Box<dyn KeyValueStore>, config: EngineConfig) -> Self {
        let theme_count = config.theme_count.max(1);

        let theme_index = match records::load_theme(store.as_ref(), theme_count) {
            Ok(index) => index.unwrap_or(0),
            Err(e) => {
                warn!(error = %e, "ignoring saved theme");
                0
            }
        };

        let queue = match records::load_queue(store.as_ref()) {
            Ok(queue) => queue.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "ignoring saved memory queue");
                MemoryQueue::new()
            }
        };

        info!(
            queued = queue.len(),
            theme = theme_index,
            radians = config.radians,
            "calculator started"
        );

        Calculator {
            state: EngineState {
                input: InputBuffer::new(),
                stack: OperandStack::new(),
                queue,
            },
            undo: UndoManager::new(),
            secondary: false,
            menu: MenuState::Closed,
            scientific: config.scientific,
            radians: config.radians,
            theme_index,
            theme_count,
            needs_redraw: true,
            store,
        }
    }

    // ---- undo ----

    /// Save the current state as the undo point
    pub fn snapshot(&mut self) {
        self.undo.snapshot(&self.state);
    }

    /// Return to the undo point. Works once per snapshot.
    pub fn restore(&mut self) -> Result<(), CalcError> {
        self.undo.restore(&mut self.state)?;
        self.persist_queue();
        Ok(())
    }

    // ---- input line ----

    /// Type a digit or the decimal point
    pub fn append(&mut self, c: char) -> Result<(), CalcError> {
        self.state.input.append(c)
    }

    /// Delete the last typed character, or drop the top value when nothing is typed
    pub fn backspace(&mut self) -> Result<(), CalcError> {
        if self.state.input.backspace() {
            Ok(())
        } else {
            self.pop()
        }
    }

    /// Discard the input line, or drop the top value when nothing is typed
    pub fn clear_or_pop(&mut self) -> Result<(), CalcError> {
        if self.state.input.is_empty() {
            return self.pop();
        }
        self.state.input.clear();
        Ok(())
    }

    /// Flip the sign of the value being typed, or negate the top value
    pub fn toggle_sign(&mut self) -> Result<(), CalcError> {
        if !self.state.input.is_empty() {
            self.state.input.toggle_sign();
            return Ok(());
        }
        if self.state.stack.is_empty() {
            return Err(CalcError::StackEmpty);
        }
        self.snapshot();
        self.state.stack.map_top(|x| x.neg())
    }

    /// Push the typed value onto the stack
    pub fn commit(&mut self) -> Result<(), CalcError> {
        if self.state.input.is_empty() {
            return Err(CalcError::BufferEmpty);
        }
        if self.state.stack.is_full() {
            return Err(CalcError::StackFull);
        }
        self.snapshot();
        self.push_input()
    }

    fn push_input(&mut self) -> Result<(), CalcError> {
        let value = self.state.input.value();
        self.state.stack.push(value)?;
        self.state.input.clear();
        Ok(())
    }

    // ---- stack ----

    /// Drop the top value
    pub fn pop(&mut self) -> Result<(), CalcError> {
        if self.state.stack.is_empty() {
            return Err(CalcError::StackEmpty);
        }
        self.snapshot();
        self.state.stack.pop().map(|_| ())
    }

    /// Exchange the two topmost values
    pub fn swap(&mut self) -> Result<(), CalcError> {
        self.prepare(2)?;
        self.state.stack.swap_top2()
    }

    /// Check that `arity` operands are available and take the undo snapshot.
    ///
    /// A typed value counts as an operand: it is committed here, inside the
    /// same undo step as the command that follows.
    pub fn prepare(&mut self, arity: usize) -> Result<(), CalcError> {
        let depth = self.state.stack.len();

        if self.state.input.is_empty() {
            if depth < arity {
                return Err(CalcError::StackEmpty);
            }
            self.snapshot();
            return Ok(());
        }

        if depth + 1 < arity {
            return Err(CalcError::StackEmpty);
        }
        if self.state.stack.is_full() {
            return Err(CalcError::StackFull);
        }
        self.snapshot();
        self.push_input()
    }

    /// Run an operator from the arithmetic library.
    ///
    /// Constants push without consuming anything, so a typed value stays on
    /// the input line.
    pub fn apply(&mut self, op: Operator) -> Result<(), CalcError> {
        if op.arity() == 0 {
            if self.state.stack.is_full() {
                return Err(CalcError::StackFull);
            }
            self.snapshot();
        } else {
            self.prepare(op.arity())?;
        }
        self.evaluate_operator(op)
    }

    // ---- memory queue ----

    /// Move the top value to the tail of the memory queue
    pub fn store(&mut self) -> Result<(), CalcError> {
        if self.state.queue.is_full() {
            return Err(CalcError::QueueFull);
        }
        self.prepare(1)?;
        let value = self.state.stack.pop()?;
        self.state.queue.append(value)?;
        self.persist_queue();
        Ok(())
    }

    /// Move the whole memory queue back onto the stack
    pub fn recall(&mut self) -> Result<(), CalcError> {
        if self.state.queue.is_empty() {
            return Err(CalcError::QueueEmpty);
        }
        if STACK_SIZE - self.state.stack.len() < self.state.queue.len() {
            return Err(CalcError::StackOverflow);
        }
        self.snapshot();
        self.state.queue.drain_into(&mut self.state.stack)?;
        self.persist_queue();
        Ok(())
    }

    fn persist_queue(&mut self) {
        if let Err(e) = records::save_queue(self.store.as_mut(), &self.state.queue) {
            warn!(error = %e, "failed to save memory queue");
        }
    }

    // ---- modes ----

    pub fn toggle_scientific(&mut self) {
        self.scientific = !self.scientific;
    }

    pub fn toggle_angle_unit(&mut self) {
        self.radians = !self.radians;
    }

    /// Arm the theme menu, or close it when already open
    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Armed,
            MenuState::Armed | MenuState::Selecting => MenuState::Closed,
        };
    }

    /// Start cycling themes. Only valid once the menu is armed.
    pub fn open_theme_menu(&mut self) -> bool {
        if self.menu != MenuState::Armed {
            return false;
        }
        self.menu = MenuState::Selecting;
        true
    }

    /// Preview the next theme
    pub fn next_theme(&mut self) {
        self.theme_index = (self.theme_index + 1) % self.theme_count;
    }

    /// Keep the previewed theme and close the menu
    pub fn confirm_theme(&mut self) {
        self.menu = MenuState::Closed;
        if let Err(e) = records::save_theme(self.store.as_mut(), self.theme_index) {
            warn!(error = %e, "failed to save theme");
        } else {
            info!(theme = self.theme_index, "theme saved");
        }
    }

    // ---- read-only view for the renderer ----

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn input(&self) -> &InputBuffer {
        &self.state.input
    }

    pub fn stack(&self) -> &OperandStack {
        &self.state.stack
    }

    pub fn queue(&self) -> &MemoryQueue {
        &self.state.queue
    }

    pub fn has_snapshot(&self) -> bool {
        self.undo.has_snapshot()
    }

    pub fn is_secondary(&self) -> bool {
        self.secondary
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu
    }

    pub fn dispatch_state(&self) -> DispatchState {
        if self.menu == MenuState::Selecting {
            DispatchState::MenuPending
        } else if self.secondary {
            DispatchState::SecondaryPending
        } else {
            DispatchState::Normal
        }
    }

    pub fn uses_radians(&self) -> bool {
        self.radians
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.scientific {
            DisplayMode::Scientific
        } else {
            DisplayMode::Normal
        }
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Return the redraw flag and clear it
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Mark the display stale without a command (terminal resize)
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Hand back the store, e.g. to start a new session on the same records
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }
}
