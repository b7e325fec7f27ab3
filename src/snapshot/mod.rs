// Snapshot management for one-step undo

use crate::engine::errors::CalcError;
use crate::memory::EngineState;

/// Holds a single backup of the engine state
///
/// A new snapshot overwrites the previous one. Restoring consumes it, so undo
/// works exactly once after each undo-tracked command and cannot be redone.
#[derive(Debug, Default)]
pub struct UndoManager {
    backup: EngineState,
    has_snapshot: bool,
}

impl UndoManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the live state into the backup slot
    pub fn snapshot(&mut self, state: &EngineState) {
        self.backup.clone_from(state);
        self.has_snapshot = true;
    }

    /// Copy the backup slot over the live state
    pub fn restore(&mut self, state: &mut EngineState) -> Result<(), CalcError> {
        if !self.has_snapshot {
            return Err(CalcError::NoSnapshot);
        }
        self.has_snapshot = false;
        state.clone_from(&self.backup);
        Ok(())
    }

    pub fn has_snapshot(&self) -> bool {
        self.has_snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::real::Real;

    #[test]
    fn test_restore_is_one_shot() {
        let mut undo = UndoManager::new();
        let mut state = EngineState::new();
        state.stack.push(Real::new(1.0)).unwrap();

        undo.snapshot(&state);
        state.stack.push(Real::new(2.0)).unwrap();

        undo.restore(&mut state).unwrap();
        assert_eq!(state.stack.values(), &[Real::new(1.0)]);
        assert_eq!(undo.restore(&mut state), Err(CalcError::NoSnapshot));
    }

    #[test]
    fn test_snapshot_overwrites_previous() {
        let mut undo = UndoManager::new();
        let mut state = EngineState::new();

        undo.snapshot(&state);
        state.input.append('4').unwrap();
        undo.snapshot(&state);
        state.input.clear();

        undo.restore(&mut state).unwrap();
        assert_eq!(state.input.text(), "4");
    }
}
