//! Scanning modes and the non-empty mode stack.

use serde::{Deserialize, Serialize};

/// Scanning context that decides which scanner runs next. The enum is
/// closed, so invalid modes are unrepresentable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexMode {
    Default,
    InString,
    InTextBlock,
}

/// Stack of scanning modes with a guaranteed `Default` floor.
#[derive(Debug, Clone)]
pub struct ModeStack {
    stack: Vec<LexMode>,
}

impl ModeStack {
    pub fn new() -> Self {
        Self {
            stack: vec![LexMode::Default],
        }
    }

    pub fn current(&self) -> LexMode {
        // Invariant: stack is never empty.
        *self.stack.last().unwrap_or(&LexMode::Default)
    }

    /// Push a mode and return the previously active one.
    pub fn push(&mut self, mode: LexMode) -> LexMode {
        let previous = self.current();
        self.stack.push(mode);
        previous
    }

    /// Pop the current mode. Popping the floor is a no-op that returns the
    /// current mode; this is a guard, not an error path.
    pub fn pop(&mut self) -> LexMode {
        if self.stack.len() > 1 {
            self.stack.pop().unwrap_or(LexMode::Default)
        } else {
            self.current()
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn to_vec(&self) -> Vec<LexMode> {
        self.stack.clone()
    }

    /// Replace the stack wholesale (snapshot restore). An empty vector
    /// falls back to the floor.
    pub fn replace(&mut self, modes: Vec<LexMode>) {
        if modes.is_empty() {
            self.stack = vec![LexMode::Default];
        } else {
            self.stack = modes;
        }
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}
