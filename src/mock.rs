//! # Mock Keyboard & Testing Guide
//!
//! [`MockKeyboard`] implements [`Keyboard`] but writes nothing. It records every
//! call so a test can prove what a consumer did with its dependency, without
//! depending on any real keyboard's output.
//!
//! ## Usage
//!
//! ```rust
//! use solid_recipe::dip::Computer;
//! use solid_recipe::mock::MockKeyboard;
//!
//! // 1. Setup Mock
//! let mock = MockKeyboard::new();
//! mock.expect_type_keys(1);
//!
//! // 2. Inject a handle into the consumer
//! let computer = Computer::new(Box::new(mock.keyboard()));
//!
//! // 3. Exercise
//! let mut out = Vec::new();
//! computer.input(&mut out).unwrap();
//!
//! // 4. Verify
//! mock.verify();
//! assert!(out.is_empty());
//! ```

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::dip::Keyboard;
use crate::error::Result;

#[derive(Debug, Default)]
struct State {
    expected: Option<usize>,
    calls: usize,
}

/// A mock keyboard with call tracking for fluent testing.
///
/// The mock owns shared state; [`MockKeyboard::keyboard`] hands out handles that
/// can be moved into a consumer while the mock keeps the ability to verify.
#[derive(Debug, Default)]
pub struct MockKeyboard {
    state: Rc<RefCell<State>>,
}

/// The injectable half of a [`MockKeyboard`].
#[derive(Debug, Clone)]
pub struct MockKeyboardHandle {
    state: Rc<RefCell<State>>,
}

impl MockKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that implements [`Keyboard`].
    pub fn keyboard(&self) -> MockKeyboardHandle {
        MockKeyboardHandle {
            state: Rc::clone(&self.state),
        }
    }

    /// Expects `type_keys` to be called exactly `times` times.
    pub fn expect_type_keys(&self, times: usize) {
        self.state.borrow_mut().expected = Some(times);
    }

    /// How many times `type_keys` has been called so far.
    pub fn calls(&self) -> usize {
        self.state.borrow().calls
    }

    /// Verifies that the expectation, if any, was met.
    pub fn verify(&self) {
        let state = self.state.borrow();
        if let Some(expected) = state.expected {
            if state.calls != expected {
                panic!(
                    "Expected type_keys to be called {} time(s), got {}",
                    expected, state.calls
                );
            }
        }
    }
}

impl Keyboard for MockKeyboardHandle {
    fn type_keys(&self, _out: &mut dyn Write) -> Result<()> {
        self.state.borrow_mut().calls += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_counts_calls() {
        let mock = MockKeyboard::new();
        let handle = mock.keyboard();
        let mut out = Vec::new();

        handle.type_keys(&mut out).unwrap();
        handle.type_keys(&mut out).unwrap();

        assert_eq!(mock.calls(), 2);
        assert!(out.is_empty());
    }

    #[test]
    #[should_panic(expected = "Expected type_keys to be called 1 time(s), got 0")]
    fn test_verify_panics_on_missed_expectation() {
        let mock = MockKeyboard::new();
        mock.expect_type_keys(1);
        mock.verify();
    }
}
