//! Policy operations and the unsupported-operation failure.
//!
//! Adaptors never raise errors of their own. A policy that cannot perform an
//! operation has two options:
//!
//! - Leave the operation trait unimplemented. The adaptor method that needs
//!   it then fails to type-check, which is the preferred form.
//! - Implement the trait and call [`unsupported`] at runtime, for policies
//!   whose capability depends on a value rather than a type.
//!
//! Whatever the base cursor does on invalid input (slice index panics, debug
//! assertions) propagates through the adaptor unchanged.

use std::fmt;

use thiserror::Error;

/// The seven operations a policy set can provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Dereference,
    Increment,
    Decrement,
    Advance,
    Distance,
    Equal,
    Less,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 7] = [
        Operation::Dereference,
        Operation::Increment,
        Operation::Decrement,
        Operation::Advance,
        Operation::Distance,
        Operation::Equal,
        Operation::Less,
    ];

    /// Lowercase name, as used in panic messages and profiling reports.
    pub fn name(self) -> &'static str {
        return match self {
            Operation::Dereference => "dereference",
            Operation::Increment => "increment",
            Operation::Decrement => "decrement",
            Operation::Advance => "advance",
            Operation::Distance => "distance",
            Operation::Equal => "equal",
            Operation::Less => "less",
        };
    }

    /// Position in [`Operation::ALL`].
    #[inline]
    pub(crate) fn index(self) -> usize {
        return self as usize;
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

/// Failure raised by a policy, never by the adaptor itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The policy declines an operation its base cursor cannot support.
    #[error("policy does not support `{0}`")]
    Unsupported(Operation),
}

/// Decline `op` at runtime.
///
/// Panics with the [`PolicyError::Unsupported`] message. Intended for use
/// inside policy implementations only.
#[cold]
#[track_caller]
pub fn unsupported(op: Operation) -> ! {
    panic!("{}", PolicyError::Unsupported(op));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_display() {
        for op in Operation::ALL {
            assert_eq!(op.to_string(), op.name());
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, op) in Operation::ALL.iter().enumerate() {
            assert_eq!(op.index(), i);
        }
    }

    #[test]
    fn unsupported_message() {
        let err = PolicyError::Unsupported(Operation::Advance);
        assert_eq!(err.to_string(), "policy does not support `advance`");
    }

    #[test]
    #[should_panic(expected = "policy does not support `distance`")]
    fn unsupported_panics() {
        unsupported(Operation::Distance);
    }
}
