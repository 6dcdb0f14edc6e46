//! Lifecycle status enums.

use std::fmt;
use thiserror::Error;

/// A move the lifecycle does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct TransitionError<S: fmt::Debug + fmt::Display> {
    pub from: S,
    pub to: S,
}

/// A status enum whose allowed moves are listed by `valid_transitions`.
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Debug + fmt::Display {
    fn valid_transitions(&self) -> Vec<Self>;

    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn transition_to(&self, target: Self) -> Result<Self, TransitionError<Self>> {
        if !self.can_transition_to(&target) {
            return Err(TransitionError {
                from: *self,
                to: target,
            });
        }
        Ok(target)
    }

    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
