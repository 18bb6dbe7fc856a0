//! Supervisor state machine.
//!
//! Makes the acquire/listen/recover cycle an explicit, validated state
//! machine instead of inline control flow, so the recovery policy is
//! observable and the legal flows are testable on their own.

use scangate_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// States of the supervisor loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupervisorState {
    /// Before startup work has begun.
    Idle,

    /// Discovering a scanning device; loops on itself while none is found.
    Acquiring,

    /// Device opened; pipeline running on its event stream.
    Listening,

    /// Session failed; waiting out the backoff before re-acquiring.
    Recovering,

    /// Externally interrupted; terminal.
    Cancelled,
}

impl SupervisorState {
    /// Check whether a transition to `target` is legal from this state.
    ///
    /// Cancellation is reachable from every state; `Cancelled` itself is
    /// terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use scangate_supervisor::SupervisorState;
    ///
    /// assert!(SupervisorState::Idle.can_transition_to(SupervisorState::Acquiring));
    /// assert!(!SupervisorState::Idle.can_transition_to(SupervisorState::Listening));
    /// assert!(SupervisorState::Listening.can_transition_to(SupervisorState::Cancelled));
    /// ```
    #[must_use]
    pub fn can_transition_to(self, target: SupervisorState) -> bool {
        matches!(
            (self, target),
            // Startup
            (SupervisorState::Idle, SupervisorState::Acquiring)
            // Discovery retry loops in place; success opens a session;
            // an open failure goes through recovery
            | (
                SupervisorState::Acquiring,
                SupervisorState::Acquiring
                    | SupervisorState::Listening
                    | SupervisorState::Recovering,
            )
            // A session only ends in failure
            | (SupervisorState::Listening, SupervisorState::Recovering)
            // After backoff, discovery starts over
            | (SupervisorState::Recovering, SupervisorState::Acquiring)
        ) || (target == SupervisorState::Cancelled && self != SupervisorState::Cancelled)
    }

    /// Returns `true` for the terminal state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SupervisorState::Cancelled)
    }
}

impl fmt::Display for SupervisorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SupervisorState::Idle => "Idle",
            SupervisorState::Acquiring => "Acquiring",
            SupervisorState::Listening => "Listening",
            SupervisorState::Recovering => "Recovering",
            SupervisorState::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

/// Tracks the supervisor's current state and validates every transition.
#[derive(Debug)]
pub struct StateMachine {
    current: SupervisorState,
}

impl StateMachine {
    /// Create a machine in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: SupervisorState::Idle,
        }
    }

    /// The current state.
    #[must_use]
    pub fn current(&self) -> SupervisorState {
        self.current
    }

    /// Transition to `target`, validating legality.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStateTransition`] for an illegal
    /// transition; the current state is left unchanged.
    pub fn transition_to(&mut self, target: SupervisorState) -> Result<()> {
        if !self.current.can_transition_to(target) {
            return Err(Error::InvalidStateTransition {
                from: self.current.to_string(),
                to: target.to_string(),
            });
        }
        debug!(from = %self.current, to = %target, "supervisor state transition");
        self.current = target;
        Ok(())
    }

    /// Force the terminal `Cancelled` state from wherever the machine is.
    pub fn cancel(&mut self) {
        if self.current != SupervisorState::Cancelled {
            debug!(from = %self.current, "supervisor cancelled");
            self.current = SupervisorState::Cancelled;
        }
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_machine_starts_idle() {
        let machine = StateMachine::new();
        assert_eq!(machine.current(), SupervisorState::Idle);
    }

    #[test]
    fn test_normal_cycle() {
        let mut machine = StateMachine::new();
        machine.transition_to(SupervisorState::Acquiring).unwrap();
        machine.transition_to(SupervisorState::Listening).unwrap();
        machine.transition_to(SupervisorState::Recovering).unwrap();
        machine.transition_to(SupervisorState::Acquiring).unwrap();
        assert_eq!(machine.current(), SupervisorState::Acquiring);
    }

    #[test]
    fn test_acquiring_self_loop() {
        let mut machine = StateMachine::new();
        machine.transition_to(SupervisorState::Acquiring).unwrap();
        machine.transition_to(SupervisorState::Acquiring).unwrap();
        assert_eq!(machine.current(), SupervisorState::Acquiring);
    }

    #[test]
    fn test_open_failure_path() {
        let mut machine = StateMachine::new();
        machine.transition_to(SupervisorState::Acquiring).unwrap();
        machine.transition_to(SupervisorState::Recovering).unwrap();
        assert_eq!(machine.current(), SupervisorState::Recovering);
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        let mut machine = StateMachine::new();

        let err = machine.transition_to(SupervisorState::Listening).unwrap_err();
        assert!(matches!(err, Error::InvalidStateTransition { .. }));
        assert_eq!(machine.current(), SupervisorState::Idle);

        machine.transition_to(SupervisorState::Acquiring).unwrap();
        machine.transition_to(SupervisorState::Listening).unwrap();
        assert!(machine.transition_to(SupervisorState::Idle).is_err());
        assert!(machine.transition_to(SupervisorState::Acquiring).is_err());
    }

    #[test]
    fn test_cancel_reachable_from_every_state() {
        for state in [
            SupervisorState::Idle,
            SupervisorState::Acquiring,
            SupervisorState::Listening,
            SupervisorState::Recovering,
        ] {
            assert!(state.can_transition_to(SupervisorState::Cancelled));
        }
        assert!(!SupervisorState::Cancelled.can_transition_to(SupervisorState::Cancelled));
    }

    #[test]
    fn test_cancelled_is_terminal() {
        let mut machine = StateMachine::new();
        machine.cancel();
        assert!(machine.current().is_terminal());

        for target in [
            SupervisorState::Idle,
            SupervisorState::Acquiring,
            SupervisorState::Listening,
            SupervisorState::Recovering,
        ] {
            assert!(machine.transition_to(target).is_err());
        }

        // A second cancel is a no-op, not an error.
        machine.cancel();
        assert_eq!(machine.current(), SupervisorState::Cancelled);
    }

    #[test]
    fn test_state_serialization() {
        let state = SupervisorState::Recovering;
        let serialized = serde_json::to_string(&state).unwrap();
        assert_eq!(serialized, "\"recovering\"");

        let deserialized: SupervisorState = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, state);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(SupervisorState::Idle.to_string(), "Idle");
        assert_eq!(SupervisorState::Acquiring.to_string(), "Acquiring");
        assert_eq!(SupervisorState::Listening.to_string(), "Listening");
        assert_eq!(SupervisorState::Recovering.to_string(), "Recovering");
        assert_eq!(SupervisorState::Cancelled.to_string(), "Cancelled");
    }
}
