//! Sequencer lifecycle state machine.
//!
//! The lifecycle is an explicit value with checked transitions instead of a
//! set of booleans. Every transition either yields the next state or a
//! [`StateError::InvalidTransition`] naming the state and the rejected
//! event.

use std::fmt;

use crate::error_handling::types::StateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Camera access has not been granted yet.
    AwaitingPermission,
    /// Access granted, the capture session is being set up.
    Configuring,
    /// Ready to run a burst.
    Idle,
    /// A burst is running; `tick` counts completed ticks.
    Capturing { tick: u64 },
}

impl SequencerState {
    pub fn name(&self) -> &'static str {
        match self {
            SequencerState::AwaitingPermission => "awaiting-permission",
            SequencerState::Configuring => "configuring",
            SequencerState::Idle => "idle",
            SequencerState::Capturing { .. } => "capturing",
        }
    }

    /// Access was granted.
    pub fn authorize(self) -> Result<Self, StateError> {
        match self {
            SequencerState::AwaitingPermission => Ok(SequencerState::Configuring),
            other => Err(StateError::InvalidTransition {
                from: other.name(),
                event: "authorize",
            }),
        }
    }

    /// The capture session is established.
    pub fn commit_session(self) -> Result<Self, StateError> {
        match self {
            SequencerState::Configuring => Ok(SequencerState::Idle),
            other => Err(StateError::InvalidTransition {
                from: other.name(),
                event: "commit-session",
            }),
        }
    }

    /// Session setup failed before it was committed.
    pub fn fail_session(self) -> Result<Self, StateError> {
        match self {
            SequencerState::Configuring => Ok(SequencerState::AwaitingPermission),
            other => Err(StateError::InvalidTransition {
                from: other.name(),
                event: "fail-session",
            }),
        }
    }

    /// A burst starts.
    pub fn begin_burst(self) -> Result<Self, StateError> {
        match self {
            SequencerState::Idle => Ok(SequencerState::Capturing { tick: 0 }),
            other => Err(StateError::InvalidTransition {
                from: other.name(),
                event: "begin-burst",
            }),
        }
    }

    /// One tick of the running burst starts.
    pub fn begin_tick(self) -> Result<Self, StateError> {
        match self {
            SequencerState::Capturing { tick } => Ok(SequencerState::Capturing { tick: tick + 1 }),
            other => Err(StateError::InvalidTransition {
                from: other.name(),
                event: "begin-tick",
            }),
        }
    }

    /// The burst used up its duration budget.
    pub fn finish_burst(self) -> Result<Self, StateError> {
        match self {
            SequencerState::Capturing { .. } => Ok(SequencerState::Idle),
            other => Err(StateError::InvalidTransition {
                from: other.name(),
                event: "finish-burst",
            }),
        }
    }
}

impl fmt::Display for SequencerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequencerState::Capturing { tick } => write!(f, "capturing (tick {})", tick),
            other => write!(f, "{}", other.name()),
        }
    }
}
