//! Immutable state transition history.
//!
//! Every state change a machine makes is captured as a `StateTransition`;
//! `StateHistory` keeps them in order and can reconstruct the path the
//! machine has taken.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// A transition is an immutable value: the state left, the state entered,
/// and when the change happened. Self-transitions (`from == to`) are valid
/// records.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` does not mutate: it returns a new history with the transition
/// appended, so callers may hold on to earlier snapshots.
///
/// # Example
///
/// ```rust
/// use cabsim::core::{StateHistory, StateTransition};
/// use cabsim::CabinetState;
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: CabinetState::Idle,
///     to: CabinetState::Running,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&CabinetState::Idle, &CabinetState::Running]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// The path of states traversed: the first transition's `from`,
    /// followed by the `to` state of every transition in order. Empty for
    /// an empty history.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
