//! Pure core of the simulator.
//!
//! This module holds the side-effect-free pieces:
//! - State definitions via the `State` trait
//! - Immutable transition history
//!
//! Nothing here performs I/O. The logger and the command loop live in
//! the `harness` module.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
