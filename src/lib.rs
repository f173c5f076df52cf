//! Cabsim: a finite-state cabinet simulator.
//!
//! Cabsim models a vending/gaming cabinet as a closed five-state machine
//! driven by a line-oriented command harness. The crate splits into a pure
//! core (the [`core::State`] trait and transition history) and an
//! imperative shell (event logger, command grammar, read-eval loop).
//!
//! # Core Concepts
//!
//! - **CabinetState**: the five operating modes, IDLE through ERROR
//! - **CabinetMachine**: owns the state and applies the fixed transition policy
//! - **EventLogger**: one timestamped line per event, shared by all components
//! - **Harness**: the prompt/read/dispatch loop that is the sole input surface
//!
//! # Example
//!
//! ```rust
//! use cabsim::{CabinetMachine, CabinetState, EventLogger};
//!
//! let logger = EventLogger::with_writer(std::io::sink());
//! let mut machine = CabinetMachine::new(logger);
//!
//! machine.start_game();
//! assert_eq!(machine.current_state(), &CabinetState::Running);
//!
//! // Door signals override whatever the cabinet is doing.
//! machine.signal("door_open");
//! assert_eq!(machine.current_state(), &CabinetState::Maintenance);
//! ```

pub mod core;
pub mod harness;
pub mod machine;

// Re-export commonly used types
pub use core::{State, StateHistory, StateTransition};
pub use harness::{Command, Directive, EventLogger, Harness, HarnessError};
pub use machine::{CabinetMachine, CabinetState, DEFAULT_UPDATE_DELAY};
