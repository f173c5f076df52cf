//! Imperative shell around the cabinet machine.
//!
//! Everything that touches the console lives here:
//! - **EventLogger**: one timestamped line per event
//! - **Command grammar**: line → [`Directive`] → [`Command`]
//! - **Harness**: the prompt/read/dispatch loop

mod command;
mod logger;
mod repl;

pub use command::{Command, Directive};
pub use logger::EventLogger;
pub use repl::{Harness, HarnessError};
