//! The interactive read-eval loop.

use super::command::{Command, Directive};
use super::logger::EventLogger;
use crate::machine::CabinetMachine;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors surfaced by the command loop itself.
///
/// Everything a command does wrong is logged and absorbed inside the
/// loop; only console failures escape to the caller.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The command loop: prompts, reads one line at a time, and drives the
/// machine until `exit` or end of input.
///
/// # Example
///
/// ```rust
/// use cabsim::{CabinetMachine, CabinetState, EventLogger, Harness};
/// use std::io::Cursor;
///
/// let logger = EventLogger::with_writer(std::io::sink());
/// let machine = CabinetMachine::new(logger.clone());
///
/// let script = Cursor::new("start_game\nexit\n");
/// let machine = Harness::new(machine, logger, script, Vec::new())
///     .run()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), &CabinetState::Running);
/// ```
pub struct Harness<R: BufRead, W: Write> {
    machine: CabinetMachine,
    logger: EventLogger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Harness<R, W> {
    /// Assemble a loop around an already-constructed machine. The logger
    /// handle is used for loop-level notices (unknown commands, dispatch
    /// faults, shutdown); the machine logs its own decisions.
    pub fn new(machine: CabinetMachine, logger: EventLogger, input: R, output: W) -> Self {
        Self {
            machine,
            logger,
            input,
            output,
        }
    }

    /// Run until the `exit` line or end of input, log the shutdown
    /// notice, and return the machine for inspection.
    pub fn run(mut self) -> Result<CabinetMachine, HarnessError> {
        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match Directive::parse(line.trim_end_matches(['\r', '\n'])) {
                Directive::Empty | Directive::Incomplete => continue,
                Directive::Exit => break,
                Directive::Unknown => self.logger.log("Unknown command."),
                Directive::Dispatch(command) => {
                    if let Err(err) = self.dispatch(command) {
                        self.logger.log(&format!("ERROR: {err}"));
                    }
                }
            }
        }

        self.logger.log("System shutting down.");
        Ok(self.machine)
    }

    /// Hand one parsed command to the machine. A fault here is caught by
    /// the loop, reported as an `ERROR:` line, and does not end the run.
    fn dispatch(&mut self, command: Command) -> Result<(), HarnessError> {
        match command {
            Command::StartGame => self.machine.start_game(),
            Command::StopGame => self.machine.stop_game(),
            Command::Signal { name } => self.machine.signal(&name),
            Command::UpdatePackage { package } => self.machine.update_package(&package),
            Command::Device {
                device,
                action,
                value,
            } => self.machine.device_command(&device, &action, &value),
            Command::Os { command, value } => self.machine.os_command(&command, &value),
            Command::Status => self.machine.print_status(),
        }
        Ok(())
    }
}
