//! Interactive simulation harness for the cabinet machine.

use cabsim::{CabinetMachine, EventLogger, Harness, HarnessError};
use std::io;

fn main() -> Result<(), HarnessError> {
    let logger = EventLogger::stdout();
    let machine = CabinetMachine::new(logger.clone());

    println!("CLI Simulation Harness Started.");
    println!("Type 'exit' to quit.");

    let stdin = io::stdin();
    Harness::new(machine, logger, stdin.lock(), io::stdout()).run()?;
    Ok(())
}
