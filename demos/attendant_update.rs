//! Package Update Flow
//!
//! Shows the update override: a running game is stopped, the cabinet
//! holds UPDATING for the simulated work window, then settles to IDLE.
//!
//! Run with: cargo run --example attendant_update

use cabsim::{CabinetMachine, CabinetState, EventLogger};
use std::time::Duration;

fn main() {
    println!("=== Package Update Flow ===\n");

    // Shortened delay so the demo finishes quickly.
    let mut machine =
        CabinetMachine::new(EventLogger::stdout()).with_update_delay(Duration::from_millis(250));

    machine.start_game();
    machine.update_package("firmware-2.4.1");
    machine.print_status();

    assert_eq!(machine.current_state(), &CabinetState::Idle);

    println!(
        "\nRecorded transitions: {}",
        machine.history().transitions().len()
    );

    println!("\n=== Flow Complete ===");
}
