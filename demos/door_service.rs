//! Door Service Walkthrough
//!
//! Drives the cabinet through an attendant door cycle using the library
//! API directly, with every event logged to stdout.
//!
//! Key concepts:
//! - Door signals override the current state unconditionally
//! - Guarded start/stop transitions
//! - Transition history inspection
//!
//! Run with: cargo run --example door_service

use cabsim::{CabinetMachine, CabinetState, EventLogger, State};

fn main() {
    println!("=== Door Service Walkthrough ===\n");

    let mut machine = CabinetMachine::new(EventLogger::stdout());

    // A player starts a game, then an attendant opens the door mid-session.
    machine.start_game();
    machine.signal("door_open");
    machine.print_status();

    // Starting a game is refused while the door is open.
    machine.start_game();

    // Closing the door returns the cabinet to idle.
    machine.signal("door_close");
    machine.print_status();

    assert_eq!(machine.current_state(), &CabinetState::Idle);

    let path: Vec<&str> = machine
        .history()
        .get_path()
        .into_iter()
        .map(State::name)
        .collect();
    println!("\nPath taken: {}", path.join(" -> "));

    println!("\n=== Walkthrough Complete ===");
}
