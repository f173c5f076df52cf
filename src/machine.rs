//! The cabinet state machine.
//!
//! `CabinetMachine` owns the single [`CabinetState`] value and applies the
//! fixed transition policy. Every operation logs a "received" notice first
//! and then either a transition outcome or a rejection; every state change
//! is recorded in the transition history.

use crate::core::{State, StateHistory, StateTransition};
use crate::harness::EventLogger;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

/// How long `update_package` simulates work before settling back to idle.
pub const DEFAULT_UPDATE_DELAY: Duration = Duration::from_secs(1);

/// Operating mode of the cabinet.
///
/// The set is closed: no other mode is ever observable. Log lines use the
/// uppercase [`State::name`] form.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum CabinetState {
    /// Powered on, no game in progress.
    Idle,
    /// A game session is active.
    Running,
    /// Service access, entered whenever the door opens.
    Maintenance,
    /// A package update is in progress.
    Updating,
    /// Reserved fault mode. No defined transition enters or leaves it.
    Error,
}

impl State for CabinetState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Maintenance => "MAINTENANCE",
            Self::Updating => "UPDATING",
            Self::Error => "ERROR",
        }
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// The cabinet machine: current state, transition history, and the fixed
/// transition rules.
///
/// Construction puts the machine in [`CabinetState::Idle`] and logs the
/// initial state. All mutation goes through the operations below; the
/// state is only readable through [`current_state`](Self::current_state).
///
/// # Example
///
/// ```rust
/// use cabsim::{CabinetMachine, CabinetState, EventLogger};
///
/// let mut machine = CabinetMachine::new(EventLogger::with_writer(std::io::sink()));
/// assert_eq!(machine.current_state(), &CabinetState::Idle);
///
/// machine.start_game();
/// assert_eq!(machine.current_state(), &CabinetState::Running);
/// ```
pub struct CabinetMachine {
    state: CabinetState,
    history: StateHistory<CabinetState>,
    logger: EventLogger,
    update_delay: Duration,
}

impl CabinetMachine {
    /// Create a machine in the idle state and log the initialization.
    pub fn new(logger: EventLogger) -> Self {
        let state = CabinetState::Idle;
        logger.log(&format!(
            "System initialized. Current state: {}",
            state.name()
        ));
        Self {
            state,
            history: StateHistory::new(),
            logger,
            update_delay: DEFAULT_UPDATE_DELAY,
        }
    }

    /// Override the simulated update duration. Tests and demos shorten it;
    /// the interactive harness keeps [`DEFAULT_UPDATE_DELAY`].
    pub fn with_update_delay(mut self, delay: Duration) -> Self {
        self.update_delay = delay;
        self
    }

    /// The current operating mode.
    pub fn current_state(&self) -> &CabinetState {
        &self.state
    }

    /// Every state change made so far, in order.
    pub fn history(&self) -> &StateHistory<CabinetState> {
        &self.history
    }

    fn transition_to(&mut self, to: CabinetState) {
        self.history = self.history.record(StateTransition {
            from: self.state.clone(),
            to: to.clone(),
            timestamp: Utc::now(),
        });
        self.state = to;
    }

    /// Start a game session. Legal only from `Idle`; any other mode logs
    /// an invalid-transition notice and leaves the state alone.
    pub fn start_game(&mut self) {
        self.logger.log("Command received: start_game");

        if self.state == CabinetState::Idle {
            self.transition_to(CabinetState::Running);
            self.logger.log("Transition: IDLE -> RUNNING");
        } else {
            self.logger.log(&format!(
                "Invalid transition: Cannot start game from {}",
                self.state.name()
            ));
        }
    }

    /// Stop the running game session. Legal only from `Running`.
    pub fn stop_game(&mut self) {
        self.logger.log("Command received: stop_game");

        if self.state == CabinetState::Running {
            self.transition_to(CabinetState::Idle);
            self.logger.log("Transition: RUNNING -> IDLE");
        } else {
            self.logger.log(&format!(
                "Invalid transition: Cannot stop game from {}",
                self.state.name()
            ));
        }
    }

    /// Apply a sensor signal. Door signals override the current state
    /// unconditionally; anything else is logged and ignored.
    pub fn signal(&mut self, signal: &str) {
        self.logger.log(&format!("Signal received: {signal}"));

        match signal {
            "door_open" => {
                self.transition_to(CabinetState::Maintenance);
                self.logger.log("Transition: -> MAINTENANCE (door opened)");
            }
            "door_close" => {
                self.transition_to(CabinetState::Idle);
                self.logger.log("Transition: -> IDLE (door closed)");
            }
            _ => self.logger.log("Unknown signal."),
        }
    }

    /// Install a package update. A running game is stopped first; the
    /// machine then holds `Updating` for the configured delay, blocking
    /// the calling thread, and settles back to `Idle`.
    pub fn update_package(&mut self, package: &str) {
        self.logger
            .log(&format!("Update command received. Package: {package}"));

        if self.state == CabinetState::Running {
            self.logger.log("Stopping game before update.");
            self.transition_to(CabinetState::Idle);
        }

        self.transition_to(CabinetState::Updating);
        self.logger.log("Transition: -> UPDATING");

        // Simulated update work; no input is processed during this window.
        thread::sleep(self.update_delay);

        self.transition_to(CabinetState::Idle);
        self.logger.log("Update completed. Transition: UPDATING -> IDLE");
    }

    /// Echo a peripheral command. Never changes state; only the bill
    /// validator ACK toggle is recognized.
    pub fn device_command(&self, device: &str, action: &str, value: &str) {
        self.logger
            .log(&format!("Device command received: {device} {action} {value}"));

        if device == "bill_validator" && action == "ack" {
            self.logger.log(&format!("Bill validator ACK turned {value}"));
        } else {
            self.logger.log("Unknown device command.");
        }
    }

    /// Echo an OS-level command. Never changes state; only `set-timezone`
    /// is recognized.
    pub fn os_command(&self, command: &str, value: &str) {
        self.logger
            .log(&format!("OS command received: {command} {value}"));

        if command == "set-timezone" {
            self.logger.log(&format!("Timezone set to {value}"));
        } else {
            self.logger.log("Unknown OS command.");
        }
    }

    /// Report the current state. Never changes it.
    pub fn print_status(&self) {
        self.logger
            .log(&format!("Current state: {}", self.state.name()));
    }
}
