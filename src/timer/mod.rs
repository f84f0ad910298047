//! Focus Timer
//!
//! Pomodoro-style countdown: a pure state machine plus the controller that
//! drives it from a browser interval.

mod controller;
mod state;

pub use controller::TimerController;
pub use state::{FocusTimer, TickOutcome};
