//! # hw-sim — Batch RTP simulator for the Hold & Win engine
//!
//! Drives `hw-engine` through large spin budgets, summarizes the run
//! (final balance, bonus sessions, total win, RTP) and replays named QA
//! scenarios with a draw-by-draw observation log.

pub mod error;
pub mod scenario;
pub mod simulator;

pub use error::*;
pub use scenario::*;
pub use simulator::*;
