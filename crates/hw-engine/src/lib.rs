//! # hw-engine — Hold & Win slot simulation engine
//!
//! Deterministic simulation core for a simplified slot game with an
//! embedded "hold & win" bonus feature. Built for RTP estimation over
//! large spin batches and for draw-exact replay in tests.
//!
//! ## Architecture
//!
//! ```text
//! HoldWinEngine<S: RandomSource>
//!     │
//!     ├── EngineConfig (thresholds, allotment, balance, bet)
//!     ├── Account (balance, fixed bet)
//!     └── SimulationTotals (spins, bonus sessions, total win → RTP)
//!           │
//!           v
//!     spin() → SpinOutcome (+ optional BonusOutcome)
//! ```
//!
//! Sources are injectable: `CyclicSource` wraps a seeded pre-generated
//! buffer for long runs, `ReplaySource` feeds a literal sequence and logs
//! every consumption call for QA assertions.

pub mod config;
pub mod engine;
pub mod rng;
pub mod spin;

pub use config::*;
pub use engine::*;
pub use rng::*;
pub use spin::*;
