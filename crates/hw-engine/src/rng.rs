//! Random source capability — cyclic buffers and deterministic replay

use std::fmt;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of every drawn value
pub const DRAW_MAX: u8 = 100;

/// Default cyclic buffer size
pub const DEFAULT_BUFFER_LEN: usize = 100_000;

/// Logical phase of the state machine consuming a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawPhase {
    /// Does this spin trigger the bonus?
    BonusDecision,
    /// Which regular-win band applies?
    WinCategory,
    /// Win amount within the selected band
    WinMagnitude,
    /// Does a bonus symbol land this round?
    SymbolDecision,
    /// Magnitude of the landed symbol
    SymbolValue,
}

impl DrawPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawPhase::BonusDecision => "bonus_decision",
            DrawPhase::WinCategory => "win_category",
            DrawPhase::WinMagnitude => "win_magnitude",
            DrawPhase::SymbolDecision => "symbol_decision",
            DrawPhase::SymbolValue => "symbol_value",
        }
    }
}

impl fmt::Display for DrawPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded integer stream consumed by the engine
///
/// Every call returns a value in `[0, DRAW_MAX]`. The phase label ties the
/// draw to the decision it feeds; recording sources keep it in their logs,
/// plain sources ignore it.
pub trait RandomSource {
    fn next_draw(&mut self, phase: DrawPhase) -> u8;
}

/// Pre-generated wrapping draw buffer
///
/// The cursor wraps modulo the buffer length, so a fixed-size buffer feeds
/// arbitrarily long simulations without exhaustion.
#[derive(Debug, Clone)]
pub struct CyclicSource {
    values: Vec<u8>,
    cursor: usize,
}

impl CyclicSource {
    /// Default-size buffer filled from an entropy-drawn seed
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random(), DEFAULT_BUFFER_LEN)
    }

    /// Buffer of `len` draws from a seeded ChaCha8 stream
    pub fn from_seed(seed: u64, len: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let values = (0..len.max(1))
            .map(|_| rng.random_range(0..=DRAW_MAX))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Wrap a literal buffer
    pub fn from_values(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "cyclic buffer must not be empty");
        Self { values, cursor: 0 }
    }

    /// Re-fill the buffer from a new seed and rewind the cursor
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::from_seed(seed, self.values.len());
    }

    /// Buffer length
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Draws consumed so far (cursor before wrapping)
    pub fn draws_consumed(&self) -> usize {
        self.cursor
    }
}

impl Default for CyclicSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for CyclicSource {
    fn next_draw(&mut self, _phase: DrawPhase) -> u8 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// One recorded consumption call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRecord {
    pub phase: DrawPhase,
    pub index: usize,
    pub value: u8,
}

/// Literal replay sequence with an observation log
///
/// Feeds a fixed sequence (wrapping like `CyclicSource`) and records every
/// consumption call with its phase, buffer index and value. This is the
/// contract the test suite and the scenario runner rely on.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<u8>,
    cursor: usize,
    calls: Vec<DrawRecord>,
}

impl ReplaySource {
    pub fn new(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "replay sequence must not be empty");
        Self {
            values,
            cursor: 0,
            calls: Vec::new(),
        }
    }

    /// Every consumption call so far, in order
    pub fn calls(&self) -> &[DrawRecord] {
        &self.calls
    }

    /// Draws consumed so far
    pub fn draws_consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplaySource {
    fn next_draw(&mut self, phase: DrawPhase) -> u8 {
        let index = self.cursor % self.values.len();
        let value = self.values[index];
        self.calls.push(DrawRecord {
            phase,
            index,
            value,
        });
        self.cursor += 1;
        value
    }
}
