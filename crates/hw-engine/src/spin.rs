//! Per-spin outcome types and the bonus session accumulator

use serde::{Deserialize, Serialize};

/// Outcome of one base-game spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Did this spin trigger the bonus?
    pub triggered_bonus: bool,
    /// Regular win credited by this spin (always 0 on bonus triggers)
    pub win_amount: u64,
    /// Completed bonus session, when one was triggered
    pub bonus: Option<BonusOutcome>,
}

impl SpinOutcome {
    /// Regular win plus bonus win
    pub fn total_win(&self) -> u64 {
        self.win_amount + self.bonus.as_ref().map_or(0, |b| b.total_win)
    }

    pub fn is_win(&self) -> bool {
        self.total_win() > 0
    }
}

/// Finalized hold & win session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusOutcome {
    /// Collected symbol magnitudes in landing order (each 1..=10)
    pub symbols: Vec<u8>,
    /// Sum of collected symbols
    pub total_win: u64,
    /// Bonus rounds played before the allotment ran out
    pub rounds_played: u32,
}

/// Live bonus session state
///
/// `rounds_left` is signed so the `<= 0` termination guard stays correct if
/// the allotment or decrement step is ever reconfigured to cross zero.
/// Finalization consumes the session, so totals are flushed exactly once.
#[derive(Debug, Clone)]
pub struct BonusSession {
    rounds_left: i32,
    allotment: i32,
    symbols: Vec<u8>,
    rounds_played: u32,
}

impl BonusSession {
    pub fn new(allotment: i32) -> Self {
        Self {
            rounds_left: allotment,
            allotment,
            symbols: Vec::new(),
            rounds_played: 0,
        }
    }

    /// Rounds remaining before the session ends
    pub fn rounds_left(&self) -> i32 {
        self.rounds_left
    }

    /// Collected symbols so far
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Session continues while the allotment is not exhausted
    pub fn is_live(&self) -> bool {
        self.rounds_left > 0
    }

    /// Land a symbol: collect it and reset `rounds_left` to the full
    /// allotment (the hold mechanic — each new symbol grants fresh rounds)
    pub fn land_symbol(&mut self, magnitude: u8) {
        debug_assert!((1..=10).contains(&magnitude));
        self.symbols.push(magnitude);
        self.rounds_left = self.allotment;
        self.rounds_played += 1;
    }

    /// Miss: burn exactly one round
    pub fn miss(&mut self) {
        self.rounds_left -= 1;
        self.rounds_played += 1;
    }

    /// Flush the session into its final outcome
    pub fn finalize(self) -> BonusOutcome {
        let total_win = self.symbols.iter().map(|&s| u64::from(s)).sum();
        BonusOutcome {
            symbols: self.symbols,
            total_win,
            rounds_played: self.rounds_played,
        }
    }
}
