//! Engine configuration

use serde::{Deserialize, Serialize};

/// Hold & Win engine configuration
///
/// All draw thresholds are points on the [0,100] draw range. Defaults
/// reproduce the tuned math model: 15% bonus trigger, 40/30/30 regular-win
/// bands, 50% symbol hit rate, 3-round bonus allotment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Draws strictly below this trigger the bonus
    pub bonus_trigger_threshold: u8,
    /// Win-category draws below this land in the small band (1-3 coins)
    pub small_win_threshold: u8,
    /// Win-category draws below this (and at or above the small band)
    /// land in the medium band (3-4 coins); the rest win nothing
    pub medium_win_threshold: u8,
    /// Bonus-round draws below this land a new symbol
    pub symbol_hit_threshold: u8,
    /// Bonus round allotment; landing a symbol resets the remaining
    /// rounds to this value
    pub initial_rounds: i32,
    /// Account starting balance
    pub starting_balance: u64,
    /// Fixed bet per spin (RTP denominator; never deducted from balance)
    pub bet: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bonus_trigger_threshold: 15,
            small_win_threshold: 40,
            medium_win_threshold: 70,
            symbol_hit_threshold: 50,
            initial_rounds: 3,
            starting_balance: 100,
            bet: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.bonus_trigger_threshold, 15);
        assert_eq!(config.symbol_hit_threshold, 50);
        assert_eq!(config.initial_rounds, 3);
        assert_eq!(config.bet, 1);
    }
}
