//! Hold & Win engine — spin resolution and bonus-session state machine

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::rng::{CyclicSource, DrawPhase, RandomSource};
use crate::spin::{BonusOutcome, BonusSession, SpinOutcome};

/// Player account
///
/// Wins only are credited; the bet is never deducted and feeds the RTP
/// denominator, so the balance cannot go negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Account {
    pub balance: u64,
    pub bet: u64,
}

/// Aggregates across a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTotals {
    pub spins_run: u64,
    pub bonus_sessions_run: u64,
    pub total_win: u64,
}

impl SimulationTotals {
    /// Return-to-player percentage: total win over total bet.
    /// Zero when no bets were placed.
    pub fn rtp(&self, bet: u64) -> f64 {
        let total_bet = self.spins_run * bet;
        if total_bet > 0 {
            self.total_win as f64 / total_bet as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Freshly reset, no spin resolved yet
    Init,
    /// Resolving a base-game spin
    Spin,
    /// Setting up a triggered bonus session
    BonusInit,
    /// Inside the bonus loop
    Bonus,
}

/// Hold & Win simulation engine
///
/// Owns the account, the run totals and the random source. One `spin()`
/// call resolves a full base-game spin, including any bonus session it
/// triggers, before returning.
pub struct HoldWinEngine<S: RandomSource = CyclicSource> {
    config: EngineConfig,
    src: S,
    state: GameState,
    account: Account,
    totals: SimulationTotals,
}

impl HoldWinEngine<CyclicSource> {
    /// Entropy-seeded engine with the default config
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_source(config, CyclicSource::new())
    }

    /// Re-fill the cyclic buffer from a seed for reproducible runs
    pub fn seed(&mut self, seed: u64) {
        self.src.reseed(seed);
    }
}

impl Default for HoldWinEngine<CyclicSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> HoldWinEngine<S> {
    /// Engine over an injected source (deterministic tests, replays)
    pub fn with_source(config: EngineConfig, src: S) -> Self {
        let account = Account {
            balance: config.starting_balance,
            bet: config.bet,
        };
        Self {
            config,
            src,
            state: GameState::Init,
            account,
            totals: SimulationTotals::default(),
        }
    }

    /// Back to the init state: starting balance, zeroed totals
    pub fn reset(&mut self) {
        self.state = GameState::Init;
        self.account = Account {
            balance: self.config.starting_balance,
            bet: self.config.bet,
        };
        self.totals = SimulationTotals::default();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn totals(&self) -> &SimulationTotals {
        &self.totals
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// RTP over the run so far
    pub fn rtp(&self) -> f64 {
        self.totals.rtp(self.account.bet)
    }

    /// Borrow the random source (tests read replay logs through this)
    pub fn source(&self) -> &S {
        &self.src
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.src
    }

    /// Resolve one base-game spin
    ///
    /// A bonus-triggering spin resolves no regular win; its whole session
    /// runs before this returns and the outcome carries the finalized
    /// `BonusOutcome`.
    pub fn spin(&mut self) -> SpinOutcome {
        self.state = GameState::Spin;

        let mut outcome = SpinOutcome {
            triggered_bonus: false,
            win_amount: 0,
            bonus: None,
        };

        let trigger = self.src.next_draw(DrawPhase::BonusDecision);
        if trigger < self.config.bonus_trigger_threshold {
            outcome.triggered_bonus = true;
            trace!(
                "spin {}: bonus triggered (draw {trigger})",
                self.totals.spins_run + 1
            );
        } else {
            let win = self.resolve_regular_win();
            self.account.balance += win;
            outcome.win_amount = win;
        }

        self.totals.spins_run += 1;
        self.totals.total_win += outcome.win_amount;

        if outcome.triggered_bonus {
            let bonus = self.run_bonus_session();
            self.totals.bonus_sessions_run += 1;
            self.totals.total_win += bonus.total_win;
            outcome.bonus = Some(bonus);
        }

        outcome
    }

    /// Regular-win bands: small (1-3 coins), medium (3-4 coins), none
    fn resolve_regular_win(&mut self) -> u64 {
        let category = self.src.next_draw(DrawPhase::WinCategory);
        if category < self.config.small_win_threshold {
            u64::from(self.src.next_draw(DrawPhase::WinMagnitude) % 3 + 1)
        } else if category < self.config.medium_win_threshold {
            u64::from(self.src.next_draw(DrawPhase::WinMagnitude) % 2 + 3)
        } else {
            0
        }
    }

    /// Run a triggered bonus session to completion and credit its win
    fn run_bonus_session(&mut self) -> BonusOutcome {
        self.state = GameState::BonusInit;
        let mut session = BonusSession::new(self.config.initial_rounds);

        self.state = GameState::Bonus;
        // Terminates on rounds_left <= 0; each round mutates the counter
        // exactly once (one reset or one decrement, never both).
        while session.is_live() {
            self.bonus_round(&mut session);
        }

        let bonus = session.finalize();
        self.account.balance += bonus.total_win;
        debug!(
            "bonus session: {} symbols, win {}",
            bonus.symbols.len(),
            bonus.total_win
        );

        self.state = GameState::Spin;
        bonus
    }

    fn bonus_round(&mut self, session: &mut BonusSession) {
        let hit = self.src.next_draw(DrawPhase::SymbolDecision);
        if hit < self.config.symbol_hit_threshold {
            let magnitude = self.src.next_draw(DrawPhase::SymbolValue) % 10 + 1;
            session.land_symbol(magnitude);
        } else {
            session.miss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ReplaySource;

    fn replay_engine(values: Vec<u8>) -> HoldWinEngine<ReplaySource> {
        HoldWinEngine::with_source(EngineConfig::default(), ReplaySource::new(values))
    }

    #[test]
    fn test_bonus_with_no_symbols() {
        // 5 triggers the bonus; three draws >= 50 burn the allotment 3→2→1→0
        let mut engine = replay_engine(vec![5, 75, 75, 75]);
        let outcome = engine.spin();

        assert!(outcome.triggered_bonus);
        assert_eq!(outcome.win_amount, 0);
        let bonus = outcome.bonus.expect("bonus session should have run");
        assert!(bonus.symbols.is_empty());
        assert_eq!(bonus.total_win, 0);
        assert_eq!(engine.account().balance, 100);
        assert_eq!(engine.totals().bonus_sessions_run, 1);
    }

    #[test]
    fn test_bonus_with_three_symbols() {
        // Each symbol hit (draw < 50) consumes a value draw and resets the
        // allotment; three misses then end the session.
        let mut engine = replay_engine(vec![5, 25, 1, 25, 5, 25, 9, 75, 75, 75]);
        let outcome = engine.spin();

        let bonus = outcome.bonus.expect("bonus session should have run");
        assert_eq!(bonus.symbols, vec![2, 6, 10]);
        assert_eq!(bonus.total_win, 18);
        assert_eq!(engine.account().balance, 118);
        assert_eq!(engine.totals().total_win, 18);
    }

    #[test]
    fn test_regular_small_win() {
        let mut engine = replay_engine(vec![20, 30, 1]);
        let outcome = engine.spin();

        assert!(!outcome.triggered_bonus);
        assert!(outcome.bonus.is_none());
        assert_eq!(outcome.win_amount, 2); // 1 % 3 + 1
        assert_eq!(engine.account().balance, 102);
    }

    #[test]
    fn test_regular_medium_win() {
        let mut engine = replay_engine(vec![20, 50, 1]);
        let outcome = engine.spin();

        assert_eq!(outcome.win_amount, 4); // 1 % 2 + 3
        assert_eq!(engine.account().balance, 104);
    }

    #[test]
    fn test_no_win() {
        let mut engine = replay_engine(vec![20, 80]);
        let outcome = engine.spin();

        assert_eq!(outcome.win_amount, 0);
        assert!(!outcome.is_win());
        assert_eq!(engine.account().balance, 100);
    }

    #[test]
    fn test_bonus_win_matches_balance_delta() {
        let mut engine = replay_engine(vec![5, 25, 1, 25, 5, 25, 9, 75, 75, 75]);
        let before = engine.account().balance;
        let outcome = engine.spin();
        let bonus = outcome.bonus.unwrap();

        let symbol_sum: u64 = bonus.symbols.iter().map(|&s| u64::from(s)).sum();
        assert_eq!(symbol_sum, bonus.total_win);
        assert_eq!(engine.account().balance, before + bonus.total_win);
    }

    #[test]
    fn test_spin_budget_runs_exactly_n() {
        // Only index 0 can trigger the bonus; every other value is >= 50,
        // so each session terminates after three misses.
        let values = vec![5, 75, 80, 55, 60, 72, 88, 90];
        let mut engine = HoldWinEngine::with_source(
            EngineConfig::default(),
            CyclicSource::from_values(values),
        );

        for _ in 0..1000 {
            engine.spin();
        }
        assert_eq!(engine.totals().spins_run, 1000);
    }

    #[test]
    fn test_seeded_run_terminates_and_reproduces() {
        let mut a = HoldWinEngine::new();
        a.seed(12345);
        let mut b = HoldWinEngine::new();
        b.seed(12345);

        for _ in 0..10_000 {
            a.spin();
            b.spin();
        }

        assert_eq!(a.totals(), b.totals());
        assert_eq!(a.totals().spins_run, 10_000);
    }

    #[test]
    fn test_rtp_formula() {
        // 3 spins: medium win 4, bonus win 4+8=12, small win 3
        let values = vec![20, 50, 1, 5, 25, 3, 25, 7, 75, 75, 75, 20, 30, 2];
        let mut engine = replay_engine(values);
        for _ in 0..3 {
            engine.spin();
        }

        let totals = engine.totals();
        assert_eq!(totals.spins_run, 3);
        assert_eq!(totals.total_win, 19);
        let expected = 19.0 / 3.0 * 100.0;
        assert!((engine.rtp() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rtp_zero_when_no_spins() {
        let engine = replay_engine(vec![0]);
        assert_eq!(engine.totals().spins_run, 0);
        assert_eq!(engine.rtp(), 0.0);
    }

    #[test]
    fn test_reset_restores_init_state() {
        let mut engine = replay_engine(vec![20, 30, 1]);
        engine.spin();
        assert_ne!(engine.state(), GameState::Init);

        engine.reset();
        assert_eq!(engine.state(), GameState::Init);
        assert_eq!(engine.account().balance, 100);
        assert_eq!(*engine.totals(), SimulationTotals::default());
    }

    #[test]
    fn test_draw_log_for_regular_spin() {
        let mut engine = replay_engine(vec![20, 30, 1]);
        engine.spin();

        let calls = engine.source().calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].phase, DrawPhase::BonusDecision);
        assert_eq!(calls[0].index, 0);
        assert_eq!(calls[0].value, 20);
        assert_eq!(calls[1].phase, DrawPhase::WinCategory);
        assert_eq!(calls[2].phase, DrawPhase::WinMagnitude);
    }

    #[test]
    fn test_draw_log_for_bonus_spin() {
        let mut engine = replay_engine(vec![5, 25, 1, 75, 75, 75]);
        engine.spin();

        let phases: Vec<DrawPhase> = engine
            .source()
            .calls()
            .iter()
            .map(|c| c.phase)
            .collect();
        assert_eq!(
            phases,
            vec![
                DrawPhase::BonusDecision,
                DrawPhase::SymbolDecision,
                DrawPhase::SymbolValue,
                DrawPhase::SymbolDecision,
                DrawPhase::SymbolDecision,
                DrawPhase::SymbolDecision,
            ]
        );
    }

    #[test]
    fn test_no_win_spin_consumes_two_draws() {
        let mut engine = replay_engine(vec![20, 80]);
        engine.spin();
        assert_eq!(engine.source().draws_consumed(), 2);
    }
}
