//! Batch simulation driver and summary report

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use hw_engine::{CyclicSource, EngineConfig, HoldWinEngine, RandomSource};

/// Default spin budget
pub const DEFAULT_SPIN_BUDGET: u64 = 10_000;

/// Summary of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub starting_balance: u64,
    pub final_balance: u64,
    pub spins_run: u64,
    pub bonus_sessions: u64,
    pub total_win: u64,
    pub total_bet: u64,
    pub rtp_percent: f64,
}

impl SimulationReport {
    /// Export as pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation completed after {} spins.", self.spins_run)?;
        writeln!(f, "Total bonus games triggered: {}", self.bonus_sessions)?;
        writeln!(f, "Final balance: {}", self.final_balance)?;
        writeln!(f, "Total win accumulated: {}", self.total_win)?;
        write!(f, "RTP: {:.2}%", self.rtp_percent)
    }
}

/// Runs an engine through an N-spin budget
pub struct Simulator<S: RandomSource = CyclicSource> {
    engine: HoldWinEngine<S>,
}

impl Simulator<CyclicSource> {
    /// Entropy-seeded simulator with the default config
    pub fn new() -> Self {
        Self {
            engine: HoldWinEngine::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: HoldWinEngine::with_config(config),
        }
    }

    /// Reproducible simulator from a seed
    pub fn seeded(seed: u64) -> Self {
        let mut engine = HoldWinEngine::new();
        engine.seed(seed);
        Self { engine }
    }
}

impl Default for Simulator<CyclicSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> Simulator<S> {
    /// Wrap an existing engine (injected sources, custom configs)
    pub fn with_engine(engine: HoldWinEngine<S>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &HoldWinEngine<S> {
        &self.engine
    }

    /// Run `num_spins` base-game spins from a fresh init state and
    /// summarize the result
    pub fn run(&mut self, num_spins: u64) -> SimulationReport {
        self.engine.reset();
        let starting_balance = self.engine.account().balance;
        info!("simulation start: {num_spins} spins, balance {starting_balance}");

        while self.engine.totals().spins_run < num_spins {
            self.engine.spin();
        }

        let totals = *self.engine.totals();
        let bet = self.engine.account().bet;
        let report = SimulationReport {
            starting_balance,
            final_balance: self.engine.account().balance,
            spins_run: totals.spins_run,
            bonus_sessions: totals.bonus_sessions_run,
            total_win: totals.total_win,
            total_bet: totals.spins_run * bet,
            rtp_percent: totals.rtp(bet),
        };

        info!(
            "simulation done: {} bonus sessions, RTP {:.2}%",
            report.bonus_sessions, report.rtp_percent
        );
        report
    }
}
