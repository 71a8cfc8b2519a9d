//! Replay scenarios — named deterministic QA sequences
//!
//! Each preset is a literal draw sequence with a known outcome, taken from
//! the QA playbook for the hold & win math model. Running one captures the
//! full per-draw observation log (phase, index, value) for assertions.

use serde::{Deserialize, Serialize};

use hw_engine::{DrawRecord, EngineConfig, HoldWinEngine, ReplaySource, SpinOutcome};

use crate::error::{SimError, SimResult};

/// A named replay scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayScenario {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Literal draw sequence, values in [0,100]
    pub values: Vec<u8>,
    /// Spin budget for the run
    pub spins: u64,
}

/// Captured result of a scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRun {
    pub scenario_id: String,
    pub outcomes: Vec<SpinOutcome>,
    pub final_balance: u64,
    pub total_win: u64,
    /// Every draw the run consumed, in order
    pub draw_log: Vec<DrawRecord>,
}

/// Built-in scenario presets
pub fn presets() -> Vec<ReplayScenario> {
    vec![
        ReplayScenario {
            id: "bonus_no_symbols".into(),
            name: "Bonus Game with No Symbols".into(),
            description: "Bonus triggers, three misses exhaust the allotment, win 0".into(),
            values: vec![5, 75, 75, 75],
            spins: 1,
        },
        ReplayScenario {
            id: "bonus_with_3".into(),
            name: "Bonus Game with 3 Symbols".into(),
            description: "Bonus triggers, symbols 2/6/10 land, win 18".into(),
            values: vec![5, 25, 1, 25, 5, 25, 9, 75, 75, 75],
            spins: 1,
        },
        ReplayScenario {
            id: "small_win".into(),
            name: "Regular Spin with Small Win".into(),
            description: "No bonus, small band, win 2".into(),
            values: vec![20, 30, 1],
            spins: 1,
        },
        ReplayScenario {
            id: "medium_win".into(),
            name: "Regular Spin with Medium Win".into(),
            description: "No bonus, medium band, win 4".into(),
            values: vec![20, 50, 1],
            spins: 1,
        },
        ReplayScenario {
            id: "no_win".into(),
            name: "Regular Spin with No Win".into(),
            description: "No bonus, no-win band".into(),
            values: vec![20, 80],
            spins: 1,
        },
        ReplayScenario {
            id: "multiple".into(),
            name: "Multiple Spins with Mixed Outcomes".into(),
            description: "Medium win, bonus with 2 symbols, small win".into(),
            values: vec![20, 50, 1, 5, 25, 3, 25, 7, 75, 75, 75, 20, 30, 2],
            spins: 3,
        },
    ]
}

/// Look up a preset by id
pub fn find(id: &str) -> SimResult<ReplayScenario> {
    presets()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| SimError::UnknownScenario(id.to_string()))
}

/// Run a scenario against a fresh default-config engine and capture the
/// observation log
pub fn run_scenario(scenario: &ReplayScenario) -> ScenarioRun {
    let mut engine = HoldWinEngine::with_source(
        EngineConfig::default(),
        ReplaySource::new(scenario.values.clone()),
    );

    let mut outcomes = Vec::with_capacity(scenario.spins as usize);
    for _ in 0..scenario.spins {
        outcomes.push(engine.spin());
    }

    ScenarioRun {
        scenario_id: scenario.id.clone(),
        final_balance: engine.account().balance,
        total_win: engine.totals().total_win,
        draw_log: engine.source().calls().to_vec(),
        outcomes,
    }
}
