use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::boxscore::{compose, TeamSheet};
use crate::config::{BoxScoreConfig, SynthConfig};
use crate::ratings::RatingsTable;
use crate::recap::recap;
use crate::series::simulate_series;
use crate::synth::{synthesize, GameResult};

fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Simulate one game.
///
/// Returns (team1, team2, score1, score2, winner, overtimes).
#[pyfunction]
#[pyo3(signature = (team1, team2, seed = None))]
fn simulate_game(team1: &str, team2: &str, seed: Option<u64>) -> (String, String, u32, u32, String, u32) {
    let mut rng = rng_from(seed);
    let result = synthesize(team1, team2, RatingsTable::builtin(), &SynthConfig::default(), &mut rng);
    let winner = result.winner_name().unwrap_or_default().to_string();
    (result.team_a, result.team_b, result.score_a, result.score_b, winner, result.overtimes)
}

/// Prose recap for a final score.
#[pyfunction]
#[pyo3(signature = (team1, team2, score1, score2, ot_count = 0, seed = None))]
fn generate_summary(
    team1: &str,
    team2: &str,
    score1: u32,
    score2: u32,
    ot_count: u32,
    seed: Option<u64>,
) -> PyResult<String> {
    let result = GameResult::from_scores(team1, team2, score1, score2, ot_count)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(recap(&result, &mut rng_from(seed)).to_string())
}

/// Full box score as a JSON document.
#[pyfunction]
#[pyo3(signature = (team1, team2, score1, score2, roster1 = None, roster2 = None, seed = None))]
fn generate_boxscore(
    team1: &str,
    team2: &str,
    score1: i64,
    score2: i64,
    roster1: Option<Vec<String>>,
    roster2: Option<Vec<String>>,
    seed: Option<u64>,
) -> PyResult<String> {
    let mut sheet_a = TeamSheet::new(team1, score1);
    if let Some(roster) = roster1.as_deref() {
        sheet_a = sheet_a.with_roster(roster);
    }
    let mut sheet_b = TeamSheet::new(team2, score2);
    if let Some(roster) = roster2.as_deref() {
        sheet_b = sheet_b.with_roster(roster);
    }

    let report = compose(sheet_a, sheet_b, &BoxScoreConfig::default(), &mut rng_from(seed));
    report.to_json().map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Many games in parallel; returns the outlook as a JSON document.
#[pyfunction]
#[pyo3(name = "simulate_series", signature = (team1, team2, games, seed = None))]
fn py_simulate_series(team1: &str, team2: &str, games: usize, seed: Option<u64>) -> PyResult<String> {
    let outlook = simulate_series(team1, team2, games, seed, RatingsTable::builtin(), &SynthConfig::default());
    serde_json::to_string(&outlook).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python module definition
#[pymodule]
fn boxscore_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate_game, m)?)?;
    m.add_function(wrap_pyfunction!(generate_summary, m)?)?;
    m.add_function(wrap_pyfunction!(generate_boxscore, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate_series, m)?)?;

    m.add("MAX_OVERTIMES", crate::constants::MAX_OVERTIMES)?;
    m.add("STARTERS_SHARE", crate::constants::STARTERS_SHARE)?;

    Ok(())
}
