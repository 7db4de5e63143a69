use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::SynthConfig;
use crate::ratings::RatingsSource;
use crate::synth::{synthesize, GameResult, Winner};
use crate::win_prob::calculate_win_prob;

/// Aggregate of many synthesized games between the same two teams.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SeriesOutlook {
    pub team_a: String,
    pub team_b: String,
    pub games: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    pub overtime_games: usize,
    pub avg_score_a: f64,
    pub avg_score_b: f64,
    /// Closed-form estimate from the ratings alone
    pub pregame_win_prob_a: f64,
}

impl SeriesOutlook {
    pub fn win_pct_a(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins_a as f64 / self.games as f64
    }
}

/// Run `games` independent games in parallel.
///
/// Each game gets its own seed drawn from a master generator, so a given
/// `seed` reproduces the whole series regardless of thread scheduling.
pub fn simulate_series<S>(
    team_a: &str,
    team_b: &str,
    games: usize,
    seed: Option<u64>,
    ratings: &S,
    config: &SynthConfig,
) -> SeriesOutlook
where
    S: RatingsSource + Sync + ?Sized,
{
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let seeds: Vec<u64> = (0..games).map(|_| rng.gen::<u64>()).collect();

    let results: Vec<GameResult> = seeds
        .par_iter()
        .map(|&game_seed| {
            let mut game_rng = ChaCha8Rng::seed_from_u64(game_seed);
            synthesize(team_a, team_b, ratings, config, &mut game_rng)
        })
        .collect();

    let mut outlook = SeriesOutlook {
        team_a: team_a.to_string(),
        team_b: team_b.to_string(),
        games,
        pregame_win_prob_a: calculate_win_prob(&ratings.ratings_for(team_a), &ratings.ratings_for(team_b), config),
        ..SeriesOutlook::default()
    };

    let (mut total_a, mut total_b) = (0u64, 0u64);
    for result in &results {
        match result.winner {
            Winner::TeamA => outlook.wins_a += 1,
            Winner::TeamB => outlook.wins_b += 1,
            Winner::Tie => {}
        }
        if result.overtimes > 0 {
            outlook.overtime_games += 1;
        }
        total_a += result.score_a as u64;
        total_b += result.score_b as u64;
    }

    if games > 0 {
        outlook.avg_score_a = total_a as f64 / games as f64;
        outlook.avg_score_b = total_b as f64 / games as f64;
    }

    tracing::debug!(
        team_a,
        team_b,
        games,
        wins_a = outlook.wins_a,
        wins_b = outlook.wins_b,
        "simulated series"
    );
    outlook
}
