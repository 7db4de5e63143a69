use statrs::distribution::{ContinuousCDF, Normal};

use crate::config::SynthConfig;
use crate::team::TeamRatings;

/// Scoring efficiency before noise: `ortg + (league_def_baseline - opp_drtg)`.
pub fn matchup_efficiency(ortg: f64, opp_drtg: f64, config: &SynthConfig) -> f64 {
    ortg + (config.league_def_baseline - opp_drtg)
}

/// Expected possessions for a matchup, clamped to the configured band.
pub fn expected_possessions(team_a: &TeamRatings, team_b: &TeamRatings, config: &SynthConfig) -> f64 {
    let pace = (team_a.pace + team_b.pace) / 2.0;
    pace.max(config.possessions.low as f64).min(config.possessions.high as f64)
}

/// Calculate expected scores for a matchup, before any noise.
///
/// Team A is the home side and gets the home-court bonus.
///
/// Returns (team_a_expected_score, team_b_expected_score)
pub fn calculate_expected_scores(team_a: &TeamRatings, team_b: &TeamRatings, config: &SynthConfig) -> (f64, f64) {
    let home = team_a.with_offense_bonus(config.home_court_bonus);
    let possessions = expected_possessions(team_a, team_b, config);

    let eff_a = config.efficiency.clamp(matchup_efficiency(home.ortg, team_b.drtg, config));
    let eff_b = config.efficiency.clamp(matchup_efficiency(team_b.ortg, team_a.drtg, config));

    (possessions * eff_a / 100.0, possessions * eff_b / 100.0)
}

/// Calculate the probability of team A beating team B.
///
/// Normal approximation of the final margin: the spread combines both
/// teams' efficiency noise and clutch terms with the late-game swing.
/// Streaks and overtime are ignored.
pub fn calculate_win_prob(team_a: &TeamRatings, team_b: &TeamRatings, config: &SynthConfig) -> f64 {
    let (score_a, score_b) = calculate_expected_scores(team_a, team_b, config);
    let point_diff = score_a - score_b;

    let possessions = expected_possessions(team_a, team_b, config);
    let eff_var = config.efficiency_stddev.powi(2) + config.clutch.powi(2) / 3.0;
    let team_var = eff_var * (possessions / 100.0).powi(2);
    let swing = config.late_swing as f64;
    let swing_var = swing * (swing + 1.0) / 3.0;
    let stddev = (2.0 * team_var + swing_var).sqrt();

    if !stddev.is_finite() || stddev <= 0.0 {
        return match point_diff.partial_cmp(&0.0) {
            Some(std::cmp::Ordering::Greater) => 1.0,
            Some(std::cmp::Ordering::Less) => 0.0,
            _ => 0.5,
        };
    }

    Normal::new(0.0, 1.0).map_or(0.5, |normal| normal.cdf(point_diff / stddev))
}
