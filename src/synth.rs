use rand::distributions::Distribution;
use rand::Rng;
use serde::Serialize;
use statrs::distribution::Normal;

use crate::config::SynthConfig;
use crate::constants::FALLBACK_SCORES;
use crate::error::{Result, SimError};
use crate::ratings::RatingsSource;
use crate::win_prob::matchup_efficiency;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    TeamA,
    TeamB,
    Tie,
}

/// Final result of one exhibition game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameResult {
    pub team_a: String,
    pub team_b: String,
    pub score_a: u32,
    pub score_b: u32,
    /// Overtime periods played, 0 for regulation
    pub overtimes: u32,
    pub winner: Winner,
    /// Set when the result is a placeholder after an internal failure
    pub degraded: bool,
}

impl GameResult {
    /// Result from an externally supplied score pair.
    ///
    /// Ties are allowed only in regulation.
    pub fn from_scores(team_a: &str, team_b: &str, score_a: u32, score_b: u32, overtimes: u32) -> Result<Self> {
        if overtimes > 0 && score_a == score_b {
            return Err(SimError::InvalidInput(format!(
                "tied score {}-{} after {} overtime(s)",
                score_a, score_b, overtimes
            )));
        }
        Ok(GameResult {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            score_a,
            score_b,
            overtimes,
            winner: winner_of(score_a, score_b),
            degraded: false,
        })
    }

    /// Placeholder result used when synthesis fails.
    pub fn fallback(team_a: &str, team_b: &str) -> Self {
        let (score_a, score_b) = FALLBACK_SCORES;
        GameResult {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            score_a,
            score_b,
            overtimes: 0,
            winner: winner_of(score_a, score_b),
            degraded: true,
        }
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self.winner {
            Winner::TeamA => Some(&self.team_a),
            Winner::TeamB => Some(&self.team_b),
            Winner::Tie => None,
        }
    }

    pub fn margin(&self) -> u32 {
        self.score_a.abs_diff(self.score_b)
    }
}

fn winner_of(score_a: u32, score_b: u32) -> Winner {
    match score_a.cmp(&score_b) {
        std::cmp::Ordering::Greater => Winner::TeamA,
        std::cmp::Ordering::Less => Winner::TeamB,
        std::cmp::Ordering::Equal => Winner::Tie,
    }
}

/// Replace a blank team name with "Team 1" / "Team 2".
pub(crate) fn team_name_or_placeholder(name: &str, slot: usize) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        tracing::warn!(slot, "empty team name, using placeholder");
        format!("Team {}", slot)
    } else {
        trimmed.to_string()
    }
}

/// Synthesize a final score for `team_a` (nominal home side) against `team_b`.
///
/// Never fails and never returns a tie. Internal failures are logged and
/// produce [`GameResult::fallback`].
pub fn synthesize<S, R>(team_a: &str, team_b: &str, ratings: &S, config: &SynthConfig, rng: &mut R) -> GameResult
where
    S: RatingsSource + ?Sized,
    R: Rng + ?Sized,
{
    let team_a = team_name_or_placeholder(team_a, 1);
    let team_b = team_name_or_placeholder(team_b, 2);

    match try_synthesize(&team_a, &team_b, ratings, config, rng) {
        Ok(result) => {
            tracing::debug!(
                team_a = %result.team_a,
                team_b = %result.team_b,
                score_a = result.score_a,
                score_b = result.score_b,
                overtimes = result.overtimes,
                "synthesized game"
            );
            result
        }
        Err(e) => {
            tracing::warn!(error = %e, %team_a, %team_b, "score synthesis failed, using fallback result");
            GameResult::fallback(&team_a, &team_b)
        }
    }
}

fn try_synthesize<S, R>(team_a: &str, team_b: &str, ratings: &S, config: &SynthConfig, rng: &mut R) -> Result<GameResult>
where
    S: RatingsSource + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;

    let ratings_a = ratings.ratings_for(team_a);
    let ratings_b = ratings.ratings_for(team_b);
    if !ratings_a.is_finite() || !ratings_b.is_finite() {
        return Err(SimError::InvalidInput("team ratings must be finite".to_string()));
    }

    let home = ratings_a.with_offense_bonus(config.home_court_bonus);

    let pace_avg = (ratings_a.pace + ratings_b.pace) / 2.0;
    let possessions = draw_possessions(pace_avg, config, rng)?;

    let eff_a = draw_efficiency(home.ortg, ratings_b.drtg, config, rng)?;
    let eff_b = draw_efficiency(ratings_b.ortg, ratings_a.drtg, config, rng)?;

    let mut score_a = points_from(possessions, eff_a);
    let mut score_b = points_from(possessions, eff_b);

    // Late-game swing goes to one side only
    let swing_max = config.late_swing as i64;
    let swing = rng.gen_range(-swing_max..=swing_max);
    if swing > 0 {
        score_a += swing;
    } else {
        score_b -= swing;
    }

    let regulation = config.regulation_scores;
    score_a = clamp_score(score_a, regulation.low, regulation.high);
    score_b = clamp_score(score_b, regulation.low, regulation.high);

    let final_band = config.final_scores;
    score_a = clamp_score(apply_streak(score_a, config, rng)?, final_band.low, final_band.high);
    score_b = clamp_score(apply_streak(score_b, config, rng)?, final_band.low, final_band.high);

    let ceiling = config.overtime_ceiling as i64;
    let mut overtimes = 0;
    while score_a == score_b && overtimes < config.max_overtimes {
        overtimes += 1;
        score_a = (score_a + overtime_points(eff_a, overtimes, config, rng)?).min(ceiling);
        score_b = (score_b + overtime_points(eff_b, overtimes, config, rng)?).min(ceiling);
    }

    if score_a == score_b {
        // Still level after the cap: the more efficient side takes it
        let (favored, other) = if eff_a >= eff_b {
            (&mut score_a, &mut score_b)
        } else {
            (&mut score_b, &mut score_a)
        };
        if *favored < ceiling {
            *favored += 1;
        } else {
            *other -= 1;
        }
    }

    let result = GameResult::from_scores(team_a, team_b, score_a as u32, score_b as u32, overtimes)?;
    if result.winner == Winner::Tie {
        return Err(SimError::Degraded("tie survived overtime resolution".to_string()));
    }
    Ok(result)
}

fn draw_possessions<R: Rng + ?Sized>(pace_avg: f64, config: &SynthConfig, rng: &mut R) -> Result<u32> {
    let drawn = sample_normal(pace_avg, config.pace_stddev, rng)?.round();
    let band = config.possessions;
    Ok(drawn.max(band.low as f64).min(band.high as f64) as u32)
}

fn draw_efficiency<R: Rng + ?Sized>(ortg: f64, opp_drtg: f64, config: &SynthConfig, rng: &mut R) -> Result<f64> {
    let base = matchup_efficiency(ortg, opp_drtg, config);
    let noise = sample_normal(0.0, config.efficiency_stddev, rng)?;
    let clutch = if config.clutch > 0.0 {
        rng.gen_range(-config.clutch..=config.clutch)
    } else {
        0.0
    };
    Ok(config.efficiency.clamp(base + noise + clutch))
}

/// Normal draw; a zero spread yields the mean.
fn sample_normal<R: Rng + ?Sized>(mean: f64, std_dev: f64, rng: &mut R) -> Result<f64> {
    if std_dev == 0.0 {
        return Ok(mean);
    }
    let normal = Normal::new(mean, std_dev).map_err(|e| SimError::Distribution(e.to_string()))?;
    Ok(normal.sample(rng))
}

fn points_from(possessions: u32, efficiency: f64) -> i64 {
    (possessions as f64 * efficiency / 100.0).round() as i64
}

fn clamp_score(score: i64, low: u32, high: u32) -> i64 {
    score.max(low as i64).min(high as i64)
}

/// Rare hot or cold game: shift the score by a random streak amount.
fn apply_streak<R: Rng + ?Sized>(score: i64, config: &SynthConfig, rng: &mut R) -> Result<i64> {
    let roll: f64 = rng.gen();
    if roll < config.streak_probability {
        Ok(score + config.streak_points.sample("streak_points", rng)? as i64)
    } else if roll > 1.0 - config.streak_probability {
        Ok(score - config.streak_points.sample("streak_points", rng)? as i64)
    } else {
        Ok(score)
    }
}

/// Points in one extra period, scaled by efficiency and decayed by fatigue.
fn overtime_points<R: Rng + ?Sized>(efficiency: f64, period: u32, config: &SynthConfig, rng: &mut R) -> Result<i64> {
    let base = config.overtime_points.sample("overtime_points", rng)? as i64 + ((efficiency - 100.0) / 5.0) as i64;
    Ok((base - period as i64).max(config.overtime_floor as i64))
}
