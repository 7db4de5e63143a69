//! Tunable parameters for the synthesizer and the box-score composer.
//!
//! Every field has a default matching the constants in [`crate::constants`].
//! JSON overrides may be partial: missing fields keep their defaults.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;
use crate::error::{Result, SimError};

/// Inclusive integer range sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub low: u32,
    pub high: u32,
}

impl CountRange {
    pub const fn new(low: u32, high: u32) -> Self {
        CountRange { low, high }
    }

    pub fn validate(&self, name: &'static str) -> Result<()> {
        if self.low > self.high {
            return Err(SimError::InvalidRange {
                name,
                low: self.low as f64,
                high: self.high as f64,
            });
        }
        Ok(())
    }

    pub fn sample<R: Rng + ?Sized>(&self, name: &'static str, rng: &mut R) -> Result<u32> {
        self.validate(name)?;
        Ok(rng.gen_range(self.low..=self.high))
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.max(self.low).min(self.high)
    }
}

/// Inclusive floating point range sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub low: f64,
    pub high: f64,
}

impl FloatRange {
    pub const fn new(low: f64, high: f64) -> Self {
        FloatRange { low, high }
    }

    pub fn validate(&self, name: &'static str) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low > self.high {
            return Err(SimError::InvalidRange {
                name,
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Same as [`validate`](Self::validate) but also requires `0 <= low` and `high <= 1`.
    pub fn validate_pct(&self, name: &'static str) -> Result<()> {
        self.validate(name)?;
        if self.low < 0.0 || self.high > 1.0 {
            return Err(SimError::InvalidRange {
                name,
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    pub fn sample<R: Rng + ?Sized>(&self, name: &'static str, rng: &mut R) -> Result<f64> {
        self.validate(name)?;
        Ok(rng.gen_range(self.low..=self.high))
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.low).min(self.high)
    }
}

/// Parameters of the score synthesizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Added to the first-listed team's offensive rating
    pub home_court_bonus: f64,
    pub league_def_baseline: f64,
    pub pace_stddev: f64,
    pub efficiency_stddev: f64,
    /// Half-width of the symmetric clutch perturbation
    pub clutch: f64,
    pub possessions: CountRange,
    pub efficiency: FloatRange,
    /// Largest late-game swing credited to one side
    pub late_swing: u32,
    pub regulation_scores: CountRange,
    pub final_scores: CountRange,
    /// Chance of a hot game, and separately of a cold game, per team
    pub streak_probability: f64,
    pub streak_points: CountRange,
    pub max_overtimes: u32,
    pub overtime_points: CountRange,
    pub overtime_floor: u32,
    pub overtime_ceiling: u32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            home_court_bonus: HOME_COURT_BONUS,
            league_def_baseline: LEAGUE_DEF_BASELINE,
            pace_stddev: PACE_STDDEV,
            efficiency_stddev: EFFICIENCY_STDDEV,
            clutch: 1.0,
            possessions: CountRange::new(POSSESSIONS_MIN, POSSESSIONS_MAX),
            efficiency: FloatRange::new(EFFICIENCY_MIN, EFFICIENCY_MAX),
            late_swing: 3,
            regulation_scores: CountRange::new(SCORE_MIN, SCORE_MAX_REGULATION),
            final_scores: CountRange::new(SCORE_MIN, SCORE_MAX),
            streak_probability: 0.08,
            streak_points: CountRange::new(5, 12),
            max_overtimes: MAX_OVERTIMES,
            overtime_points: CountRange::new(7, 15),
            overtime_floor: 6,
            overtime_ceiling: SCORE_MAX_OVERTIME,
        }
    }
}

impl SynthConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SynthConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("home_court_bonus", self.home_court_bonus),
            ("league_def_baseline", self.league_def_baseline),
            ("pace_stddev", self.pace_stddev),
            ("efficiency_stddev", self.efficiency_stddev),
            ("clutch", self.clutch),
        ] {
            if !value.is_finite() {
                return Err(SimError::InvalidInput(format!("{} must be finite", name)));
            }
        }
        if self.pace_stddev < 0.0 || self.efficiency_stddev < 0.0 || self.clutch < 0.0 {
            return Err(SimError::InvalidInput(
                "pace_stddev, efficiency_stddev and clutch must not be negative".to_string(),
            ));
        }
        if !(0.0..=0.5).contains(&self.streak_probability) {
            return Err(SimError::InvalidInput(format!(
                "streak_probability must lie in [0, 0.5], got {}",
                self.streak_probability
            )));
        }
        self.possessions.validate("possessions")?;
        self.efficiency.validate("efficiency")?;
        self.regulation_scores.validate("regulation_scores")?;
        self.final_scores.validate("final_scores")?;
        self.streak_points.validate("streak_points")?;
        self.overtime_points.validate("overtime_points")?;
        if self.overtime_ceiling < self.final_scores.high {
            return Err(SimError::InvalidInput(
                "overtime_ceiling must not be below the final score ceiling".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters of the box-score composer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxScoreConfig {
    pub quarters: usize,
    pub min_per_quarter: u32,
    pub starters_share: f64,
    /// Synthetic lineup used when no roster is supplied
    pub starters: usize,
    pub bench: usize,
    pub two_point_pct: FloatRange,
    pub three_point_pct: FloatRange,
    pub free_throw_pct: FloatRange,
    /// Cap on free throws drawn per player before parity repair
    pub free_throws_made_cap: u32,
    /// Upper bound on attempts for a shot type with no makes
    pub fallback_attempts: u32,
    pub starter_minutes: CountRange,
    pub bench_minutes: CountRange,
    pub rebounds: CountRange,
    pub assists: CountRange,
    pub starter_steals: CountRange,
    pub bench_steals: CountRange,
    pub starter_blocks: CountRange,
    pub bench_blocks: CountRange,
    pub starter_turnovers: CountRange,
    pub bench_turnovers: CountRange,
    pub fouls: CountRange,
    /// Half-width of the random plus/minus base term
    pub plus_minus_noise: i32,
    /// Team margin is divided by this before it is added to plus/minus
    pub plus_minus_divisor: i32,
}

impl Default for BoxScoreConfig {
    fn default() -> Self {
        BoxScoreConfig {
            quarters: QUARTERS,
            min_per_quarter: MIN_PER_QUARTER,
            starters_share: STARTERS_SHARE,
            starters: STARTERS,
            bench: BENCH,
            two_point_pct: FloatRange::new(0.38, 0.62),
            three_point_pct: FloatRange::new(0.28, 0.42),
            free_throw_pct: FloatRange::new(0.68, 0.92),
            free_throws_made_cap: 10,
            fallback_attempts: 3,
            starter_minutes: CountRange::new(28, 36),
            bench_minutes: CountRange::new(8, 22),
            rebounds: CountRange::new(0, 15),
            assists: CountRange::new(0, 12),
            starter_steals: CountRange::new(0, 4),
            bench_steals: CountRange::new(0, 3),
            starter_blocks: CountRange::new(0, 3),
            bench_blocks: CountRange::new(0, 2),
            starter_turnovers: CountRange::new(0, 6),
            bench_turnovers: CountRange::new(0, 4),
            fouls: CountRange::new(0, 5),
            plus_minus_noise: 5,
            plus_minus_divisor: 5,
        }
    }
}

impl BoxScoreConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: BoxScoreConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings the whole report depends on.
    ///
    /// Per-player ranges are checked again when sampled so a bad range
    /// only degrades the lines that use it.
    pub fn validate(&self) -> Result<()> {
        if self.quarters == 0 {
            return Err(SimError::InvalidInput("quarters must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.starters_share) {
            return Err(SimError::InvalidInput(format!(
                "starters_share must lie in [0, 1], got {}",
                self.starters_share
            )));
        }
        if self.starters == 0 {
            return Err(SimError::InvalidInput("starters must be positive".to_string()));
        }
        if self.plus_minus_divisor == 0 || self.plus_minus_noise < 0 {
            return Err(SimError::InvalidInput(
                "plus/minus divisor must be non-zero and noise non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
