/// League-average offensive rating used when a team has no entry
pub const DEFAULT_ORTG: f64 = 111.0;

/// League-average defensive rating used when a team has no entry
pub const DEFAULT_DRTG: f64 = 111.0;

/// League-average pace (possessions per 48 minutes)
pub const DEFAULT_PACE: f64 = 99.0;

/// Offensive rating bonus for the first-listed (home) team
pub const HOME_COURT_BONUS: f64 = 1.5;

/// Defensive rating that neither helps nor hurts the opposing offense
pub const LEAGUE_DEF_BASELINE: f64 = 112.0;

/// Standard deviation of the possession count around the average pace
pub const PACE_STDDEV: f64 = 2.8;

/// Standard deviation of per-team efficiency noise
pub const EFFICIENCY_STDDEV: f64 = 3.5;

/// Possession count band
pub const POSSESSIONS_MIN: u32 = 85;
pub const POSSESSIONS_MAX: u32 = 110;

/// Efficiency band (points per 100 possessions)
pub const EFFICIENCY_MIN: f64 = 100.0;
pub const EFFICIENCY_MAX: f64 = 125.0;

/// Regulation score band before and after streak adjustments
pub const SCORE_MIN: u32 = 60;
pub const SCORE_MAX_REGULATION: u32 = 120;
pub const SCORE_MAX: u32 = 130;

/// Score ceiling once overtime is played
pub const SCORE_MAX_OVERTIME: u32 = 140;

/// Maximum number of overtime periods before a forced tie-break
pub const MAX_OVERTIMES: u32 = 3;

/// Placeholder final score when the pipeline fails or input is unusable
pub const FALLBACK_SCORES: (u32, u32) = (80, 78);

/// Largest score the composer accepts as valid input
pub const MAX_VALID_SCORE: i64 = 999;

/// Share of a team's points credited to the starters
pub const STARTERS_SHARE: f64 = 0.68;

/// Synthetic lineup size when no roster is supplied
pub const STARTERS: usize = 5;
pub const BENCH: usize = 5;

/// Regulation periods and the scoring floor per period
pub const QUARTERS: usize = 4;
pub const MIN_PER_QUARTER: u32 = 10;

/// Number of players averaged for a team overall
pub const ROTATION_SIZE: usize = 8;

/// Neutral value for a missing player attribute
pub const NEUTRAL_ATTRIBUTE: f64 = 50.0;
