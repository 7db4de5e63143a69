//! Boxscore Core - exhibition game simulation for a basketball management app.
//!
//! Two stages: the score synthesizer turns team ratings into a final score,
//! and the box-score composer back-fills quarter scores and player lines that
//! add up to any given pair of final scores. Python bindings for the desktop
//! front end are available behind the `python` feature.

pub mod boxscore;
pub mod config;
pub mod constants;
pub mod error;
pub mod partition;
pub mod player;
pub mod ratings;
pub mod recap;
pub mod roster;
pub mod series;
pub mod shooting;
pub mod synth;
pub mod team;
pub mod win_prob;

#[cfg(feature = "python")]
mod python;

pub use boxscore::{
    compose, compose_for_result, BoxScoreDetails, BoxScoreReport, ComparisonRow, MvpLine, QuarterSplit, ScoreLine,
    ShootingSummary, TeamBox, TeamBoxTotals, TeamLeaders, TeamSheet,
};
pub use config::{BoxScoreConfig, CountRange, FloatRange, SynthConfig};
pub use error::{Result, SimError};
pub use partition::{quarter_breakdown, random_partition};
pub use player::{build_player_line, PlayerStatLine, Role};
pub use ratings::{ProfileRatings, RatingsSource, RatingsTable};
pub use recap::{recap, Recap};
pub use roster::{load_player_profiles, load_team_names, RosterBook};
pub use series::{simulate_series, SeriesOutlook};
pub use shooting::{attempts_from_made, decompose_points, effective_fg_pct, true_shooting_pct, ShotMakes, ShotSplit};
pub use synth::{synthesize, GameResult, Winner};
pub use team::{team_overall, PlayerProfile, TeamRatings};
pub use win_prob::{calculate_expected_scores, calculate_win_prob, matchup_efficiency};
