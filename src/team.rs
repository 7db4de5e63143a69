use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{DEFAULT_DRTG, DEFAULT_ORTG, DEFAULT_PACE, NEUTRAL_ATTRIBUTE, ROTATION_SIZE};

/// Team strength ratings.
///
/// Ratings are NBA-style raw numbers (points per 100 possessions), not
/// relative efficiencies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamRatings {
    /// Points scored per 100 possessions
    #[serde(alias = "offense")]
    pub ortg: f64,

    /// Points allowed per 100 possessions (lower is better)
    #[serde(alias = "defense")]
    pub drtg: f64,

    /// Possessions per 48 minutes
    #[serde(alias = "tempo")]
    pub pace: f64,
}

impl Default for TeamRatings {
    fn default() -> Self {
        TeamRatings {
            ortg: DEFAULT_ORTG,
            drtg: DEFAULT_DRTG,
            pace: DEFAULT_PACE,
        }
    }
}

impl TeamRatings {
    pub const fn new(ortg: f64, drtg: f64, pace: f64) -> Self {
        TeamRatings { ortg, drtg, pace }
    }

    /// Copy with the offensive rating shifted by `bonus`.
    pub fn with_offense_bonus(&self, bonus: f64) -> Self {
        TeamRatings {
            ortg: self.ortg + bonus,
            ..*self
        }
    }

    pub fn is_finite(&self) -> bool {
        self.ortg.is_finite() && self.drtg.is_finite() && self.pace.is_finite()
    }

    /// Derive ratings from the attributes of the rostered players.
    ///
    /// Players without a profile are skipped; returns `None` when no player
    /// on the roster has one.
    pub fn from_profiles(roster: &[String], profiles: &HashMap<String, PlayerProfile>) -> Option<Self> {
        let known: Vec<&PlayerProfile> = roster.iter().filter_map(|name| profiles.get(name)).collect();
        if known.is_empty() {
            return None;
        }

        let n = known.len() as f64;
        let avg = |f: fn(&PlayerProfile) -> f64| known.iter().map(|p| f(p)).sum::<f64>() / n;

        let overall = avg(|p| p.overall);
        let offense = avg(PlayerProfile::offense_score);
        let defense = avg(PlayerProfile::defense_score);
        let pace = avg(PlayerProfile::pace_score);

        Some(TeamRatings {
            ortg: 100.0 + (offense - 50.0) * 0.5 + (overall - 50.0) * 0.2,
            drtg: 110.0 - (defense - 50.0) * 0.4 - (overall - 50.0) * 0.1,
            pace: 95.0 + (pace - 50.0) * 0.15,
        })
    }
}

/// Player attribute sheet as stored in the player bio file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,

    #[serde(default = "neutral")]
    pub overall: f64,

    #[serde(default)]
    pub shooting: HashMap<String, f64>,

    #[serde(default)]
    pub skill: HashMap<String, f64>,

    #[serde(default)]
    pub physical: HashMap<String, f64>,
}

fn neutral() -> f64 {
    NEUTRAL_ATTRIBUTE
}

fn attr(map: &HashMap<String, f64>, key: &str) -> f64 {
    map.get(key).copied().unwrap_or(NEUTRAL_ATTRIBUTE)
}

impl PlayerProfile {
    pub fn offense_score(&self) -> f64 {
        0.4 * attr(&self.skill, "Offense IQ")
            + 0.2 * attr(&self.shooting, "Field Goal")
            + 0.2 * attr(&self.shooting, "Three Point")
            + 0.2 * attr(&self.skill, "Pass")
    }

    pub fn defense_score(&self) -> f64 {
        0.5 * attr(&self.skill, "Defense IQ")
            + 0.3 * attr(&self.skill, "Rebound")
            + 0.2 * attr(&self.physical, "Strength")
    }

    pub fn pace_score(&self) -> f64 {
        0.6 * attr(&self.physical, "Speed") + 0.4 * attr(&self.physical, "Endurance")
    }
}

/// Team overall: mean of the best eight known player overalls, one decimal.
///
/// Returns 0.0 when no rostered player has a profile.
pub fn team_overall(roster: &[String], profiles: &HashMap<String, PlayerProfile>) -> f64 {
    let mut overalls: Vec<f64> = roster
        .iter()
        .filter_map(|name| profiles.get(name).map(|p| p.overall))
        .filter(|o| o.is_finite())
        .collect();
    if overalls.is_empty() {
        return 0.0;
    }

    overalls.sort_by(|a, b| b.total_cmp(a));
    overalls.truncate(ROTATION_SIZE);
    let mean = overalls.iter().sum::<f64>() / overalls.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, overall: f64, level: f64) -> PlayerProfile {
        let all = |keys: &[&str]| -> HashMap<String, f64> { keys.iter().map(|k| (k.to_string(), level)).collect() };
        PlayerProfile {
            name: name.to_string(),
            overall,
            shooting: all(&["Field Goal", "Three Point"]),
            skill: all(&["Offense IQ", "Pass", "Defense IQ", "Rebound"]),
            physical: all(&["Strength", "Speed", "Endurance"]),
        }
    }

    #[test]
    fn test_neutral_profiles_give_baseline_ratings() {
        let roster = vec!["A".to_string()];
        let profiles: HashMap<_, _> = [("A".to_string(), profile("A", 50.0, 50.0))].into_iter().collect();

        let ratings = TeamRatings::from_profiles(&roster, &profiles).unwrap();
        assert!((ratings.ortg - 100.0).abs() < 1e-9);
        assert!((ratings.drtg - 110.0).abs() < 1e-9);
        assert!((ratings.pace - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_better_players_better_ratings() {
        let roster = vec!["Star".to_string(), "Unknown".to_string()];
        let profiles: HashMap<_, _> = [("Star".to_string(), profile("Star", 90.0, 90.0))].into_iter().collect();

        let ratings = TeamRatings::from_profiles(&roster, &profiles).unwrap();
        assert!(ratings.ortg > 100.0);
        assert!(ratings.drtg < 110.0);
        assert!(ratings.pace > 95.0);
    }

    #[test]
    fn test_no_profiles_none() {
        let roster = vec!["Nobody".to_string()];
        assert!(TeamRatings::from_profiles(&roster, &HashMap::new()).is_none());
    }

    #[test]
    fn test_team_overall_top_eight() {
        let roster: Vec<String> = (0..10).map(|i| format!("P{}", i)).collect();
        let profiles: HashMap<_, _> = roster
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), profile(name, 70.0 + i as f64, 50.0)))
            .collect();

        // Top eight are 72..=79
        assert!((team_overall(&roster, &profiles) - 75.5).abs() < 1e-9);
        assert_eq!(team_overall(&[], &profiles), 0.0);
    }

    #[test]
    fn test_offense_bonus() {
        let base = TeamRatings::default();
        let home = base.with_offense_bonus(1.5);
        assert!((home.ortg - 112.5).abs() < 1e-12);
        assert_eq!(home.drtg, base.drtg);
    }

    #[test]
    fn test_profile_deserializes_with_missing_sections() {
        let p: PlayerProfile = serde_json::from_str(r#"{"name": "X", "skill": {"Pass": 80}}"#).unwrap();
        assert_eq!(p.overall, 50.0);
        assert!((p.offense_score() - (0.4 * 50.0 + 0.2 * 50.0 + 0.2 * 50.0 + 0.2 * 80.0)).abs() < 1e-9);
    }
}
