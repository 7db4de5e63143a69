use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::team::{PlayerProfile, TeamRatings};

/// Anything that can answer "how strong is this team".
///
/// Implementations must never fail: unknown teams get a default.
pub trait RatingsSource {
    fn ratings_for(&self, team: &str) -> TeamRatings;
}

/// Ratings keyed by team name, with a fallback for unknown teams.
#[derive(Clone, Debug, Default)]
pub struct RatingsTable {
    ratings: HashMap<String, TeamRatings>,
    default: TeamRatings,
}

static BUILTIN: Lazy<RatingsTable> = Lazy::new(|| {
    let entries = [
        ("Boston Celtics", 119.0, 110.0, 98.5),
        ("Denver Nuggets", 117.5, 111.5, 96.5),
        ("Oklahoma City Thunder", 117.0, 111.0, 99.5),
        ("Dallas Mavericks", 116.5, 112.5, 98.0),
        ("Minnesota Timberwolves", 114.5, 109.5, 96.0),
        ("Milwaukee Bucks", 117.0, 113.0, 100.0),
        ("New York Knicks", 115.5, 111.5, 95.5),
        ("Phoenix Suns", 115.5, 112.0, 97.5),
        ("Los Angeles Lakers", 114.0, 112.0, 100.5),
        ("Golden State Warriors", 114.0, 113.5, 101.5),
        ("Philadelphia 76ers", 114.5, 111.5, 99.0),
        ("Los Angeles Clippers", 115.0, 112.5, 97.5),
        ("Miami Heat", 112.5, 111.0, 95.0),
        ("Sacramento Kings", 115.0, 113.5, 100.5),
        ("Detroit Pistons", 109.0, 115.0, 99.5),
        ("Washington Wizards", 111.0, 118.0, 102.0),
        ("Charlotte Hornets", 110.0, 116.0, 98.5),
    ];

    let mut table = RatingsTable::new();
    for (name, ortg, drtg, pace) in entries {
        table.insert(name, TeamRatings::new(ortg, drtg, pace));
    }
    table
});

impl RatingsTable {
    /// Empty table; every lookup returns the league-average default.
    pub fn new() -> Self {
        RatingsTable::default()
    }

    /// Process-wide table of illustrative ratings, built once.
    pub fn builtin() -> &'static RatingsTable {
        &BUILTIN
    }

    /// Read ratings from a JSON object of `name -> {ortg, drtg, pace}`.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let ratings: HashMap<String, TeamRatings> = serde_json::from_str(&text)?;
        Ok(RatingsTable {
            ratings,
            default: TeamRatings::default(),
        })
    }

    pub fn insert(&mut self, team: &str, ratings: TeamRatings) {
        self.ratings.insert(team.to_string(), ratings);
    }

    pub fn with_default(mut self, default: TeamRatings) -> Self {
        self.default = default;
        self
    }

    /// Ratings for a team that has an explicit entry.
    pub fn get(&self, team: &str) -> Option<TeamRatings> {
        self.ratings.get(team).copied()
    }

    pub fn contains(&self, team: &str) -> bool {
        self.ratings.contains_key(team)
    }

    pub fn default_ratings(&self) -> TeamRatings {
        self.default
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl RatingsSource for RatingsTable {
    fn ratings_for(&self, team: &str) -> TeamRatings {
        self.get(team).unwrap_or(self.default)
    }
}

/// Derives ratings from roster player attributes, falling back to a table.
pub struct ProfileRatings<'a> {
    rosters: &'a HashMap<String, Vec<String>>,
    profiles: &'a HashMap<String, PlayerProfile>,
    fallback: &'a RatingsTable,
}

impl<'a> ProfileRatings<'a> {
    pub fn new(
        rosters: &'a HashMap<String, Vec<String>>,
        profiles: &'a HashMap<String, PlayerProfile>,
        fallback: &'a RatingsTable,
    ) -> Self {
        ProfileRatings {
            rosters,
            profiles,
            fallback,
        }
    }
}

impl RatingsSource for ProfileRatings<'_> {
    fn ratings_for(&self, team: &str) -> TeamRatings {
        self.rosters
            .get(team)
            .and_then(|roster| TeamRatings::from_profiles(roster, self.profiles))
            .filter(TeamRatings::is_finite)
            .unwrap_or_else(|| self.fallback.ratings_for(team))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_team_gets_default() {
        let table = RatingsTable::builtin();
        let ratings = table.ratings_for("Unknown Team X");
        assert_eq!(ratings, TeamRatings::new(111.0, 111.0, 99.0));
    }

    #[test]
    fn test_builtin_lookup() {
        let table = RatingsTable::builtin();
        assert_eq!(table.len(), 17);
        assert_eq!(table.ratings_for("Boston Celtics"), TeamRatings::new(119.0, 110.0, 98.5));
    }

    #[test]
    fn test_custom_default() {
        let table = RatingsTable::new().with_default(TeamRatings::new(100.0, 120.0, 90.0));
        assert_eq!(table.ratings_for("anyone").drtg, 120.0);
        assert!(table.get("anyone").is_none());
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.json");
        std::fs::write(
            &path,
            r#"{"Alpha": {"ortg": 120.0, "drtg": 105.0, "pace": 101.0},
                "Beta": {"offense": 104.0, "defense": 116.0, "tempo": 96.0}}"#,
        )
        .unwrap();

        let table = RatingsTable::read_from_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.ratings_for("Beta").pace, 96.0);
        assert_eq!(table.ratings_for("Gamma"), TeamRatings::default());
    }

    #[test]
    fn test_profile_ratings_fall_back() {
        let rosters: HashMap<String, Vec<String>> =
            [("Alpha".to_string(), vec!["Ace".to_string()])].into_iter().collect();
        let profiles: HashMap<String, PlayerProfile> = [(
            "Ace".to_string(),
            PlayerProfile {
                name: "Ace".to_string(),
                overall: 50.0,
                ..PlayerProfile::default()
            },
        )]
        .into_iter()
        .collect();
        let source = ProfileRatings::new(&rosters, &profiles, RatingsTable::builtin());

        assert!((source.ratings_for("Alpha").ortg - 100.0).abs() < 1e-9);
        assert_eq!(
            source.ratings_for("Boston Celtics"),
            RatingsTable::builtin().ratings_for("Boston Celtics")
        );
    }
}
