//! Team and roster data files.
//!
//! Both loaders are lenient: a missing file yields an empty or built-in
//! result, and malformed entries are skipped. Unreadable or unparseable
//! files are errors.

use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, SimError};
use crate::team::PlayerProfile;

const FALLBACK_TEAMS: [&str; 6] = ["Lakers", "Warriors", "Celtics", "Bulls", "Heat", "Suns"];

/// Ordered player names per team.
#[derive(Clone, Debug, Default)]
pub struct RosterBook {
    rosters: HashMap<String, Vec<String>>,
}

impl RosterBook {
    pub fn new() -> Self {
        RosterBook::default()
    }

    /// Load a `{"Team": ["Player", ...]}` file. A missing file gives an empty book.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "roster file not found, using empty rosters");
            return Ok(RosterBook::new());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(map) = value else {
            return Ok(RosterBook::new());
        };

        let rosters = map
            .into_iter()
            .map(|(team, players)| {
                let names = match players {
                    Value::Array(items) => items.iter().filter_map(player_name).collect(),
                    _ => Vec::new(),
                };
                (team, names)
            })
            .collect();
        Ok(RosterBook { rosters })
    }

    pub fn insert(&mut self, team: &str, players: Vec<String>) {
        self.rosters.insert(team.to_string(), players);
    }

    /// Players for a team in roster order; empty when the team is unknown.
    pub fn roster(&self, team: &str) -> Vec<String> {
        self.rosters.get(team).cloned().unwrap_or_default()
    }

    pub fn teams(&self) -> Vec<&str> {
        let mut teams: Vec<&str> = self.rosters.keys().map(String::as_str).collect();
        teams.sort_unstable();
        teams
    }

    pub fn as_map(&self) -> &HashMap<String, Vec<String>> {
        &self.rosters
    }
}

fn player_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

/// Team names from a JSON array of strings or `{"name": ...}` objects.
///
/// Falls back to a small built-in list when the file does not exist.
pub fn load_team_names(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path.filter(|p| p.exists()) else {
        return Ok(FALLBACK_TEAMS.iter().map(|s| s.to_string()).collect());
    };

    let text = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    let Value::Array(items) = value else {
        return Err(SimError::InvalidInput(format!(
            "team list {} is not a JSON array",
            path.display()
        )));
    };

    Ok(items
        .iter()
        .filter_map(|item| match item {
            Value::Object(obj) => obj.get("name").and_then(Value::as_str).map(str::to_string),
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
        .filter(|name| !name.is_empty())
        .collect())
}

/// Player profiles keyed by name, from `{"players": [...]}` or a bare array.
pub fn load_player_profiles(path: impl AsRef<Path>) -> Result<HashMap<String, PlayerProfile>> {
    let text = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    let items = match value {
        Value::Object(mut obj) => match obj.remove("players") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        Value::Array(items) => items,
        _ => Vec::new(),
    };

    let mut profiles = HashMap::new();
    for item in items {
        match serde_json::from_value::<PlayerProfile>(item) {
            Ok(profile) if !profile.name.is_empty() => {
                profiles.insert(profile.name.clone(), profile);
            }
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "skipping malformed player profile"),
        }
    }
    Ok(profiles)
}
