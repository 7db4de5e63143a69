use rand::Rng;
use serde::Serialize;

use crate::config::BoxScoreConfig;
use crate::error::Result;
use crate::shooting::{attempts_from_made, decompose_points, ShotMakes, ShotSplit};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Starter,
    Bench,
}

impl Role {
    pub fn is_starter(self) -> bool {
        self == Role::Starter
    }
}

/// One player's box-score line.
///
/// `points == 2 * twos_made() + 3 * threes.made + free_throws.made` and every
/// attempt count is at least its make count.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerStatLine {
    pub name: String,
    pub role: Role,
    pub minutes: u32,
    pub field_goals: ShotSplit,
    pub threes: ShotSplit,
    pub free_throws: ShotSplit,
    pub offensive_rebounds: u32,
    pub defensive_rebounds: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fouls: u32,
    pub plus_minus: i32,
    pub points: u32,
    /// Set when the line was replaced by a placeholder
    pub degraded: bool,
}

impl PlayerStatLine {
    /// Placeholder line that keeps the allocated points and zeroes everything else.
    pub fn degraded(name: &str, role: Role, points: u32) -> Self {
        let makes = ShotMakes::plain(points);
        PlayerStatLine {
            name: name.to_string(),
            role,
            minutes: 0,
            field_goals: ShotSplit::new(makes.twos, makes.twos),
            threes: ShotSplit::default(),
            free_throws: ShotSplit::new(makes.free_throws, makes.free_throws),
            offensive_rebounds: 0,
            defensive_rebounds: 0,
            rebounds: 0,
            assists: 0,
            steals: 0,
            blocks: 0,
            turnovers: 0,
            fouls: 0,
            plus_minus: 0,
            points,
            degraded: true,
        }
    }

    pub fn twos_made(&self) -> u32 {
        self.field_goals.made - self.threes.made
    }

    /// Single-number impact used to pick the game MVP.
    pub fn game_score(&self) -> i32 {
        let missed_fg = self.field_goals.attempted as i32 - self.field_goals.made as i32;
        let missed_ft = self.free_throws.attempted as i32 - self.free_throws.made as i32;
        (self.points + self.rebounds + self.assists + self.steals + self.blocks) as i32
            - missed_fg
            - missed_ft
            - self.turnovers as i32
    }
}

/// Build a full line for a player credited with `points`.
///
/// `team_score` and `opp_score` drive the plus/minus: starters lean toward
/// the sign of their team's margin.
pub fn build_player_line<R: Rng + ?Sized>(
    name: &str,
    role: Role,
    points: u32,
    team_score: u32,
    opp_score: u32,
    config: &BoxScoreConfig,
    rng: &mut R,
) -> Result<PlayerStatLine> {
    let makes = decompose_points(points, config.free_throws_made_cap, rng);
    let (two_att, _) = attempts_from_made(makes.twos, config.two_point_pct, config.fallback_attempts, rng)?;
    let (three_att, _) = attempts_from_made(makes.threes, config.three_point_pct, config.fallback_attempts, rng)?;
    let (ft_att, _) = attempts_from_made(makes.free_throws, config.free_throw_pct, config.fallback_attempts, rng)?;

    let starter = role.is_starter();
    let rebounds = config.rebounds.sample("rebounds", rng)?;
    let assists = config.assists.sample("assists", rng)?;
    let minutes = if starter {
        config.starter_minutes.sample("starter_minutes", rng)?
    } else {
        config.bench_minutes.sample("bench_minutes", rng)?
    };
    let (steals, blocks, turnovers) = if starter {
        (
            config.starter_steals.sample("starter_steals", rng)?,
            config.starter_blocks.sample("starter_blocks", rng)?,
            config.starter_turnovers.sample("starter_turnovers", rng)?,
        )
    } else {
        (
            config.bench_steals.sample("bench_steals", rng)?,
            config.bench_blocks.sample("bench_blocks", rng)?,
            config.bench_turnovers.sample("bench_turnovers", rng)?,
        )
    };
    let fouls = config.fouls.sample("fouls", rng)?;

    let offensive_rebounds = rng.gen_range(0..=rebounds);

    let team_diff = team_score as i32 - opp_score as i32;
    let bias = if starter { team_diff.signum() } else { 0 };
    let noise = rng.gen_range(-config.plus_minus_noise..=config.plus_minus_noise);
    let plus_minus = noise + team_diff / config.plus_minus_divisor + bias;

    Ok(PlayerStatLine {
        name: name.to_string(),
        role,
        minutes,
        field_goals: ShotSplit::new(makes.twos + makes.threes, two_att + three_att),
        threes: ShotSplit::new(makes.threes, three_att),
        free_throws: ShotSplit::new(makes.free_throws, ft_att),
        offensive_rebounds,
        defensive_rebounds: rebounds - offensive_rebounds,
        rebounds,
        assists,
        steals,
        blocks,
        turnovers,
        fouls,
        plus_minus,
        points,
        degraded: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CountRange;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn check_line(line: &PlayerStatLine) {
        assert_eq!(
            2 * line.twos_made() + 3 * line.threes.made + line.free_throws.made,
            line.points
        );
        assert!(line.field_goals.attempted >= line.field_goals.made);
        assert!(line.threes.attempted >= line.threes.made);
        assert!(line.free_throws.attempted >= line.free_throws.made);
        assert_eq!(line.rebounds, line.offensive_rebounds + line.defensive_rebounds);
    }

    #[test]
    fn test_line_consistency() {
        let config = BoxScoreConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        for points in 0..45 {
            for role in [Role::Starter, Role::Bench] {
                let line = build_player_line("P", role, points, 101, 99, &config, &mut rng).unwrap();
                check_line(&line);
                assert!(!line.degraded);
            }
        }
    }

    #[test]
    fn test_minutes_by_role() {
        let config = BoxScoreConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..30 {
            let starter = build_player_line("S", Role::Starter, 10, 90, 80, &config, &mut rng).unwrap();
            let bench = build_player_line("B", Role::Bench, 4, 90, 80, &config, &mut rng).unwrap();
            assert!((28..=36).contains(&starter.minutes));
            assert!((8..=22).contains(&bench.minutes));
            assert!(starter.steals <= 4 && bench.steals <= 3);
        }
    }

    #[test]
    fn test_starter_plus_minus_follows_margin() {
        let config = BoxScoreConfig {
            plus_minus_noise: 0,
            ..BoxScoreConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let winner = build_player_line("W", Role::Starter, 12, 110, 90, &config, &mut rng).unwrap();
        let loser = build_player_line("L", Role::Starter, 12, 90, 110, &config, &mut rng).unwrap();
        let bench = build_player_line("B", Role::Bench, 12, 90, 110, &config, &mut rng).unwrap();
        assert_eq!(winner.plus_minus, 5);
        assert_eq!(loser.plus_minus, -5);
        assert_eq!(bench.plus_minus, -4);
    }

    #[test]
    fn test_bad_range_is_error() {
        let config = BoxScoreConfig {
            bench_minutes: CountRange::new(30, 10),
            ..BoxScoreConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(build_player_line("S", Role::Starter, 10, 90, 80, &config, &mut rng).is_ok());
        assert!(build_player_line("B", Role::Bench, 10, 90, 80, &config, &mut rng).is_err());
    }

    #[test]
    fn test_degraded_line_keeps_points() {
        let line = PlayerStatLine::degraded("X", Role::Bench, 7);
        check_line(&line);
        assert_eq!(line.points, 7);
        assert_eq!(line.rebounds, 0);
        assert!(line.degraded);
    }

    #[test]
    fn test_game_score() {
        let mut line = PlayerStatLine::degraded("X", Role::Starter, 20);
        line.field_goals = ShotSplit::new(8, 15);
        line.threes = ShotSplit::new(2, 5);
        line.free_throws = ShotSplit::new(2, 4);
        line.rebounds = 6;
        line.assists = 4;
        line.steals = 1;
        line.blocks = 1;
        line.turnovers = 3;
        // 20 + 6 + 4 + 1 + 1 - 7 - 2 - 3
        assert_eq!(line.game_score(), 20);
    }
}
