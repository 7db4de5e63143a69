//! Box-score composition.
//!
//! Given two final scores, back-fill quarter scores and a full set of player
//! lines whose columns add up to those scores exactly, then derive the team
//! aggregates, leaders, comparison table and game MVP.

use rand::Rng;
use serde::Serialize;

use crate::config::BoxScoreConfig;
use crate::constants::{FALLBACK_SCORES, MAX_VALID_SCORE};
use crate::error::{Result, SimError};
use crate::partition::{quarter_breakdown, random_partition};
use crate::player::{build_player_line, PlayerStatLine, Role};
use crate::roster::RosterBook;
use crate::shooting::{effective_fg_pct, true_shooting_pct, ShotSplit};
use crate::synth::{team_name_or_placeholder, GameResult};

const UNAVAILABLE_NOTICE: &str = "Detailed stats are unavailable for this game.";
const DEGRADED_NOTICE: &str = "Some player lines could not be generated and show placeholder values.";

/// One side of a matchup as handed to [`compose`].
#[derive(Clone, Copy, Debug)]
pub struct TeamSheet<'a> {
    pub name: &'a str,
    pub score: i64,
    /// Ordered player names; first five start. `None` or empty means synthetic slots.
    pub roster: Option<&'a [String]>,
}

impl<'a> TeamSheet<'a> {
    pub fn new(name: &'a str, score: i64) -> Self {
        TeamSheet { name, score, roster: None }
    }

    pub fn with_roster(mut self, roster: &'a [String]) -> Self {
        self.roster = Some(roster);
        self
    }
}

/// Period-by-period scoring for one team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuarterSplit {
    pub periods: Vec<u32>,
}

impl QuarterSplit {
    pub fn total(&self) -> u32 {
        self.periods.iter().sum()
    }
}

/// Column-wise sum of a team's player lines.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TeamBoxTotals {
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
    pub points: u32,
    /// Final margin from this team's side; shown in the plus/minus column
    pub margin: i32,
}

impl TeamBoxTotals {
    pub fn from_lines(lines: &[PlayerStatLine], margin: i32) -> Self {
        let mut totals = TeamBoxTotals {
            margin,
            ..TeamBoxTotals::default()
        };
        for line in lines {
            totals.minutes += line.minutes;
            totals.field_goals.add(line.field_goals);
            totals.threes.add(line.threes);
            totals.free_throws.add(line.free_throws);
            totals.offensive_rebounds += line.offensive_rebounds;
            totals.defensive_rebounds += line.defensive_rebounds;
            totals.rebounds += line.rebounds;
            totals.assists += line.assists;
            totals.steals += line.steals;
            totals.blocks += line.blocks;
            totals.turnovers += line.turnovers;
            totals.fouls += line.fouls;
            totals.points += line.points;
        }
        totals
    }

    pub fn effective_fg_pct(&self) -> f64 {
        effective_fg_pct(self.field_goals.made, self.threes.made, self.field_goals.attempted)
    }

    pub fn true_shooting_pct(&self) -> f64 {
        true_shooting_pct(self.points, self.field_goals.attempted, self.free_throws.attempted)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leader {
    pub player: String,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamLeaders {
    pub points: Leader,
    pub rebounds: Leader,
    pub assists: Leader,
}

impl TeamLeaders {
    /// Leaders in points, rebounds and assists; the earliest listed player wins ties.
    pub fn from_lines(lines: &[PlayerStatLine]) -> Option<Self> {
        Some(TeamLeaders {
            points: leader_by(lines, |l| l.points)?,
            rebounds: leader_by(lines, |l| l.rebounds)?,
            assists: leader_by(lines, |l| l.assists)?,
        })
    }
}

fn leader_by(lines: &[PlayerStatLine], stat: impl Fn(&PlayerStatLine) -> u32) -> Option<Leader> {
    let mut best: Option<&PlayerStatLine> = None;
    for line in lines {
        if best.map_or(true, |b| stat(line) > stat(b)) {
            best = Some(line);
        }
    }
    best.map(|line| Leader {
        player: line.name.clone(),
        value: stat(line),
    })
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShootingSummary {
    pub field_goals: ShotSplit,
    pub threes: ShotSplit,
    pub free_throws: ShotSplit,
    pub effective_fg_pct: f64,
    pub true_shooting_pct: f64,
}

impl From<&TeamBoxTotals> for ShootingSummary {
    fn from(totals: &TeamBoxTotals) -> Self {
        ShootingSummary {
            field_goals: totals.field_goals,
            threes: totals.threes,
            free_throws: totals.free_throws,
            effective_fg_pct: totals.effective_fg_pct(),
            true_shooting_pct: totals.true_shooting_pct(),
        }
    }
}

/// Everything generated for one team.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamBox {
    pub name: String,
    pub score: u32,
    pub quarters: QuarterSplit,
    pub players: Vec<PlayerStatLine>,
    pub totals: TeamBoxTotals,
    pub shooting: ShootingSummary,
    pub leaders: Option<TeamLeaders>,
    /// Player lines replaced by placeholders
    pub degraded_lines: usize,
}

impl TeamBox {
    pub fn starters(&self) -> impl Iterator<Item = &PlayerStatLine> {
        self.players.iter().filter(|p| p.role == Role::Starter)
    }

    pub fn bench(&self) -> impl Iterator<Item = &PlayerStatLine> {
        self.players.iter().filter(|p| p.role == Role::Bench)
    }
}

/// Head-to-head comparison row, formatted for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub team_a: String,
    pub team_b: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MvpLine {
    pub player: String,
    pub team: String,
    pub game_score: i32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreLine {
    pub team_a: String,
    pub team_b: String,
    pub score_a: u32,
    pub score_b: u32,
}

impl std::fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} - {} {}", self.team_a, self.score_a, self.score_b, self.team_b)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoxScoreDetails {
    pub team_a: TeamBox,
    pub team_b: TeamBox,
    pub comparison: Vec<ComparisonRow>,
    pub mvp: Option<MvpLine>,
}

/// Composed box score ready for the presentation layer.
///
/// `details` is `None` only for the minimal fallback report, in which case
/// `notice` explains why.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoxScoreReport {
    pub score: ScoreLine,
    pub details: Option<BoxScoreDetails>,
    pub notice: Option<String>,
}

impl BoxScoreReport {
    pub fn fallback(score: ScoreLine) -> Self {
        BoxScoreReport {
            score,
            details: None,
            notice: Some(UNAVAILABLE_NOTICE.to_string()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.details.is_none()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Compose a box score for two teams and their final scores.
///
/// Never fails. Blank names become placeholders, out-of-range scores become
/// the fallback pair, a failing player line becomes a placeholder line, and
/// any other failure yields [`BoxScoreReport::fallback`].
pub fn compose<R: Rng + ?Sized>(
    team_a: TeamSheet<'_>,
    team_b: TeamSheet<'_>,
    config: &BoxScoreConfig,
    rng: &mut R,
) -> BoxScoreReport {
    let name_a = team_name_or_placeholder(team_a.name, 1);
    let name_b = team_name_or_placeholder(team_b.name, 2);
    let (score_a, score_b) = sanitize_scores(team_a.score, team_b.score);

    let score = ScoreLine {
        team_a: name_a,
        team_b: name_b,
        score_a,
        score_b,
    };
    let roster_a = team_a.roster.unwrap_or_default();
    let roster_b = team_b.roster.unwrap_or_default();

    match try_compose(&score, roster_a, roster_b, config, rng) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!(error = %e, score = %score, "box score composition failed, using minimal report");
            BoxScoreReport::fallback(score)
        }
    }
}

/// Compose a box score for a synthesized game, using rosters from `rosters`.
pub fn compose_for_result<R: Rng + ?Sized>(
    result: &GameResult,
    rosters: &RosterBook,
    config: &BoxScoreConfig,
    rng: &mut R,
) -> BoxScoreReport {
    let roster_a = rosters.roster(&result.team_a);
    let roster_b = rosters.roster(&result.team_b);
    compose(
        TeamSheet::new(&result.team_a, result.score_a as i64).with_roster(&roster_a),
        TeamSheet::new(&result.team_b, result.score_b as i64).with_roster(&roster_b),
        config,
        rng,
    )
}

fn sanitize_scores(score_a: i64, score_b: i64) -> (u32, u32) {
    let valid = |s: i64| (0..=MAX_VALID_SCORE).contains(&s);
    if valid(score_a) && valid(score_b) {
        (score_a as u32, score_b as u32)
    } else {
        tracing::warn!(score_a, score_b, "invalid score pair, using fallback scores");
        FALLBACK_SCORES
    }
}

fn try_compose<R: Rng + ?Sized>(
    score: &ScoreLine,
    roster_a: &[String],
    roster_b: &[String],
    config: &BoxScoreConfig,
    rng: &mut R,
) -> Result<BoxScoreReport> {
    config.validate()?;

    let team_a = build_team_box(&score.team_a, score.score_a, score.score_b, roster_a, config, rng)?;
    let team_b = build_team_box(&score.team_b, score.score_b, score.score_a, roster_b, config, rng)?;

    let comparison = comparison_rows(&team_a.totals, &team_b.totals);
    let mvp = pick_mvp(&team_a, &team_b);
    let notice = (team_a.degraded_lines + team_b.degraded_lines > 0).then(|| DEGRADED_NOTICE.to_string());

    Ok(BoxScoreReport {
        score: score.clone(),
        details: Some(BoxScoreDetails {
            team_a,
            team_b,
            comparison,
            mvp,
        }),
        notice,
    })
}

/// Player slots for a team: real names when a roster is given, else synthetic ones.
fn lineup(team: &str, roster: &[String], config: &BoxScoreConfig) -> Vec<(String, Role)> {
    if roster.is_empty() {
        return (1..=config.starters + config.bench)
            .map(|i| {
                let role = if i <= config.starters { Role::Starter } else { Role::Bench };
                (format!("{} Player {}", team, i), role)
            })
            .collect();
    }

    roster
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let role = if i < config.starters { Role::Starter } else { Role::Bench };
            let name = match name.trim() {
                "" => format!("{} Player {}", team, i + 1),
                trimmed => trimmed.to_string(),
            };
            (name, role)
        })
        .collect()
}

/// Split a team total between the starters and the bench, then across players.
fn allocate_points<R: Rng + ?Sized>(
    total: u32,
    starters: usize,
    bench: usize,
    share: f64,
    rng: &mut R,
) -> Vec<u32> {
    let starters_total = if bench == 0 {
        total
    } else {
        ((total as f64 * share).round() as u32).min(total)
    };
    let mut points = random_partition(starters_total, starters, 0, rng);
    points.extend(random_partition(total - starters_total, bench, 0, rng));
    points
}

fn build_team_box<R: Rng + ?Sized>(
    team: &str,
    team_score: u32,
    opp_score: u32,
    roster: &[String],
    config: &BoxScoreConfig,
    rng: &mut R,
) -> Result<TeamBox> {
    let quarters = QuarterSplit {
        periods: quarter_breakdown(team_score, config.quarters, config.min_per_quarter, rng),
    };

    let slots = lineup(team, roster, config);
    let starters = slots.iter().filter(|(_, role)| role.is_starter()).count();
    let points = allocate_points(team_score, starters, slots.len() - starters, config.starters_share, rng);

    let mut degraded_lines = 0;
    let players: Vec<PlayerStatLine> = slots
        .iter()
        .zip(points)
        .map(|((name, role), pts)| {
            build_player_line(name, *role, pts, team_score, opp_score, config, rng).unwrap_or_else(|e| {
                tracing::warn!(error = %e, player = %name, "player line failed, using placeholder");
                degraded_lines += 1;
                PlayerStatLine::degraded(name, *role, pts)
            })
        })
        .collect();

    let totals = TeamBoxTotals::from_lines(&players, team_score as i32 - opp_score as i32);
    if totals.points != team_score || quarters.total() != team_score {
        return Err(SimError::Degraded(format!(
            "{}: player points {} and quarters {} do not match score {}",
            team,
            totals.points,
            quarters.total(),
            team_score
        )));
    }

    Ok(TeamBox {
        name: team.to_string(),
        score: team_score,
        quarters,
        shooting: ShootingSummary::from(&totals),
        leaders: TeamLeaders::from_lines(&players),
        players,
        totals,
        degraded_lines,
    })
}

fn pct_label(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

fn comparison_rows(a: &TeamBoxTotals, b: &TeamBoxTotals) -> Vec<ComparisonRow> {
    let row = |label: &'static str, team_a: String, team_b: String| ComparisonRow { label, team_a, team_b };
    let count = |label: &'static str, f: fn(&TeamBoxTotals) -> u32| row(label, f(a).to_string(), f(b).to_string());

    vec![
        row("FG", a.field_goals.to_string(), b.field_goals.to_string()),
        row("3P", a.threes.to_string(), b.threes.to_string()),
        row("FT", a.free_throws.to_string(), b.free_throws.to_string()),
        row("eFG%", pct_label(a.effective_fg_pct()), pct_label(b.effective_fg_pct())),
        row("TS%", pct_label(a.true_shooting_pct()), pct_label(b.true_shooting_pct())),
        count("REB", |t| t.rebounds),
        count("OREB", |t| t.offensive_rebounds),
        count("DREB", |t| t.defensive_rebounds),
        count("AST", |t| t.assists),
        count("STL", |t| t.steals),
        count("BLK", |t| t.blocks),
        count("TOV", |t| t.turnovers),
        count("PF", |t| t.fouls),
    ]
}

/// Highest game score across both teams; team A's players come first, so
/// the earliest listed player wins a tie.
fn pick_mvp(team_a: &TeamBox, team_b: &TeamBox) -> Option<MvpLine> {
    let candidates = team_a
        .players
        .iter()
        .map(|p| (p, &team_a.name))
        .chain(team_b.players.iter().map(|p| (p, &team_b.name)));

    let mut best: Option<(&PlayerStatLine, &String, i32)> = None;
    for (player, team) in candidates {
        let score = player.game_score();
        if best.map_or(true, |(_, _, s)| score > s) {
            best = Some((player, team, score));
        }
    }

    best.map(|(p, team, game_score)| MvpLine {
        player: p.name.clone(),
        team: team.clone(),
        game_score,
        points: p.points,
        rebounds: p.rebounds,
        assists: p.assists,
        steals: p.steals,
        blocks: p.blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CountRange, FloatRange};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn details(report: &BoxScoreReport) -> &BoxScoreDetails {
        report.details.as_ref().expect("full report")
    }

    #[test]
    fn test_alpha_beta_scenario() {
        let mut rng = ChaCha8Rng::seed_from_u64(100);
        let report = compose(
            TeamSheet::new("Alpha", 100),
            TeamSheet::new("Beta", 97),
            &BoxScoreConfig::default(),
            &mut rng,
        );
        assert!(report.notice.is_none());
        let d = details(&report);

        assert_eq!(d.team_a.players.len(), 10);
        assert_eq!(d.team_b.players.len(), 10);
        assert_eq!(d.team_a.totals.points, 100);
        assert_eq!(d.team_b.totals.points, 97);
        assert_eq!(d.team_a.quarters.periods.len(), 4);
        assert_eq!(d.team_a.quarters.total(), 100);
        assert_eq!(d.team_b.quarters.total(), 97);
        assert_eq!(d.team_a.starters().count(), 5);
        assert_eq!(d.team_a.bench().count(), 5);
        assert_eq!(d.team_a.players[0].name, "Alpha Player 1");
        assert_eq!(d.team_a.totals.margin, 3);
        assert_eq!(d.team_b.totals.margin, -3);
        assert_eq!(d.comparison.len(), 13);
        assert!(d.mvp.is_some());
    }

    #[test]
    fn test_starters_share() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let report = compose(
            TeamSheet::new("A", 100),
            TeamSheet::new("B", 90),
            &BoxScoreConfig::default(),
            &mut rng,
        );
        let d = details(&report);
        let starters: u32 = d.team_a.starters().map(|p| p.points).sum();
        let bench: u32 = d.team_a.bench().map(|p| p.points).sum();
        assert_eq!(starters, 68);
        assert_eq!(bench, 32);
    }

    #[test]
    fn test_roster_sizes() {
        let config = BoxScoreConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(12);

        let small: Vec<String> = vec!["Ann".into(), " ".into(), "Cy".into()];
        let large: Vec<String> = (0..13).map(|i| format!("Big {}", i)).collect();

        let report = compose(
            TeamSheet::new("Small", 88).with_roster(&small),
            TeamSheet::new("Large", 91).with_roster(&large),
            &config,
            &mut rng,
        );
        let d = details(&report);

        assert_eq!(d.team_a.players.len(), 3);
        assert_eq!(d.team_a.players[1].name, "Small Player 2");
        assert!(d.team_a.players.iter().all(|p| p.role == Role::Starter));
        assert_eq!(d.team_a.totals.points, 88);

        assert_eq!(d.team_b.players.len(), 13);
        assert_eq!(d.team_b.starters().count(), 5);
        assert_eq!(d.team_b.bench().count(), 8);
        assert_eq!(d.team_b.totals.points, 91);
    }

    #[test]
    fn test_empty_roster_is_synthetic() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let empty: Vec<String> = Vec::new();
        let report = compose(
            TeamSheet::new("A", 70).with_roster(&empty),
            TeamSheet::new("B", 71),
            &BoxScoreConfig::default(),
            &mut rng,
        );
        assert_eq!(details(&report).team_a.players.len(), 10);
    }

    #[test]
    fn test_zero_scores() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let report = compose(TeamSheet::new("A", 0), TeamSheet::new("B", 0), &BoxScoreConfig::default(), &mut rng);
        let d = details(&report);
        assert_eq!(d.team_a.totals.points, 0);
        assert_eq!(d.team_a.quarters.periods, vec![0, 0, 0, 0]);
        assert_eq!(d.team_b.totals.margin, 0);
    }

    #[test]
    fn test_invalid_input_coerced() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let report = compose(TeamSheet::new("", -5), TeamSheet::new("B", 90), &BoxScoreConfig::default(), &mut rng);
        assert_eq!(report.score.team_a, "Team 1");
        assert_eq!((report.score.score_a, report.score.score_b), FALLBACK_SCORES);
        let d = details(&report);
        assert_eq!(d.team_a.totals.points, FALLBACK_SCORES.0);
        assert_eq!(d.team_b.totals.points, FALLBACK_SCORES.1);
    }

    #[test]
    fn test_bad_player_range_degrades_lines_only() {
        let config = BoxScoreConfig {
            bench_minutes: CountRange::new(20, 5),
            ..BoxScoreConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let report = compose(TeamSheet::new("A", 101), TeamSheet::new("B", 99), &config, &mut rng);
        let d = details(&report);

        assert_eq!(d.team_a.degraded_lines, 5);
        assert!(d.team_a.bench().all(|p| p.degraded));
        assert!(d.team_a.starters().all(|p| !p.degraded));
        assert_eq!(d.team_a.totals.points, 101);
        assert_eq!(d.team_b.totals.points, 99);
        assert!(report.notice.is_some());
    }

    #[test]
    fn test_bad_pct_range_degrades_every_line() {
        let config = BoxScoreConfig {
            free_throw_pct: FloatRange::new(0.9, 0.1),
            ..BoxScoreConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let report = compose(TeamSheet::new("A", 101), TeamSheet::new("B", 99), &config, &mut rng);
        let d = details(&report);
        assert_eq!(d.team_a.degraded_lines + d.team_b.degraded_lines, 20);
        assert_eq!(d.team_a.totals.points, 101);
    }

    #[test]
    fn test_invalid_config_gives_minimal_report() {
        let config = BoxScoreConfig {
            quarters: 0,
            ..BoxScoreConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let report = compose(TeamSheet::new("A", 101), TeamSheet::new("B", 99), &config, &mut rng);
        assert!(report.is_fallback());
        assert_eq!(report.score.to_string(), "A 101 - 99 B");
        assert_eq!(report.notice.as_deref(), Some(UNAVAILABLE_NOTICE));
    }

    #[test]
    fn test_leaders_first_wins_ties() {
        let mut a = PlayerStatLine::degraded("First", Role::Starter, 10);
        let mut b = PlayerStatLine::degraded("Second", Role::Starter, 10);
        a.rebounds = 4;
        b.rebounds = 9;
        let leaders = TeamLeaders::from_lines(&[a, b]).unwrap();
        assert_eq!(leaders.points.player, "First");
        assert_eq!(leaders.rebounds.player, "Second");
        assert_eq!(leaders.rebounds.value, 9);
        assert!(TeamLeaders::from_lines(&[]).is_none());
    }

    #[test]
    fn test_mvp_is_max_game_score() {
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let report = compose(TeamSheet::new("A", 112), TeamSheet::new("B", 104), &BoxScoreConfig::default(), &mut rng);
        let d = details(&report);
        let mvp = d.mvp.as_ref().unwrap();
        let best = d
            .team_a
            .players
            .iter()
            .chain(d.team_b.players.iter())
            .map(PlayerStatLine::game_score)
            .max()
            .unwrap();
        assert_eq!(mvp.game_score, best);
    }

    #[test]
    fn test_totals_sum_columns() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let report = compose(TeamSheet::new("A", 95), TeamSheet::new("B", 102), &BoxScoreConfig::default(), &mut rng);
        let team = &details(&report).team_b;
        let t = &team.totals;
        assert_eq!(t.rebounds, team.players.iter().map(|p| p.rebounds).sum::<u32>());
        assert_eq!(t.rebounds, t.offensive_rebounds + t.defensive_rebounds);
        assert_eq!(t.field_goals.made, team.players.iter().map(|p| p.field_goals.made).sum::<u32>());
        assert_eq!(
            t.points,
            2 * (t.field_goals.made - t.threes.made) + 3 * t.threes.made + t.free_throws.made
        );
    }

    #[test]
    fn test_compose_for_result_uses_rosters() {
        let mut rosters = RosterBook::new();
        rosters.insert("Alpha", vec!["Ann".into(), "Bo".into(), "Cy".into(), "Di".into(), "Ed".into(), "Fay".into()]);
        let result = GameResult::from_scores("Alpha", "Beta", 104, 99, 0).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let report = compose_for_result(&result, &rosters, &BoxScoreConfig::default(), &mut rng);
        let d = details(&report);
        assert_eq!(d.team_a.players.len(), 6);
        assert_eq!(d.team_a.players[5].name, "Fay");
        assert_eq!(d.team_b.players.len(), 10);
    }

    #[test]
    fn test_report_serializes() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let report = compose(TeamSheet::new("A", 90), TeamSheet::new("B", 80), &BoxScoreConfig::default(), &mut rng);
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"]["score_a"], 90);
        assert_eq!(value["details"]["team_a"]["players"].as_array().unwrap().len(), 10);
        assert_eq!(value["details"]["team_a"]["players"][0]["role"], "starter");
    }
}
