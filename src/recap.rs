use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::synth::{GameResult, Winner};

/// Margin at or under which a game counts as close
const CLOSE_MARGIN: u32 = 3;
/// Margin at or over which a game counts as a blowout
const BLOWOUT_MARGIN: u32 = 20;

/// Short prose recap of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recap {
    pub score_line: String,
    pub verdict: String,
    pub highlight: Option<String>,
}

impl std::fmt::Display for Recap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.score_line, self.verdict)?;
        if let Some(highlight) = &self.highlight {
            write!(f, "\n{}", highlight)?;
        }
        Ok(())
    }
}

fn overtime_suffix(overtimes: u32) -> String {
    match overtimes {
        0 => String::new(),
        1 => " (1OT)".to_string(),
        n => format!(" ({}OTs)", n),
    }
}

/// "Lakers (LAL)" reads as "Lakers" in prose.
fn short_name(name: &str) -> &str {
    name.split(" (").next().unwrap_or(name)
}

fn highlight_pool(result: &GameResult, winner: &str) -> Vec<String> {
    let margin = result.margin();
    if result.overtimes > 0 || margin <= CLOSE_MARGIN {
        vec![
            format!("A clutch bucket in the final seconds lifted {}.", winner),
            format!("{} survived a furious late rally to edge it out.", winner),
            format!("Free throws down the stretch made the difference for {}.", winner),
            format!("{} outlasted their opponent in a dramatic finish.", winner),
        ]
    } else if margin >= BLOWOUT_MARGIN {
        vec![
            format!("{} dominated end-to-end in a statement win.", winner),
            format!("Defense fueled offense as {} ran away with it.", winner),
        ]
    } else {
        vec![
            format!("Balanced scoring carried {} to victory.", winner),
            format!("{} controlled the tempo and the glass.", winner),
            format!("Bench production proved key for {}.", winner),
        ]
    }
}

/// Build the recap shown above the box score.
pub fn recap<R: Rng + ?Sized>(result: &GameResult, rng: &mut R) -> Recap {
    let score_line = format!(
        "{} {} - {} {}",
        result.team_a, result.score_a, result.score_b, result.team_b
    );
    let ot = overtime_suffix(result.overtimes);

    match (result.winner, result.winner_name()) {
        (Winner::Tie, _) | (_, None) => Recap {
            score_line,
            verdict: format!("It was a thrilling tie game!{}", ot),
            highlight: None,
        },
        (_, Some(winner)) => {
            let pool = highlight_pool(result, short_name(winner));
            Recap {
                score_line,
                verdict: format!("Winner: {}{}", winner, ot),
                highlight: pool.choose(rng).cloned(),
            }
        }
    }
}
