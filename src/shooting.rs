use rand::Rng;
use serde::Serialize;

use crate::config::FloatRange;
use crate::error::Result;

/// Made shots by type for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShotMakes {
    pub threes: u32,
    pub twos: u32,
    pub free_throws: u32,
}

impl ShotMakes {
    pub fn points(&self) -> u32 {
        3 * self.threes + 2 * self.twos + self.free_throws
    }

    /// Decomposition that needs no randomness: all twos plus one free throw on odd totals.
    pub fn plain(points: u32) -> Self {
        ShotMakes {
            threes: 0,
            twos: points / 2,
            free_throws: points % 2,
        }
    }
}

/// Split a player's points into three-pointers, two-pointers and free throws.
///
/// Always exact: `3 * threes + 2 * twos + free_throws == points`. After the
/// random draws an odd remainder is repaired by giving back a free throw,
/// else a three, else by drawing one more free throw.
pub fn decompose_points<R: Rng + ?Sized>(points: u32, ft_cap: u32, rng: &mut R) -> ShotMakes {
    let mut threes = rng.gen_range(0..=points / 3);
    let rem = points - 3 * threes;
    let mut free_throws = rng.gen_range(0..=ft_cap.min(rem));
    let mut rem2 = rem - free_throws;

    if rem2 % 2 != 0 {
        if free_throws > 0 {
            free_throws -= 1;
            rem2 += 1;
        } else if threes > 0 {
            threes -= 1;
            rem2 += 3;
        } else {
            // rem2 == points here, odd and at least 1
            free_throws += 1;
            rem2 -= 1;
        }
    }

    ShotMakes {
        threes,
        twos: rem2 / 2,
        free_throws,
    }
}

/// Attempts for a shot type given its makes, with the shooting percentage drawn.
///
/// With no makes the attempts are drawn from `0..=fallback_max`. Attempts
/// never fall below makes.
pub fn attempts_from_made<R: Rng + ?Sized>(
    made: u32,
    pct: FloatRange,
    fallback_max: u32,
    rng: &mut R,
) -> Result<(u32, f64)> {
    pct.validate_pct("shooting percentage")?;

    if made == 0 {
        let attempts = rng.gen_range(0..=fallback_max);
        let implied = rng.gen_range(pct.low..=pct.high);
        return Ok((attempts, implied));
    }

    let implied = rng.gen_range(pct.low..=pct.high);
    let attempts = (made as f64 / implied.max(0.05)).round() as u32;
    Ok((attempts.max(made), implied))
}

/// Made/attempted pair for one shot type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShotSplit {
    pub made: u32,
    pub attempted: u32,
}

impl ShotSplit {
    pub fn new(made: u32, attempted: u32) -> Self {
        ShotSplit { made, attempted }
    }

    /// Make rate, `None` when nothing was attempted.
    pub fn pct(&self) -> Option<f64> {
        (self.attempted > 0).then(|| self.made as f64 / self.attempted as f64)
    }

    pub fn add(&mut self, other: ShotSplit) {
        self.made += other.made;
        self.attempted += other.attempted;
    }
}

impl std::fmt::Display for ShotSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.pct() {
            Some(p) => write!(f, "{}-{} ({:.0}%)", self.made, self.attempted, p * 100.0),
            None => write!(f, "{}-{} (-)", self.made, self.attempted),
        }
    }
}

/// Effective field-goal percentage; 0 when no field goals were attempted.
pub fn effective_fg_pct(fgm: u32, threes_made: u32, fga: u32) -> f64 {
    if fga == 0 {
        return 0.0;
    }
    (fgm as f64 + 0.5 * threes_made as f64) / fga as f64
}

/// True-shooting percentage; 0 when there were no shooting possessions.
pub fn true_shooting_pct(points: u32, fga: u32, fta: u32) -> f64 {
    let denom = 2.0 * (fga as f64 + 0.44 * fta as f64);
    if denom <= 0.0 {
        return 0.0;
    }
    points as f64 / denom
}
