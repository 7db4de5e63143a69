use rand::seq::SliceRandom;
use rand::Rng;

/// Split `total` into `parts` ordered non-negative integers, each at least `min_each`.
///
/// Stars and bars: `parts - 1` uniform cut points over the distributable
/// amount, sorted, give the segment sizes. The parts sum to `total` whenever
/// `total >= parts * min_each`; otherwise every part is exactly `min_each`.
pub fn random_partition<R: Rng + ?Sized>(total: u32, parts: usize, min_each: u32, rng: &mut R) -> Vec<u32> {
    if parts == 0 {
        return Vec::new();
    }

    let floor = (parts as u64 * min_each as u64).min(u32::MAX as u64) as u32;
    let remaining = total.saturating_sub(floor);

    let mut cuts: Vec<u32> = (0..parts - 1).map(|_| rng.gen_range(0..=remaining)).collect();
    cuts.sort_unstable();

    let mut segments = Vec::with_capacity(parts);
    let mut prev = 0;
    for &cut in &cuts {
        segments.push(cut - prev + min_each);
        prev = cut;
    }
    segments.push(remaining - prev + min_each);
    segments
}

/// Split a final score into `quarters` period scores.
///
/// The floor is lowered to `total / quarters` when `min_each` is not
/// reachable, so the result always sums to `total`.
pub fn quarter_breakdown<R: Rng + ?Sized>(total: u32, quarters: usize, min_each: u32, rng: &mut R) -> Vec<u32> {
    if quarters == 0 {
        return Vec::new();
    }

    let feasible_min = min_each.min(total / quarters as u32);
    let extra = total - feasible_min * quarters as u32;

    let mut parts = random_partition(extra, quarters, 0, rng);
    parts.shuffle(rng);
    parts.iter().map(|p| p + feasible_min).collect()
}
