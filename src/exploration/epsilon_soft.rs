use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};

use super::greedy;

/// Sample an action from the epsilon-soft distribution over `values`
///
/// Weights sum to one: `epsilon / n` for every action, `1 - epsilon` extra on
/// the greedy one. Every action keeps probability at least `epsilon / n`.
pub(super) fn choose<R: Rng>(values: &[f32], epsilon: f32, rng: &mut R) -> usize {
    let n = values.len();
    let mut weights = vec![epsilon / n as f32; n];
    weights[greedy(values)] += 1.0 - epsilon;
    let dist = WeightedIndex::new(weights).expect("`values` is not empty");
    dist.sample(rng)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn greedy_mass_matches_distribution() {
        // with four actions and epsilon 0.4, the greedy action carries
        // 0.6 + 0.1 = 0.7 of the probability mass
        let values = [0.0, 0.0, 3.0, 1.0];
        let mut rng = StdRng::seed_from_u64(3);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[choose(&values, 0.4, &mut rng)] += 1;
        }

        let greedy_frequency = counts[2] as f32 / 10_000.0;
        assert!(
            (greedy_frequency - 0.7).abs() < 0.03,
            "greedy frequency {greedy_frequency} should be near 0.7"
        );
        for (a, &count) in counts.iter().enumerate() {
            assert!(count > 0, "action {a} must stay reachable");
        }
    }
}
