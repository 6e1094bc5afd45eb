use rand::Rng;

mod epsilon_greedy;
mod epsilon_soft;

/// Exploration policy result
pub enum Choice {
    Explore,
    Exploit,
}

/// How an agent trades exploration against exploitation when selecting an
/// action
///
/// Both policies put the bulk of the probability mass on the greedy action
/// and keep every other action reachable for any `epsilon > 0`; they differ
/// in how the draw is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exploration {
    /// Epsilon-soft categorical policy: every action carries base probability
    /// `epsilon / n`, the greedy action additionally receives `1 - epsilon`,
    /// and one action is sampled from the full distribution
    EpsilonSoft,
    /// Epsilon-greedy policy: a single uniform draw decides between a
    /// uniformly random action and the greedy one
    EpsilonGreedy,
}

impl Exploration {
    /// Choose an action index given a state's value row
    ///
    /// `values` must be non-empty; `epsilon` is the exploration probability
    /// for this draw.
    pub fn choose<R: Rng>(&self, values: &[f32], epsilon: f32, rng: &mut R) -> usize {
        match self {
            Self::EpsilonSoft => epsilon_soft::choose(values, epsilon, rng),
            Self::EpsilonGreedy => match epsilon_greedy::flip(epsilon, rng) {
                Choice::Explore => rng.gen_range(0..values.len()),
                Choice::Exploit => greedy(values),
            },
        }
    }
}

/// Index of the greatest value, ties broken by the first occurrence
pub fn greedy(values: &[f32]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn greedy_takes_first_maximizer() {
        assert_eq!(greedy(&[0.0, 2.0, 1.0]), 1);
        assert_eq!(greedy(&[1.0, 1.0, 1.0]), 0, "ties break to lowest index");
        assert_eq!(greedy(&[0.5, 1.0, 1.0]), 1, "ties break to lowest index");
        assert_eq!(greedy(&[-3.0, -1.0, -2.0]), 1);
        assert_eq!(greedy(&[0.25]), 0);
    }

    #[test]
    fn zero_epsilon_is_deterministic() {
        let values = [0.1, 0.7, 0.7, 0.2];
        let mut rng = StdRng::seed_from_u64(5);
        for policy in [Exploration::EpsilonSoft, Exploration::EpsilonGreedy] {
            for _ in 0..100 {
                assert_eq!(
                    policy.choose(&values, 0.0, &mut rng),
                    1,
                    "greedy action with first-index tie-break"
                );
            }
        }
    }

    #[test]
    fn full_epsilon_covers_every_action() {
        let values = [0.0, 5.0, 0.0, 0.0];
        let mut rng = StdRng::seed_from_u64(11);
        for policy in [Exploration::EpsilonSoft, Exploration::EpsilonGreedy] {
            let mut counts = [0u32; 4];
            for _ in 0..10_000 {
                counts[policy.choose(&values, 1.0, &mut rng)] += 1;
            }
            for (a, &count) in counts.iter().enumerate() {
                let frequency = count as f32 / 10_000.0;
                assert!(
                    (frequency - 0.25).abs() < 0.03,
                    "action {a} frequency {frequency} should be near uniform"
                );
            }
        }
    }
}
