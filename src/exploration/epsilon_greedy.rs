use rand::Rng;

use super::Choice;

/// Decide between exploring and exploiting with a single uniform draw
///
/// A draw below `epsilon` explores, everything else exploits, so exactly
/// `epsilon` of the probability mass goes to uniform exploration.
pub(super) fn flip<R: Rng>(epsilon: f32, rng: &mut R) -> Choice {
    if rng.gen::<f32>() < epsilon {
        Choice::Explore
    } else {
        Choice::Exploit
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn boundary_epsilons_never_flip() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            assert!(matches!(flip(0.0, &mut rng), Choice::Exploit));
            assert!(matches!(flip(1.0, &mut rng), Choice::Explore));
        }
    }

    #[test]
    fn explore_share_matches_epsilon() {
        let mut rng = StdRng::seed_from_u64(23);
        let explored = (0..10_000)
            .filter(|_| matches!(flip(0.25, &mut rng), Choice::Explore))
            .count();
        let frequency = explored as f32 / 10_000.0;
        assert!(
            (frequency - 0.25).abs() < 0.03,
            "explore frequency {frequency} should be near 0.25"
        );
    }
}
