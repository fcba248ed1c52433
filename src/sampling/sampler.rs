use rand::Rng;

/// Draws one index from a probability distribution by cumulative-sum
/// inversion of a single uniform value.
///
/// The RNG is passed in so callers control seeding. Rounding can leave the
/// cumulative sum fractionally below the drawn value even for a valid
/// distribution; the last index is returned in that case instead of running
/// off the end.
pub fn sample_from_probabilities<R: Rng>(probs: &[f64], rng: &mut R) -> usize {
    assert!(!probs.is_empty(), "sample: empty distribution");

    let r: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        if r <= cumulative {
            return i;
        }
    }
    probs.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_index_is_always_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let probs = [0.2, 0.3, 0.5];
        for _ in 0..10_000 {
            assert!(sample_from_probabilities(&probs, &mut rng) < probs.len());
        }
    }

    #[test]
    fn test_degenerate_distribution_always_hits_its_point() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..100 {
            assert_eq!(sample_from_probabilities(&[0.0, 1.0, 0.0], &mut rng), 1);
        }
    }

    #[test]
    fn test_rounding_shortfall_clamps_to_last_index() {
        // Sums to just under 1; any draw above the total must clamp.
        let short = [0.1, 0.1];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert!(sample_from_probabilities(&short, &mut rng) < short.len());
        }
    }

    #[test]
    fn test_frequencies_track_probabilities() {
        let probs = [0.1, 0.6, 0.3];
        let mut rng = StdRng::seed_from_u64(8);
        let mut counts = [0usize; 3];
        let draws = 100_000;
        for _ in 0..draws {
            counts[sample_from_probabilities(&probs, &mut rng)] += 1;
        }
        for (count, &p) in counts.iter().zip(probs.iter()) {
            let observed = *count as f64 / draws as f64;
            assert!(
                (observed - p).abs() < 0.01,
                "observed {observed} for expected {p}"
            );
        }
    }
}
