//! Uniform sampling without replacement.

use crate::error::{LottoError, Result};
use crate::rng::RandomSource;

/// Draw `count` distinct numbers from [1, domain] in draw order.
///
/// Shuffles the whole domain with Fisher-Yates and returns the prefix, so
/// every ordered sample is equally likely.
pub fn sample<R: RandomSource + ?Sized>(domain: usize, count: usize, rng: &mut R) -> Result<Vec<u8>> {
    if count > domain || domain > u8::MAX as usize {
        return Err(LottoError::InvalidArgument { count, domain });
    }

    let mut pool: Vec<u8> = (1..=domain as u8).collect();
    for i in (1..pool.len()).rev() {
        let j = rng.gen_range(i + 1);
        pool.swap(i, j);
    }
    pool.truncate(count);
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::WasmRng;
    use std::collections::HashSet;

    /// Always picks index 0, turning the shuffle into a fixed rotation.
    struct ZeroSource;

    impl RandomSource for ZeroSource {
        fn gen_range(&mut self, _max: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_sample_distinct_in_range() {
        let mut rng = WasmRng::from_seed(42);
        for _ in 0..500 {
            let drawn = sample(45, 7, &mut rng).unwrap();
            assert_eq!(drawn.len(), 7);
            let unique: HashSet<u8> = drawn.iter().copied().collect();
            assert_eq!(unique.len(), 7);
            assert!(drawn.iter().all(|&n| (1..=45).contains(&n)));
        }
    }

    #[test]
    fn test_sample_full_domain_is_permutation() {
        let mut rng = WasmRng::from_seed(9);
        let mut drawn = sample(45, 45, &mut rng).unwrap();
        drawn.sort();
        assert_eq!(drawn, (1..=45).collect::<Vec<u8>>());
    }

    #[test]
    fn test_sample_too_many() {
        let mut rng = WasmRng::from_seed(1);
        assert_eq!(
            sample(45, 46, &mut rng),
            Err(LottoError::InvalidArgument { count: 46, domain: 45 })
        );
    }

    #[test]
    fn test_sample_domain_too_large() {
        let mut rng = WasmRng::from_seed(1);
        assert!(sample(300, 2, &mut rng).is_err());
    }

    #[test]
    fn test_sample_zero_count() {
        let mut rng = WasmRng::from_seed(1);
        assert!(sample(45, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_swap_order_with_fixed_source() {
        // Each step swaps index i with 0: [1,2,3,4] -> [4,2,3,1] -> [3,2,4,1] -> [2,3,4,1]
        let drawn = sample(4, 4, &mut ZeroSource).unwrap();
        assert_eq!(drawn, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_first_position_roughly_uniform() {
        let mut rng = WasmRng::from_seed(2024);
        let mut counts = [0u32; 5];
        let trials = 50_000;
        for _ in 0..trials {
            let drawn = sample(5, 1, &mut rng).unwrap();
            counts[(drawn[0] - 1) as usize] += 1;
        }
        // Expected 10_000 each; loose bound keeps the test stable.
        for c in counts {
            assert!((9_000..11_000).contains(&c), "count {} out of range", c);
        }
    }
}
