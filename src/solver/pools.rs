use log::debug;
use rand::Rng;

use crate::utils::generate_permutations;

/// Sampling pools for a search: one pool of untried permutations per
/// operand count, drawn from without replacement.
#[derive(Debug)]
pub struct PermutationPools {
    pools: Vec<Vec<Vec<i32>>>,
}

impl PermutationPools {
    pub fn build(numbers: &[i32], min_count: usize, max_count: usize) -> Self {
        let pools: Vec<Vec<Vec<i32>>> = (min_count..=max_count)
            .map(|count| generate_permutations(numbers, count))
            .filter(|pool| !pool.is_empty())
            .collect();
        debug!(
            "Built {} permutation pools ({} permutations total)",
            pools.len(),
            pools.iter().map(Vec::len).sum::<usize>()
        );
        Self { pools }
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    /// Uniformly picks a pool, then a permutation within it. The
    /// permutation is removed by swapping with the last element, so
    /// each is attempted at most once and removal stays O(1).
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Vec<i32>> {
        if self.pools.is_empty() {
            return None;
        }
        let pool_index = rng.random_range(0..self.pools.len());
        let pool = &mut self.pools[pool_index];
        let choice_index = rng.random_range(0..pool.len());
        let permutation = pool.swap_remove(choice_index);
        if pool.is_empty() {
            self.pools.swap_remove(pool_index);
        }
        Some(permutation)
    }
}
