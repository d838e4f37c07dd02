//! The standard seven-number draw feeding a round

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Numbers in a standard draw.
pub const NUMBER_COUNT: usize = 7;

pub const SMALL_NUMBERS: [i32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];
/// Big numbers, each available twice.
pub const BIG_NUMBERS: [i32; 8] = [25, 50, 75, 100, 25, 50, 75, 100];

pub const MIN_SMALL_COUNT: usize = 2;
pub const MAX_SMALL_COUNT: usize = 5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error("small number count must be between 2 and 5, got {0}")]
    InvalidSmallCount(usize),
}

/// Draws a standard selection: `small_count` small numbers and
/// `7 - small_count` big ones, each pool sampled without replacement,
/// shuffled together into draw order.
///
/// # Errors
///
/// Returns an error when `small_count` is outside `2..=5`.
pub fn draw_numbers(small_count: usize) -> Result<Vec<i32>, DrawError> {
    if !(MIN_SMALL_COUNT..=MAX_SMALL_COUNT).contains(&small_count) {
        return Err(DrawError::InvalidSmallCount(small_count));
    }

    let mut rng = rand::rng();
    let mut numbers = Vec::with_capacity(NUMBER_COUNT);
    draw_from(&SMALL_NUMBERS, small_count, &mut numbers, &mut rng);
    draw_from(&BIG_NUMBERS, NUMBER_COUNT - small_count, &mut numbers, &mut rng);
    numbers.shuffle(&mut rng);

    debug!("Drew numbers {:?} ({} small)", numbers, small_count);
    Ok(numbers)
}

fn draw_from<R: Rng>(source: &[i32], count: usize, out: &mut Vec<i32>, rng: &mut R) {
    let mut pool = source.to_vec();
    for _ in 0..count {
        let index = rng.random_range(0..pool.len());
        out.push(pool.swap_remove(index));
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BIG_NUMBERS, DrawError, MAX_SMALL_COUNT, MIN_SMALL_COUNT, NUMBER_COUNT, SMALL_NUMBERS,
        draw_numbers,
    };

    #[test]
    fn test_draw_has_requested_split() {
        for small_count in MIN_SMALL_COUNT..=MAX_SMALL_COUNT {
            let result = draw_numbers(small_count);
            assert!(result.is_ok());
            if let Ok(numbers) = result {
                assert_eq!(numbers.len(), NUMBER_COUNT);
                let smalls = numbers
                    .iter()
                    .filter(|&n| SMALL_NUMBERS.contains(n))
                    .count();
                let bigs = numbers.iter().filter(|&n| BIG_NUMBERS.contains(n)).count();
                assert_eq!(smalls, small_count);
                assert_eq!(bigs, NUMBER_COUNT - small_count);
            }
        }
    }

    #[test]
    fn test_small_numbers_are_distinct() {
        let result = draw_numbers(5);
        assert!(result.is_ok());
        if let Ok(numbers) = result {
            let mut smalls: Vec<i32> = numbers
                .iter()
                .copied()
                .filter(|n| SMALL_NUMBERS.contains(n))
                .collect();
            smalls.sort_unstable();
            smalls.dedup();
            assert_eq!(smalls.len(), 5);
        }
    }

    #[test]
    fn test_big_numbers_appear_at_most_twice() {
        let result = draw_numbers(2);
        assert!(result.is_ok());
        if let Ok(numbers) = result {
            for big in [25, 50, 75, 100] {
                let count = numbers.iter().filter(|&&n| n == big).count();
                assert!(count <= 2);
            }
        }
    }

    #[test]
    fn test_out_of_range_small_counts_are_rejected() {
        assert_eq!(draw_numbers(1), Err(DrawError::InvalidSmallCount(1)));
        assert_eq!(draw_numbers(6), Err(DrawError::InvalidSmallCount(6)));
    }
}
