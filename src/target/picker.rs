use std::collections::HashSet;

use log::{debug, info};
use rand::Rng;

use crate::operands::NUMBER_COUNT;

use super::errors::TargetError;
use super::reachability::{four_number_targets, too_easy_targets};

/// Picks a fair target for a seven-number draw: reachable with exactly
/// four of the numbers, but not with only two or three.
///
/// Targets in `recent` are avoided while any other candidate exists.
/// Recency is a soft preference only: when every candidate has been
/// used recently, the pick falls back to the full candidate set rather
/// than failing the round.
///
/// # Errors
///
/// Returns [`TargetError::NoFairTarget`] when no four-number result
/// lands in the target range, which a standard draw of small and big
/// numbers does not produce in practice.
pub fn pick_target(
    numbers: &[i32; NUMBER_COUNT],
    recent: &HashSet<i32>,
) -> Result<i32, TargetError> {
    let reachable = four_number_targets(numbers);
    let easy = too_easy_targets(numbers);
    let candidates: Vec<i32> = reachable.difference(&easy).copied().collect();
    debug!(
        "{} four-number targets, {} too easy, {} candidates",
        reachable.len(),
        easy.len(),
        candidates.len()
    );
    if candidates.is_empty() {
        return Err(TargetError::NoFairTarget);
    }

    let fresh: Vec<i32> = candidates
        .iter()
        .copied()
        .filter(|candidate| !recent.contains(candidate))
        .collect();
    let pool = if fresh.is_empty() { &candidates } else { &fresh };

    let mut rng = rand::rng();
    let target = pool[rng.random_range(0..pool.len())];
    info!(
        "Picked target {} from {} candidates ({} unused recently)",
        target,
        candidates.len(),
        fresh.len()
    );
    Ok(target)
}
