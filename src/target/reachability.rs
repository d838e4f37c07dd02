use std::collections::HashSet;

use log::debug;
use rayon::prelude::*;

use crate::expression::{Arrangement, Operator, evaluate};
use crate::placement::{Placement, changes_result, generate_placements};
use crate::utils::{assignment_count, decode_assignment, generate_permutations};

use super::{TARGET_MAX, TARGET_MIN};

/// Operators a fairness sweep considers. Division is excluded: the
/// sweep asks what a player can plausibly reach, and division rarely
/// opens up three-digit targets the other operators cannot.
const SWEEP_OPERATORS: [Operator; 3] =
    [Operator::Add, Operator::Subtract, Operator::Multiply];

/// Every target reachable using only two or three of the numbers.
///
/// A target in this set is unfairly easy for a round, since a player
/// can hit it while ignoring most of the draw.
pub fn too_easy_targets(numbers: &[i32]) -> HashSet<i32> {
    reachable_targets(numbers, &[2, 3])
}

/// Every target reachable using exactly four of the numbers.
pub fn four_number_targets(numbers: &[i32]) -> HashSet<i32> {
    reachable_targets(numbers, &[4])
}

/// Sweeps all permutations of the given lengths, collecting every
/// in-range integer result under `+ - *` with flat bracket layouts.
///
/// Permutations are independent, so each contributes its own result
/// set on a rayon worker and the sets are merged afterwards.
fn reachable_targets(numbers: &[i32], lengths: &[usize]) -> HashSet<i32> {
    let mut targets = HashSet::new();
    for &length in lengths {
        let placements = generate_placements(length, false);
        let merged = generate_permutations(numbers, length)
            .into_par_iter()
            .map(|permutation| permutation_targets(&permutation, &placements))
            .reduce(HashSet::new, |mut combined, part| {
                combined.extend(part);
                combined
            });
        targets.extend(merged);
    }
    debug!(
        "Found {} reachable targets for lengths {:?}",
        targets.len(),
        lengths
    );
    targets
}

fn permutation_targets(numbers: &[i32], placements: &[Placement]) -> HashSet<i32> {
    let mut targets = HashSet::new();
    collect_targets(numbers, &[], false, &mut targets);
    for placement in placements {
        let spans: Vec<(usize, usize)> = placement
            .spans
            .iter()
            .map(|span| (span.start, span.end))
            .collect();
        collect_targets(numbers, &spans, true, &mut targets);
    }
    targets
}

/// Evaluates every operator assignment for one fixed bracket layout,
/// recording each result that lands on an integer within the target
/// range. Bracketed layouts are pruned against the unbracketed pass,
/// which always runs first.
fn collect_targets(
    numbers: &[i32],
    spans: &[(usize, usize)],
    prune: bool,
    out: &mut HashSet<i32>,
) {
    let slots = numbers.len().saturating_sub(1);
    let total = assignment_count(&SWEEP_OPERATORS, slots);
    let mut operators = vec![Operator::Add; slots];

    let mut arrangement = Arrangement::new(numbers);
    for &(start, end) in spans {
        arrangement.insert_brackets(start, end);
    }

    for index in 0..total {
        decode_assignment(index, &SWEEP_OPERATORS, &mut operators);
        arrangement.set_operators(&operators);
        if prune && !changes_result(&operators, arrangement.parts()) {
            continue;
        }
        if let Ok(value) = evaluate(&arrangement.render())
            && let Some(target) = as_target(value)
        {
            out.insert(target);
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn as_target(value: f64) -> Option<i32> {
    // evaluate has already snapped near-integer results.
    if value == value.round()
        && value >= f64::from(TARGET_MIN)
        && value <= f64::from(TARGET_MAX)
    {
        Some(value as i32)
    } else {
        None
    }
}
