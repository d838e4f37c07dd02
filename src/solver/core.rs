use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use crate::expression::{Arrangement, EPSILON, evaluate};
use crate::placement::{Placement, changes_result, generate_placements};
use crate::utils::{assignment_count, decode_assignment};

use super::errors::SearchError;
use super::pools::PermutationPools;
use super::settings::SearchSettings;

/// Randomized, budgeted search for expressions that hit a target.
pub struct SolutionSearch {}

impl SolutionSearch {
    pub fn new() -> Self {
        Self {}
    }

    /// Searches for expressions over subsets of `numbers` that evaluate
    /// exactly to `target`, until the time budget runs out, the
    /// requested solution count is reached, every permutation has been
    /// tried, or the caller cancels.
    ///
    /// Permutations are sampled uniformly without replacement and
    /// operator assignments are walked from a random rotation offset,
    /// so repeated searches with the same inputs surface different
    /// solutions first. The returned list preserves discovery order.
    ///
    /// A cancelled search returns an empty list, discarding anything
    /// found before the flag was set.
    ///
    /// # Errors
    ///
    /// Returns an error when the settings fail validation or fewer
    /// numbers are supplied than `min_number_count` requires. A target
    /// no expression can reach is not an error; the result is empty.
    pub fn generate_solutions(
        &self,
        numbers: &[i32],
        target: i32,
        settings: &SearchSettings,
    ) -> Result<Vec<String>, SearchError> {
        if settings.operators.is_empty() {
            return Ok(Vec::new());
        }
        settings.validate()?;
        if numbers.len() < settings.min_number_count {
            return Err(SearchError::NotEnoughNumbers {
                needed: settings.min_number_count,
                available: numbers.len(),
            });
        }

        let deadline = Instant::now() + settings.time_limit;
        let mut rng = rand::rng();
        let mut pools =
            PermutationPools::build(numbers, settings.min_number_count, settings.max_number_count);

        // Bracket layouts per operand count, shared by every permutation
        // of that count.
        let placements: Vec<Vec<Placement>> = (0..=settings.max_number_count)
            .map(|count| {
                if settings.parentheses.allows_parentheses() {
                    generate_placements(count, settings.parentheses.allows_nesting())
                } else {
                    Vec::new()
                }
            })
            .collect();

        info!(
            "Searching for {} with up to {} solutions from {} permutations",
            target,
            settings.max_solution_count,
            pools.remaining()
        );

        let attempt = Attempt {
            target,
            settings,
            deadline,
        };
        let mut solutions = Vec::new();
        while !settings.is_cancelled()
            && Instant::now() < deadline
            && solutions.len() < settings.max_solution_count
        {
            let Some(permutation) = pools.draw(&mut rng) else {
                break;
            };
            let layouts = placements
                .get(permutation.len())
                .map_or(&[] as &[Placement], Vec::as_slice);
            if let Some(solution) = attempt.run(&permutation, layouts, &mut rng) {
                debug!("Found solution: {}", solution);
                solutions.push(solution);
            }
        }

        if settings.is_cancelled() {
            info!("Search cancelled, discarding {} solutions", solutions.len());
            return Ok(Vec::new());
        }
        info!("Search finished with {} solutions", solutions.len());
        Ok(solutions)
    }
}

impl Default for SolutionSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// One attempt: a single permutation tried against the target, first
/// unbracketed, then under every bracket layout for its length.
struct Attempt<'a> {
    target: i32,
    settings: &'a SearchSettings,
    deadline: Instant,
}

impl Attempt<'_> {
    fn run<R: Rng>(
        &self,
        numbers: &[i32],
        placements: &[Placement],
        rng: &mut R,
    ) -> Option<String> {
        if let Some(solution) = self.try_bracket_set(numbers, &[], false, rng) {
            return Some(solution);
        }
        for placement in placements {
            if self.interrupted() {
                return None;
            }
            if let Some(solution) = self.try_placement(numbers, placement, 0, &[], rng) {
                return Some(solution);
            }
        }
        None
    }

    /// Tries a placement's spans on top of any enclosing brackets, then
    /// descends into each nested child layout with the parent brackets
    /// kept in place.
    fn try_placement<R: Rng>(
        &self,
        numbers: &[i32],
        placement: &Placement,
        offset: usize,
        outer_spans: &[(usize, usize)],
        rng: &mut R,
    ) -> Option<String> {
        let mut spans = outer_spans.to_vec();
        for span in &placement.spans {
            spans.push((offset + span.start, offset + span.end));
        }
        if let Some(solution) = self.try_bracket_set(numbers, &spans, true, rng) {
            return Some(solution);
        }
        for span in &placement.spans {
            for child in &span.inner {
                if self.interrupted() {
                    return None;
                }
                if let Some(solution) =
                    self.try_placement(numbers, child, offset + span.start, &spans, rng)
                {
                    return Some(solution);
                }
            }
        }
        None
    }

    /// Runs the operator-assignment loop for one fixed bracket layout,
    /// walking the assignment space from a random rotation offset.
    fn try_bracket_set<R: Rng>(
        &self,
        numbers: &[i32],
        spans: &[(usize, usize)],
        prune: bool,
        rng: &mut R,
    ) -> Option<String> {
        let slots = numbers.len().saturating_sub(1);
        let allowed = &self.settings.operators;
        let total = assignment_count(allowed, slots);
        let start = rng.random_range(0..total);
        let mut operators = vec![*allowed.first()?; slots];

        let mut arrangement = Arrangement::new(numbers);
        for &(span_start, span_end) in spans {
            arrangement.insert_brackets(span_start, span_end);
        }

        for step in 0..total {
            if self.interrupted() {
                return None;
            }
            decode_assignment((start + step) % total, allowed, &mut operators);
            arrangement.set_operators(&operators);
            if prune && !changes_result(&operators, arrangement.parts()) {
                continue;
            }
            if let Ok(value) = evaluate(&arrangement.render())
                && (value - f64::from(self.target)).abs() < EPSILON
            {
                return Some(arrangement.render());
            }
        }
        None
    }

    fn interrupted(&self) -> bool {
        self.settings.is_cancelled() || Instant::now() >= self.deadline
    }
}
