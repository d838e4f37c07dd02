//! Numbersmith - the engine behind a Countdown-style numbers round
//!
//! This library judges whether a target number is fair for a drawn set
//! of numbers (reachable with four of them, but not trivially with two
//! or three) and searches, under a time and result budget, for
//! arithmetic expressions that evaluate exactly to a target.

pub mod expression;
pub mod operands;
pub mod placement;
pub mod solver;
pub mod target;
pub mod utils;

// Re-export the main public API
pub use expression::{Arrangement, EPSILON, ExpressionError, Operator, evaluate};
pub use operands::{DrawError, draw_numbers};
pub use placement::{Placement, Span, changes_result, generate_placements};
pub use solver::{ParenthesesMode, SearchError, SearchSettings, SettingsError, SolutionSearch};
pub use target::{TargetError, four_number_targets, pick_target, too_easy_targets};

/// Search for expressions over `numbers` that evaluate exactly to `target`
///
/// This is a convenience function that creates a default search and runs it
/// with the given settings. The search samples operand permutations at
/// random, so repeated calls may return different solutions.
///
/// # Arguments
///
/// * `numbers` - The drawn numbers available to build expressions from
/// * `target` - The target value expressions must hit exactly
/// * `settings` - Budget, operator and bracket constraints for the search
///
/// # Returns
///
/// * `Ok(solutions)` - Every expression found within the budget (possibly none)
/// * `Err(SearchError)` - If the settings are invalid or too few numbers are supplied
///
/// # Errors
///
/// This function will return an error if:
/// * The settings fail validation (count range, solution count, time limit)
/// * Fewer numbers are supplied than the minimum count requires
///
/// # Examples
///
/// ```
/// use numbersmith::{ParenthesesMode, Operator, SearchSettings, generate_solutions};
/// use std::time::Duration;
///
/// let settings = SearchSettings::new(
///     4,
///     4,
///     &[Operator::Add, Operator::Subtract, Operator::Multiply],
///     ParenthesesMode::None,
///     1,
///     Duration::from_secs(5),
/// )
/// .expect("settings are valid");
///
/// let solutions = generate_solutions(&[4, 6, 1, 1], 24, &settings).expect("inputs are valid");
/// assert!(!solutions.is_empty());
/// ```
pub fn generate_solutions(
    numbers: &[i32],
    target: i32,
    settings: &SearchSettings,
) -> Result<Vec<String>, SearchError> {
    let search = SolutionSearch::new();
    search.generate_solutions(numbers, target, settings)
}
