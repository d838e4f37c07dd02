//! Fair target selection for a drawn set of numbers

mod errors;
mod picker;
mod reachability;

pub use errors::TargetError;
pub use picker::pick_target;
pub use reachability::{four_number_targets, too_easy_targets};

/// Smallest value a round's target may take.
pub const TARGET_MIN: i32 = 201;
/// Largest value a round's target may take.
pub const TARGET_MAX: i32 = 999;
