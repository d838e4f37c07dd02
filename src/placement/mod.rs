//! Bracket placement enumeration and the evaluation-pruning predicate

mod generator;
mod pruning;
mod types;

pub use generator::generate_placements;
pub use pruning::changes_result;
pub use types::{Placement, Span};

#[cfg(test)]
mod tests;
