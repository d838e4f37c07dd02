use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::warn;

use crate::expression::Operator;

use super::errors::SettingsError;

pub const MIN_NUMBER_COUNT: usize = 4;
pub const MAX_NUMBER_COUNT: usize = 7;

/// Which bracket layouts a search may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenthesesMode {
    /// Unbracketed arrangements only.
    None,
    /// Single-level brackets.
    Flat,
    /// Brackets within brackets.
    Nested,
}

impl ParenthesesMode {
    pub fn allows_parentheses(self) -> bool {
        !matches!(self, ParenthesesMode::None)
    }

    pub fn allows_nesting(self) -> bool {
        matches!(self, ParenthesesMode::Nested)
    }
}

/// Holds the settings of what types of solutions are generated and the
/// budget allocated to the search. The cancel flag is shared with the
/// caller, which may set it from another thread while a search runs.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub min_number_count: usize,
    pub max_number_count: usize,
    pub operators: Vec<Operator>,
    pub parentheses: ParenthesesMode,
    pub max_solution_count: usize,
    pub time_limit: Duration,
    pub cancel: Arc<AtomicBool>,
}

impl SearchSettings {
    /// # Errors
    ///
    /// Returns an error when the number count range leaves `4..=7`, the
    /// operator set is empty, the solution count is zero, or the time
    /// limit is not positive.
    pub fn new(
        min_number_count: usize,
        max_number_count: usize,
        operators: &[Operator],
        parentheses: ParenthesesMode,
        max_solution_count: usize,
        time_limit: Duration,
    ) -> Result<Self, SettingsError> {
        let mut deduplicated: Vec<Operator> = Vec::with_capacity(operators.len());
        for &op in operators {
            if !deduplicated.contains(&op) {
                deduplicated.push(op);
            }
        }

        let settings = Self {
            min_number_count,
            max_number_count,
            operators: deduplicated,
            parentheses,
            max_solution_count,
            time_limit,
            cancel: Arc::new(AtomicBool::new(false)),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// See [`SearchSettings::new`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_number_count < MIN_NUMBER_COUNT
            || self.max_number_count > MAX_NUMBER_COUNT
            || self.min_number_count > self.max_number_count
        {
            warn!(
                "Rejecting number count range {}..={}",
                self.min_number_count, self.max_number_count
            );
            return Err(SettingsError::InvalidNumberCountRange {
                min: self.min_number_count,
                max: self.max_number_count,
            });
        }
        if self.operators.is_empty() {
            return Err(SettingsError::NoOperators);
        }
        if self.max_solution_count < 1 {
            return Err(SettingsError::InvalidSolutionCount);
        }
        if self.time_limit.is_zero() {
            return Err(SettingsError::InvalidTimeLimit);
        }
        Ok(())
    }

    /// Handle for the caller to signal cancellation from another thread.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}
