use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("number counts must satisfy 4 <= min <= max <= 7, got min={min}, max={max}")]
    InvalidNumberCountRange { min: usize, max: usize },
    #[error("at least one operator must be allowed")]
    NoOperators,
    #[error("maximum solution count must be at least 1")]
    InvalidSolutionCount,
    #[error("time limit must be positive")]
    InvalidTimeLimit,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("invalid search settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("search needs at least {needed} numbers, only {available} available")]
    NotEnoughNumbers { needed: usize, available: usize },
}
