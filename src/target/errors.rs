use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TargetError {
    #[error("no fair target exists for these numbers")]
    NoFairTarget,
}
