use thiserror::Error;

use crate::validation::ValidationError;

/// Errors reported by the command-line entry point
#[derive(Debug, Error)]
pub enum LeetstatError {
    #[error(transparent)]
    InvalidUsername(#[from] ValidationError),
}
