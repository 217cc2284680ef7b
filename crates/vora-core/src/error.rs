//! Errors raised while building a router from configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid cross-file pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("tier catalog must contain at least one tier")]
    EmptyCatalog,
}
