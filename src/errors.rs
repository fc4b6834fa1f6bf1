// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

use crate::verdict::OutcomeKind;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("{kind} tally out of balance: announced {announced}, received {received}")]
    TallyMismatch {
        kind: OutcomeKind,
        announced: u64,
        received: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
