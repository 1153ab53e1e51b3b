//! Setup-time errors.
//!
//! Everything that can go wrong while dealing a board is caught here, before
//! the first frame. Nothing during play is an error.

use thiserror::Error;

use crate::types::ImageId;

/// Errors raised while constructing a board or session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("expected {expected} image ids for the board, got {actual}")]
    ImageCountMismatch { expected: usize, actual: usize },

    #[error("image {image:?} appears {occurrences} times, expected exactly 2")]
    UnpairedImage { image: ImageId, occurrences: usize },

    #[error("image halves disagree at offset {index}: pairs must be index-aligned")]
    MisalignedPairs { index: usize },

    #[error("asset catalog supplies {actual} distinct images, board needs {expected}")]
    NotEnoughImages { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
