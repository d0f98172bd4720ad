//! Error types shared by both version flavors

use thiserror::Error;

/// Error type for version and constraint parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed version \"{0}\"")]
    MalformedVersion(String),
    #[error("Malformed constraint \"{0}\"")]
    MalformedConstraint(String),
}

pub type Result<T> = std::result::Result<T, Error>;
