use chorus_storage::errors::Error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur with finding the config directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Unable to find the config directory for chorus.")]
    Config,
}

/// A catalog error in a form that can cross a process boundary.
///
/// The message of the original error is kept as is.
#[derive(Error, Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum SerializableCatalogError {
    #[error("{0}")]
    NotFound(String),
}

impl From<Error> for SerializableCatalogError {
    fn from(e: Error) -> Self {
        Self::NotFound(e.to_string())
    }
}
