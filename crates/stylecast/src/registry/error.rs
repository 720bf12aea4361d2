//! Class registry errors.

use thiserror::Error;

/// Error returned by class registry operations.
///
/// Every variant names the class it concerns; naming conflicts are reported
/// to the caller and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `create` was given a name that sanitizes to an existing class.
    #[error("class '{name}' already exists")]
    DuplicateName { name: String },

    /// A snapshot, rename, or duplicate targeted a name that is taken.
    #[error("class name '{name}' is not available")]
    NameUnavailable { name: String },

    /// No class is registered under the name.
    #[error("class '{name}' not found")]
    NotFound { name: String },

    /// The raw name sanitizes to nothing (e.g. `"!!!"`).
    #[error("'{raw}' is not a usable class name")]
    InvalidName { raw: String },
}

impl RegistryError {
    /// The class name the error concerns.
    pub fn name(&self) -> &str {
        match self {
            RegistryError::DuplicateName { name }
            | RegistryError::NameUnavailable { name }
            | RegistryError::NotFound { name } => name,
            RegistryError::InvalidName { raw } => raw,
        }
    }
}
