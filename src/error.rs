//! Controller errors.

use crate::store::StoreError;

/// Error returned by the controller and its ports.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Reading or writing the stored preference failed
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The document rejected a class or style update
    #[error("document update failed: {0}")]
    Document(String),
    /// The global style sheet template failed to render
    #[error("failed to render dark mode styles: {0}")]
    Style(#[from] minijinja::Error),
    /// Configuration could not be parsed
    #[error("invalid theme configuration: {0}")]
    Config(#[from] serde_yaml::Error),
    /// Configuration parsed but holds unusable values
    #[error("invalid theme configuration: {0}")]
    InvalidConfig(String),
}
