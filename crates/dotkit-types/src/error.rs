//! Error types for dotkit.

use std::io;

/// Errors produced by the dotkit crates.
#[derive(Debug, thiserror::Error)]
pub enum DotkitError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("style error: {0}")]
    Style(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DotkitError>;
