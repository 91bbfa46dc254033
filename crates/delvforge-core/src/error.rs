//! Error types for configuration loading and color parsing.
//!
//! Generation itself never fails: malformed colors, missing theme tokens and
//! disabled features all take a default path and emit a `tracing` event. The
//! errors here cover the two places where a caller asked for something that
//! can genuinely be refused: turning configuration text into
//! [`Options`](crate::Options), and explicitly parsing a color.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned while loading or resolving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or shape error.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON syntax or shape error.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// More than one theme carries `default: true`.
    #[error("themes {} are all marked default; at most one may be", .0.join(", "))]
    MultipleDefaultThemes(Vec<String>),

    /// A breakpoint was declared without a width or media query.
    #[error("breakpoint '{0}' has an empty width")]
    EmptyBreakpoint(String),

    /// A container was declared without a width.
    #[error("container '{0}' has an empty width")]
    EmptyContainer(String),

    /// The separator token is empty, which would make variant class names ambiguous.
    #[error("separator must not be empty")]
    EmptySeparator,
}

/// Error returned when a color string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{value}': {message}")]
pub struct ColorError {
    /// The rejected input.
    pub value: String,
    /// Parser diagnostic.
    pub message: String,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
