//! Error types for hexpane.
//!
//! Only construction and configuration can fail. Runtime operations
//! (pointer handling, painting, export) clamp their inputs instead.

use std::fmt;

/// Result type alias for hexpane operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hexpane configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Font metrics with a zero glyph width or line height.
    InvalidMetrics { char_width: u32, line_height: u32 },
    /// A view option outside its accepted range.
    InvalidOption {
        name: &'static str,
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidMetrics {
                char_width,
                line_height,
            } => {
                write!(
                    f,
                    "invalid font metrics: char width {char_width}, line height {line_height}"
                )
            }
            Self::InvalidOption { name, reason } => {
                write!(f, "invalid option `{name}`: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}
