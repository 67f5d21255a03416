//! Crate-level error types.

use std::fmt;

/// Errors produced by the vetro crate.
#[derive(Debug)]
pub enum VetroError {
    /// Shape parameter outside its valid domain.
    InvalidParameter(String),
    /// Profile collapsed to something that cannot be triangulated.
    DegenerateGeometry(String),
    /// Host timing primitive refused to schedule a release.
    Timer(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VetroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
            Self::DegenerateGeometry(msg) => {
                write!(f, "degenerate geometry: {msg}")
            }
            Self::Timer(msg) => write!(f, "timer error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VetroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VetroError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
