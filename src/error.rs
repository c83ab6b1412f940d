#![warn(missing_docs)]
//! Gausslens specific error structures
use std::{error::Error, fmt::Display};

/// Gausslens application specific Result type
pub type GlResult<T> = std::result::Result<T, GaussLensError>;

/// Errors that can be returned by various gausslens functions.
#[derive(Debug, PartialEq, Eq)]
pub enum GaussLensError {
    /// beam parameters that are NaN, infinite or not strictly positive where required
    InvalidInput(String),
    /// errors while drawing a scene onto a drawing surface
    Render(String),
    /// errors while reading or parsing a setup file
    Setup(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for GaussLensError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(m) => {
                write!(f, "InvalidInput:{m}")
            }
            Self::Render(m) => {
                write!(f, "Render:{m}")
            }
            Self::Setup(m) => {
                write!(f, "Setup:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Gausslens Error:Other:{m}"),
        }
    }
}
impl Error for GaussLensError {}

impl std::convert::From<String> for GaussLensError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
