//! Error types for unsvg library.

use std::io;
use thiserror::Error;

/// Result type alias for unsvg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during SVG processing.
///
/// Element-level problems (unknown tags, missing attributes, bad lengths) are
/// never returned from a parse; they end up in the document's warning log.
/// The variants here either abort a parse or are produced by standalone
/// helpers such as [`UnitConverter`](crate::parser::UnitConverter).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither SVG markup nor gzip-compressed SVG.
    #[error("Unknown file format: not SVG markup")]
    UnknownFormat,

    /// The input bytes are not valid UTF-8 markup.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The markup does not form a well-formed element tree.
    #[error("XML parse error: {0}")]
    Xml(String),

    /// The root element is something other than `<svg>`.
    #[error("Root element is <{0}>, expected <svg>")]
    NotSvg(String),

    /// The page box has a non-positive or non-finite dimension.
    #[error("Invalid page box: {0} x {1} (both sides must be positive)")]
    InvalidPageBox(f64, f64),

    /// The numeric portion of a length token cannot be parsed.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A length token carries a unit suffix that is not supported.
    #[error("invalid unit '{0}'")]
    InvalidUnit(String),

    /// Element nesting goes deeper than the configured limit.
    #[error("Element nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// The configured limit
        limit: usize,
    },

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
