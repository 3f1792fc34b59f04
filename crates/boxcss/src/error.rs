//! Error types for stylesheet parsing and loading.
//!
//! Cascade evaluation itself never fails; errors only surface while turning
//! CSS text into a [`StyleSheet`](crate::parser::StyleSheet).

use thiserror::Error;

/// Errors that can occur while parsing or loading a stylesheet.
///
/// # Examples
///
/// ```rust
/// use boxcss::parser::parse_stylesheet;
///
/// // Unterminated block
/// let result = parse_stylesheet("#top { margin: 0;");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum BoxCssError {
    /// Invalid CSS syntax was encountered during parsing.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),

    /// Strict parsing refused a stylesheet that contained rules or at-rules
    /// the engine does not understand.
    #[error("{count} unsupported rule(s) in strict stylesheet, first: {first}")]
    Skipped { count: usize, first: String },

    /// An I/O error occurred while reading a stylesheet file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}
