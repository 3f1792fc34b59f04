use boxcss::BoxCssError;
use thiserror::Error;

/// Errors raised while loading override tables, auditing a head, or setting
/// up logging. Resolution itself never fails.
#[derive(Debug, Error)]
pub enum OverrideError {
    #[error(transparent)]
    Css(#[from] BoxCssError),

    /// The selector does not describe a region.
    #[error("selector `{0}` does not name a region (expected `[.context ]...[#parent > ]#id[ .scope]`)")]
    UnsupportedSelector(String),

    /// Only margin and padding can be overridden.
    #[error("`{property}` in `{selector}` is not a margin or padding property")]
    UnsupportedProperty { selector: String, property: String },

    /// A body class used as a context predicate that no page flag covers.
    #[error("unknown page context class `.{0}`")]
    UnknownContext(String),

    /// The override block was placed before a stylesheet it has to beat.
    #[error(
        "override block at position {override_index} precedes stylesheet at position {stylesheet_index}"
    )]
    OverrideBeforeStylesheet {
        override_index: usize,
        stylesheet_index: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger setup failed: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, OverrideError>;
