//! # overrides - a forced box-model layer over a base theme
//!
//! Pins the margin and padding of named page regions so they win over
//! whatever the inherited theme declares. The canonical table,
//! [`OverrideSet::slider_gap`], removes the spacing under a header slider and
//! around the index sections below it, so they meet without a gap.
//!
//! ```rust
//! use overrides::{OverrideSet, PageContext, Resolver};
//! use boxcss::parser::parse_stylesheet;
//! use boxcss::types::Length;
//! use boxcss::ElementMeta;
//!
//! let theme = parse_stylesheet("#header_slider { margin-bottom: 24px; }").unwrap();
//! let resolver = Resolver::new(theme, OverrideSet::slider_gap());
//!
//! let slider = ElementMeta::new("div").with_id("header_slider");
//! let model = resolver.resolve(&slider, &[], &PageContext::home());
//! assert_eq!(model.margin.bottom, Length::ZERO);
//!
//! // The injectable block, to be placed after the theme stylesheet
//! assert!(OverrideSet::slider_gap().render_style_block().starts_with("<style>"));
//! ```
//!
//! ## Modules
//!
//! - [`rule`]: Assignments, rules and the override table
//! - [`region`]: Named page regions and their selectors
//! - [`context`]: Page flags and context predicates
//! - [`config`]: Loading override tables from CSS
//! - [`resolver`]: Computing resolved box models
//! - [`document`]: Element trees to resolve against
//! - [`head`]: The `<head>` fragment pipeline and order audit
//! - [`log_init`]: File logging

pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod head;
pub mod log_init;
pub mod region;
pub mod resolver;
pub mod rule;

pub use context::{ContextPredicate, PageContext, PageFlags};
pub use document::{Element, ResolvedNode};
pub use error::{OverrideError, Result};
pub use head::{Head, HeadAsset, HeadBuilder, ScriptLoad, audit_order};
pub use region::Region;
pub use resolver::{Resolver, ResolverConfig};
pub use rule::{Assignment, OverrideRule, OverrideSet};

// Re-export the log crate so callers can configure the same facade
pub use log;
