//! # boxcss - a box-model CSS cascade
//!
//! A small CSS engine for reasoning about margin and padding across layered
//! stylesheets. It parses real theme stylesheets, matches selectors against an
//! element and its ancestors, and runs the cascade with explicit origins so an
//! override layer can be proven to win.
//!
//! - **Parsing**: Convert CSS source text into a [`StyleSheet`](parser::StyleSheet)
//! - **Cascade**: Importance, origin, specificity and source order
//! - **Types**: Lengths, spacing shorthands and the computed [`BoxModel`]
//!
//! ## Quick Start
//!
//! ```rust
//! use boxcss::parser::cascade::{compute_box_model, CascadeMode, ElementMeta, LayeredSheet};
//! use boxcss::parser::parse_stylesheet;
//! use boxcss::types::Length;
//!
//! let theme = parse_stylesheet("#header_slider { margin-bottom: 24px; }").unwrap();
//! let overrides = parse_stylesheet("#header_slider { margin-bottom: 0 !important; }").unwrap();
//!
//! let slider = ElementMeta::new("div").with_id("header_slider");
//! let model = compute_box_model(
//!     &slider,
//!     &[],
//!     &[LayeredSheet::theme(&theme), LayeredSheet::overrides(&overrides, 0)],
//!     CascadeMode::Layered,
//! );
//! assert_eq!(model.margin.bottom, Length::ZERO);
//! ```
//!
//! ## Supported Features
//!
//! ### Selectors
//! - Type, class, ID and universal selectors
//! - Attribute selectors: `[name]`, `[name=value]`
//! - Pseudo-classes and pseudo-elements parse but never match
//! - Descendant and child combinators (sibling combinators parse but never match)
//! - Selector lists and `&` nesting
//!
//! ### Properties
//! - `margin`, `padding` and their `-top`/`-right`/`-bottom`/`-left` longhands
//! - Everything else is kept verbatim as [`Property::Unknown`](parser::Property::Unknown)
//!
//! ### Units
//! - `px` (and unitless numbers), `em`, `rem`, `%`, `vw`, `vh`, `auto`
//!
//! ## Not Supported
//!
//! - At-rules (`@media`, `@font-face`, ...) are skipped, not evaluated
//! - Inheritance: margin and padding are not inherited properties

pub mod error;
pub mod parser;
pub mod types;

pub use error::BoxCssError;
pub use parser::cascade::{CascadeMode, ElementMeta, LayeredSheet, Origin};
pub use types::BoxModel;
