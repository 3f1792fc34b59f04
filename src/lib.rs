//! Forced margin/padding overrides over an inherited theme.
//!
//! - [`boxcss`]: parsing, selector matching and the box-model cascade
//! - [`overrides`]: the override table, the resolver and the `<head>` pipeline
//!
//! ```rust
//! use headcss::overrides::{HeadBuilder, OverrideSet, PageContext, Resolver};
//! use headcss::boxcss::{ElementMeta, parser::parse_stylesheet, types::Length};
//!
//! let theme = parse_stylesheet(".home #site_wrap > #top { margin-bottom: 30px; }").unwrap();
//! let resolver = Resolver::new(theme, OverrideSet::slider_gap());
//!
//! let top = ElementMeta::new("div").with_id("top");
//! let wrap = ElementMeta::new("div").with_id("site_wrap");
//! let model = resolver.resolve(&top, &[wrap], &PageContext::home());
//! assert_eq!(model.margin.bottom, Length::ZERO);
//!
//! let head = HeadBuilder::ibca().build().render();
//! assert!(head.ends_with("</style>\n</head>\n"));
//! ```

pub use boxcss;
pub use overrides;

pub use boxcss::{BoxCssError, BoxModel, CascadeMode, ElementMeta, Origin};
pub use overrides::{
    Head, HeadBuilder, OverrideError, OverrideRule, OverrideSet, PageContext, PageFlags, Region,
    Resolver, ResolverConfig,
};
