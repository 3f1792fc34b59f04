use std::fmt;

use boxcss::ElementMeta;
use boxcss::parser::{Combinator, ComplexSelector, CompoundSelector, Selector, SelectorPart};

/// A named area of the rendered page.
///
/// Renders as `[#parent > ]#id[ .scope]`, e.g. `#header_slider .slick-dots`
/// or `#site_wrap > #top`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    /// The element id the region is anchored on.
    pub id: String,
    /// An id the anchor must be a direct child of.
    pub parent: Option<String>,
    /// A class inside the anchor, for sub-areas like a slider's track.
    pub scope: Option<String>,
}

impl Region {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            scope: None,
        }
    }

    pub fn child_of(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn scoped(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// The region as selector parts, without any context prefix.
    pub fn parts(&self) -> Vec<SelectorPart> {
        let mut parts = Vec::with_capacity(3);
        if let Some(parent) = &self.parent {
            parts.push(part(Selector::Id(parent.clone()), Combinator::Child));
        }
        let anchor_link = if self.scope.is_some() {
            Combinator::Descendant
        } else {
            Combinator::None
        };
        parts.push(part(Selector::Id(self.id.clone()), anchor_link));
        if let Some(scope) = &self.scope {
            parts.push(part(Selector::Class(scope.clone()), Combinator::None));
        }
        parts
    }

    pub fn selector(&self) -> ComplexSelector {
        ComplexSelector::new(self.parts())
    }

    /// Whether `element`, with ancestors ordered parent first, is this region.
    pub fn matches(&self, element: &ElementMeta, ancestors: &[ElementMeta]) -> bool {
        element.matches_complex(&self.selector(), ancestors)
    }
}

fn part(selector: Selector, combinator: Combinator) -> SelectorPart {
    SelectorPart::new(CompoundSelector::new(vec![selector]), combinator)
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_selectors() {
        assert_eq!(Region::new("top").to_string(), "#top");
        assert_eq!(
            Region::new("header_slider").scoped("slick-dots").to_string(),
            "#header_slider .slick-dots"
        );
        assert_eq!(
            Region::new("top").child_of("site_wrap").to_string(),
            "#site_wrap > #top"
        );
        assert_eq!(
            Region::new("b").child_of("a").scoped("c").to_string(),
            "#a > #b .c"
        );
    }

    #[test]
    fn test_scoped_region_matches_nested_class() {
        let region = Region::new("header_slider").scoped("slick-track");
        let track = ElementMeta::new("div").with_class("slick-track");
        let ancestors = vec![
            ElementMeta::new("div").with_class("slick-list"),
            ElementMeta::new("div").with_id("header_slider"),
        ];
        assert!(region.matches(&track, &ancestors));
        assert!(!region.matches(&track, &ancestors[..1]));
    }
}
