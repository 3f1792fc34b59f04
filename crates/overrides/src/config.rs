//! Loading override tables from CSS.
//!
//! The accepted dialect is exactly what [`OverrideSet::render_css`] writes,
//! plus shorthands and nesting:
//!
//! ```css
//! #header_slider .slick-dots { margin: 0 !important; }
//! .home #site_wrap > #top { margin-bottom: 0 !important; }
//! ```
//!
//! Anything the cascade would skip, or that is not a margin/padding
//! declaration on a region, is an error rather than a silent no-op.

use std::path::Path;

use boxcss::parser::{
    Combinator, ComplexSelector, Property, Selector, SelectorPart, parse_stylesheet_strict,
};

use crate::context::{ContextPredicate, PageFlags};
use crate::error::{OverrideError, Result};
use crate::region::Region;
use crate::rule::{Assignment, OverrideRule, OverrideSet};

impl OverrideSet {
    /// Parses an override table from CSS text.
    pub fn from_css(source: &str) -> Result<OverrideSet> {
        let sheet = parse_stylesheet_strict(source)?;
        let mut builder = OverrideSet::builder();

        for rule in &sheet.rules {
            let mut assignments = Vec::new();
            for decl in rule.declarations() {
                if let Property::Unknown { name, .. } = &decl.property {
                    return Err(OverrideError::UnsupportedProperty {
                        selector: rule.selectors.to_string(),
                        property: name.clone(),
                    });
                }
                assignments.extend(decl.property.longhands().into_iter().map(
                    |(property, value)| Assignment {
                        property,
                        value,
                        forced: decl.important,
                    },
                ));
            }

            // A selector list yields one rule per selector
            for complex in &rule.selectors.selectors {
                let (region, context) = interpret_selector(complex)?;
                builder = builder.rule(OverrideRule {
                    region,
                    context,
                    assignments: assignments.clone(),
                });
            }
        }

        Ok(builder.build())
    }

    /// Reads and parses an override table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<OverrideSet> {
        let path = path.as_ref();
        log::debug!("loading overrides from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_css(&source)
    }
}

fn interpret_selector(complex: &ComplexSelector) -> Result<(Region, ContextPredicate)> {
    let unsupported = || OverrideError::UnsupportedSelector(complex.to_string());
    let mut parts: &[SelectorPart] = &complex.parts;

    // Leading class-only compound followed by a descendant link is the context
    let mut context = ContextPredicate::Always;
    if let Some((first, rest)) = parts.split_first() {
        if !rest.is_empty() && first.combinator == Combinator::Descendant {
            if let Some(flags) = context_flags(first)? {
                context = ContextPredicate::Page(flags);
                parts = rest;
            }
        }
    }

    let ids_and_links: Vec<(Option<&str>, Option<&str>, Combinator)> = parts
        .iter()
        .map(|p| match p.compound.selectors.as_slice() {
            [Selector::Id(id)] => (Some(id.as_str()), None, p.combinator),
            [Selector::Class(class)] => (None, Some(class.as_str()), p.combinator),
            _ => (None, None, p.combinator),
        })
        .collect();

    use Combinator::{Child, Descendant, None as End};
    let region = match ids_and_links.as_slice() {
        [(Some(id), _, End)] => Region::new(*id),
        [(Some(id), _, Descendant), (_, Some(scope), End)] => Region::new(*id).scoped(*scope),
        [(Some(parent), _, Child), (Some(id), _, End)] => Region::new(*id).child_of(*parent),
        [
            (Some(parent), _, Child),
            (Some(id), _, Descendant),
            (_, Some(scope), End),
        ] => Region::new(*id).child_of(*parent).scoped(*scope),
        _ => return Err(unsupported()),
    };

    Ok((region, context))
}

/// Reads a compound of body classes as page flags. Returns `None` when the
/// compound is not class-only, so it can be treated as part of the region.
fn context_flags(part: &SelectorPart) -> Result<Option<PageFlags>> {
    let mut flags = PageFlags::empty();
    for selector in &part.compound.selectors {
        let Selector::Class(class) = selector else {
            return Ok(None);
        };
        let flag = PageFlags::from_class(class)
            .ok_or_else(|| OverrideError::UnknownContext(class.clone()))?;
        flags |= flag;
    }
    Ok(Some(flags))
}
