//! CSS cascade and box-model computation.
//!
//! This module implements the cascade for margin and padding:
//!
//! - [`compute_box_model`]: Main entry point for an element's computed box model
//! - [`compute_cascade`]: Same, but also reports which declaration won each longhand
//! - [`ElementMeta`]: Element metadata for selector matching
//! - [`Origin`] / [`LayeredSheet`]: Which layer a stylesheet belongs to
//!
//! ## Cascade Algorithm
//!
//! 1. Find all rules, across all sheets, whose selectors match the element
//! 2. Expand their declarations into longhands
//! 3. Sort by importance, origin, specificity (IDs > classes > types), then source order
//! 4. Apply in order; the last write for each longhand wins
//!
//! Under [`CascadeMode::DocumentOrder`] step 3 ignores origin and ranks sheets
//! only by their position, which is all a browser sees when both sheets are
//! author stylesheets.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::{
    parser::{Combinator, ComplexSelector, Selector, SelectorPart, Specificity, StyleSheet},
    types::{BoxModel, BoxProperty, Length},
};

/// Metadata about an element used for selector matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementMeta {
    /// Tag name, e.g. "div", "ul", "body".
    pub tag: String,
    /// The element's `id`, if set (e.g., "header_slider").
    pub id: Option<String>,
    /// The element's classes (e.g., ["slick-list", "draggable"]).
    pub classes: Vec<String>,
    /// Other attributes, for `[name=value]` selectors.
    pub attributes: Vec<(String, String)>,
}

impl ElementMeta {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Checks if this element matches a simple selector.
    pub fn matches_selector(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Type(name) => self.tag.eq_ignore_ascii_case(name),
            Selector::Id(id) => self.id.as_ref() == Some(id),
            Selector::Class(class) => self.has_class(class),
            Selector::Universal => true,
            Selector::Attribute(name, value) => self
                .attributes
                .iter()
                .any(|(n, v)| n == name && value.as_ref().is_none_or(|want| want == v)),
            // No interaction state or generated content is modeled
            Selector::PseudoClass(_) | Selector::PseudoElement(_) => false,
            // Flattening replaces every `&` before matching
            Selector::Parent => false,
        }
    }

    /// Checks if this element matches a complex selector given its ancestors.
    /// Ancestors are ordered from immediate parent to root.
    pub fn matches_complex(&self, complex: &ComplexSelector, ancestors: &[ElementMeta]) -> bool {
        match_parts(&complex.parts, self, ancestors)
    }

    fn matches_compound(&self, part: &SelectorPart) -> bool {
        part.compound.selectors.iter().all(|s| self.matches_selector(s))
    }
}

fn match_parts(parts: &[SelectorPart], subject: &ElementMeta, ancestors: &[ElementMeta]) -> bool {
    let Some((last, rest)) = parts.split_last() else {
        return false;
    };
    if !subject.matches_compound(last) {
        return false;
    }
    let Some(link) = rest.last() else {
        return true;
    };

    match link.combinator {
        Combinator::Child => ancestors
            .split_first()
            .is_some_and(|(parent, above)| match_parts(rest, parent, above)),
        Combinator::Descendant | Combinator::None => (0..ancestors.len())
            .any(|i| match_parts(rest, &ancestors[i], &ancestors[i + 1..])),
        // Siblings are not modeled
        Combinator::AdjacentSibling | Combinator::GeneralSibling => false,
    }
}

/// The layer a stylesheet is loaded into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The inherited base theme.
    Theme,
    /// An override layer. Higher priorities win over lower ones.
    Override { priority: i32 },
}

impl Origin {
    fn rank(&self) -> (u8, i32) {
        match self {
            Origin::Theme => (0, 0),
            Origin::Override { priority } => (1, *priority),
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, Origin::Override { .. })
    }
}

/// How the cascade orders declarations from different sheets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CascadeMode {
    /// Importance, then origin, then specificity, then source order.
    #[default]
    Layered,
    /// Importance, then specificity, then document position. Origin is ignored.
    DocumentOrder,
}

/// A stylesheet together with the layer it belongs to.
///
/// The position of a `LayeredSheet` in the slice passed to the cascade is its
/// document position.
#[derive(Clone, Copy, Debug)]
pub struct LayeredSheet<'a> {
    pub sheet: &'a StyleSheet,
    pub origin: Origin,
}

impl<'a> LayeredSheet<'a> {
    pub fn theme(sheet: &'a StyleSheet) -> Self {
        Self {
            sheet,
            origin: Origin::Theme,
        }
    }

    pub fn overrides(sheet: &'a StyleSheet, priority: i32) -> Self {
        Self {
            sheet,
            origin: Origin::Override { priority },
        }
    }
}

/// Priority tuple used to order declarations in the cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadePriority {
    pub important: bool,
    pub origin: Origin,
    pub specificity: Specificity,
    /// (sheet position, rule index, declaration index)
    pub source_order: (usize, usize, usize),
}

impl CascadePriority {
    /// Returns `Ordering::Greater` if `self` wins over `other`.
    pub fn compare(&self, other: &Self, mode: CascadeMode) -> Ordering {
        let importance = self.important.cmp(&other.important);
        let origin = match mode {
            CascadeMode::Layered => self.origin.rank().cmp(&other.origin.rank()),
            CascadeMode::DocumentOrder => Ordering::Equal,
        };
        importance
            .then(origin)
            .then(self.specificity.cmp(&other.specificity))
            .then(self.source_order.cmp(&other.source_order))
    }
}

/// The declaration that won a longhand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Winner {
    pub value: Length,
    pub priority: CascadePriority,
}

/// Computed box model plus the winning declaration for every longhand that
/// any rule set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CascadeResult {
    pub model: BoxModel,
    pub winners: BTreeMap<BoxProperty, Winner>,
}

impl CascadeResult {
    /// The origin that supplied `property`, or `None` if it kept its initial value.
    pub fn origin_of(&self, property: BoxProperty) -> Option<Origin> {
        self.winners.get(&property).map(|w| w.priority.origin)
    }
}

/// The core cascade function.
pub fn compute_cascade(
    element: &ElementMeta,
    ancestors: &[ElementMeta],
    sheets: &[LayeredSheet<'_>],
    mode: CascadeMode,
) -> CascadeResult {
    let mut candidates: Vec<(CascadePriority, BoxProperty, Length)> = Vec::new();

    // 1. Find all matching rules and expand their declarations
    for (sheet_idx, layered) in sheets.iter().enumerate() {
        for (rule_idx, rule) in layered.sheet.rules.iter().enumerate() {
            // The most specific matching selector in a list is the one that counts
            let Some(specificity) = rule
                .selectors
                .selectors
                .iter()
                .filter(|complex| element.matches_complex(complex, ancestors))
                .map(ComplexSelector::specificity)
                .max()
            else {
                continue;
            };

            for (decl_idx, decl) in rule.declarations().enumerate() {
                let priority = CascadePriority {
                    important: decl.important,
                    origin: layered.origin,
                    specificity,
                    source_order: (sheet_idx, rule_idx, decl_idx),
                };
                for (property, value) in decl.property.longhands() {
                    candidates.push((priority, property, value));
                }
            }
        }
    }

    // 2. Sort lowest priority first
    candidates.sort_by(|a, b| a.0.compare(&b.0, mode));

    // 3. Apply in order, later writes win
    let mut result = CascadeResult::default();
    for (priority, property, value) in candidates {
        result.model.set(property, value);
        result.winners.insert(property, Winner { value, priority });
    }

    log::trace!(
        "CASCADE: element={}#{} mode={:?} -> margin={} padding={}",
        element.tag,
        element.id.as_deref().unwrap_or(""),
        mode,
        result.model.margin,
        result.model.padding
    );

    result
}

/// Computes an element's margin and padding across layered sheets.
pub fn compute_box_model(
    element: &ElementMeta,
    ancestors: &[ElementMeta],
    sheets: &[LayeredSheet<'_>],
    mode: CascadeMode,
) -> BoxModel {
    compute_cascade(element, ancestors, sheets, mode).model
}
