//! Nested rule flattening.
//!
//! Override configs may group a region's sub-areas SCSS-style:
//!
//! ```css
//! #header_slider {
//!     margin-bottom: 0;
//!     .slick-dots { margin-top: 0; }
//!     &.is-home { padding-bottom: 0; }
//! }
//! ```
//!
//! which flattens to:
//!
//! ```css
//! #header_slider { margin-bottom: 0; }
//! #header_slider .slick-dots { margin-top: 0; }
//! #header_slider.is-home { padding-bottom: 0; }
//! ```
//!
//! - `&` is replaced by the parent selector, merging into its last compound
//! - `& > child` keeps the child's combinator
//! - Nesting without `&` implies the descendant combinator

use crate::parser::stylesheet::{
    Combinator, ComplexSelector, Rule, RuleItem, Selector, SelectorList, StyleSheet,
};

/// Flattens a list of potentially nested rules into a flat stylesheet.
///
/// Rules are emitted parent first, so source order within a nest is kept.
pub fn flatten_stylesheet(raw_rules: Vec<Rule>) -> StyleSheet {
    let mut flat_rules = Vec::new();
    for rule in &raw_rules {
        flatten_rule(rule, &mut flat_rules);
    }
    StyleSheet::new(flat_rules)
}

fn flatten_rule(rule: &Rule, output: &mut Vec<Rule>) {
    let own: Vec<RuleItem> = rule
        .items
        .iter()
        .filter(|i| matches!(i, RuleItem::Declaration(_)))
        .cloned()
        .collect();

    // A block holding only nested rules produces no rule of its own
    if !own.is_empty() {
        output.push(Rule::new(rule.selectors.clone(), own));
    }

    for item in &rule.items {
        if let RuleItem::NestedRule(nested) = item {
            let combined = combine_selectors(&rule.selectors.selectors, &nested.selectors.selectors);
            let merged = Rule::new(SelectorList::new(combined), nested.items.clone());
            flatten_rule(&merged, output);
        }
    }
}

fn combine_selectors(
    parents: &[ComplexSelector],
    children: &[ComplexSelector],
) -> Vec<ComplexSelector> {
    let mut combined = Vec::with_capacity(parents.len() * children.len());
    for parent in parents {
        for child in children {
            let mut parts = parent.parts.clone();
            let Some(first) = child.parts.first() else {
                continue;
            };

            let has_parent_ref = first
                .compound
                .selectors
                .iter()
                .any(|s| matches!(s, Selector::Parent));

            if let Some(last) = parts.last_mut() {
                if has_parent_ref {
                    last.compound.selectors.extend(
                        first
                            .compound
                            .selectors
                            .iter()
                            .filter(|s| !matches!(s, Selector::Parent))
                            .cloned(),
                    );
                    last.combinator = first.combinator;
                } else {
                    last.combinator = Combinator::Descendant;
                }
            }

            if has_parent_ref {
                parts.extend(child.parts.iter().skip(1).cloned());
            } else {
                parts.extend(child.parts.iter().cloned());
            }
            combined.push(ComplexSelector::new(parts));
        }
    }
    combined
}
