//! The override table.
//!
//! An [`OverrideSet`] is plain data: an ordered list of [`OverrideRule`]s,
//! each pinning some margin/padding longhands of one [`Region`]. It renders to
//! the `<style>` block injected after the theme, and converts to a `boxcss`
//! stylesheet so the same table can be evaluated in the cascade.

use std::fmt::Write as _;

use boxcss::parser::{
    Combinator, ComplexSelector, Declaration, Property, Rule, RuleItem, SelectorList,
    SelectorPart, StyleSheet,
};
use boxcss::types::{BoxProperty, Length};
use once_cell::sync::Lazy;

use crate::context::{ContextPredicate, PageContext, PageFlags};
use crate::region::Region;

/// One forced longhand value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub property: BoxProperty,
    pub value: Length,
    /// Emitted as `!important`.
    pub forced: bool,
}

impl Assignment {
    pub fn forced(property: BoxProperty, value: Length) -> Self {
        Self {
            property,
            value,
            forced: true,
        }
    }

    fn declaration(&self) -> Declaration {
        Declaration {
            property: Property::Longhand(self.property, self.value),
            important: self.forced,
        }
    }
}

/// Overrides for one region, optionally limited to some pages.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideRule {
    pub region: Region,
    pub context: ContextPredicate,
    pub assignments: Vec<Assignment>,
}

impl OverrideRule {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            context: ContextPredicate::Always,
            assignments: Vec::new(),
        }
    }

    /// Limits the rule to pages carrying all of `flags`.
    pub fn when(mut self, flags: PageFlags) -> Self {
        self.context = ContextPredicate::Page(flags);
        self
    }

    /// Adds a forced assignment.
    pub fn set(mut self, property: BoxProperty, value: Length) -> Self {
        self.assignments.push(Assignment::forced(property, value));
        self
    }

    /// Adds a forced zero, the only value the slider-gap table uses.
    pub fn zero(self, property: BoxProperty) -> Self {
        self.set(property, Length::ZERO)
    }

    pub fn applies_to(&self, context: &PageContext) -> bool {
        self.context.holds(context)
    }

    /// The full selector, including the body-class prefix of a scoped rule.
    pub fn selector(&self) -> ComplexSelector {
        let mut parts = Vec::with_capacity(4);
        if let Some(compound) = self.context.compound() {
            parts.push(SelectorPart::new(compound, Combinator::Descendant));
        }
        parts.extend(self.region.parts());
        ComplexSelector::new(parts)
    }

    pub fn to_rule(&self) -> Rule {
        Rule::new(
            SelectorList::new(vec![self.selector()]),
            self.assignments
                .iter()
                .map(|a| RuleItem::Declaration(a.declaration()))
                .collect(),
        )
    }
}

/// An immutable, ordered override table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverrideSet {
    pub rules: Vec<OverrideRule>,
    /// Rank of this layer against other override layers. The theme always
    /// ranks below every override layer.
    pub priority: i32,
}

static SLIDER_GAP: Lazy<OverrideSet> = Lazy::new(|| {
    use BoxProperty as P;

    OverrideSet::builder()
        .rule(
            OverrideRule::new(Region::new("top"))
                .zero(P::MARGIN_BOTTOM)
                .zero(P::PADDING_BOTTOM),
        )
        .rule(
            OverrideRule::new(Region::new("header_slider"))
                .zero(P::MARGIN_BOTTOM)
                .zero(P::PADDING_BOTTOM),
        )
        .rule(
            OverrideRule::new(Region::new("header_slider").scoped("slick-list"))
                .zero(P::MARGIN_BOTTOM)
                .zero(P::PADDING_BOTTOM),
        )
        .rule(
            OverrideRule::new(Region::new("header_slider").scoped("slick-track"))
                .zero(P::MARGIN_BOTTOM)
                .zero(P::PADDING_BOTTOM),
        )
        .rule(
            OverrideRule::new(Region::new("header_slider").scoped("slick-dots"))
                .zero(P::MARGIN_BOTTOM)
                .zero(P::MARGIN_TOP),
        )
        .rule(
            OverrideRule::new(Region::new("main_contents"))
                .zero(P::MARGIN_TOP)
                .zero(P::PADDING_TOP),
        )
        .rule(
            OverrideRule::new(Region::new("index_contents"))
                .zero(P::MARGIN_TOP)
                .zero(P::PADDING_TOP)
                .zero(P::MARGIN_BOTTOM)
                .zero(P::PADDING_BOTTOM),
        )
        .rule(
            OverrideRule::new(Region::new("index_work_list"))
                .zero(P::MARGIN_TOP)
                .zero(P::PADDING_TOP),
        )
        .rule(
            OverrideRule::new(Region::new("top").child_of("site_wrap"))
                .when(PageFlags::HOME)
                .zero(P::MARGIN_BOTTOM),
        )
        .build()
});

impl OverrideSet {
    /// The built-in table that closes the gap under the header slider and
    /// around the index sections.
    pub fn slider_gap() -> &'static OverrideSet {
        &SLIDER_GAP
    }

    pub fn builder() -> OverrideSetBuilder {
        OverrideSetBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules whose context predicate holds for `context`, in table order.
    pub fn active_rules<'a>(
        &'a self,
        context: &'a PageContext,
    ) -> impl Iterator<Item = &'a OverrideRule> + 'a {
        self.rules.iter().filter(move |r| r.applies_to(context))
    }

    /// Every rule as CSS, context-scoped ones behind their body-class prefix.
    pub fn to_stylesheet(&self) -> StyleSheet {
        StyleSheet::new(self.rules.iter().map(OverrideRule::to_rule).collect())
    }

    /// The rules as CSS text, indented for inlining in a `<style>` element.
    pub fn render_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            // Writing into a String cannot fail
            let _ = rule.to_rule().write_indented(&mut css, "  ", "  ");
        }
        css
    }

    /// The injectable `<style>` block. It must be placed after the theme's
    /// stylesheet links.
    pub fn render_style_block(&self) -> String {
        let mut block = String::from("<style>\n");
        block.push_str(&self.render_css());
        let _ = writeln!(block, "</style>");
        block
    }
}

#[derive(Debug, Default)]
pub struct OverrideSetBuilder {
    rules: Vec<OverrideRule>,
    priority: i32,
}

impl OverrideSetBuilder {
    pub fn rule(mut self, rule: OverrideRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> OverrideSet {
        log::debug!(
            "override set built: {} rule(s), priority {}",
            self.rules.len(),
            self.priority
        );
        OverrideSet {
            rules: self.rules,
            priority: self.priority,
        }
    }
}
