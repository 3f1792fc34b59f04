use std::fmt;

use crate::types::{BoxProperty, Edge, Length, Side, Spacing};

/// CSS specificity for determining rule precedence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl std::ops::Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            ids: self.ids + rhs.ids,
            classes: self.classes + rhs.classes,
            types: self.types + rhs.types,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    Type(String),
    Class(String),
    Id(String),
    Universal,
    PseudoClass(String),
    PseudoElement(String),
    Parent,
    Attribute(String, Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompoundSelector {
    pub selectors: Vec<Selector>,
}

impl CompoundSelector {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        for s in &self.selectors {
            match s {
                Selector::Id(_) => spec.ids += 1,
                // Attributes have the same specificity as classes and pseudo-classes
                Selector::Class(_) | Selector::PseudoClass(_) | Selector::Attribute(_, _) => {
                    spec.classes += 1;
                }
                Selector::Type(_) | Selector::PseudoElement(_) => spec.types += 1,
                Selector::Universal | Selector::Parent => {}
            }
        }
        spec
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    None,
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectorPart {
    pub compound: CompoundSelector,
    pub combinator: Combinator,
}

impl SelectorPart {
    pub fn new(compound: CompoundSelector, combinator: Combinator) -> Self {
        Self {
            compound,
            combinator,
        }
    }
}

/// A selector chain such as `.home #site_wrap > #top`.
///
/// Each part's combinator links it to the *next* part; the last part always
/// carries [`Combinator::None`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComplexSelector {
    pub parts: Vec<SelectorPart>,
}

impl ComplexSelector {
    pub fn new(parts: Vec<SelectorPart>) -> Self {
        Self { parts }
    }

    pub fn specificity(&self) -> Specificity {
        self.parts
            .iter()
            .map(|p| p.compound.specificity())
            .fold(Specificity::default(), |acc, x| acc + x)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    pub fn new(selectors: Vec<ComplexSelector>) -> Self {
        Self { selectors }
    }
}

/// A typed property value.
///
/// Only the box model is typed. Everything else a theme declares is kept
/// verbatim so stylesheets can be written back out unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    Margin(Spacing),
    Padding(Spacing),
    Longhand(BoxProperty, Length),
    Unknown { name: String, value: String },
}

impl Property {
    pub fn name(&self) -> String {
        match self {
            Property::Margin(_) => "margin".to_string(),
            Property::Padding(_) => "padding".to_string(),
            Property::Longhand(p, _) => p.to_string(),
            Property::Unknown { name, .. } => name.clone(),
        }
    }

    /// Expands shorthands into the longhands they set.
    pub fn longhands(&self) -> Vec<(BoxProperty, Length)> {
        match self {
            Property::Margin(s) => expand(Edge::Margin, s),
            Property::Padding(s) => expand(Edge::Padding, s),
            Property::Longhand(p, v) => vec![(*p, *v)],
            Property::Unknown { .. } => Vec::new(),
        }
    }
}

fn expand(edge: Edge, spacing: &Spacing) -> Vec<(BoxProperty, Length)> {
    Side::ALL
        .iter()
        .map(|side| (BoxProperty::new(edge, *side), spacing.get(*side)))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: Property,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: Property) -> Self {
        Self {
            property,
            important: false,
        }
    }

    pub fn important(property: Property) -> Self {
        Self {
            property,
            important: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RuleItem {
    Declaration(Declaration),
    NestedRule(Rule),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub selectors: SelectorList,
    pub items: Vec<RuleItem>,
}

impl Rule {
    pub fn new(selectors: SelectorList, items: Vec<RuleItem>) -> Self {
        Self { selectors, items }
    }

    /// Iterates over the direct declarations, skipping nested rules.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.items.iter().filter_map(|item| match item {
            RuleItem::Declaration(d) => Some(d),
            RuleItem::NestedRule(_) => None,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    pub rules: Vec<Rule>,
    /// Preludes of at-rules and unparseable rules that lenient parsing skipped.
    pub skipped: Vec<String>,
}

impl StyleSheet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            skipped: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Type(name) => f.write_str(name),
            Selector::Class(name) => write!(f, ".{name}"),
            Selector::Id(name) => write!(f, "#{name}"),
            Selector::Universal => f.write_str("*"),
            Selector::PseudoClass(name) => write!(f, ":{name}"),
            Selector::PseudoElement(name) => write!(f, "::{name}"),
            Selector::Parent => f.write_str("&"),
            Selector::Attribute(name, None) => write!(f, "[{name}]"),
            Selector::Attribute(name, Some(value)) => write!(f, "[{name}={value}]"),
        }
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.selectors {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part.compound)?;
            match part.combinator {
                Combinator::None => {}
                Combinator::Descendant => f.write_str(" ")?,
                Combinator::Child => f.write_str(" > ")?,
                Combinator::AdjacentSibling => f.write_str(" + ")?,
                Combinator::GeneralSibling => f.write_str(" ~ ")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, complex) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{complex}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Margin(s) => write!(f, "margin: {s}"),
            Property::Padding(s) => write!(f, "padding: {s}"),
            Property::Longhand(p, v) => write!(f, "{p}: {v}"),
            Property::Unknown { name, value } => write!(f, "{name}: {value}"),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.property)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

impl Rule {
    /// Writes the rule with its selector line at `indent` and each
    /// declaration one `step` deeper.
    pub fn write_indented(&self, out: &mut impl fmt::Write, indent: &str, step: &str) -> fmt::Result {
        writeln!(out, "{indent}{} {{", self.selectors)?;
        let inner = format!("{indent}{step}");
        for item in &self.items {
            match item {
                RuleItem::Declaration(d) => writeln!(out, "{inner}{d}")?,
                RuleItem::NestedRule(nested) => nested.write_indented(out, &inner, step)?,
            }
        }
        writeln!(out, "{indent}}}")
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, "", "  ")
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
