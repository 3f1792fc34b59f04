//! CSS parsing and stylesheet data structures.
//!
//! This module provides the parsing side of the engine:
//!
//! - [`parse_stylesheet`]: Lenient entry point for real theme stylesheets
//! - [`parse_stylesheet_strict`]: Refuses anything the engine would skip
//! - [`StyleSheet`]: A parsed, flattened stylesheet
//! - [`Rule`]: A CSS rule with selectors and declarations
//! - [`Declaration`]: A property-value pair with its `!important` flag
//!
//! ## Submodules
//!
//! - [`cascade`]: Selector matching, origins and box-model computation
//! - [`comments`]: `/* */` stripping
//! - [`selectors`]: Selector parsing (type, class, ID, pseudo, combinators)
//! - [`stylesheet`]: Core data structures and CSS serialization
//! - [`units`]: Length and margin/padding shorthand parsing
//! - [`values`]: Raw value scanning and `!important` handling
//! - [`flatten`]: Nested rule flattening (for `&` parent selector support)
//!
//! ## Example
//!
//! ```rust
//! use boxcss::parser::{parse_stylesheet, Selector};
//!
//! let stylesheet = parse_stylesheet("#header_slider { margin-bottom: 24px; }").unwrap();
//! let rule = &stylesheet.rules[0];
//!
//! assert_eq!(
//!     rule.selectors.selectors[0].parts[0].compound.selectors[0],
//!     Selector::Id("header_slider".to_string())
//! );
//! ```

pub mod cascade;
pub mod comments;
pub mod flatten;
pub mod selectors;
pub mod stylesheet;
pub mod units;
pub mod values;

pub use crate::parser::flatten::flatten_stylesheet;
pub use crate::parser::stylesheet::{
    Combinator, ComplexSelector, CompoundSelector, Declaration, Property, Rule, RuleItem,
    Selector, SelectorList, SelectorPart, Specificity, StyleSheet,
};

use crate::BoxCssError;
use crate::parser::comments::strip_comments;
use crate::parser::selectors::parse_complex_selector;
use crate::parser::values::{parse_ident, split_important, take_value};
use crate::types::BoxProperty;

use nom::branch::alt;
use nom::{
    IResult,
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::many0,
    sequence::{delimited, preceded, tuple},
};

/// Parses a stylesheet, skipping at-rules and rules the engine cannot read.
///
/// Skipped constructs are recorded in [`StyleSheet::skipped`]. Text that is
/// not a block at all, or a block that never closes, is a syntax error.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, BoxCssError> {
    let clean = strip_comments(source);
    let mut input = clean.as_str();
    let mut raw_rules = Vec::new();
    let mut skipped = Vec::new();

    loop {
        input = input.trim_start();
        if input.is_empty() {
            break;
        }

        if input.starts_with('@') {
            let (rest, prelude) = skip_at_rule(input)?;
            log::debug!("skipping at-rule `{prelude}`");
            skipped.push(prelude.to_string());
            input = rest;
            continue;
        }

        match parse_rule(input) {
            Ok((rest, rule)) => {
                raw_rules.push(rule);
                input = rest;
            }
            Err(_) => {
                let Some(brace) = input.find('{') else {
                    return Err(trailing_tokens(input));
                };
                let prelude = input[..brace].trim();
                let rest = skip_block(&input[brace..]).ok_or_else(|| {
                    BoxCssError::InvalidSyntax(format!("Unterminated block after `{prelude}`"))
                })?;
                log::debug!("skipping unsupported rule `{prelude}`");
                skipped.push(prelude.to_string());
                input = rest;
            }
        }
    }

    let mut sheet = flatten_stylesheet(raw_rules);
    sheet.skipped = skipped;
    Ok(sheet)
}

/// Parses a stylesheet and fails if anything had to be skipped.
pub fn parse_stylesheet_strict(source: &str) -> Result<StyleSheet, BoxCssError> {
    let sheet = parse_stylesheet(source)?;
    if let Some(first) = sheet.skipped.first() {
        return Err(BoxCssError::Skipped {
            count: sheet.skipped.len(),
            first: first.clone(),
        });
    }
    Ok(sheet)
}

/// Reads a stylesheet file leniently.
pub fn parse_stylesheet_file(path: impl AsRef<std::path::Path>) -> Result<StyleSheet, BoxCssError> {
    let source = std::fs::read_to_string(path)?;
    parse_stylesheet(&source)
}

fn trailing_tokens(input: &str) -> BoxCssError {
    let snippet: String = input.trim().chars().take(40).collect();
    BoxCssError::InvalidSyntax(format!("Unexpected tokens at end of stylesheet: {snippet}"))
}

/// Top-level parser for a CSS rule (e.g., "#top { margin-bottom: 0; }").
pub fn parse_rule(input: &str) -> IResult<&str, Rule> {
    let (input, _) = multispace0(input)?;
    let (input, selectors) = parse_selector_list(input)?;
    let (input, _) = multispace0(input)?;

    let (input, items) = delimited(
        char('{'),
        parse_rule_items,
        preceded(multispace0, char('}')),
    )(input)?;

    Ok((input, Rule::new(selectors, items)))
}

/// Parses either a declaration (margin: 0) or a nested rule (&.slick-list { ... })
fn parse_rule_items(input: &str) -> IResult<&str, Vec<RuleItem>> {
    many0(alt((
        map(parse_rule, RuleItem::NestedRule),
        map(parse_single_declaration, RuleItem::Declaration),
    )))(input)
}

/// Parses a comma-separated list of selectors (e.g., "#top, .slick-dots").
pub fn parse_selector_list(input: &str) -> IResult<&str, SelectorList> {
    let (input, _) = multispace0(input)?;
    let (input, first) = parse_complex_selector(input)?;
    let (input, rest) = many0(preceded(
        tuple((multispace0, char(','), multispace0)),
        parse_complex_selector,
    ))(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, SelectorList::new(selectors)))
}

/// Parses multiple declarations inside a block.
pub fn parse_declarations(input: &str) -> IResult<&str, Vec<Declaration>> {
    many0(parse_single_declaration)(input)
}

/// Parses one declaration and types it by property name.
fn parse_single_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, raw) = take_value(input)?;
    let (value, important) = split_important(raw);

    let property = type_property(name, value);

    let (input, _) = multispace0(input)?;
    let (input, _) = opt(char(';'))(input)?;
    Ok((
        input,
        Declaration {
            property,
            important,
        },
    ))
}

fn type_property(name: &str, value: &str) -> Property {
    let lower = name.to_ascii_lowercase();
    let typed = match lower.as_str() {
        "margin" => units::spacing_value(value).map(Property::Margin),
        "padding" => units::spacing_value(value).map(Property::Padding),
        longhand => BoxProperty::from_name(longhand)
            .and_then(|p| units::length_value(value).map(|v| Property::Longhand(p, v))),
    };

    typed.unwrap_or_else(|| Property::Unknown {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Skips an at-rule: either a statement ending in `;` or a block.
fn skip_at_rule(input: &str) -> Result<(&str, &str), BoxCssError> {
    let semi = input.find(';');
    let brace = input.find('{');

    match (semi, brace) {
        (Some(s), Some(b)) if s < b => Ok((&input[s + 1..], input[..s].trim())),
        (Some(s), None) => Ok((&input[s + 1..], input[..s].trim())),
        (_, Some(b)) => {
            let prelude = input[..b].trim();
            let rest = skip_block(&input[b..]).ok_or_else(|| {
                BoxCssError::InvalidSyntax(format!("Unterminated block after `{prelude}`"))
            })?;
            Ok((rest, prelude))
        }
        (None, None) => Err(BoxCssError::InvalidSyntax(format!(
            "Unterminated at-rule `{}`",
            input.trim()
        ))),
    }
}

/// Given input starting at `{`, returns the text after the matching `}`.
/// Braces inside quoted strings do not count.
fn skip_block(input: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '{') => depth += 1,
            (None, '}') => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&input[i + 1..]);
                }
            }
            _ => {}
        }
    }
    None
}
