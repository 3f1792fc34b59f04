//! Selector grammar.
//!
//! ```text
//! complex  := compound (link compound)*
//! link     := ws* ('>' | '+' | '~') ws* | ws+
//! compound := simple+
//! ```
//!
//! Functional pseudo-classes take their argument up to the first `)`, so
//! nested forms such as `:not(:nth-child(2))` fail here and the rule that
//! uses them is skipped by the stylesheet parser.

use crate::parser::{
    Combinator, ComplexSelector, CompoundSelector, Selector, SelectorPart, values::parse_ident,
};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_until,
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, value},
    multi::{many0, many1},
    sequence::{delimited, pair, preceded},
};

/// Parses a simple selector: Type, .Class, #ID, pseudo or attribute.
pub fn parse_simple_selector(input: &str) -> IResult<&str, Selector> {
    alt((
        map(preceded(char('#'), parse_ident), |id| Selector::Id(id.into())),
        map(preceded(char('.'), parse_ident), |class| Selector::Class(class.into())),
        parse_pseudo_selector,
        value(Selector::Parent, char('&')),
        value(Selector::Universal, char('*')),
        parse_attribute_selector,
        map(parse_ident, |tag| Selector::Type(tag.into())),
    ))(input)
}

/// Parses a compound selector (e.g., "div.slick-list#main"). No whitespace is
/// allowed inside, so `a:hover` stays one compound.
pub fn parse_compound_selector(input: &str) -> IResult<&str, CompoundSelector> {
    map(many1(parse_simple_selector), CompoundSelector::new)(input)
}

/// Parses a complex selector with combinators (e.g., "#site_wrap > #top").
///
/// Trailing whitespace is left unconsumed.
pub fn parse_complex_selector(input: &str) -> IResult<&str, ComplexSelector> {
    let (input, head) = parse_compound_selector(input)?;
    let (input, links) = many0(pair(parse_link, parse_compound_selector))(input)?;

    // Each compound carries the combinator that joins it to the next one
    let mut parts = Vec::with_capacity(links.len() + 1);
    let mut current = head;
    for (link, next) in links {
        let done = std::mem::replace(&mut current, next);
        parts.push(SelectorPart::new(done, link));
    }
    parts.push(SelectorPart::new(current, Combinator::None));

    Ok((input, ComplexSelector::new(parts)))
}

fn parse_link(input: &str) -> IResult<&str, Combinator> {
    alt((
        delimited(
            multispace0,
            alt((
                value(Combinator::Child, char('>')),
                value(Combinator::AdjacentSibling, char('+')),
                value(Combinator::GeneralSibling, char('~')),
            )),
            multispace0,
        ),
        value(Combinator::Descendant, multispace1),
    ))(input)
}

/// `:hover`, `::before` and functional forms like `:nth-child(2n)`.
fn parse_pseudo_selector(input: &str) -> IResult<&str, Selector> {
    let (input, _) = char(':')(input)?;
    let (input, element) = opt(char(':'))(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, args) = opt(delimited(char('('), take_until(")"), char(')')))(input)?;

    let name = match args {
        Some(args) => format!("{name}({})", args.trim()),
        None => name.to_string(),
    };
    let selector = if element.is_some() {
        Selector::PseudoElement(name)
    } else {
        Selector::PseudoClass(name)
    };
    Ok((input, selector))
}

/// `[name]`, `[name=value]`, `[name="value"]` or `[name='value']`.
fn parse_attribute_selector(input: &str) -> IResult<&str, Selector> {
    let (input, _) = char('[')(input)?;
    let (input, name) = delimited(multispace0, parse_ident, multispace0)(input)?;
    let (input, expected) = opt(preceded(
        pair(char('='), multispace0),
        alt((
            delimited(char('"'), take_until("\""), char('"')),
            delimited(char('\''), take_until("'"), char('\'')),
            parse_ident,
        )),
    ))(input)?;
    let (input, _) = pair(multispace0, char(']'))(input)?;

    Ok((
        input,
        Selector::Attribute(name.to_string(), expected.map(str::to_string)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_whitespace_is_not_a_descendant_link() {
        let (rest, complex) = parse_complex_selector("#top .slick-dots  {").unwrap();
        assert_eq!(rest, "  {");
        assert_eq!(complex.parts.len(), 2);
    }

    #[test]
    fn test_dangling_combinator_is_left_unconsumed() {
        let (rest, complex) = parse_complex_selector("#site_wrap > {").unwrap();
        assert_eq!(rest, " > {");
        assert_eq!(complex.parts.len(), 1);
    }

    #[test]
    fn test_attribute_with_spaces_and_double_quotes() {
        let (_, selector) = parse_attribute_selector("[ data-slick = \"1\" ]").unwrap();
        assert_eq!(
            selector,
            Selector::Attribute("data-slick".into(), Some("1".into()))
        );
    }

    #[test]
    fn test_nested_functional_pseudo_does_not_close() {
        let (rest, _) = parse_compound_selector("a:not(:nth-child(2)) {").unwrap();
        assert_eq!(rest, ") {", "the outer paren is left for the caller to reject");
    }
}
