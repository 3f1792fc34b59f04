//! Raw value scanning for declarations.
//!
//! Declarations are split into a property name and the raw value text first.
//! The typed parsers in [`units`](super::units) then get a chance to read the
//! value; whatever they cannot read is kept verbatim.

use nom::{IResult, bytes::complete::take_while1};

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
///
/// Identifiers are used for property names, type selectors, class names, etc.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Takes a declaration value up to the next `;` or `}` that is not inside
/// parentheses or quotes, so `url(data:image/png;base64,...)` stays whole.
pub fn take_value(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';' | '}') if depth == 0 => return Ok((&input[i..], &input[..i])),
            _ => {}
        }
    }
    Ok(("", input))
}

/// Splits a trailing `!important` flag off a raw value.
pub fn split_important(raw: &str) -> (&str, bool) {
    let trimmed = raw.trim_end();
    if let Some(bang) = trimmed.rfind('!') {
        if trimmed[bang + 1..].trim().eq_ignore_ascii_case("important") {
            return (trimmed[..bang].trim_end(), true);
        }
    }
    (trimmed, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_value_stops_at_semicolon() {
        let (rest, value) = take_value("0 !important; padding: 0").unwrap();
        assert_eq!(value, "0 !important");
        assert_eq!(rest, "; padding: 0");
    }

    #[test]
    fn test_take_value_keeps_semicolons_in_parens_and_quotes() {
        let (rest, value) = take_value("url(data:a;b) \";\" }").unwrap();
        assert_eq!(value, "url(data:a;b) \";\" ");
        assert_eq!(rest, "}");
    }

    #[test]
    fn test_split_important() {
        assert_eq!(split_important("0 !important"), ("0", true));
        assert_eq!(split_important("0 ! IMPORTANT "), ("0", true));
        assert_eq!(split_important("24px"), ("24px", false));
    }
}
