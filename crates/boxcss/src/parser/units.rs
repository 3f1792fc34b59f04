use crate::types::geometry::{Length, Spacing, Unit};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit0, digit1, multispace0, multispace1},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{pair, preceded, terminated, tuple},
};

/// Parse a floating point or integer number, including `.5` and `+1`.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(alt((char('-'), char('+')))),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse the unit suffix (e.g., px, %, rem).
fn parse_unit_suffix(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag_no_case("px"), |_| Unit::Px),
        map(tag_no_case("rem"), |_| Unit::Rem),
        map(tag_no_case("em"), |_| Unit::Em),
        map(tag_no_case("vw"), |_| Unit::ViewWidth),
        map(tag_no_case("vh"), |_| Unit::ViewHeight),
        map(char('%'), |_| Unit::Percent),
    ))(input)
}

/// Parse a single length (e.g., "0", "24px", "50%", "auto").
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let input = input.trim_start();

    if let Ok((remaining, _)) = tag_no_case::<&str, &str, nom::error::Error<&str>>("auto")(input) {
        return Ok((remaining, Length::AUTO));
    }

    let (input, value) = parse_number(input)?;
    let (input, unit) = opt(parse_unit_suffix)(input)?;

    Ok((
        input,
        Length {
            value,
            unit: unit.unwrap_or(Unit::Px),
        },
    ))
}

/// Parse CSS margin/padding shorthand.
/// Supports 1 value (all), 2 values (v, h), 3 values (t, h, b) or 4 values (t, r, b, l).
pub fn parse_spacing(input: &str) -> IResult<&str, Spacing> {
    let (input, first) = parse_length(input)?;
    let (input, second) = opt(preceded(multispace1, parse_length))(input)?;

    let Some(h) = second else {
        return Ok((input, Spacing::all(first)));
    };

    let (input, third) = opt(preceded(multispace1, parse_length))(input)?;
    let Some(b) = third else {
        return Ok((input, Spacing::vertical_horizontal(first, h)));
    };

    let (input, fourth) = opt(preceded(multispace1, parse_length))(input)?;
    let spacing = Spacing {
        top: first,
        right: h,
        bottom: b,
        left: fourth.unwrap_or(h),
    };
    Ok((input, spacing))
}

/// Reads a whole raw value as a single length, or `None` if anything is left over.
pub fn length_value(raw: &str) -> Option<Length> {
    all_consuming(terminated(parse_length, multispace0))(raw.trim())
        .ok()
        .map(|(_, l)| l)
}

/// Reads a whole raw value as a spacing shorthand, or `None` if anything is left over.
pub fn spacing_value(raw: &str) -> Option<Spacing> {
    all_consuming(terminated(parse_spacing, multispace0))(raw.trim())
        .ok()
        .map(|(_, s)| s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unitless_zero_is_px() {
        assert_eq!(length_value("0"), Some(Length::ZERO));
    }

    #[test]
    fn test_rem_is_not_read_as_em() {
        assert_eq!(length_value("1.5rem").map(|l| l.unit), Some(Unit::Rem));
        assert_eq!(length_value("2em").map(|l| l.unit), Some(Unit::Em));
    }

    #[test]
    fn test_leading_dot_number() {
        assert_eq!(length_value(".5em"), Some(Length::em(0.5)));
    }

    #[test]
    fn test_three_value_spacing() {
        let s = spacing_value("1px 2px 3px").unwrap();
        assert_eq!(s.top, Length::px(1.0));
        assert_eq!(s.right, Length::px(2.0));
        assert_eq!(s.bottom, Length::px(3.0));
        assert_eq!(s.left, Length::px(2.0));
    }

    #[test]
    fn test_auto_keyword_ignores_case() {
        assert_eq!(length_value("AUTO"), Some(Length::AUTO));
        assert_eq!(length_value("Auto"), Some(Length::AUTO));
        assert_eq!(length_value("automatic"), None);
    }

    #[test]
    fn test_untyped_values_are_rejected() {
        assert_eq!(length_value("calc(100% - 10px)"), None);
        assert_eq!(spacing_value("0 auto inherit"), None);
        assert_eq!(length_value("inherit"), None);
    }
}
