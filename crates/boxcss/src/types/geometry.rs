use std::fmt;

/// Unit attached to a CSS length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// CSS pixels. Unitless numbers (the bare `0`) are read as pixels.
    #[default]
    Px,
    /// Relative to the element's font size.
    Em,
    /// Relative to the root font size.
    Rem,
    /// Percentage of the containing block.
    Percent,
    /// Percentage of viewport width.
    ViewWidth,
    /// Percentage of viewport height.
    ViewHeight,
    /// `auto`, resolved by layout.
    Auto,
}

impl Unit {
    /// The CSS suffix for this unit, empty for `auto`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::ViewWidth => "vw",
            Unit::ViewHeight => "vh",
            Unit::Auto => "",
        }
    }
}

/// A single margin or padding value such as `0`, `24px` or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const AUTO: Self = Self {
        value: 0.0,
        unit: Unit::Auto,
    };
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: Unit::Px,
    };

    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn em(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Em,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }

    /// True for any zero length regardless of unit. `auto` is never zero.
    pub fn is_zero(&self) -> bool {
        !self.is_auto() && self.value == 0.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            f.write_str("auto")
        } else if self.is_zero() {
            // Zero needs no unit, and this also avoids printing "-0".
            f.write_str("0")
        } else {
            write!(f, "{}{}", self.value, self.unit.suffix())
        }
    }
}

/// Defines spacing (margin or padding) for the four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacing {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Spacing {
    pub fn all(value: Length) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn vertical_horizontal(vertical: Length, horizontal: Length) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    pub fn get(&self, side: Side) -> Length {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn set(&mut self, side: Side, value: Length) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }
}

impl fmt::Display for Spacing {
    /// Writes the shortest equivalent shorthand value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top == self.bottom && self.left == self.right {
            if self.top == self.left {
                write!(f, "{}", self.top)
            } else {
                write!(f, "{} {}", self.top, self.right)
            }
        } else if self.left == self.right {
            write!(f, "{} {} {}", self.top, self.right, self.bottom)
        } else {
            write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
        }
    }
}

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_display() {
        assert_eq!(Length::ZERO.to_string(), "0");
        assert_eq!(Length::px(24.0).to_string(), "24px");
        assert_eq!(Length::em(1.5).to_string(), "1.5em");
        assert_eq!(Length::percent(50.0).to_string(), "50%");
        assert_eq!(Length::AUTO.to_string(), "auto");
        assert_eq!(Length::px(-0.0).to_string(), "0");
    }

    #[test]
    fn test_spacing_display_uses_shortest_form() {
        assert_eq!(Spacing::all(Length::ZERO).to_string(), "0");
        assert_eq!(
            Spacing::vertical_horizontal(Length::ZERO, Length::AUTO).to_string(),
            "0 auto"
        );
        let three = Spacing {
            top: Length::px(1.0),
            right: Length::px(2.0),
            bottom: Length::px(3.0),
            left: Length::px(2.0),
        };
        assert_eq!(three.to_string(), "1px 2px 3px");
    }
}
