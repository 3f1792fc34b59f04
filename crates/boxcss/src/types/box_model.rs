use std::fmt;

use super::geometry::{Length, Side, Spacing};

/// Which box edge area a property targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    Margin,
    Padding,
}

impl Edge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Margin => "margin",
            Edge::Padding => "padding",
        }
    }
}

/// A box-model longhand such as `margin-top` or `padding-bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxProperty {
    pub edge: Edge,
    pub side: Side,
}

impl BoxProperty {
    pub const MARGIN_TOP: Self = Self::new(Edge::Margin, Side::Top);
    pub const MARGIN_RIGHT: Self = Self::new(Edge::Margin, Side::Right);
    pub const MARGIN_BOTTOM: Self = Self::new(Edge::Margin, Side::Bottom);
    pub const MARGIN_LEFT: Self = Self::new(Edge::Margin, Side::Left);
    pub const PADDING_TOP: Self = Self::new(Edge::Padding, Side::Top);
    pub const PADDING_RIGHT: Self = Self::new(Edge::Padding, Side::Right);
    pub const PADDING_BOTTOM: Self = Self::new(Edge::Padding, Side::Bottom);
    pub const PADDING_LEFT: Self = Self::new(Edge::Padding, Side::Left);

    pub const fn new(edge: Edge, side: Side) -> Self {
        Self { edge, side }
    }

    /// Looks up a longhand by its CSS name.
    pub fn from_name(name: &str) -> Option<Self> {
        let (edge, side) = name.split_once('-')?;
        let edge = match edge {
            "margin" => Edge::Margin,
            "padding" => Edge::Padding,
            _ => return None,
        };
        let side = match side {
            "top" => Side::Top,
            "right" => Side::Right,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            _ => return None,
        };
        Some(Self::new(edge, side))
    }
}

impl fmt::Display for BoxProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.edge.as_str(), self.side.as_str())
    }
}

/// The computed margin and padding of one element.
///
/// Every side starts at the CSS initial value `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxModel {
    pub margin: Spacing,
    pub padding: Spacing,
}

impl BoxModel {
    pub fn get(&self, property: BoxProperty) -> Length {
        match property.edge {
            Edge::Margin => self.margin.get(property.side),
            Edge::Padding => self.padding.get(property.side),
        }
    }

    pub fn set(&mut self, property: BoxProperty, value: Length) {
        match property.edge {
            Edge::Margin => self.margin.set(property.side, value),
            Edge::Padding => self.padding.set(property.side, value),
        }
    }

    pub fn spacing(&self, edge: Edge) -> &Spacing {
        match edge {
            Edge::Margin => &self.margin,
            Edge::Padding => &self.padding,
        }
    }
}
