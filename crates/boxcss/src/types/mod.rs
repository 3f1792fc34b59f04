pub mod box_model;
pub mod geometry;

pub use box_model::{BoxModel, BoxProperty, Edge};
pub use geometry::{Length, Side, Spacing, Unit};
