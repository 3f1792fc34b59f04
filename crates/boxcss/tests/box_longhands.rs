//! Tests for margin/padding longhands and their cascade behavior.
//!
//! Shorthands expand into four longhands, and a later declaration for a side
//! replaces only that side.

use boxcss::parser::cascade::{CascadeMode, ElementMeta, LayeredSheet, compute_box_model};
use boxcss::parser::parse_stylesheet;
use boxcss::types::{BoxModel, Length, Unit};

fn slider() -> ElementMeta {
    ElementMeta::new("div").with_id("header_slider")
}

fn compute(css: &str) -> BoxModel {
    let stylesheet = parse_stylesheet(css).unwrap();
    compute_box_model(
        &slider(),
        &[],
        &[LayeredSheet::theme(&stylesheet)],
        CascadeMode::Layered,
    )
}

#[test]
fn test_padding_top_overrides_shorthand() {
    // padding: 1px; padding-top: 5px; → (5, 1, 1, 1)
    let model = compute("#header_slider { padding: 1px; padding-top: 5px; }");

    assert_eq!(model.padding.top, Length::px(5.0), "top should be 5");
    assert_eq!(model.padding.right, Length::px(1.0), "right should be 1");
    assert_eq!(model.padding.bottom, Length::px(1.0), "bottom should be 1");
    assert_eq!(model.padding.left, Length::px(1.0), "left should be 1");
}

#[test]
fn test_shorthand_overrides_individual() {
    // padding-top: 5px; padding: 2px; → (2, 2, 2, 2)
    let model = compute("#header_slider { padding-top: 5px; padding: 2px; }");

    assert_eq!(model.padding.top, Length::px(2.0), "top should be 2");
    assert_eq!(model.padding.bottom, Length::px(2.0), "bottom should be 2");
}

#[test]
fn test_margin_two_value_shorthand() {
    let model = compute("#header_slider { margin: 24px auto; }");

    assert_eq!(model.margin.top, Length::px(24.0));
    assert_eq!(model.margin.bottom, Length::px(24.0));
    assert!(model.margin.left.is_auto(), "left should be auto");
    assert!(model.margin.right.is_auto(), "right should be auto");
}

#[test]
fn test_individual_margin_default_zero() {
    let model = compute("#header_slider { margin-bottom: 24px; }");

    assert_eq!(model.margin.bottom, Length::px(24.0));
    assert_eq!(model.margin.top, Length::ZERO, "top should default to 0");
    assert_eq!(model.padding, Default::default(), "padding untouched");
}

#[test]
fn test_individual_padding_with_em_unit() {
    let model = compute("#header_slider { padding-bottom: 1.5em; }");

    assert_eq!(model.padding.bottom.value, 1.5);
    assert_eq!(model.padding.bottom.unit, Unit::Em, "unit should be em");
}

#[test]
fn test_untyped_value_leaves_side_alone() {
    let model = compute("#header_slider { margin-bottom: 24px; margin-bottom: calc(1em + 2px); }");

    assert_eq!(
        model.margin.bottom,
        Length::px(24.0),
        "calc() is kept raw and does not reset the side"
    );
}

#[test]
fn test_uppercase_auto_is_typed() {
    let model = compute("#header_slider { margin-bottom: AUTO; margin-top: 4px; }");
    assert!(model.margin.bottom.is_auto(), "got {:?}", model.margin.bottom);
    assert_eq!(model.margin.top, Length::px(4.0));
}
