//! Resolution of the built-in slider-gap table against a hostile theme.

use boxcss::parser::parse_stylesheet;
use boxcss::types::{BoxProperty, Length};
use boxcss::{CascadeMode, ElementMeta, Origin};
use overrides::{
    Element, OverrideRule, OverrideSet, PageContext, PageFlags, Region, Resolver, ResolverConfig,
};

/// A theme that sets every overridden side, some with `!important` and
/// higher specificity than the override selectors.
const THEME: &str = r#"
body.home div#site_wrap > div#top { margin: 30px !important; padding: 30px !important; }
#top { margin-bottom: 24px; padding-bottom: 12px; margin-top: 6px; }
div#header_slider.slick-slider { margin-bottom: 24px !important; padding-bottom: 8px; }
#header_slider .slick-list { margin-bottom: 3px; padding-bottom: 5px; }
#header_slider .slick-track { margin-bottom: 3px; padding-bottom: 5px; }
.slick-dots { margin-top: 10px; margin-bottom: 10px; padding-top: 2px; }
#main_contents { margin-top: 40px; padding-top: 40px; }
#index_contents { margin: 20px 0 !important; padding: 20px 0; }
#index_work_list { margin-top: 2em; padding-top: 1em; }
@media (max-width: 767px) {
    #header_slider { margin-bottom: 12px !important; }
}
"#;

fn layout() -> Element {
    Element::new("div")
        .id("site_wrap")
        .child(
            Element::new("div").id("top").child(
                Element::new("div")
                    .id("header_slider")
                    .class("slick-slider")
                    .child(Element::new("div").class("slick-list").child(
                        Element::new("div").class("slick-track"),
                    ))
                    .child(Element::new("ul").class("slick-dots")),
            ),
        )
        .child(
            Element::new("div").id("main_contents").child(
                Element::new("div")
                    .id("index_contents")
                    .child(Element::new("ul").id("index_work_list")),
            ),
        )
}

fn resolver() -> Resolver {
    let theme = parse_stylesheet(THEME).expect("theme parses");
    Resolver::new(theme, OverrideSet::slider_gap())
}

fn locate(region: &Region) -> (ElementMeta, Vec<ElementMeta>) {
    layout()
        .find(|meta, ancestors| region.matches(meta, ancestors))
        .unwrap_or_else(|| panic!("layout has no element for {region}"))
}

#[test]
fn test_every_active_assignment_wins_over_theme() {
    let resolver = resolver();

    for context in [PageContext::home(), PageContext::new(PageFlags::SINGLE)] {
        for rule in OverrideSet::slider_gap().active_rules(&context) {
            let (meta, ancestors) = locate(&rule.region);
            let result = resolver.resolve_traced(&meta, &ancestors, &context);

            for assignment in &rule.assignments {
                assert_eq!(
                    result.model.get(assignment.property),
                    assignment.value,
                    "{} {} on {:?}",
                    rule.region,
                    assignment.property,
                    context.flags
                );
                assert!(
                    result
                        .origin_of(assignment.property)
                        .is_some_and(|o| o.is_override()),
                    "{} {} must come from the override layer",
                    rule.region,
                    assignment.property
                );
            }
        }
    }
}

#[test]
fn test_header_slider_margin_bottom_scenario() {
    let theme = parse_stylesheet("#header_slider { margin-bottom: 24px }").unwrap();
    let resolver = Resolver::new(theme, OverrideSet::slider_gap());
    let slider = ElementMeta::new("div").with_id("header_slider");

    let before = resolver.resolve_theme_only(&slider, &[], &PageContext::default());
    assert_eq!(before.margin.bottom, Length::px(24.0));

    let after = resolver.resolve(&slider, &[], &PageContext::default());
    assert_eq!(after.margin.bottom, Length::ZERO);
}

#[test]
fn test_slider_dots_scenario() {
    let resolver = resolver();
    let (meta, ancestors) = locate(&Region::new("header_slider").scoped("slick-dots"));
    let model = resolver.resolve(&meta, &ancestors, &PageContext::default());

    assert_eq!(model.margin.top, Length::ZERO);
    assert_eq!(model.margin.bottom, Length::ZERO);
    assert_eq!(
        model.padding.top,
        Length::px(2.0),
        "sides the table does not name keep the theme value"
    );
}

#[test]
fn test_unlisted_sides_keep_theme_values() {
    let resolver = resolver();
    let (meta, ancestors) = locate(&Region::new("top"));

    let home = resolver.resolve(&meta, &ancestors, &PageContext::home());
    assert_eq!(home.margin.top, Length::px(30.0), "theme !important on home");
    assert_eq!(home.margin.bottom, Length::ZERO);

    let other = resolver.resolve(&meta, &ancestors, &PageContext::default());
    assert_eq!(other.margin.top, Length::px(6.0));
    assert_eq!(other.margin.bottom, Length::ZERO, "unscoped #top rule still applies");
}

#[test]
fn test_home_scoped_rule_only_applies_on_home() {
    // Only the `.home #site_wrap > #top` rule, to isolate its effect
    let scoped = OverrideSet::builder()
        .rule(
            OverrideSet::slider_gap()
                .rules
                .iter()
                .find(|r| r.region.parent.is_some())
                .cloned()
                .expect("scoped rule exists"),
        )
        .build();
    let theme = parse_stylesheet("#site_wrap > #top { margin-bottom: 18px; }").unwrap();
    let resolver = Resolver::new(theme, &scoped);
    let (meta, ancestors) = locate(&Region::new("top").child_of("site_wrap"));

    let home = resolver.resolve(&meta, &ancestors, &PageContext::home());
    assert_eq!(home.margin.bottom, Length::ZERO);

    for flags in [PageFlags::empty(), PageFlags::SINGLE, PageFlags::ARCHIVE | PageFlags::PAGE] {
        let context = PageContext::new(flags);
        let model = resolver.resolve(&meta, &ancestors, &context);
        assert_eq!(
            model,
            resolver.resolve_theme_only(&meta, &ancestors, &context),
            "non-home page {flags:?} must see the theme unchanged"
        );
        assert_eq!(model.margin.bottom, Length::px(18.0));
    }
}

#[test]
fn test_home_class_without_home_flag_leaves_theme_alone() {
    let scoped = OverrideSet::builder()
        .rule(
            OverrideRule::new(Region::new("top").child_of("site_wrap"))
                .when(PageFlags::HOME)
                .zero(BoxProperty::MARGIN_BOTTOM),
        )
        .build();
    let theme = parse_stylesheet("#site_wrap > #top { margin-bottom: 18px; }").unwrap();
    let resolver = Resolver::new(theme, &scoped);
    let (meta, ancestors) = locate(&Region::new("top").child_of("site_wrap"));

    let context = PageContext::new(PageFlags::empty()).with_class("home");
    assert!(!context.is_home());
    assert_eq!(scoped.active_rules(&context).count(), 0);

    let model = resolver.resolve(&meta, &ancestors, &context);
    assert_eq!(
        model.margin.bottom,
        Length::px(18.0),
        "an inactive rule must not reach the cascade through body classes"
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let resolver = resolver();
    let context = PageContext::home();
    let first = resolver.resolve_document(&layout(), &context);
    let second = resolver.resolve_document(&layout(), &context);
    assert_eq!(first, second);
    assert_eq!(first.len(), 9);

    let set = OverrideSet::slider_gap();
    assert_eq!(set.render_style_block(), set.render_style_block());
}

#[test]
fn test_resolve_document_depths_and_models() {
    let resolver = resolver();
    let nodes = resolver.resolve_document(&layout(), &PageContext::home());

    let work_list = nodes
        .iter()
        .find(|n| n.meta.id.as_deref() == Some("index_work_list"))
        .expect("work list resolved");
    assert_eq!(work_list.depth, 3);
    assert_eq!(work_list.model.margin.top, Length::ZERO);
    assert_eq!(work_list.model.padding.top, Length::ZERO);

    let index = nodes
        .iter()
        .find(|n| n.meta.id.as_deref() == Some("index_contents"))
        .expect("index contents resolved");
    assert_eq!(index.model.margin.top, Length::ZERO);
    assert_eq!(index.model.margin.bottom, Length::ZERO);
    assert_eq!(index.model.padding.bottom, Length::ZERO);
}

#[test]
fn test_resolve_region_finds_first_match() {
    let resolver = resolver();
    let model = resolver
        .resolve_region(
            &Region::new("header_slider").scoped("slick-track"),
            &layout(),
            &PageContext::default(),
        )
        .expect("track exists");
    assert_eq!(model.margin.bottom, Length::ZERO);
    assert_eq!(model.padding.bottom, Length::ZERO);

    assert!(
        resolver
            .resolve_region(&Region::new("footer"), &layout(), &PageContext::default())
            .is_none()
    );
}

#[test]
fn test_document_order_lets_specific_theme_importance_win() {
    let config = ResolverConfig {
        mode: CascadeMode::DocumentOrder,
        strict_theme: false,
    };
    let resolver =
        Resolver::from_sources(THEME, OverrideSet::slider_gap(), config).expect("theme parses");
    let (meta, ancestors) = locate(&Region::new("top"));

    let result = resolver.resolve_traced(&meta, &ancestors, &PageContext::home());
    assert_eq!(
        result.model.margin.bottom,
        Length::px(30.0),
        "without layered precedence the more specific theme !important wins"
    );
    assert_eq!(result.origin_of(BoxProperty::MARGIN_BOTTOM), Some(Origin::Theme));
}

#[test]
fn test_strict_theme_refuses_skipped_constructs() {
    let config = ResolverConfig {
        mode: CascadeMode::Layered,
        strict_theme: true,
    };
    assert!(Resolver::from_sources(THEME, OverrideSet::slider_gap(), config).is_err());
}
