#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn bare_fragment_and_top_scroll_to_origin() {
    assert_eq!(AnchorTarget::parse("#"), Some(AnchorTarget::Top));
    assert_eq!(AnchorTarget::parse("#top"), Some(AnchorTarget::Top));
}

#[test]
fn named_fragment_targets_an_element() {
    assert_eq!(AnchorTarget::parse("#services"), Some(AnchorTarget::Element("services")));
}

#[test]
fn non_fragments_are_not_handled() {
    assert_eq!(AnchorTarget::parse("about.html"), None);
    assert_eq!(AnchorTarget::parse("about.html#team"), None);
    assert_eq!(AnchorTarget::parse(""), None);
}

#[test]
fn destination_subtracts_header_height() {
    assert_eq!(scroll_destination(400.0, 1000.0, Some(72.0), 80.0), 1328.0);
}

#[test]
fn missing_header_uses_fallback_height() {
    assert_eq!(scroll_destination(400.0, 1000.0, None, 80.0), 1320.0);
    assert_eq!(scroll_destination(400.0, 1000.0, Some(0.0), 80.0), 1320.0);
}

#[test]
fn targets_above_the_viewport_scroll_backwards() {
    assert_eq!(scroll_destination(-300.0, 500.0, Some(100.0), 80.0), 100.0);
}

#[test]
fn missing_target_passes_the_click_through() {
    let plan = plan_click("#nowhere", |_| None, 500.0, || Some(72.0), 80.0);
    assert_eq!(plan, ScrollPlan::PassThrough);
}

#[test]
fn existing_target_is_scrolled_to_below_the_header() {
    let plan = plan_click(
        "#faq",
        |id| (id == "faq").then_some(240.0),
        1000.0,
        || Some(60.0),
        80.0,
    );
    assert_eq!(plan, ScrollPlan::ScrollTo(1180.0));
}

#[test]
fn top_link_scrolls_to_origin_without_lookup() {
    let plan = plan_click("#top", |_| Some(999.0), 1000.0, || None, 80.0);
    assert_eq!(plan, ScrollPlan::ScrollTo(0.0));
}
