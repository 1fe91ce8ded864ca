#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn options_follow_scroll_config() {
    let options = RevealOptions::from_config(&ScrollConfig::default());
    assert_eq!(options.threshold, 0.1);
    assert_eq!(options.root_margin, "0px 0px -60px 0px");
}

#[test]
fn threshold_is_clamped_to_a_ratio() {
    let config = ScrollConfig { reveal_threshold: 3.0, ..ScrollConfig::default() };
    assert_eq!(RevealOptions::from_config(&config).threshold, 1.0);
    let config = ScrollConfig { reveal_threshold: -1.0, ..ScrollConfig::default() };
    assert_eq!(RevealOptions::from_config(&config).threshold, 0.0);
}

#[test]
fn selector_covers_every_animation_variant() {
    for class in ["fade-in", "fade-in-left", "fade-in-right", "scale-in"] {
        assert!(ANIMATED_SELECTOR.split(", ").any(|s| s == format!(".{class}")));
    }
}
