use super::*;

#[test]
fn hidden_until_past_threshold() {
    assert!(!is_visible(0.0, 600.0));
    assert!(!is_visible(600.0, 600.0));
    assert!(is_visible(600.5, 600.0));
    assert!(is_visible(4000.0, 600.0));
}
