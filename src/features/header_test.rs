use super::*;

fn cfg() -> HeaderConfig {
    HeaderConfig::default()
}

#[test]
fn scrolled_toggles_at_threshold() {
    let mut state = HeaderState::new();
    assert!(!state.update(50.0, &cfg()).scrolled);
    assert!(state.update(51.0, &cfg()).scrolled);
    assert!(!state.update(10.0, &cfg()).scrolled);
}

#[test]
fn hides_when_scrolling_down_past_hide_threshold() {
    let mut state = HeaderState::new();
    state.update(290.0, &cfg());
    let classes = state.update(400.0, &cfg());
    assert!(classes.scrolled);
    assert!(classes.hidden);
}

#[test]
fn small_movements_keep_current_visibility() {
    let mut state = HeaderState::new();
    state.update(400.0, &cfg());
    assert!(state.update(500.0, &cfg()).hidden);
    // Down by less than the delta: still hidden.
    assert!(state.update(503.0, &cfg()).hidden);
    // Up by less than the delta: still hidden.
    assert!(state.update(499.0, &cfg()).hidden);
}

#[test]
fn reveals_when_scrolling_up_by_more_than_delta() {
    let mut state = HeaderState::new();
    state.update(400.0, &cfg());
    assert!(state.update(800.0, &cfg()).hidden);
    assert!(!state.update(700.0, &cfg()).hidden);
}

#[test]
fn below_hide_threshold_is_never_hidden() {
    let mut state = HeaderState::new();
    state.update(400.0, &cfg());
    assert!(state.update(900.0, &cfg()).hidden);
    assert!(!state.update(250.0, &cfg()).hidden);
    assert!(!state.update(280.0, &cfg()).hidden);
}

#[test]
fn offset_zero_clears_everything() {
    let mut state = HeaderState::new();
    state.update(400.0, &cfg());
    state.update(1200.0, &cfg());
    assert_eq!(state.classes(), HeaderClasses { scrolled: true, hidden: true });
    assert_eq!(state.update(0.0, &cfg()), HeaderClasses::default());
}

#[test]
fn negative_offsets_are_clamped_in_memory() {
    let mut state = HeaderState::new();
    let classes = state.update(-40.0, &cfg());
    assert_eq!(classes, HeaderClasses::default());
    assert!(state.last_scroll().abs() < f64::EPSILON);
}
