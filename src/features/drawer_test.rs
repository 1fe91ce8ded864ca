use super::*;

fn snapshot() -> Vec<&'static str> {
    vec!["trigger", "home", "services", "contact"]
}

#[test]
fn starts_closed_and_ignores_keys() {
    let drawer: Drawer<&str> = Drawer::new();
    assert!(!drawer.is_open());
    assert_eq!(drawer.on_key("Escape", false, None, Vec::new), KeyAction::Ignore);
}

#[test]
fn close_restores_the_captured_scroll_offset() {
    let mut drawer = Drawer::new();
    drawer.open(742.0, snapshot());
    assert!(drawer.is_open());
    assert_eq!(drawer.body_offset(), "-742px");
    assert_eq!(drawer.close(), Some(742.0));
    assert!(!drawer.is_open());
}

#[test]
fn closing_twice_restores_only_once() {
    let mut drawer = Drawer::new();
    drawer.open(10.0, snapshot());
    assert!(drawer.close().is_some());
    assert_eq!(drawer.close(), None);
}

#[test]
fn escape_closes_when_open() {
    let mut drawer = Drawer::new();
    drawer.open(0.0, snapshot());
    assert_eq!(drawer.on_key("Escape", false, Some(&"home"), Vec::new), KeyAction::Close);
}

#[test]
fn tab_from_last_wraps_to_trigger() {
    let mut drawer = Drawer::new();
    drawer.open(0.0, snapshot());
    assert_eq!(drawer.on_key("Tab", false, Some(&"contact"), Vec::new), KeyAction::Focus("trigger"));
}

#[test]
fn shift_tab_from_trigger_wraps_to_last() {
    let mut drawer = Drawer::new();
    drawer.open(0.0, snapshot());
    assert_eq!(drawer.on_key("Tab", true, Some(&"trigger"), Vec::new), KeyAction::Focus("contact"));
}

#[test]
fn tab_inside_the_drawer_uses_default_order() {
    let mut drawer = Drawer::new();
    drawer.open(0.0, snapshot());
    assert_eq!(drawer.on_key("Tab", false, Some(&"home"), Vec::new), KeyAction::Ignore);
    assert_eq!(drawer.on_key("Tab", true, Some(&"services"), Vec::new), KeyAction::Ignore);
}

#[test]
fn other_keys_are_ignored() {
    let mut drawer = Drawer::new();
    drawer.open(0.0, snapshot());
    assert_eq!(drawer.on_key("Enter", false, Some(&"contact"), Vec::new), KeyAction::Ignore);
}

#[test]
fn snapshot_is_used_instead_of_refresh() {
    let mut drawer = Drawer::new();
    drawer.open(0.0, snapshot());
    let action = drawer.on_key("Tab", false, Some(&"contact"), || vec!["other"]);
    assert_eq!(action, KeyAction::Focus("trigger"));
}

#[test]
fn trap_target_handles_empty_and_unfocused() {
    let empty: [&str; 0] = [];
    assert_eq!(trap_target(&empty, Some(&"x"), false), None);
    assert_eq!(trap_target(&["a", "b"], None, false), None);
    assert_eq!(trap_target(&["only"], Some(&"only"), false), Some(&"only"));
}
