use super::*;

#[test]
fn file_name_takes_the_last_segment() {
    assert_eq!(file_name("/company/about.html"), "about.html");
    assert_eq!(file_name("about.html"), "about.html");
    assert_eq!(file_name("../services.html"), "services.html");
}

#[test]
fn directory_paths_mean_index() {
    assert_eq!(file_name("/"), "index.html");
    assert_eq!(file_name(""), "index.html");
    assert_eq!(file_name("/company/"), "index.html");
}

#[test]
fn query_and_fragment_are_ignored() {
    assert_eq!(file_name("contact.html?from=top"), "contact.html");
    assert_eq!(file_name("services.html#logistics"), "services.html");
}

#[test]
fn matching_is_by_file_name_only() {
    assert!(is_current_page("./about.html", "/site/about.html"));
    assert!(is_current_page("/", "/index.html"));
    assert!(!is_current_page("about.html", "/services.html"));
    assert!(!is_current_page("About.html", "/about.html"));
}

#[test]
fn in_page_anchors_never_mark_the_home_page() {
    assert!(!is_current_page("#", "/"));
    assert!(!is_current_page("#services", "/index.html"));
    assert!(!is_current_page("", "/index.html"));
    assert!(!is_current_page("  ", "/"));
}

#[test]
fn page_links_with_fragments_still_match() {
    assert!(is_current_page("index.html#services", "/index.html"));
    assert!(is_current_page("/#services", "/"));
}
