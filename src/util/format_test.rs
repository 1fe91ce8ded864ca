use super::*;

#[test]
fn small_numbers_have_no_separator() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(7), "7");
    assert_eq!(format_grouped(999), "999");
}

#[test]
fn thousands_are_comma_grouped() {
    assert_eq!(format_grouped(1000), "1,000");
    assert_eq!(format_grouped(1234), "1,234");
    assert_eq!(format_grouped(98_765), "98,765");
    assert_eq!(format_grouped(1_234_567), "1,234,567");
}

#[test]
fn native_locale_formatting_uses_grouping() {
    assert_eq!(format_locale(1234, "ja-JP"), "1,234");
}
