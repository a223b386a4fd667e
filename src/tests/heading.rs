use super::{classify, HEADING_STYLE};

#[test]
fn test_spaced_and_unspaced_forms() {
    assert_eq!(classify("Heading 2"), Some(2));
    assert_eq!(classify("Heading2"), Some(2));
    assert_eq!(classify("Heading   3"), Some(3));
}

#[test]
fn test_case_insensitive() {
    // Word's internal style names are lowercase
    assert_eq!(classify("heading 1"), Some(1));
    assert_eq!(classify("HEADING 4"), Some(4));
}

#[test]
fn test_multi_digit_level() {
    assert_eq!(classify("Heading10"), Some(10));
}

#[test]
fn test_trailing_characters_break_match() {
    assert_eq!(classify("Heading 1B"), None);
    assert_eq!(classify("Heading 1 "), None);
    assert_eq!(classify("Heading 1 Char"), None);
}

#[test]
fn test_non_heading_styles() {
    assert_eq!(classify(""), None);
    assert_eq!(classify("Normal"), None);
    assert_eq!(classify("Heading"), None);
    assert_eq!(classify("Title"), None);
    assert_eq!(classify("My Heading 2"), None);
}

#[test]
fn test_level_zero_and_overflow_are_body_text() {
    assert_eq!(classify("Heading 0"), None);
    assert_eq!(classify("Heading 99999999999"), None);
}

#[test]
fn test_non_ascii_digits_are_not_levels() {
    assert_eq!(classify("Heading ٣"), None);
    assert_eq!(classify("Heading２"), None);
    assert!(!HEADING_STYLE.is_match("Heading ٣"));
    assert!(!HEADING_STYLE.is_match("Heading 1٣"));
}
