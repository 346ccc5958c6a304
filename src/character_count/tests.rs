//! Tests for character_count module

use super::*;

// ============================================================================
// Character Counting
// ============================================================================

#[test]
fn test_empty_text_shows_full_allowance() {
    let status = CharacterCount::characters(200).status("");
    assert_eq!(status.count, 0);
    assert_eq!(status.message, "200 characters remaining");
    assert!(status.visible);
    assert!(!status.over_limit);
}

#[test]
fn test_remaining_characters() {
    let status = CharacterCount::characters(200).status("Hello");
    assert_eq!(status.remaining, 195);
    assert_eq!(status.message, "195 characters remaining");
}

#[test]
fn test_singular_and_zero() {
    let counter = CharacterCount::characters(10);
    assert_eq!(counter.status("123456789").message, "1 character remaining");
    assert_eq!(counter.status("1234567890").message, "0 characters remaining");
    assert!(!counter.status("1234567890").over_limit);
}

#[test]
fn test_over_limit() {
    let counter = CharacterCount::characters(10);

    let status = counter.status("12345678901234");
    assert!(status.over_limit);
    assert_eq!(status.remaining, -4);
    assert_eq!(status.message, "4 characters too many");

    assert_eq!(counter.status("12345678901").message, "1 character too many");
}

#[test]
fn test_counts_unicode_scalars() {
    let status = CharacterCount::characters(5).status("café");
    assert_eq!(status.count, 4);
    assert_eq!(status.message, "1 character remaining");
}

// ============================================================================
// Word Counting
// ============================================================================

#[test]
fn test_word_counting() {
    let counter = CharacterCount::words(100);
    assert_eq!(counter.status("").message, "100 words remaining");
    assert_eq!(
        counter.status("one two three four five").message,
        "95 words remaining"
    );
}

#[test]
fn test_word_singular_and_over() {
    assert_eq!(
        CharacterCount::words(5).status("one two three four").message,
        "1 word remaining"
    );
    assert_eq!(
        CharacterCount::words(3).status("one two three four five").message,
        "2 words too many"
    );
}

#[test]
fn test_words_split_on_any_whitespace() {
    let counter = CharacterCount::words(10);
    assert_eq!(counter.count("  one\ttwo\n\nthree  "), 3);
}

// ============================================================================
// Threshold
// ============================================================================

#[test]
fn test_threshold_hides_message_below() {
    let counter = CharacterCount::characters(100).with_threshold(75);
    assert!(!counter.status("test").visible);
}

#[test]
fn test_threshold_shows_message_at_and_above() {
    let counter = CharacterCount::characters(100).with_threshold(75);
    assert!(counter.status(&"a".repeat(75)).visible);
    assert!(counter.status(&"a".repeat(76)).visible);
    assert!(!counter.status(&"a".repeat(74)).visible);
}

#[test]
fn test_threshold_is_clamped() {
    let counter = CharacterCount::characters(10).with_threshold(250);
    assert_eq!(counter.threshold(), Some(100));
    assert!(!counter.status("123456789").visible);
    assert!(counter.status("12345678901").visible);
}

#[test]
fn test_threshold_with_huge_limit() {
    let counter = CharacterCount::characters(usize::MAX).with_threshold(75);
    let status = counter.status("abc");
    assert!(!status.visible);
    assert!(!status.over_limit);
}

// ============================================================================
// Hint and Validation
// ============================================================================

#[test]
fn test_fallback_hint() {
    assert_eq!(
        CharacterCount::characters(200).fallback_hint(),
        "You can enter up to 200 characters"
    );
    assert_eq!(
        CharacterCount::words(1).fallback_hint(),
        "You can enter up to 1 word"
    );
}

#[test]
fn test_validate_over_limit() {
    let counter = CharacterCount::characters(10);
    let result = counter.validate("12345678901", "description");
    assert!(!result.is_valid);
    assert_eq!(
        result.message(),
        "Description must be 10 characters or fewer"
    );
    assert!(counter.validate("1234567890", "description").is_valid);
}

#[test]
fn test_limit_serializes_with_unit_tag() {
    let json = serde_json::to_value(CountLimit::Words(50)).unwrap();
    assert_eq!(json, serde_json::json!({"unit": "words", "max": 50}));
}
