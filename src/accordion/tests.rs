//! Tests for accordion module

use super::models::*;
use super::*;

fn sections() -> Vec<AccordionSection> {
    vec![
        AccordionSection::new("writing", "Writing well for the web")
            .with_summary("An introduction to clear and concise writing."),
        AccordionSection::new("specialists", "Writing well for specialists"),
        AccordionSection::new("know-your-audience", "Know your audience"),
    ]
}

// ============================================================================
// Section Tests
// ============================================================================

#[test]
fn test_sections_hidden_by_default() {
    let accordion = Accordion::new(sections());
    assert_eq!(accordion.len(), 3);
    for index in 0..accordion.len() {
        assert!(!accordion.is_expanded(index));
    }
    assert!(!accordion.all_expanded());
    assert_eq!(accordion.toggle_all_label(), "Show all sections");
}

#[test]
fn test_section_can_start_expanded() {
    let mut items = sections();
    items[1] = items[1].clone().expanded();
    let accordion = Accordion::new(items);

    assert!(!accordion.is_expanded(0));
    assert!(accordion.is_expanded(1));
}

#[test]
fn test_toggle_opens_then_closes() {
    let mut accordion = Accordion::new(sections());

    assert_eq!(accordion.toggle(0), Some(true));
    assert!(accordion.is_expanded(0));
    assert!(!accordion.is_expanded(1));

    assert_eq!(accordion.toggle(0), Some(false));
    assert!(!accordion.is_expanded(0));
}

#[test]
fn test_toggle_out_of_range_is_ignored() {
    let mut accordion = Accordion::new(sections());
    assert_eq!(accordion.toggle(3), None);
    assert!(!accordion.is_expanded(3));
    assert!(accordion.sections().iter().all(|s| !s.expanded));
}

// ============================================================================
// Show All Tests
// ============================================================================

#[test]
fn test_show_all_and_hide_all() {
    let mut accordion = Accordion::new(sections());

    accordion.show_all();
    assert!(accordion.all_expanded());
    assert_eq!(accordion.toggle_all_label(), "Hide all sections");

    accordion.hide_all();
    assert!(accordion.sections().iter().all(|s| !s.expanded));
    assert_eq!(accordion.toggle_all_label(), "Show all sections");
}

#[test]
fn test_opening_every_section_counts_as_all_expanded() {
    let mut accordion = Accordion::new(sections());
    accordion.toggle(0);
    accordion.toggle(1);
    assert!(!accordion.all_expanded());

    accordion.toggle(2);
    assert!(accordion.all_expanded());
}

#[test]
fn test_toggle_all_with_some_open_opens_the_rest() {
    let mut accordion = Accordion::new(sections());
    accordion.toggle(1);

    assert!(accordion.toggle_all());
    assert!(accordion.all_expanded());

    assert!(!accordion.toggle_all());
    assert!(!accordion.is_expanded(1));
}

#[test]
fn test_sections_deserialize_collapsed() {
    let section: AccordionSection =
        serde_json::from_str(r#"{"id": "a", "heading": "Section A"}"#).unwrap();
    assert_eq!(section, AccordionSection::new("a", "Section A"));
}
