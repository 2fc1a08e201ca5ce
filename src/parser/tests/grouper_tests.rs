//! Tests for lazy record grouping by (tag, action) key

use super::{extract, grouper_from};

#[test]
fn test_consecutive_runs_become_groups() {
    let content = extract(&[
        "REF\tA\tZNE\tQ\tScotland",
        "REF\tA\tZNE\tS\tSouthern",
        "LOC\tA\tHORSHAM\tHorsham\t\t\t530000\t160000\tM\tQ\t87149\tN\t",
    ]);
    let mut groups = grouper_from(&content);

    let key = groups.next_group().unwrap().unwrap();
    assert_eq!((key.tag.as_str(), key.action.as_str()), ("REF", "A"));
    assert_eq!(groups.next_row().unwrap().unwrap().payload()[1], "Q");
    assert_eq!(groups.next_row().unwrap().unwrap().payload()[1], "S");
    assert!(groups.next_row().unwrap().is_none());

    let key = groups.next_group().unwrap().unwrap();
    assert_eq!((key.tag.as_str(), key.action.as_str()), ("LOC", "A"));
    assert_eq!(groups.next_row().unwrap().unwrap().payload()[0], "HORSHAM");
    assert!(groups.next_row().unwrap().is_none());

    assert!(groups.next_group().unwrap().is_none());
}

#[test]
fn test_advance_drains_unconsumed_rows() {
    let content = extract(&[
        "REF\tA\tZNE\tQ\tScotland",
        "REF\tA\tZNE\tS\tSouthern",
        "TLD\tA\tHST\t\t125\t\tHST set\tD\t\t",
    ]);
    let mut groups = grouper_from(&content);

    // Skip the REF group without reading any of its rows
    assert_eq!(groups.next_group().unwrap().unwrap().tag, "REF");
    let key = groups.next_group().unwrap().unwrap();
    assert_eq!(key.tag, "TLD");
    assert_eq!(groups.next_row().unwrap().unwrap().payload()[0], "HST");
}

#[test]
fn test_non_adjacent_runs_stay_separate() {
    // Grouping is positional: a re-appearing key starts a NEW group, the
    // two runs are never merged
    let content = extract(&[
        "REF\tA\tZNE\tQ\tScotland",
        "TLD\tA\tHST\t\t125\t\tHST set\tD\t\t",
        "REF\tA\tZNE\tS\tSouthern",
    ]);
    let mut groups = grouper_from(&content);

    let mut keys = Vec::new();
    while let Some(key) = groups.next_group().unwrap() {
        keys.push(key.tag);
    }
    assert_eq!(keys, ["REF", "TLD", "REF"]);
}

#[test]
fn test_action_code_is_part_of_the_key() {
    let content = extract(&["REF\tA\tZNE\tQ\tScotland", "REF\tC\tZNE\tQ\tScotland"]);
    let mut groups = grouper_from(&content);

    let key = groups.next_group().unwrap().unwrap();
    assert_eq!(key.action, "A");
    let key = groups.next_group().unwrap().unwrap();
    assert_eq!(key.action, "C");
    assert!(groups.next_group().unwrap().is_none());
}

#[test]
fn test_empty_input() {
    let mut groups = grouper_from("");
    assert!(groups.next_group().unwrap().is_none());
}

#[test]
fn test_next_row_before_first_group_is_none() {
    let content = extract(&["REF\tA\tZNE\tQ\tScotland"]);
    let mut groups = grouper_from(&content);
    assert!(groups.next_row().unwrap().is_none());
}
