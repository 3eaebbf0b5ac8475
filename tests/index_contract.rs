//! Contract tests for the location to word index
//!
//! Covers the empty baseline, a single observation, batch adds, and the
//! detachment of snapshots taken from views.

use std::path::{Path, PathBuf};

use textindex::{SimpleIndex, WordIndex};

fn empty_index() -> (WordIndex<PathBuf>, PathBuf) {
    (WordIndex::new(), PathBuf::from("empty.txt"))
}

fn single_add_index() -> (WordIndex<PathBuf>, PathBuf) {
    let location = PathBuf::from("hello.txt");
    let mut index = WordIndex::new();
    index.add(location.clone(), "hello");
    (index, location)
}

#[test]
fn test_display_is_not_an_identity_string() {
    let (index, _) = empty_index();
    let rendered = index.to_string();

    assert!(!rendered.starts_with("WordIndex@"), "{}", rendered);
    assert!(!rendered.is_empty());
}

#[test]
fn test_display_includes_added_word() {
    let (index, _) = single_add_index();
    assert!(index.to_string().contains("hello"), "{}", index);
}

#[test]
fn test_empty_index_baseline() {
    let (index, location) = empty_index();

    assert_eq!(index.size(), 0, "{}", index);
    assert_eq!(index.size_of(&location), 0, "{}", index);
    assert!(!index.contains(&location), "{}", index);
    assert!(!index.contains_word(&location, "empty"), "{}", index);
    assert!(index.locations().is_empty(), "{}", index);
    assert!(index.words(&location).is_empty(), "{}", index);
    assert!(index.is_empty());
    assert_eq!(index.word_count(), 0);
}

#[test]
fn test_single_add_counts() {
    let (index, location) = single_add_index();

    assert_eq!(index.size(), 1, "{}", index);
    assert_eq!(index.size_of(&location), 1, "{}", index);
}

#[test]
fn test_single_add_membership() {
    let (index, location) = single_add_index();

    assert!(index.contains(&location), "{}", index);
    assert!(index.contains_word(&location, "hello"), "{}", index);
    assert!(!index.contains_word(&location, "world"), "{}", index);
    assert!(!index.contains_word(Path::new("world.txt"), "hello"), "{}", index);
}

#[test]
fn test_single_add_views() {
    let (index, location) = single_add_index();

    let locations = index.locations();
    assert!(locations.contains(&location), "{}", index);
    assert_eq!(locations.len(), 1, "{}", index);

    let words = index.words(&location);
    assert!(words.contains("hello"), "{}", index);
    assert_eq!(words.len(), 1, "{}", index);
}

#[test]
fn test_double_add_is_ignored() {
    let (mut index, location) = single_add_index();

    assert!(!index.add(location.clone(), "hello"));
    assert_eq!(index.size_of(&location), 1, "{}", index);
}

#[test]
fn test_add_new_word() {
    let (mut index, location) = single_add_index();

    assert!(index.add(location.clone(), "world"));
    assert_eq!(index.size_of(&location), 2, "{}", index);
    assert_eq!(index.size(), 1, "{}", index);
}

#[test]
fn test_add_new_location() {
    let (mut index, _) = single_add_index();

    index.add(PathBuf::from("world.txt"), "world");
    assert_eq!(index.size(), 2, "{}", index);
}

#[test]
fn test_batch_of_known_word() {
    let (mut index, location) = single_add_index();

    assert_eq!(index.add_all(location.clone(), ["hello"]), 0);
    assert_eq!(index.size_of(&location), 1, "{}", index);
}

#[test]
fn test_batch_with_new_word() {
    let (mut index, location) = single_add_index();

    assert_eq!(index.add_all(location.clone(), ["hello", "world"]), 1);
    assert_eq!(index.size_of(&location), 2, "{}", index);
}

#[test]
fn test_empty_batch_is_noop() {
    let (mut index, location) = single_add_index();
    let before = index.clone();

    index.add_all(location.clone(), Vec::<String>::new());
    index.add_all(PathBuf::from("other.txt"), Vec::<&str>::new());

    assert_eq!(index, before);
    assert!(!index.contains(Path::new("other.txt")));
}

#[test]
fn test_locations_snapshot_is_detached() {
    let (index, location) = single_add_index();

    let mut snapshot = index.locations().to_vec();
    snapshot.clear();

    assert!(snapshot.is_empty());
    assert!(index.contains(&location), "{}", index);
    assert_eq!(index.locations().len(), 1, "{}", index);
}

#[test]
fn test_words_snapshot_is_detached() {
    let (index, location) = single_add_index();

    let mut snapshot = index.words(&location).to_vec();
    snapshot.clear();
    snapshot.push("intruder".to_string());

    assert!(index.contains_word(&location, "hello"), "{}", index);
    assert!(!index.contains_word(&location, "intruder"), "{}", index);
    assert_eq!(index.words(&location).to_vec(), vec!["hello"]);
}

#[test]
fn test_generic_over_location_type() {
    let mut by_id: WordIndex<u64> = WordIndex::new();
    by_id.add_all(7, ["seven", "sept", "sieben"]);
    by_id.add(8, "eight");

    assert_eq!(by_id.size(), 2);
    assert_eq!(by_id.size_of(&7u64), 3);
    assert!(by_id.contains_word(&8u64, "eight"));
    assert_eq!(by_id.locations().to_vec(), vec![7, 8]);

    let mut by_url: WordIndex<String> = WordIndex::new();
    by_url.add("https://example.com/a".to_string(), "page");

    assert!(by_url.contains("https://example.com/a"));
    assert_eq!(by_url.word_count(), 1);
}

#[test]
fn test_iter_visits_every_location() {
    let mut index = WordIndex::new();
    index.add_all("a.txt", ["one", "two"]);
    index.add_all("b.txt", ["three"]);

    let seen: Vec<(&str, usize)> = index
        .iter()
        .map(|(location, words)| (*location, words.len()))
        .collect();

    assert_eq!(seen, vec![("a.txt", 2), ("b.txt", 1)]);
}
