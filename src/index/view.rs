//! Read-only views over index contents
//!
//! Views borrow the index immutably and expose no mutating operations.
//! `to_vec` copies the contents out; changing the copy never reaches the
//! index.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use indexmap::map::Keys;
use indexmap::{IndexMap, IndexSet};

/// View of the locations stored in an index, in insertion order
pub struct Locations<'a, L> {
    entries: &'a IndexMap<L, IndexSet<String>>,
}

impl<'a, L> Locations<'a, L> {
    pub(super) fn new(entries: &'a IndexMap<L, IndexSet<String>>) -> Self {
        Self { entries }
    }

    /// Number of locations in the view
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Keys<'a, L, IndexSet<String>> {
        self.entries.keys()
    }

    /// Copy the locations out into an owned snapshot
    pub fn to_vec(&self) -> Vec<L>
    where
        L: Clone,
    {
        self.entries.keys().cloned().collect()
    }
}

impl<L: Hash + Eq> Locations<'_, L> {
    pub fn contains<Q>(&self, location: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.contains_key(location)
    }
}

impl<L> Clone for Locations<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Locations<'_, L> {}

impl<L: fmt::Debug> fmt::Debug for Locations<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}

impl<'a, L> IntoIterator for Locations<'a, L> {
    type Item = &'a L;
    type IntoIter = Keys<'a, L, IndexSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.keys()
    }
}

impl<'a, L> IntoIterator for &Locations<'a, L> {
    type Item = &'a L;
    type IntoIter = Keys<'a, L, IndexSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.keys()
    }
}

/// View of the words stored for one location, in first-seen order
///
/// A view over an unknown location is empty.
#[derive(Clone, Copy)]
pub struct Words<'a> {
    words: Option<&'a IndexSet<String>>,
}

impl<'a> Words<'a> {
    pub(super) fn new(words: Option<&'a IndexSet<String>>) -> Self {
        Self { words }
    }

    /// Number of words in the view
    pub fn len(&self) -> usize {
        self.words.map_or(0, IndexSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.is_some_and(|words| words.contains(word))
    }

    pub fn iter(&self) -> WordsIter<'a> {
        WordsIter {
            inner: self.words.map(IndexSet::iter),
        }
    }

    /// Copy the words out into an owned snapshot
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

impl fmt::Debug for Words<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for Words<'a> {
    type Item = &'a str;
    type IntoIter = WordsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Words<'a> {
    type Item = &'a str;
    type IntoIter = WordsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the words of a [`Words`] view
pub struct WordsIter<'a> {
    inner: Option<indexmap::set::Iter<'a, String>>,
}

impl<'a> Iterator for WordsIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl ExactSizeIterator for WordsIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndexMap<String, IndexSet<String>> {
        let mut entries = IndexMap::new();
        let words: IndexSet<String> = ["hello", "world"].iter().map(|w| w.to_string()).collect();
        entries.insert("a.txt".to_string(), words);
        entries
    }

    #[test]
    fn test_locations_view() {
        let entries = sample();
        let view = Locations::new(&entries);

        assert_eq!(view.len(), 1);
        assert!(view.contains("a.txt"));
        assert!(!view.contains("b.txt"));
        assert_eq!(view.iter().collect::<Vec<_>>(), vec!["a.txt"]);
    }

    #[test]
    fn test_words_view_preserves_order() {
        let entries = sample();
        let view = Words::new(entries.get("a.txt"));

        assert_eq!(view.len(), 2);
        assert_eq!(view.to_vec(), vec!["hello", "world"]);
        assert_eq!(view.iter().len(), 2);
    }

    #[test]
    fn test_missing_words_view_is_empty() {
        let view = Words::new(None);

        assert!(view.is_empty());
        assert!(!view.contains("hello"));
        assert_eq!(view.iter().next(), None);
        assert_eq!(format!("{:?}", view), "[]");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let entries = sample();
        let view = Words::new(entries.get("a.txt"));

        let mut snapshot = view.to_vec();
        snapshot.clear();

        assert!(view.contains("hello"));
        assert_eq!(entries["a.txt"].len(), 2);
    }
}
