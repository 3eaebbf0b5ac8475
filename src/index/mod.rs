//! Location to word index
//!
//! An index records which words were observed at which location. Locations
//! are caller-chosen keys (paths, URLs, ids); words are stored per location
//! in first-seen order with duplicates suppressed.
//!
//! Every query is total: an unknown location reads as size 0, `false`, or
//! an empty view.

mod view;
mod word_index;

use std::borrow::Borrow;
use std::hash::Hash;

pub use view::{Locations, Words, WordsIter};
pub use word_index::WordIndex;

/// Operations shared by location/word indexes
///
/// Implementors provide the single-word `add` and the queries; batch adds
/// come for free through [`SimpleIndex::add_all`].
pub trait SimpleIndex<L> {
    /// Record `word` at `location`
    ///
    /// Returns `true` if the pair was not already stored. Adding an existing
    /// pair leaves the index unchanged.
    fn add<W>(&mut self, location: L, word: W) -> bool
    where
        W: AsRef<str> + Into<String>;

    /// Record every word in `words` at `location`, in order
    ///
    /// Behaves exactly like calling [`SimpleIndex::add`] once per word.
    /// Returns how many words were newly stored. An empty batch is a no-op
    /// and does not create the location.
    fn add_all<I>(&mut self, location: L, words: I) -> usize
    where
        L: Clone,
        I: IntoIterator,
        I::Item: AsRef<str> + Into<String>,
    {
        let mut added = 0;
        for word in words {
            if self.add(location.clone(), word) {
                added += 1;
            }
        }
        added
    }

    /// Number of locations stored
    fn size(&self) -> usize;

    /// Number of words stored for `location`, 0 if it is unknown
    fn size_of<Q>(&self, location: &Q) -> usize
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Whether `location` is stored
    fn contains<Q>(&self, location: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Whether `word` is stored for `location`
    fn contains_word<Q>(&self, location: &Q, word: &str) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Read-only view of the stored locations
    fn locations(&self) -> Locations<'_, L>;

    /// Read-only view of the words stored for `location`
    ///
    /// Unknown locations yield an empty view.
    fn words<Q>(&self, location: &Q) -> Words<'_>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq;
}
