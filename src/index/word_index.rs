use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};
use tracing::trace;

use super::view::{Locations, Words};
use super::SimpleIndex;

/// Hash-based location to word index
///
/// Locations and the words under each location iterate in insertion order,
/// so output built from the index is reproducible.
#[derive(Clone)]
pub struct WordIndex<L> {
    entries: IndexMap<L, IndexSet<String>>,
}

impl<L> WordIndex<L> {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty index with room for `locations` entries
    pub fn with_capacity(locations: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(locations),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of stored (location, word) pairs
    pub fn word_count(&self) -> usize {
        self.entries.values().map(IndexSet::len).sum()
    }

    /// Iterate over every location with its words
    pub fn iter(&self) -> impl Iterator<Item = (&L, Words<'_>)> + '_ {
        self.entries
            .iter()
            .map(|(location, words)| (location, Words::new(Some(words))))
    }
}

impl<L> Default for WordIndex<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Hash + Eq> SimpleIndex<L> for WordIndex<L> {
    fn add<W>(&mut self, location: L, word: W) -> bool
    where
        W: AsRef<str> + Into<String>,
    {
        let known = self.entries.len();
        let words = match self.entries.entry(location) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(locations = known + 1, "new location");
                entry.insert(IndexSet::new())
            }
        };

        if words.contains(word.as_ref()) {
            return false;
        }
        words.insert(word.into())
    }

    fn add_all<I>(&mut self, location: L, words: I) -> usize
    where
        L: Clone,
        I: IntoIterator,
        I::Item: AsRef<str> + Into<String>,
    {
        let mut words = words.into_iter().peekable();
        if words.peek().is_none() {
            return 0;
        }

        let known = self.entries.len();
        let stored = match self.entries.entry(location) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(locations = known + 1, "new location");
                entry.insert(IndexSet::new())
            }
        };
        let before = stored.len();
        for word in words {
            if !stored.contains(word.as_ref()) {
                stored.insert(word.into());
            }
        }
        stored.len() - before
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn size_of<Q>(&self, location: &Q) -> usize
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.get(location).map_or(0, IndexSet::len)
    }

    fn contains<Q>(&self, location: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.contains_key(location)
    }

    fn contains_word<Q>(&self, location: &Q, word: &str) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries
            .get(location)
            .is_some_and(|words| words.contains(word))
    }

    fn locations(&self) -> Locations<'_, L> {
        Locations::new(&self.entries)
    }

    fn words<Q>(&self, location: &Q) -> Words<'_>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        Words::new(self.entries.get(location))
    }
}

impl<L: Hash + Eq> PartialEq for WordIndex<L> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<L: Hash + Eq> Eq for WordIndex<L> {}

impl<L, W> Extend<(L, W)> for WordIndex<L>
where
    L: Hash + Eq,
    W: AsRef<str> + Into<String>,
{
    fn extend<T: IntoIterator<Item = (L, W)>>(&mut self, iter: T) {
        for (location, word) in iter {
            self.add(location, word);
        }
    }
}

impl<L, W> FromIterator<(L, W)> for WordIndex<L>
where
    L: Hash + Eq,
    W: AsRef<str> + Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (L, W)>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

/// Serializes as a map from location to its list of words
impl<L: Serialize> Serialize for WordIndex<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<L: fmt::Debug> fmt::Debug for WordIndex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<L: fmt::Debug> fmt::Display for WordIndex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} location(s), {} word(s)",
            self.entries.len(),
            self.word_count()
        )?;
        for (location, words) in &self.entries {
            write!(f, "\n  {:?}:", location)?;
            for word in words {
                write!(f, " {}", word)?;
            }
        }
        Ok(())
    }
}
