//! Deferred construction of nested lists.
//!
//! Responses such as the full cosmetics listing carry thousands of entries
//! of which a caller often reads a handful. [`LazyList`] keeps the raw
//! payload entries and builds each element on first access, caching the
//! result so every later access returns the same object.
//!
//! Each slot is a [`OnceLock`], so concurrent first access to one index from
//! several threads still builds the element exactly once.

use crate::construct::Construct;
use crate::error::{Error, Result};
use crate::flags::ResponseFlags;
use crate::identity::HasIdentity;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::{Arc, OnceLock};
use tracing::debug;

type Builder<T> = Arc<dyn Fn(&Value) -> Result<T> + Send + Sync>;

/// A list whose elements are built from raw payload entries on first access.
pub struct LazyList<T> {
    raw: Vec<Value>,
    cache: Vec<OnceLock<Result<T>>>,
    build: Builder<T>,
}

impl<T> LazyList<T> {
    /// Wrap `raw` entries, building each with `build` when first read.
    pub fn new<F>(raw: Vec<Value>, build: F) -> Self
    where
        F: Fn(&Value) -> Result<T> + Send + Sync + 'static,
    {
        let cache = std::iter::repeat_with(OnceLock::new).take(raw.len()).collect();
        Self {
            raw,
            cache,
            build: Arc::new(build),
        }
    }

    /// Number of entries. Never builds an element.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// True if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The `index`-th element, built on first access.
    ///
    /// Returns `None` past the end and `Some(Err(..))` if the entry could not
    /// be built; a failed entry fails the same way on every access.
    pub fn get(&self, index: usize) -> Option<Result<&T>> {
        let slot = self.cache.get(index)?;
        let built = slot.get_or_init(|| {
            debug!(index, "Building lazy list entry");
            (self.build)(&self.raw[index])
        });
        Some(built.as_ref().map_err(Clone::clone))
    }

    /// The first element.
    pub fn first(&self) -> Option<Result<&T>> {
        self.get(0)
    }

    /// The payload entries as received, before flag filtering.
    #[must_use]
    pub fn raw(&self) -> &[Value] {
        &self.raw
    }

    /// Number of elements built so far.
    #[must_use]
    pub fn built_count(&self) -> usize {
        self.cache.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Lazy iterator in original order. Can be restarted any number of times;
    /// elements are still built at most once.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Build every element and collect clones of them.
    ///
    /// # Errors
    ///
    /// The first entry that fails to build.
    pub fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.iter().map(|item| item.cloned()).collect()
    }
}

impl<T: HasIdentity> LazyList<T> {
    /// First element whose id equals `id`, building elements up to it.
    pub fn find_by_id(&self, id: &str) -> Option<Result<&T>> {
        self.iter()
            .find(|item| item.as_ref().map_or(true, |item| item.id() == id))
    }
}

impl<T: Construct + 'static> LazyList<T> {
    /// Build a list from a JSON array payload; `null` is an empty list.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedResponse`] if the payload is neither an array nor null.
    pub fn from_payload(payload: Value, flags: ResponseFlags) -> Result<Self> {
        match payload {
            Value::Array(raw) => Ok(Self::with_flags(raw, flags)),
            Value::Null => Ok(Self::with_flags(Vec::new(), flags)),
            other => Err(Error::MalformedResponse(format!(
                "expected a list, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Wrap `raw` entries of a constructible model.
    #[must_use]
    pub fn with_flags(raw: Vec<Value>, flags: ResponseFlags) -> Self {
        Self::new(raw, move |entry| T::construct_ref(entry, flags))
    }

    /// Replace the flags used to build elements, dropping anything already built.
    pub fn bind_flags(&mut self, flags: ResponseFlags) {
        self.build = Arc::new(move |entry| T::construct_ref(entry, flags));
        for slot in &mut self.cache {
            slot.take();
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

impl<T: Construct + 'static> Default for LazyList<T> {
    fn default() -> Self {
        Self::with_flags(Vec::new(), ResponseFlags::INCLUDE_NOTHING)
    }
}

impl<T: Clone> Clone for LazyList<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            cache: self.cache.clone(),
            build: Arc::clone(&self.build),
        }
    }
}

impl<T: PartialEq> PartialEq for LazyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for item in self {
            match item {
                Ok(item) => list.entry(item),
                Err(err) => list.entry(&err),
            };
        }
        list.finish()
    }
}

/// Writes every entry as its built element, so flag-gated fields dropped at
/// construction stay dropped. Entries that fail to build are written raw.
impl<T: Serialize> Serialize for LazyList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (item, raw) in self.iter().zip(&self.raw) {
            match item {
                Ok(item) => seq.serialize_element(item)?,
                Err(_) => seq.serialize_element(raw)?,
            }
        }
        seq.end()
    }
}

impl<'de, T: Construct + 'static> Deserialize<'de> for LazyList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
        Ok(Self::with_flags(raw.unwrap_or_default(), ResponseFlags::INCLUDE_NOTHING))
    }
}

/// Iterator over a [`LazyList`].
pub struct Iter<'a, T> {
    list: &'a LazyList<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Result<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.list.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.list.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LazyList<T> {
    type Item = Result<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
