//! String-keyed collections with prototype inheritance.

use super::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// An ordered mapping from string keys to values.
///
/// Own keys are kept in enumeration order: canonical array-index keys
/// (`"0"`, `"1"`, ...) first in ascending numeric order, then every other key
/// in insertion order. A collection may inherit keys from a prototype; those
/// are visible through [`Collection::get`] and [`Collection::enumerate`] but
/// not through [`Collection::own_entries`].
///
/// # Examples
///
/// ```rust
/// use fpkit::value::{Collection, Value};
///
/// let mut base = Collection::new();
/// base.insert("kind", "animal");
///
/// let mut dog = Collection::with_prototype(base);
/// dog.insert("name", "Rex");
/// dog.insert("1", true);
///
/// let keys: Vec<String> = dog.enumerate().into_iter().map(|(key, _)| key.to_string()).collect();
/// assert_eq!(keys, ["1", "name", "kind"]);
/// assert_eq!(dog.get("kind"), Some(&Value::from("animal")));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Collection {
    entries: Vec<(Arc<str>, Value)>,
    prototype: Option<Arc<Collection>>,
}

impl Collection {
    /// Creates an empty collection without a prototype.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection inheriting from `prototype`.
    pub fn with_prototype(prototype: impl Into<Arc<Self>>) -> Self {
        Self {
            entries: Vec::new(),
            prototype: Some(prototype.into()),
        }
    }

    /// Returns the prototype, if any.
    pub fn prototype(&self) -> Option<&Self> {
        self.prototype.as_deref()
    }

    /// Inserts or replaces an own entry, returning the previous own value.
    ///
    /// Replacing a key keeps its enumeration position.
    pub fn insert(&mut self, key: impl Into<Arc<str>>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        if let Some((_, slot)) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            return Some(std::mem::replace(slot, value));
        }

        match array_index(&key) {
            Some(index) => {
                let position = self
                    .entries
                    .iter()
                    .position(|(existing, _)| array_index(existing).is_none_or(|other| other > index))
                    .unwrap_or(self.entries.len());
                self.entries.insert(position, (key, value));
            }
            None => self.entries.push((key, value)),
        }
        None
    }

    /// Looks up a key on this collection, then along the prototype chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.get_own(key)
            .or_else(|| self.prototype.as_deref().and_then(|prototype| prototype.get(key)))
    }

    /// Looks up an own key only.
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_ref() == key)
            .map(|(_, value)| value)
    }

    /// Iterates own entries in enumeration order.
    pub fn own_entries(&self) -> impl Iterator<Item = (&Arc<str>, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Returns the number of own entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no own entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every enumerable entry: own entries first, then inherited
    /// entries not shadowed by a nearer key.
    pub fn enumerate(&self) -> Vec<(Arc<str>, Value)> {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut enumerated = Vec::new();
        let mut current = Some(self);

        while let Some(collection) = current {
            for (key, value) in &collection.entries {
                if seen.insert(Arc::clone(key)) {
                    enumerated.push((Arc::clone(key), value.clone()));
                }
            }
            current = collection.prototype.as_deref();
        }

        enumerated
    }
}

fn array_index(key: &str) -> Option<u32> {
    let canonical = key == "0" || (!key.starts_with('0') && key.bytes().all(|byte| byte.is_ascii_digit()));
    if !canonical || key.is_empty() {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

impl<K, V> FromIterator<(K, V)> for Collection
where
    K: Into<Arc<str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut collection = Self::new();
        for (key, value) in entries {
            collection.insert(key, value);
        }
        collection
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = formatter.debug_map();
        for (key, value) in &self.entries {
            map.entry(key, value);
        }
        map.finish()
    }
}
