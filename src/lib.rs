//! # kwlist
//!
//! `kwlist` is a Rust crate for working with **keyword lists**,
//! ordered sequences of key-value pairs where keys may repeat.
//!
//! This implementation is backed by a `Vec` of `(String, V)` pairs,
//! preserving the order of insertions. Unlike `HashMap` or `BTreeMap`,
//! duplicate keys are permitted and meaningful: the position of a pair
//! decides which occurrence is "first", and lookups always resolve to
//! the first occurrence.
//!
//! ## What is a Keyword List?
//!
//! A **keyword list** is a collection of key-value pairs where the keys
//! are strings, the pairs are kept in insertion order, and the same key
//! may appear more than once. It is a lightweight alternative to
//! hash-based structures for small mappings, option lists and anything
//! where order and duplicates carry meaning.
//!
//! Every operation here is **pure**: the receiver is only borrowed and a
//! new list is returned, so a `KwList` behaves like an immutable value.
//! Key uniqueness is never a global invariant, it is only a postcondition
//! of specific operations ([`put`](KwList::put), [`merge`](KwList::merge)
//! and put-folding construction via [`FromIterator`]).
//!
//! ### Example:
//! ```rust
//! use kwlist::kwlist;
//!
//! let options = kwlist!["verbose" => 1, "depth" => 3, "verbose" => 0];
//!
//! // Lookups resolve to the first occurrence.
//! assert_eq!(options.get("verbose"), Some(&1));
//!
//! // `put` makes the key unique and moves it to the front.
//! let options = options.put("verbose", 2);
//! assert_eq!(
//!     options.iter().collect::<Vec<_>>(),
//!     [("verbose", &2), ("depth", &3)]
//! );
//! ```

mod error;
mod get_values;
mod into_iter;
mod into_keys;
mod into_values;
mod iter;
mod json;
mod keys;
mod macros;
mod values;

pub use error::Error;
pub use get_values::GetValues;
pub use into_iter::IntoIter;
pub use into_keys::IntoKeys;
pub use into_values::IntoValues;
pub use iter::Iter;
pub use json::is_keyword;
pub use keys::Keys;
pub use values::Values;

use core::fmt;
use core::ops::Index;

/// A keyword list: an ordered sequence of `(String, V)` pairs tolerating
/// duplicate keys, backed by a `Vec`.
///
/// `KwList` preserves insertion order and never enforces key uniqueness as
/// an invariant; uniqueness only arises as a postcondition of [`put`],
/// [`merge`] and put-folding construction. All transforming operations are
/// pure: they borrow the receiver and return a new list.
///
/// ### Features
/// - **Order preservation**: pairs are stored in insertion order, and the
///   first occurrence of a key is the one lookups resolve to.
/// - **Duplicate keys**: the same key may appear any number of times, and
///   all occurrences are reachable through [`get_values`].
/// - **Value semantics**: inputs are never mutated; every mutation-shaped
///   operation hands back a fresh list.
///
/// ### Example
/// ```rust
/// use kwlist::kwlist;
///
/// let list = kwlist!["a" => 1, "b" => 2, "a" => 4];
///
/// assert_eq!(list.get("a"), Some(&1));
/// assert_eq!(list.get_values("a").collect::<Vec<_>>(), [&1, &4]);
/// assert_eq!(list.len(), 3);
/// ```
///
/// [`put`]: KwList::put
/// [`merge`]: KwList::merge
/// [`get_values`]: KwList::get_values
pub struct KwList<V> {
    pairs: Vec<(String, V)>,
}

impl<V> KwList<V> {
    /// Creates a new, empty `KwList`.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::KwList;
    ///
    /// let list: KwList<&str> = KwList::new();
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Creates a new `KwList` with a specified initial capacity.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::KwList;
    ///
    /// let list: KwList<&str> = KwList::with_capacity(10);
    /// assert!(list.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Builds a `KwList` by mapping each input item through `transform`
    /// and folding the resulting pairs in with [`put`](KwList::put)
    /// semantics: later occurrences of a duplicate key overwrite earlier
    /// ones, and each written key moves to the front.
    ///
    /// The transform reports "this item is not a key-value pair" by
    /// returning `None`, which aborts construction with
    /// [`Error::InvalidPair`] carrying the offending index.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::{Error, KwList};
    ///
    /// let list = KwList::new_with(["a=1", "b=2"], |item| {
    ///     let (key, value) = item.split_once('=')?;
    ///     Some((key.to_string(), value.parse::<i32>().ok()?))
    /// })
    /// .unwrap();
    /// assert_eq!(list.get("b"), Some(&2));
    ///
    /// let result = KwList::<i32>::new_with(["a=1", "oops"], |item| {
    ///     let (key, value) = item.split_once('=')?;
    ///     Some((key.to_string(), value.parse::<i32>().ok()?))
    /// });
    /// assert_eq!(result.unwrap_err(), Error::InvalidPair { index: 1 });
    /// ```
    pub fn new_with<T, I, F>(items: I, mut transform: F) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Option<(String, V)>,
    {
        let mut pairs = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            let (key, value) = transform(item).ok_or(Error::InvalidPair { index })?;
            Self::put_front(&mut pairs, key, value);
        }

        Ok(Self { pairs })
    }

    /// Retrieves a reference to the value of the **first** pair matching
    /// `key`, or `None` if the key is absent. Time complexity is O(n).
    ///
    /// A fallback value belongs at the call site:
    /// `list.get("k").copied().unwrap_or(0)`.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "a" => 2];
    /// assert_eq!(list.get("a"), Some(&1));
    /// assert_eq!(list.get("b"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Like [`get`](KwList::get), but reports an absent key as the
    /// recoverable [`Error::NotFound`] instead of `None`, for callers
    /// that propagate lookup misses with `?`.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::{kwlist, Error};
    ///
    /// let list = kwlist!["a" => 1];
    /// assert_eq!(list.fetch("a"), Ok(&1));
    /// assert_eq!(list.fetch("b"), Err(Error::NotFound("b".into())));
    /// ```
    pub fn fetch(&self, key: &str) -> Result<&V, Error> {
        self.get(key)
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    /// Returns an iterator over the values of **all** pairs matching
    /// `key`, in original order.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 3];
    /// assert_eq!(list.get_values("a").collect::<Vec<_>>(), [&1, &3]);
    /// assert!(list.get_values("c").next().is_none());
    /// ```
    pub fn get_values<'a>(&'a self, key: &'a str) -> GetValues<'a, V> {
        GetValues::new(key, self.pairs.iter())
    }

    /// Checks whether any pair matches `key`.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1];
    /// assert!(list.contains_key("a"));
    /// assert!(!list.contains_key("b"));
    /// ```
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of pairs in the list, duplicates included.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "a" => 2];
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the list contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Borrows the underlying pairs as a slice, in insertion order.
    pub fn as_slice(&self) -> &[(String, V)] {
        &self.pairs
    }

    /// Returns an iterator over the keys of the list, duplicates
    /// included, in original order.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 3];
    /// assert_eq!(list.keys().collect::<Vec<_>>(), ["a", "b", "a"]);
    /// ```
    pub fn keys(&self) -> Keys<V> {
        Keys::from_delegate(self.pairs.iter())
    }

    /// Consumes the list and returns an iterator over its keys.
    pub fn into_keys(self) -> IntoKeys<V> {
        IntoKeys::from_delegate(self.pairs.into_iter())
    }

    /// Returns an iterator over the values of the list, those of
    /// duplicate keys included, in original order.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 3];
    /// assert_eq!(list.values().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn values(&self) -> Values<V> {
        Values::from_delegate(self.pairs.iter())
    }

    /// Consumes the list and returns an iterator over its values.
    pub fn into_values(self) -> IntoValues<V> {
        IntoValues::from_delegate(self.pairs.into_iter())
    }

    /// Returns an iterator over the `(&str, &V)` pairs of the list, in
    /// original order.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2];
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [("a", &1), ("b", &2)]);
    /// ```
    pub fn iter(&self) -> Iter<V> {
        Iter::from_delegate(self.pairs.iter())
    }

    fn first_position(&self, key: &str) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }

    fn missing(&self, key: &str) -> Error {
        Error::MissingKey {
            key: key.to_string(),
            present: self.pairs.iter().map(|(k, _)| k.clone()).collect(),
        }
    }

    fn put_front(pairs: &mut Vec<(String, V)>, key: String, value: V) {
        pairs.retain(|(k, _)| *k != key);
        pairs.insert(0, (key, value));
    }
}

impl<V: Clone> KwList<V> {
    /// Returns a new list where **all** existing pairs with `key` are
    /// removed and `(key, value)` is prepended. Net effect: `key` becomes
    /// unique and moves to the front. Time complexity is O(n).
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 4];
    /// let list = list.put("a", 3);
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [("a", &3), ("b", &2)]);
    /// ```
    pub fn put(&self, key: impl Into<String>, value: V) -> Self {
        let mut pairs = self.pairs.clone();
        Self::put_front(&mut pairs, key.into(), value);
        Self { pairs }
    }

    /// Returns the list unchanged if `key` is already present; otherwise
    /// returns a new list with `(key, value)` prepended. Duplicates of
    /// *other* keys are never touched.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1];
    ///
    /// let same = list.put_new("a", 9);
    /// assert_eq!(same, list);
    ///
    /// let grown = list.put_new("b", 2);
    /// assert_eq!(grown.iter().collect::<Vec<_>>(), [("b", &2), ("a", &1)]);
    /// ```
    pub fn put_new(&self, key: impl Into<String>, value: V) -> Self {
        let key = key.into();
        if self.contains_key(&key) {
            return self.clone();
        }

        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        pairs.push((key, value));
        pairs.extend(self.pairs.iter().cloned());
        Self { pairs }
    }

    /// Returns a new list with **all** pairs matching `key` removed.
    /// No-op (an identical copy) when the key is absent.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 3];
    /// let list = list.delete("a");
    ///
    /// assert!(!list.contains_key("a"));
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [("b", &2)]);
    /// ```
    pub fn delete(&self, key: &str) -> Self {
        Self {
            pairs: self
                .pairs
                .iter()
                .filter(|(k, _)| k != key)
                .cloned()
                .collect(),
        }
    }

    /// Returns a new list with all pairs matching both `key` and `value`
    /// removed. Pairs with the same key but a different value survive.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "a" => 2, "a" => 1];
    /// let list = list.delete_value("a", &1);
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [("a", &2)]);
    /// ```
    pub fn delete_value(&self, key: &str, value: &V) -> Self
    where
        V: PartialEq,
    {
        Self {
            pairs: self
                .pairs
                .iter()
                .filter(|(k, v)| k != key || v != value)
                .cloned()
                .collect(),
        }
    }

    /// Returns a new list with only the **first** pair matching `key`
    /// removed; later duplicates survive.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 3];
    /// let list = list.delete_first("a");
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [("b", &2), ("a", &3)]);
    /// ```
    pub fn delete_first(&self, key: &str) -> Self {
        let mut pairs = self.pairs.clone();
        if let Some(position) = self.first_position(key) {
            pairs.remove(position);
        }

        Self { pairs }
    }

    /// If `key` is present, returns a new list where the **first**
    /// occurrence's value is replaced by `fun(&value)` in place and every
    /// later duplicate of `key` is removed. If absent, returns a new list
    /// with `(key, initial)` appended, leaving the existing pairs in
    /// their relative order.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 3];
    ///
    /// let bumped = list.update("a", 0, |v| v * 10);
    /// assert_eq!(bumped.iter().collect::<Vec<_>>(), [("a", &10), ("b", &2)]);
    ///
    /// let grown = list.update("c", 7, |v| v * 10);
    /// assert_eq!(grown.get("c"), Some(&7));
    /// assert_eq!(grown.len(), 4);
    /// ```
    pub fn update<F>(&self, key: impl Into<String>, initial: V, fun: F) -> Self
    where
        F: FnOnce(&V) -> V,
    {
        let key = key.into();
        match self.first_position(&key) {
            Some(position) => self.replace_at(position, &key, fun),
            None => {
                let mut pairs = self.pairs.clone();
                pairs.push((key, initial));
                Self { pairs }
            }
        }
    }

    /// Like [`update`](KwList::update) but never inserts: an absent key
    /// fails with [`Error::MissingKey`], carrying the key and a snapshot
    /// of the keys that were present.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1];
    ///
    /// let bumped = list.try_update("a", |v| v + 1).unwrap();
    /// assert_eq!(bumped.get("a"), Some(&2));
    ///
    /// assert!(list.try_update("b", |v| v + 1).is_err());
    /// ```
    pub fn try_update<F>(&self, key: &str, fun: F) -> Result<Self, Error>
    where
        F: FnOnce(&V) -> V,
    {
        let position = self.first_position(key).ok_or_else(|| self.missing(key))?;
        Ok(self.replace_at(position, key, fun))
    }

    /// Removes **all** pairs matching `key`, returning the first
    /// occurrence's value (if any) alongside the remaining list.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "a" => 2];
    /// let (value, rest) = list.pop("a");
    ///
    /// assert_eq!(value, Some(1));
    /// assert!(rest.is_empty());
    /// ```
    pub fn pop(&self, key: &str) -> (Option<V>, Self) {
        (self.get(key).cloned(), self.delete(key))
    }

    /// Removes only the **first** pair matching `key`, returning its
    /// value (if any) alongside the remaining list; later duplicates
    /// survive.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "a" => 2];
    /// let (value, rest) = list.pop_first("a");
    ///
    /// assert_eq!(value, Some(1));
    /// assert_eq!(rest.iter().collect::<Vec<_>>(), [("a", &2)]);
    /// ```
    pub fn pop_first(&self, key: &str) -> (Option<V>, Self) {
        (self.get(key).cloned(), self.delete_first(key))
    }

    /// Returns a new list keeping only the pairs whose key is in `keys`,
    /// order and duplicates preserved.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 3];
    /// let list = list.take(&["a"]);
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [("a", &1), ("a", &3)]);
    /// ```
    pub fn take(&self, keys: &[&str]) -> Self {
        Self {
            pairs: self
                .pairs
                .iter()
                .filter(|(k, _)| keys.contains(&k.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Inverse of [`take`](KwList::take): returns a new list with the
    /// pairs whose key is in `keys` removed.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 3];
    /// let list = list.drop_keys(&["a"]);
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [("b", &2)]);
    /// ```
    pub fn drop_keys(&self, keys: &[&str]) -> Self {
        Self {
            pairs: self
                .pairs
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Partitions the list into `(matching, rest)` by key membership in
    /// `keys`. Both halves preserve original relative order and
    /// duplicates; the first half agrees pairwise with
    /// [`take`](KwList::take) and the second with
    /// [`drop_keys`](KwList::drop_keys).
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2, "a" => 3];
    /// let (matching, rest) = list.split(&["a"]);
    ///
    /// assert_eq!(matching, list.take(&["a"]));
    /// assert_eq!(rest, list.drop_keys(&["a"]));
    /// ```
    pub fn split(&self, keys: &[&str]) -> (Self, Self) {
        let (matching, rest) = self
            .pairs
            .iter()
            .cloned()
            .partition(|(k, _)| keys.contains(&k.as_str()));

        (Self { pairs: matching }, Self { pairs: rest })
    }

    /// Right-biased merge: every pair of `other` is kept, then the pairs
    /// of `self` whose key does **not** appear in `other` are appended in
    /// their relative order. Keys present on both sides survive only with
    /// `other`'s occurrence(s).
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let left = kwlist!["a" => 1, "b" => 2];
    /// let right = kwlist!["a" => 3, "d" => 4];
    ///
    /// let merged = left.merge(&right);
    /// assert_eq!(
    ///     merged.iter().collect::<Vec<_>>(),
    ///     [("a", &3), ("d", &4), ("b", &2)]
    /// );
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        let mut pairs = other.pairs.clone();
        pairs.extend(
            self.pairs
                .iter()
                .filter(|(k, _)| !other.contains_key(k))
                .cloned(),
        );

        Self { pairs }
    }

    /// Like [`merge`](KwList::merge), but for each key present on both
    /// sides `resolver(key, &left, &right)` computes the surviving value,
    /// with the **first** occurrence's value taken from each side.
    /// Duplicate occurrences of a merged key collapse into the single
    /// resolved entry; keys on one side only behave as in `merge`.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let left = kwlist!["a" => 1, "b" => 2];
    /// let right = kwlist!["a" => 3, "d" => 4];
    ///
    /// let merged = left.merge_with(&right, |_key, v1, v2| v1 + v2);
    /// assert_eq!(merged.get("a"), Some(&4));
    /// assert_eq!(merged.get("b"), Some(&2));
    /// assert_eq!(merged.get("d"), Some(&4));
    /// ```
    pub fn merge_with<F>(&self, other: &Self, mut resolver: F) -> Self
    where
        F: FnMut(&str, &V, &V) -> V,
    {
        let mut pairs = Vec::with_capacity(self.pairs.len() + other.pairs.len());
        let mut resolved: Vec<&str> = Vec::new();
        for (key, right) in &other.pairs {
            match self.get(key) {
                None => pairs.push((key.clone(), right.clone())),
                Some(left) => {
                    if resolved.contains(&key.as_str()) {
                        continue;
                    }

                    resolved.push(key);
                    pairs.push((key.clone(), resolver(key, left, right)));
                }
            }
        }

        pairs.extend(
            self.pairs
                .iter()
                .filter(|(k, _)| !other.contains_key(k))
                .cloned(),
        );

        Self { pairs }
    }

    fn replace_at<F>(&self, position: usize, key: &str, fun: F) -> Self
    where
        F: FnOnce(&V) -> V,
    {
        let mut pairs = Vec::with_capacity(self.pairs.len());
        pairs.extend(self.pairs[..position].iter().cloned());

        let (k, v) = &self.pairs[position];
        pairs.push((k.clone(), fun(v)));

        // Later duplicates of the key collapse, mirroring `put`.
        pairs.extend(
            self.pairs[position + 1..]
                .iter()
                .filter(|(k, _)| k != key)
                .cloned(),
        );

        Self { pairs }
    }
}

impl<V: Ord> KwList<V> {
    /// Order-independent, duplicate-sensitive equality: `true` iff the
    /// sorted-pair multisets of both lists are identical. Two lists with
    /// the same pairs in a different order are equivalent; differing
    /// duplicate counts are not.
    ///
    /// Structural `==` on `KwList` compares pairs in order instead.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1, "b" => 2];
    /// let reversed = kwlist!["b" => 2, "a" => 1];
    /// let doubled = kwlist!["a" => 1, "b" => 2, "a" => 1, "b" => 2];
    ///
    /// assert!(list.equivalent(&reversed));
    /// assert!(!list.equivalent(&doubled));
    /// ```
    pub fn equivalent(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut left: Vec<_> = self.pairs.iter().map(|(k, v)| (k, v)).collect();
        let mut right: Vec<_> = other.pairs.iter().map(|(k, v)| (k, v)).collect();
        left.sort();
        right.sort();
        left == right
    }
}

impl<V> Default for KwList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<(String, V)>> for KwList<V> {
    /// Raw construction: the pairs are adopted as-is, duplicates and
    /// order preserved. Use [`FromIterator`] for the deduplicating,
    /// put-folding form.
    fn from(pairs: Vec<(String, V)>) -> Self {
        Self { pairs }
    }
}

impl<S: Into<String>, V> FromIterator<(S, V)> for KwList<V> {
    /// Folds the pairs in left-to-right with [`put`](KwList::put)
    /// semantics, so the result has unique keys ordered by the position
    /// of the last write.
    ///
    /// ```rust
    /// use kwlist::KwList;
    ///
    /// let list: KwList<_> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [("a", &3), ("b", &2)]);
    /// ```
    fn from_iter<T: IntoIterator<Item = (S, V)>>(iter: T) -> Self {
        let mut pairs = Vec::new();
        for (key, value) in iter {
            Self::put_front(&mut pairs, key.into(), value);
        }

        Self { pairs }
    }
}

impl<V> Index<&str> for KwList<V> {
    type Output = V;

    /// Strict lookup: resolves to the first occurrence of `key`.
    ///
    /// ### Panics
    /// Panics when the key is absent, naming the missing key and the keys
    /// present.
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::kwlist;
    ///
    /// let list = kwlist!["a" => 1];
    /// assert_eq!(list["a"], 1);
    /// ```
    fn index(&self, key: &str) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("{}", self.missing(key)),
        }
    }
}

impl<V> IntoIterator for KwList<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_delegate(self.pairs.into_iter())
    }
}

impl<'a, V> IntoIterator for &'a KwList<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Clone> Clone for KwList<V> {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pairs.clone_from(&source.pairs)
    }
}

impl<V: fmt::Debug> fmt::Debug for KwList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.pairs.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<V: PartialEq> PartialEq for KwList<V> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<V: Eq> Eq for KwList<V> {}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{kwlist, Error, KwList};

    #[test]
    fn kwlist_macro_preserves_duplicates() {
        let sut = kwlist!["k1" => "v1", "k2" => "v2", "k1" => "w1"];

        assert_eq!(
            sut.iter().collect::<Vec<_>>(),
            [("k1", &"v1"), ("k2", &"v2"), ("k1", &"w1")]
        );
    }

    #[test]
    fn new_creates_empty_list() {
        let sut: KwList<&str> = KwList::new();
        assert!(sut.is_empty(), "Expected the list to be empty");
        assert_eq!(sut.len(), 0, "Expected the length of the list to be 0");
    }

    #[test]
    fn default_creates_empty_list() {
        let sut: KwList<&str> = KwList::default();
        assert!(sut.is_empty(), "Expected the list to be empty");
    }

    #[test]
    fn from_iter_folds_with_put_semantics() {
        let sut: KwList<_> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();

        assert_eq!(
            sut.iter().collect::<Vec<_>>(),
            [("a", &3), ("b", &2)],
            "Expected later duplicates to overwrite and move to the front"
        );
    }

    #[test]
    fn new_with_maps_items_through_the_transform() {
        let sut = KwList::new_with(["a:1", "b:2", "a:3"], |item| {
            let (key, value) = item.split_once(':')?;
            Some((key.to_string(), value.parse::<i32>().ok()?))
        })
        .expect("Expected construction to succeed");

        assert_eq!(sut.iter().collect::<Vec<_>>(), [("a", &3), ("b", &2)]);
    }

    #[test]
    fn new_with_rejects_items_that_are_not_pairs() {
        let result = KwList::<i32>::new_with(["a:1", "nonsense"], |item| {
            let (key, value) = item.split_once(':')?;
            Some((key.to_string(), value.parse::<i32>().ok()?))
        });

        assert_eq!(
            result,
            Err(Error::InvalidPair { index: 1 }),
            "Expected the offending index to be reported"
        );
    }

    #[test]
    fn get_resolves_to_the_first_occurrence() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3];

        assert_eq!(sut.get("a"), Some(&1), "Expected the first occurrence");
        assert_eq!(sut.get("b"), Some(&2));
        assert_eq!(sut.get("c"), None, "Expected None for an absent key");
    }

    #[test]
    fn fetch_distinguishes_found_from_absent() {
        let sut = kwlist!["a" => 1];

        assert_eq!(sut.fetch("a"), Ok(&1));
        assert_eq!(sut.fetch("b"), Err(Error::NotFound("b".into())));
    }

    #[test]
    #[should_panic(expected = r#"key "missing" not found"#)]
    fn index_panics_on_an_absent_key() {
        let sut = kwlist!["a" => 1];
        let _ = sut["missing"];
    }

    #[test]
    fn get_values_yields_every_occurrence_in_order() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3];

        assert_eq!(sut.get_values("a").collect::<Vec<_>>(), [&1, &3]);
        assert_eq!(sut.get_values("b").collect::<Vec<_>>(), [&2]);
        assert!(
            sut.get_values("c").next().is_none(),
            "Expected no values for an absent key"
        );
    }

    #[test]
    fn get_values_iterates_from_the_back_too() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3];

        assert_eq!(sut.get_values("a").rev().collect::<Vec<_>>(), [&3, &1]);
    }

    #[test]
    fn keys_and_values_include_duplicates() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3];

        assert_eq!(sut.keys().collect::<Vec<_>>(), ["a", "b", "a"]);
        assert_eq!(sut.values().collect::<Vec<_>>(), [&1, &2, &3]);
        assert_eq!(sut.len(), 3);
    }

    #[test]
    fn into_keys_and_into_values_consume_the_list() {
        let sut = kwlist!["a" => 1, "b" => 2];

        assert_eq!(sut.clone().into_keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(sut.into_values().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn put_removes_duplicates_and_prepends() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 4];
        let result = sut.put("a", 3);

        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            [("a", &3), ("b", &2)],
            "Expected the key to become unique and frontmost"
        );
        assert_eq!(sut.len(), 3, "Expected the input list to be left untouched");
    }

    #[test]
    fn put_is_idempotent() {
        let sut = kwlist!["a" => 1, "b" => 2];

        let once = sut.put("a", 3);
        let twice = once.put("a", 3);
        assert_eq!(once, twice);
    }

    #[test]
    fn put_new_keeps_an_existing_key_untouched() {
        let sut = kwlist!["a" => 1, "a" => 2];
        let result = sut.put_new("a", 9);

        assert_eq!(result, sut, "Expected the list to be returned unchanged");
    }

    #[test]
    fn put_new_prepends_an_absent_key() {
        let sut = kwlist!["a" => 1, "a" => 2];
        let result = sut.put_new("b", 3);

        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            [("b", &3), ("a", &1), ("a", &2)],
            "Expected duplicates of other keys to survive"
        );
    }

    #[test]
    fn delete_removes_every_occurrence() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3];
        let result = sut.delete("a");

        assert!(!result.contains_key("a"));
        assert_eq!(result.iter().collect::<Vec<_>>(), [("b", &2)]);
    }

    #[test]
    fn delete_is_a_noop_for_an_absent_key() {
        let sut = kwlist!["a" => 1];

        assert_eq!(sut.delete("b"), sut);
    }

    #[test]
    fn delete_value_requires_an_exact_match() {
        let sut = kwlist!["a" => 1, "a" => 2, "a" => 1, "b" => 1];
        let result = sut.delete_value("a", &1);

        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            [("a", &2), ("b", &1)],
            "Expected only exact (key, value) matches to be removed"
        );
    }

    #[test]
    fn delete_first_spares_later_duplicates() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3];
        let result = sut.delete_first("a");

        assert_eq!(result.iter().collect::<Vec<_>>(), [("b", &2), ("a", &3)]);
    }

    #[test]
    fn update_replaces_in_place_and_collapses_duplicates() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3];
        let result = sut.update("a", 0, |v| v * 10);

        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            [("a", &10), ("b", &2)],
            "Expected the first occurrence updated in place and later duplicates dropped"
        );
    }

    #[test]
    fn update_appends_an_absent_key_with_the_initial_value() {
        let sut = kwlist!["a" => 1, "b" => 2];
        let result = sut.update("c", 7, |v| v * 10);

        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            [("a", &1), ("b", &2), ("c", &7)],
            "Expected the initial value appended, existing order preserved"
        );
    }

    #[test]
    fn try_update_fails_on_an_absent_key() {
        let sut = kwlist!["a" => 1];
        let result = sut.try_update("b", |v| v + 1);

        assert_eq!(
            result,
            Err(Error::MissingKey {
                key: "b".into(),
                present: vec!["a".into()],
            }),
            "Expected the missing key and a snapshot of the present ones"
        );
    }

    #[test]
    fn try_update_never_inserts() {
        let sut = kwlist!["a" => 1];

        assert!(sut.try_update("b", |v| v + 1).is_err());
        assert_eq!(sut.len(), 1);
    }

    #[test]
    fn pop_removes_every_occurrence() {
        let sut = kwlist!["a" => 1, "a" => 2];
        let (value, rest) = sut.pop("a");

        assert_eq!(value, Some(1), "Expected the first occurrence's value");
        assert!(rest.is_empty(), "Expected every occurrence removed");
    }

    #[test]
    fn pop_first_spares_later_duplicates() {
        let sut = kwlist!["a" => 1, "a" => 2];
        let (value, rest) = sut.pop_first("a");

        assert_eq!(value, Some(1));
        assert_eq!(rest.iter().collect::<Vec<_>>(), [("a", &2)]);
    }

    #[test]
    fn pop_on_an_absent_key_yields_nothing() {
        let sut = kwlist!["a" => 1];
        let (value, rest) = sut.pop("b");

        assert_eq!(value, None);
        assert_eq!(rest, sut);
    }

    #[test]
    fn take_keeps_matching_pairs_in_order() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3, "c" => 4];
        let result = sut.take(&["a", "c"]);

        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            [("a", &1), ("a", &3), ("c", &4)]
        );
    }

    #[test]
    fn drop_keys_removes_matching_pairs() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3, "c" => 4];
        let result = sut.drop_keys(&["a", "c"]);

        assert_eq!(result.iter().collect::<Vec<_>>(), [("b", &2)]);
    }

    #[test]
    fn split_agrees_with_take_and_drop_keys() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3, "c" => 4];
        let (matching, rest) = sut.split(&["a", "c"]);

        assert_eq!(matching, sut.take(&["a", "c"]));
        assert_eq!(rest, sut.drop_keys(&["a", "c"]));
    }

    #[test]
    fn equivalent_ignores_order_but_counts_duplicates() {
        let sut = kwlist!["a" => 1, "b" => 2];
        let reversed = kwlist!["b" => 2, "a" => 1];
        let doubled = kwlist!["a" => 1, "b" => 2, "a" => 1, "b" => 2];

        assert!(sut.equivalent(&reversed));
        assert!(
            !sut.equivalent(&doubled),
            "Expected differing duplicate counts to break equivalence"
        );
        assert!(
            sut != reversed,
            "Expected structural equality to stay order-sensitive"
        );
    }

    #[test]
    fn merge_is_right_biased() {
        let left = kwlist!["a" => 1, "b" => 2];
        let right = kwlist!["a" => 3, "d" => 4];

        let mut merged: Vec<_> = left.merge(&right).into_iter().collect();
        merged.sort();

        assert_eq!(
            merged,
            [
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("d".to_string(), 4)
            ]
        );
    }

    #[test]
    fn merge_keeps_every_pair_of_the_right_side() {
        let left = kwlist!["a" => 1];
        let right = kwlist!["a" => 3, "a" => 4];

        assert_eq!(
            left.merge(&right).iter().collect::<Vec<_>>(),
            [("a", &3), ("a", &4)]
        );
    }

    #[test]
    fn merge_with_resolves_conflicts_with_first_occurrences() {
        let left = kwlist!["a" => 1, "b" => 2];
        let right = kwlist!["a" => 3, "d" => 4];

        let mut merged: Vec<_> = left
            .merge_with(&right, |_key, v1, v2| v1 + v2)
            .into_iter()
            .collect();
        merged.sort();

        assert_eq!(
            merged,
            [
                ("a".to_string(), 4),
                ("b".to_string(), 2),
                ("d".to_string(), 4)
            ]
        );
    }

    #[test]
    fn merge_with_collapses_duplicates_of_merged_keys() {
        let left = kwlist!["a" => 1];
        let right = kwlist!["a" => 3, "a" => 4];

        let merged = left.merge_with(&right, |_key, v1, v2| v1 + v2);

        assert_eq!(
            merged.iter().collect::<Vec<_>>(),
            [("a", &4)],
            "Expected a single resolved entry built from the first occurrences"
        );
    }

    #[test]
    fn debug_prints_pairs_in_order() {
        let sut = kwlist!["a" => 1, "a" => 2];

        assert_eq!(format!("{:?}", sut), r#"[("a", 1), ("a", 2)]"#);
    }

    #[quickcheck]
    fn deleted_keys_are_gone(pairs: Vec<(String, u8)>, key: String) -> bool {
        !KwList::from(pairs).delete(&key).contains_key(&key)
    }

    #[quickcheck]
    fn put_makes_the_key_unique_and_frontmost(
        pairs: Vec<(String, u8)>,
        key: String,
        value: u8,
    ) -> bool {
        let sut = KwList::from(pairs).put(key.clone(), value);

        sut.get(&key) == Some(&value)
            && sut.keys().filter(|k| *k == key).count() == 1
            && sut.keys().next() == Some(key.as_str())
    }

    #[quickcheck]
    fn put_is_idempotent_for_any_list(pairs: Vec<(String, u8)>, key: String, value: u8) -> bool {
        let once = KwList::from(pairs).put(key.clone(), value);
        once == once.put(key, value)
    }

    #[quickcheck]
    fn equivalence_is_order_independent(pairs: Vec<(String, u8)>) -> bool {
        let reversed = KwList::from(pairs.iter().rev().cloned().collect::<Vec<_>>());
        KwList::from(pairs).equivalent(&reversed)
    }

    #[quickcheck]
    fn doubling_a_nonempty_list_breaks_equivalence(pairs: Vec<(String, u8)>) -> bool {
        if pairs.is_empty() {
            return true;
        }

        let doubled = pairs.iter().chain(&pairs).cloned().collect::<Vec<_>>();
        !KwList::from(pairs).equivalent(&KwList::from(doubled))
    }

    #[quickcheck]
    fn split_partitions_the_list(pairs: Vec<(String, u8)>, keys: Vec<String>) -> bool {
        let sut = KwList::from(pairs);
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();

        let (matching, rest) = sut.split(&keys);
        let agrees = matching == sut.take(&keys) && rest == sut.drop_keys(&keys);

        let mut reunited: Vec<_> = matching.into_iter().chain(rest).collect();
        let mut original: Vec<_> = sut.into_iter().collect();
        reunited.sort();
        original.sort();

        agrees && reunited == original
    }

    #[quickcheck]
    fn merge_prefers_the_right_side(
        left: Vec<(String, u8)>,
        right: Vec<(String, u8)>,
        key: String,
    ) -> bool {
        let (left, right) = (KwList::from(left), KwList::from(right));
        let merged = left.merge(&right);

        if right.contains_key(&key) {
            merged.get(&key) == right.get(&key)
        } else {
            merged.get(&key) == left.get(&key)
        }
    }

    #[quickcheck]
    fn update_leaves_a_single_occurrence(pairs: Vec<(String, u8)>, key: String) -> bool {
        let sut = KwList::from(pairs).update(key.clone(), 0, |v| v.wrapping_add(1));
        sut.keys().filter(|k| *k == key).count() == 1
    }
}
