//! Unordered-unique collection: a `HashSet` driven by an injected equivalence.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use std::collections::hash_set;
use std::collections::HashSet;

use bookshelf_core::{EquivalencePolicy, NaturalEquivalence};

/// A hash set whose notion of "same element" comes from `E`.
///
/// The first value inserted for an equivalence class stays; later equivalent
/// values are rejected. Iteration order is unspecified and may change between
/// insertions.
///
/// Single-threaded; wrap it in a lock to share it.
pub struct UnorderedSet<T, E = NaturalEquivalence> {
    inner: HashSet<Hashed<T, E>>,
}

impl<T> UnorderedSet<T> {
    /// An empty set using `T`'s own `Eq` and `Hash`.
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }
}

impl<T, E: EquivalencePolicy<T>> UnorderedSet<T, E> {
    /// An empty set using `policy` for equivalence and hashing.
    pub fn with_policy(_policy: E) -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Inserts `value` unless an equivalent element is already present.
    ///
    /// Returns whether the insertion happened.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.inner.insert(Hashed::new(value));
        if !inserted {
            tracing::debug!(policy = E::NAME, len = self.inner.len(), "duplicate rejected");
        }
        inserted
    }

    pub fn remove(&mut self, value: &T) -> bool {
        let probe = Probe(value);
        self.inner.remove(&probe as &dyn HashKey<T, E>)
    }

    pub fn contains(&self, value: &T) -> bool {
        let probe = Probe(value);
        self.inner.contains(&probe as &dyn HashKey<T, E>)
    }

    /// The stored element equivalent to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        let probe = Probe(value);
        self.inner
            .get(&probe as &dyn HashKey<T, E>)
            .map(|hashed| &hashed.value)
    }
}

impl<T, E> UnorderedSet<T, E> {
    /// Iteration in unspecified order.
    pub fn iter(&self) -> Iter<'_, T, E> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T, E> Default for UnorderedSet<T, E> {
    fn default() -> Self {
        Self {
            inner: HashSet::default(),
        }
    }
}

impl<T: Clone, E: EquivalencePolicy<T>> Clone for UnorderedSet<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for UnorderedSet<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, E: EquivalencePolicy<T>> Extend<T> for UnorderedSet<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, E: EquivalencePolicy<T>> FromIterator<T> for UnorderedSet<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<'a, T, E> IntoIterator for &'a UnorderedSet<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an [`UnorderedSet`], in unspecified order.
pub struct Iter<'a, T, E> {
    inner: hash_set::Iter<'a, Hashed<T, E>>,
}

impl<'a, T, E> Iterator for Iter<'a, T, E> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|hashed| &hashed.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, E> ExactSizeIterator for Iter<'_, T, E> {}

// Same trick as the ordered set: stored and borrowed values share one
// `dyn HashKey` view, hashed and compared through `E`.
trait HashKey<T, E> {
    fn value(&self) -> &T;
}

struct Hashed<T, E> {
    value: T,
    policy: PhantomData<fn() -> E>,
}

impl<T, E> Hashed<T, E> {
    fn new(value: T) -> Self {
        Self {
            value,
            policy: PhantomData,
        }
    }
}

impl<T: Clone, E> Clone for Hashed<T, E> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T, E> HashKey<T, E> for Hashed<T, E> {
    fn value(&self) -> &T {
        &self.value
    }
}

struct Probe<'a, T>(&'a T);

impl<T, E> HashKey<T, E> for Probe<'_, T> {
    fn value(&self) -> &T {
        self.0
    }
}

impl<T, E: EquivalencePolicy<T>> PartialEq for Hashed<T, E> {
    fn eq(&self, other: &Self) -> bool {
        E::equivalent(&self.value, &other.value)
    }
}

impl<T, E: EquivalencePolicy<T>> Eq for Hashed<T, E> {}

impl<T, E: EquivalencePolicy<T>> Hash for Hashed<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        E::hash(&self.value, state);
    }
}

impl<'a, T, E: EquivalencePolicy<T>> PartialEq for dyn HashKey<T, E> + 'a {
    fn eq(&self, other: &Self) -> bool {
        E::equivalent(self.value(), other.value())
    }
}

impl<'a, T, E: EquivalencePolicy<T>> Eq for dyn HashKey<T, E> + 'a {}

impl<'a, T, E: EquivalencePolicy<T>> Hash for dyn HashKey<T, E> + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        E::hash(self.value(), state);
    }
}

impl<'a, T: 'a, E: 'a> Borrow<dyn HashKey<T, E> + 'a> for Hashed<T, E> {
    fn borrow(&self) -> &(dyn HashKey<T, E> + 'a) {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{Book, SameCode, SameCodeAndTitle};

    fn shelf() -> Vec<Book> {
        vec![
            Book::new(9999, "Jaws"),
            Book::new(9999, "Jaws"),
            Book::new(7777, "Jaws"),
            Book::new(9999, "Stardust"),
            Book::new(2222, "Heist"),
            Book::new(4444, "Alien"),
            Book::new(1111, "Tatoos"),
            Book::new(3333, "Life on Earth"),
        ]
    }

    fn sorted_codes<E>(set: &UnorderedSet<Book, E>) -> Vec<i32> {
        let mut codes: Vec<i32> = set.iter().map(Book::code).collect();
        codes.sort_unstable();
        codes
    }

    #[test]
    fn code_equality_dedups_shelf_to_six() {
        let set: UnorderedSet<Book> = shelf().into_iter().collect();

        assert_eq!(set.len(), 6);
        assert_eq!(sorted_codes(&set), vec![1111, 2222, 3333, 4444, 7777, 9999]);
        assert_eq!(
            set.get(&Book::search_key(9999)).and_then(Book::title),
            Some("Jaws")
        );
    }

    #[test]
    fn explicit_same_code_matches_natural_equality() {
        let mut set = UnorderedSet::with_policy(SameCode);
        set.extend(shelf());
        assert_eq!(set.len(), 6);
        assert!(set.contains(&Book::search_key(4444)));
    }

    #[test]
    fn code_and_title_equality_keeps_stardust() {
        let mut set = UnorderedSet::with_policy(SameCodeAndTitle);
        set.extend(shelf());

        assert_eq!(set.len(), 7);
        assert!(set.contains(&Book::new(9999, "Stardust")));
        assert!(!set.contains(&Book::search_key(9999)));
    }

    #[test]
    fn string_set_insert_remove_contains() {
        let mut names = UnorderedSet::new();
        for name in ["Zoe", "Donald", "John", "Bill", "Bill", "Adam", "Niamh"] {
            names.insert(name.to_string());
        }
        assert_eq!(names.len(), 6);

        assert!(names.remove(&"Donald".to_string()));
        assert!(!names.remove(&"Donald".to_string()));
        assert!(names.contains(&"John".to_string()));
        assert!(!names.contains(&"Donald".to_string()));
        assert_eq!(names.iter().len(), 5);
    }

    #[test]
    fn duplicate_insert_reports_false() {
        let mut set = UnorderedSet::new();
        assert!(set.insert(Book::new(1, "One")));
        assert!(!set.insert(Book::new(1, "Uno")));
        assert_eq!(set.get(&Book::search_key(1)).and_then(Book::title), Some("One"));

        set.clear();
        assert!(set.is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn books() -> impl Strategy<Value = Vec<Book>> {
            proptest::collection::vec(
                (0i32..30, "[a-c]{1,2}").prop_map(|(code, title)| Book::new(code, title)),
                0..50,
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: re-inserting an equal element leaves size unchanged.
            #[test]
            fn reinsert_leaves_size_unchanged(books in books()) {
                let mut set: UnorderedSet<Book> = books.iter().cloned().collect();
                let before = set.len();
                for book in &books {
                    prop_assert!(!set.insert(book.clone()));
                }
                prop_assert_eq!(set.len(), before);
            }

            /// Property: every inserted element is found, under either policy.
            #[test]
            fn inserted_elements_are_contained(books in books()) {
                let by_code: UnorderedSet<Book, SameCode> = books.iter().cloned().collect();
                let by_both: UnorderedSet<Book, SameCodeAndTitle> =
                    books.iter().cloned().collect();
                for book in &books {
                    prop_assert!(by_code.contains(book));
                    prop_assert!(by_both.contains(book));
                }
                prop_assert!(by_code.len() <= by_both.len());
            }
        }
    }
}
