//! Ordered-unique collection: a `BTreeSet` driven by an injected ordering.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use std::collections::btree_set;
use std::collections::BTreeSet;

use bookshelf_core::{DomainResult, NaturalOrder, OrderPolicy};

/// A set whose uniqueness and iteration order both come from `P`.
///
/// Two values comparing `Equal` under `P` are duplicates: the first one
/// inserted stays, later ones are rejected. The element's own `Eq` plays no
/// part. Lookups only need the fields `P` inspects, so a partially built query
/// value finds the stored element.
///
/// Every operation first runs `P::check` on its argument and fails with no
/// mutation if the policy cannot place the value.
///
/// Single-threaded; wrap it in a lock to share it.
pub struct OrderedSet<T, P = NaturalOrder> {
    inner: BTreeSet<Keyed<T, P>>,
}

impl<T> OrderedSet<T> {
    /// An empty set ordered by `T`'s own `Ord`.
    pub fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }
}

impl<T, P: OrderPolicy<T>> OrderedSet<T, P> {
    /// An empty set ordered by `policy`.
    pub fn with_policy(_policy: P) -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    /// Inserts `value` unless an element comparing equal is already present.
    ///
    /// Returns whether the insertion happened.
    pub fn insert(&mut self, value: T) -> DomainResult<bool> {
        P::check(&value)?;
        let inserted = self.inner.insert(Keyed::new(value));
        if !inserted {
            tracing::debug!(policy = P::NAME, len = self.inner.len(), "duplicate rejected");
        }
        Ok(inserted)
    }

    /// Removes the element comparing equal to `value`, if any.
    pub fn remove(&mut self, value: &T) -> DomainResult<bool> {
        P::check(value)?;
        let probe = Probe(value);
        Ok(self.inner.remove(&probe as &dyn OrderKey<T, P>))
    }

    pub fn contains(&self, value: &T) -> DomainResult<bool> {
        P::check(value)?;
        let probe = Probe(value);
        Ok(self.inner.contains(&probe as &dyn OrderKey<T, P>))
    }

    /// The stored element comparing equal to `value`.
    pub fn get(&self, value: &T) -> DomainResult<Option<&T>> {
        P::check(value)?;
        let probe = Probe(value);
        Ok(self
            .inner
            .get(&probe as &dyn OrderKey<T, P>)
            .map(|keyed| &keyed.value))
    }

    /// The least element under the set's ordering.
    pub fn first(&self) -> Option<&T> {
        self.inner.first().map(|keyed| &keyed.value)
    }

    /// The greatest element under the set's ordering.
    pub fn last(&self) -> Option<&T> {
        self.inner.last().map(|keyed| &keyed.value)
    }
}

impl<T, P> OrderedSet<T, P> {
    /// Ascending iteration under the set's ordering.
    pub fn iter(&self) -> Iter<'_, T, P> {
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

impl<T, P> Default for OrderedSet<T, P> {
    fn default() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }
}

impl<T: Clone, P> Clone for OrderedSet<T, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for OrderedSet<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, P> IntoIterator for &'a OrderedSet<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an [`OrderedSet`], in ascending order.
pub struct Iter<'a, T, P> {
    inner: btree_set::Iter<'a, Keyed<T, P>>,
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|keyed| &keyed.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P> DoubleEndedIterator for Iter<'_, T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|keyed| &keyed.value)
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P> Clone for Iter<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

// Stored elements and borrowed query values both view as `dyn OrderKey`, so
// the tree can be searched with a plain `&T` and no clone.
trait OrderKey<T, P> {
    fn value(&self) -> &T;
}

struct Keyed<T, P> {
    value: T,
    policy: PhantomData<fn() -> P>,
}

impl<T, P> Keyed<T, P> {
    fn new(value: T) -> Self {
        Self {
            value,
            policy: PhantomData,
        }
    }
}

impl<T: Clone, P> Clone for Keyed<T, P> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T, P> OrderKey<T, P> for Keyed<T, P> {
    fn value(&self) -> &T {
        &self.value
    }
}

struct Probe<'a, T>(&'a T);

impl<T, P> OrderKey<T, P> for Probe<'_, T> {
    fn value(&self) -> &T {
        self.0
    }
}

impl<T, P: OrderPolicy<T>> PartialEq for Keyed<T, P> {
    fn eq(&self, other: &Self) -> bool {
        P::compare(&self.value, &other.value) == Ordering::Equal
    }
}

impl<T, P: OrderPolicy<T>> Eq for Keyed<T, P> {}

impl<T, P: OrderPolicy<T>> PartialOrd for Keyed<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: OrderPolicy<T>> Ord for Keyed<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        P::compare(&self.value, &other.value)
    }
}

impl<'a, T, P: OrderPolicy<T>> PartialEq for dyn OrderKey<T, P> + 'a {
    fn eq(&self, other: &Self) -> bool {
        P::compare(self.value(), other.value()) == Ordering::Equal
    }
}

impl<'a, T, P: OrderPolicy<T>> Eq for dyn OrderKey<T, P> + 'a {}

impl<'a, T, P: OrderPolicy<T>> PartialOrd for dyn OrderKey<T, P> + 'a {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, T, P: OrderPolicy<T>> Ord for dyn OrderKey<T, P> + 'a {
    fn cmp(&self, other: &Self) -> Ordering {
        P::compare(self.value(), other.value())
    }
}

impl<'a, T: 'a, P: 'a> Borrow<dyn OrderKey<T, P> + 'a> for Keyed<T, P> {
    fn borrow(&self) -> &(dyn OrderKey<T, P> + 'a) {
        self
    }
}
