//! Identity policies: what "the same element" means for a given collection.
//!
//! A collection takes one policy at construction and uses it for **every**
//! uniqueness and placement decision, never falling back to the element's own
//! `Eq`/`Ord`. Two elements that a policy calls equal are duplicates in that
//! collection even when `==` says they differ.
//!
//! Policies are stateless: all methods are associated functions, and the
//! zero-sized policy value passed to a collection constructor only selects the
//! type.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::book::Book;
use crate::error::{DomainError, DomainResult};

/// A total ordering used by ordered-unique collections.
///
/// `compare` must be antisymmetric and transitive over every value `check`
/// accepts. `compare(a, b) == Equal` makes `b` a duplicate of `a`.
pub trait OrderPolicy<T: ?Sized> {
    /// Short name used in errors and logs.
    const NAME: &'static str;

    /// Compares two values `check` has accepted.
    ///
    /// Callers must run `check` on both arguments first; the result for a
    /// rejected value is unspecified (debug builds panic for the stock
    /// policies).
    fn compare(a: &T, b: &T) -> Ordering;

    /// Rejects values the ordering cannot place, such as a value missing a
    /// field that `compare` inspects.
    fn check(_value: &T) -> DomainResult<()> {
        Ok(())
    }
}

/// An equivalence relation paired with a hash consistent with it, used by
/// unordered-unique collections.
///
/// `equivalent(a, b)` implies that `hash` feeds identical data for `a` and `b`.
pub trait EquivalencePolicy<T: ?Sized> {
    const NAME: &'static str;

    fn equivalent(a: &T, b: &T) -> bool;

    fn hash<H: Hasher>(value: &T, state: &mut H);
}

/// The element's own `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> OrderPolicy<T> for NaturalOrder {
    const NAME: &'static str = "natural";

    fn compare(a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The element's own `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalEquivalence;

impl<T: Eq + Hash + ?Sized> EquivalencePolicy<T> for NaturalEquivalence {
    const NAME: &'static str = "natural";

    fn equivalent(a: &T, b: &T) -> bool {
        a == b
    }

    fn hash<H: Hasher>(value: &T, state: &mut H) {
        value.hash(state);
    }
}

/// Orders books by scanner code only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ById;

impl OrderPolicy<Book> for ById {
    const NAME: &'static str = "by-id";

    fn compare(a: &Book, b: &Book) -> Ordering {
        a.code().cmp(&b.code())
    }
}

/// Orders books by title only, case-sensitive, by code point.
///
/// Books sharing a title are duplicates under this ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByTitle;

impl OrderPolicy<Book> for ByTitle {
    const NAME: &'static str = "by-title";

    fn compare(a: &Book, b: &Book) -> Ordering {
        debug_assert_titled::<Self>(a, b);
        a.title().cmp(&b.title())
    }

    fn check(value: &Book) -> DomainResult<()> {
        require_title::<Self>(value)
    }
}

/// Orders books by title, then by code within a title.
///
/// Fields are compared one after the other, so a title that is a prefix of
/// another always sorts first and codes compare numerically. Ordering the
/// joined text `title + code` instead would put "Life on Earth" (3333) before
/// "Life" (9999) and code 10000 before 9999 under one title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByTitleThenId;

impl OrderPolicy<Book> for ByTitleThenId {
    const NAME: &'static str = "by-title-then-id";

    fn compare(a: &Book, b: &Book) -> Ordering {
        debug_assert_titled::<Self>(a, b);
        a.title()
            .cmp(&b.title())
            .then_with(|| a.code().cmp(&b.code()))
    }

    fn check(value: &Book) -> DomainResult<()> {
        require_title::<Self>(value)
    }
}

/// Orders books by code, then by title within a code.
///
/// An absent title sorts before any present one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByIdThenTitle;

impl OrderPolicy<Book> for ByIdThenTitle {
    const NAME: &'static str = "by-id-then-title";

    fn compare(a: &Book, b: &Book) -> Ordering {
        a.code()
            .cmp(&b.code())
            .then_with(|| a.title().cmp(&b.title()))
    }
}

/// Books are the same when their codes match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SameCode;

impl EquivalencePolicy<Book> for SameCode {
    const NAME: &'static str = "same-code";

    fn equivalent(a: &Book, b: &Book) -> bool {
        a.code() == b.code()
    }

    fn hash<H: Hasher>(value: &Book, state: &mut H) {
        value.code().hash(state);
    }
}

/// Books are the same when both code and title match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SameCodeAndTitle;

impl EquivalencePolicy<Book> for SameCodeAndTitle {
    const NAME: &'static str = "same-code-and-title";

    fn equivalent(a: &Book, b: &Book) -> bool {
        a.code() == b.code() && a.title() == b.title()
    }

    fn hash<H: Hasher>(value: &Book, state: &mut H) {
        value.code().hash(state);
        value.title().hash(state);
    }
}

fn require_title<P: OrderPolicy<Book>>(value: &Book) -> DomainResult<()> {
    match value.title() {
        Some(_) => Ok(()),
        None => Err(DomainError::missing_field(P::NAME, "title")),
    }
}

fn debug_assert_titled<P: OrderPolicy<Book>>(a: &Book, b: &Book) {
    debug_assert!(
        a.title().is_some() && b.title().is_some(),
        "{} ordering compared an untitled book; run `check` first",
        P::NAME
    );
}
