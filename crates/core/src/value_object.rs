//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two value
//! objects carrying the same identifying values are the same element as far as
//! any set in this workspace is concerned.

/// Marker trait for value objects that can live in the workspace's sets.
///
/// This is a contract marker only: nothing takes it as a bound. The
/// collections accept any type their policy supports (plain `String`s
/// included), and implementing the trait records that a type's own `Eq`,
/// `Hash` and `Ord` are safe to use through the natural policies.
///
/// ## Immutability
///
/// Value objects are **immutable**: no setters, private fields. A value that
/// changes its identifying fields after being inserted into a hash-based set
/// would land in the wrong bucket and become unreachable, so immutability is a
/// correctness requirement here.
///
/// ## Contract
///
/// Implementors uphold:
/// - **Eq**: reflexive, symmetric, transitive, stable across calls.
/// - **Hash**: computed only from the fields `Eq` inspects, so `a == b`
///   implies `hash(a) == hash(b)`.
/// - **Ord**: a total order where `a.cmp(b) == Equal` exactly when `a == b`.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// struct Isbn(u64);
///
/// impl ValueObject for Isbn {}
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + Ord + core::fmt::Debug {}
