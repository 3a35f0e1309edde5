//! `bookshelf-sets`: unique-membership collections with pluggable identity.
//!
//! - [`UnorderedSet`]: hash-table backed, O(1) expected insert/remove/contains,
//!   no iteration order.
//! - [`OrderedSet`]: B-tree backed, O(log n) insert/remove/contains, ascending
//!   iteration under the active ordering.
//!
//! Both take their identity policy at construction (see
//! [`bookshelf_core::policy`]) and use it for every uniqueness decision.

pub mod ordered;
pub mod unordered;

pub use ordered::OrderedSet;
pub use unordered::UnorderedSet;
