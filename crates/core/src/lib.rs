//! `bookshelf-core`: value types and identity policies.
//!
//! This crate contains **pure domain** primitives (no IO, no printing): the
//! [`Book`] record, the policies that decide when two values are "the same"
//! element, and the error model shared by the collections built on top.

pub mod book;
pub mod error;
pub mod policy;
pub mod value_object;

pub use book::Book;
pub use error::{DomainError, DomainResult};
pub use policy::{
    ById, ByIdThenTitle, ByTitle, ByTitleThenId, EquivalencePolicy, NaturalEquivalence,
    NaturalOrder, OrderPolicy, SameCode, SameCodeAndTitle,
};
pub use value_object::ValueObject;
