//! `bookshelf-demo`: the sets demo driver.
//!
//! Builds the transcript for each configured section; `main` prints it.

pub mod config;
pub mod transcript;

pub use config::{DemoConfig, Section};
pub use transcript::transcript;
