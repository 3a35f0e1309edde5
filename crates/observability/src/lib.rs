//! Logging setup for the bookshelf binaries.
//!
//! Library crates in this workspace only emit `tracing` events; installing a
//! subscriber is left to whichever binary links this crate.

/// Install the JSON subscriber on stderr. Later calls are no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber construction and `RUST_LOG` handling.
pub mod tracing;
