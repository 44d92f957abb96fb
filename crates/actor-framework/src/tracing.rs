//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` used by every binary built on the
//! framework.
//!
//! - **Structured logging**: actors log with fields (`entity_type`, `id`, `size`) rather than
//!   formatted strings, so lines can be filtered by value.
//! - **Levels** come from `RUST_LOG`; when it is unset or unparsable, `info` is used.
//! - **Compact format** without module targets: the `entity_type` field already says which
//!   actor is talking.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle, creates, updates, deletes
//! RUST_LOG=debug cargo run    # plus every request with its payload
//! ```
//!
//! With `RUST_LOG=debug` a create followed by a read looks like:
//!
//! ```text
//! DEBUG Create entity_type="Product" params=ProductCreate { name: "Widget", .. }
//! INFO Created entity_type="Product" id=5f0c... size=1
//! DEBUG Get entity_type="Product" id=5f0c... found=true
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
