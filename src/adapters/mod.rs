//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `random` - Random source implementations (thread-local, seeded)

pub mod http;
pub mod random;

pub use random::{random_source_from_seed, SeededRandomSource, ThreadRandomSource};
