//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` - Uniform selection of canned replies and suggestions

mod random_source;

pub use random_source::{choose, RandomSource};
