//! dashdns protocol core: wire codec, name resolution, query handling.
//!
//! Everything in this crate is synchronous and stateless across calls —
//! no locks, no shared mutable data — so it can be driven concurrently
//! from any number of transport workers, one call per datagram.
pub mod error;
pub mod handler;
pub mod resolver;
pub mod wire;

pub use error::WireError;
pub use handler::QueryHandler;
