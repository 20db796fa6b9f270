//! The `connection` module defines the representation of a client session.
//!
//! It provides the `Connection` struct, which pairs a session's unique
//! identifier with the channel used to push frames back out to it.

pub mod handle;
pub use handle::{Connection, ConnectionId};

#[cfg(test)]
mod tests;
