//! The `transport` module is responsible for network communication with
//! clients over WebSockets.
//!
//! It defines the protocol frames clients may send, accepts and upgrades
//! connections (enforcing the allowed-origin policy at handshake time),
//! and forwards inbound frames to the hub as register/leave/publish
//! operations.

pub mod message;
pub mod websocket;
