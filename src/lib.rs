//! # echorelay
//!
//! `echorelay` is a minimalist, in-memory real-time message relay built with
//! Rust. Clients connect over WebSocket, send text messages, and the server
//! rebroadcasts each message to every currently connected peer, optionally
//! scoped to a named channel. The sender is included in the fan-out, so
//! clients see their own messages echoed back.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct
//! responsibility:
//!
//! - `relay`: the connection registry and broadcast hub that track live
//!   connections, their channel memberships, and route each message to the
//!   right peer set.
//! - `connection`: the handle representing a single connected client.
//! - `config`: loading and managing server configuration.
//! - `transport`: the WebSocket server and communication with clients.
//! - `utils`: shared utilities such as error types and logging setup.

pub mod config;
pub mod connection;
pub mod relay;
pub mod transport;
pub mod utils;
