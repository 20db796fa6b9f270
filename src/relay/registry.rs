use std::collections::HashMap;

use tracing::debug;

use crate::connection::{Connection, ConnectionId};
use crate::relay::channel::Channel;

/// Tracks which connections are live and which channels they belong to.
///
/// The registry owns every connection handle for the duration of its
/// lifetime and maintains the channel membership sets. It is the single
/// source of truth the hub consults when fanning a message out: a
/// connection receives traffic for exactly the channels it has joined, and
/// stops receiving anything the moment it is deregistered.
///
/// All operations are plain state mutation; the registry performs no I/O.
#[derive(Debug, Default)]
pub struct Registry {
    channels: HashMap<String, Channel>,
    connections: HashMap<ConnectionId, Connection>,
}

impl Registry {
    /// Creates a registry with no channels and no connections.
    pub fn new() -> Self {
        Self {
            channels: HashMap::new(),
            connections: HashMap::new(),
        }
    }

    /// Adds a connection to a channel's member set.
    ///
    /// The channel is created if it does not exist yet, and the handle is
    /// stored if this is the first time the connection is seen. Registering
    /// an existing member again has no effect.
    pub fn register(&mut self, channel: &str, connection: Connection) {
        let channel = self
            .channels
            .entry(channel.to_string())
            .or_insert_with(|| Channel::new(channel));
        channel.join(connection.id.clone());
        self.connections.entry(connection.id.clone()).or_insert(connection);
    }

    /// Removes a connection from a single channel.
    ///
    /// The connection stays live and keeps its other memberships. If the
    /// channel does not exist, nothing happens.
    pub fn leave(&mut self, channel: &str, id: &ConnectionId) {
        if let Some(channel) = self.channels.get_mut(channel) {
            channel.leave(id);
        }
    }

    /// Removes a connection from every channel it belongs to and drops its
    /// handle.
    ///
    /// Membership disappears from all channels in one call, so no fan-out
    /// that starts afterwards can observe a partially removed connection.
    /// Safe to call for an id that was never registered.
    pub fn deregister(&mut self, id: &ConnectionId) {
        self.connections.remove(id);
        for channel in self.channels.values_mut() {
            channel.leave(id);
        }
        debug!("deregistered {id}");
    }

    /// Iterates over the current members of a channel.
    ///
    /// This is a point-in-time snapshot: the registry cannot be mutated
    /// while the returned iterator is alive. Order is unspecified. An
    /// unknown channel yields an empty iterator.
    pub fn members_of(&self, channel: &str) -> impl Iterator<Item = &Connection> {
        self.channels
            .get(channel)
            .into_iter()
            .flat_map(|c| c.members.iter())
            .filter_map(|id| self.connections.get(id))
    }

    /// Whether a connection handle is currently held by the registry.
    pub fn is_registered(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }
}
