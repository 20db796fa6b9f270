use tracing::{debug, warn};

use crate::connection::{Connection, ConnectionId};
use crate::relay::message::Message;
use crate::relay::registry::Registry;

/// The broadcast hub at the center of the relay.
///
/// The hub owns the [`Registry`] and routes each inbound message to the
/// current members of its target channel. The transport layer holds the hub
/// behind a lock and drives it through three entry points: `register` when
/// a connection opens or joins a channel, `publish` for every inbound
/// message, and `deregister` when the connection closes.
#[derive(Debug, Default)]
pub struct Hub {
    registry: Registry,
}

impl Hub {
    /// Creates a hub with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Adds a connection to a channel. See [`Registry::register`].
    pub fn register(&mut self, channel: &str, connection: Connection) {
        self.registry.register(channel, connection);
    }

    /// Removes a connection from a single channel. See [`Registry::leave`].
    pub fn leave(&mut self, channel: &str, id: &ConnectionId) {
        self.registry.leave(channel, id);
    }

    /// Removes a connection from every channel. See [`Registry::deregister`].
    pub fn deregister(&mut self, id: &ConnectionId) {
        self.registry.deregister(id);
    }

    /// Pushes a message to every current member of its channel.
    ///
    /// The member set is read once and the whole pass completes before this
    /// call returns; sends are non-blocking pushes onto each connection's
    /// outbound queue. With `exclude_sender` false (the wire-level policy)
    /// the sender receives its own message back, which clients rely on as
    /// an echo.
    ///
    /// A send that fails because the peer's queue is already closed is
    /// logged and skipped; it never aborts delivery to the remaining
    /// members and never surfaces to the caller.
    pub fn publish(&self, message: &Message, exclude_sender: bool) {
        let mut recipients = 0usize;
        for member in self.registry.members_of(&message.channel) {
            if exclude_sender && member.id == message.sender {
                continue;
            }
            if let Err(e) = member.send(&message.payload) {
                warn!("failed to send to {}: {e}", member.id);
                continue;
            }
            recipients += 1;
        }
        debug!(
            "relayed message from {} to {recipients} member(s) of '{}'",
            message.sender, message.channel
        );
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
