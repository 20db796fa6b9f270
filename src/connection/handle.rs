use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::error::SendError;
use tungstenite::protocol::Message as WsMessage;
use uuid::Uuid;

/// Identifier assigned to a connection when it is accepted. A reconnecting
/// client gets a fresh identity; identifiers are never reused.
pub type ConnectionId = String;

/// Handle for one live client session.
///
/// Pairs the connection's identifier with the queue feeding its writer
/// task. The handle is cheap to clone so it can sit in several channel
/// membership sets at once, while the registry remains the owner of record.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Unique identifier for the connection.
    pub id: ConnectionId,

    /// Queue of outbound frames for this connection's writer task.
    pub sender: UnboundedSender<WsMessage>,
}

impl Connection {
    /// Creates a handle with a freshly minted identifier.
    pub fn new(sender: UnboundedSender<WsMessage>) -> Self {
        Self {
            id: format!("conn-{}", Uuid::new_v4()),
            sender,
        }
    }

    /// Queues a text payload for delivery to this connection.
    ///
    /// Fails only if the writer task has already gone away, which the
    /// caller treats as a failed delivery for this one peer.
    pub fn send(&self, payload: &str) -> Result<(), SendError<WsMessage>> {
        self.sender.send(WsMessage::text(payload))
    }
}
