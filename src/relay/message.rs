/// A message in flight through the relay.
///
/// Carries the text payload, the channel it targets, and the connection that
/// sent it, stamped with the receipt time in epoch milliseconds. A message
/// exists only for the duration of one fan-out pass and is never persisted.
#[derive(Debug, Clone)]
pub struct Message {
    pub channel: String,
    pub payload: String,
    pub sender: String,
    pub timestamp: i64,
}

impl Message {
    /// Builds a message stamped with the current time.
    pub fn new(channel: &str, payload: &str, sender: &str) -> Self {
        Self {
            channel: channel.to_string(),
            payload: payload.to_string(),
            sender: sender.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
