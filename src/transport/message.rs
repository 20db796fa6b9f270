use serde::Deserialize;

/// Protocol frames a client may send.
///
/// Frames are JSON objects tagged by `type`. Any text frame that does not
/// parse as one of these is treated as a bare payload for the default
/// channel, so plain-text clients keep working without the envelope.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "join")]
    Join { channel: String },

    #[serde(rename = "leave")]
    Leave { channel: String },

    #[serde(rename = "send")]
    Send {
        channel: Option<String>,
        payload: String,
    },
}
