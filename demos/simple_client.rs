use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;

#[tokio::main]
async fn main() {
    let (mut ws_stream, _response) = connect_async("ws://127.0.0.1:3000")
        .await
        .expect("Failed to connect");

    // 1. Join the chat channel
    let join = json!({ "type": "join", "channel": "chat" });
    ws_stream
        .send(WsMessage::text(join.to_string()))
        .await
        .unwrap();

    // 2. Send a message to it
    let send = json!({ "type": "send", "channel": "chat", "payload": "Hello from simple_client" });
    ws_stream
        .send(WsMessage::text(send.to_string()))
        .await
        .unwrap();

    // 3. Read the echoed message back
    if let Some(Ok(WsMessage::Text(incoming))) = ws_stream.next().await {
        println!("Incoming: {incoming}");
    }
}
