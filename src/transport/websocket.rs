use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::spawn;
use tokio::sync::mpsc;
use tokio_tungstenite::{WebSocketStream, accept_hdr_async};
use tracing::{debug, info, warn};
use tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tungstenite::http::StatusCode;
use tungstenite::http::header::ORIGIN;
use tungstenite::protocol::Message as WsMessage;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::Settings;
use crate::connection::Connection;
use crate::relay::message::Message;
use crate::relay::{DEFAULT_CHANNEL, Hub};
use crate::transport::message::ClientMessage;
use crate::utils::error::RelayError;

/// Accepts WebSocket connections and bridges them to the hub.
///
/// Each accepted connection is placed in the default channel, gets a writer
/// task draining its outbound queue, and has its inbound frames translated
/// into hub operations until the socket closes. Deregistration runs exactly
/// once per connection, whichever side of the socket dies first.
pub async fn start_websocket_server(
    addr: &str,
    hub: Arc<Mutex<Hub>>,
    settings: Settings,
) -> Result<(), RelayError> {
    let listener = TcpListener::bind(addr).await.map_err(|e| RelayError::Bind {
        addr: addr.to_string(),
        source: e,
    })?;

    info!("WebSocket server listening on ws://{addr}");

    while let Ok((stream, _)) = listener.accept().await {
        let hub = hub.clone();
        let allowed_origin = settings.server.allowed_origin.clone();

        tokio::spawn(async move {
            let ws_stream = match accept_checked(stream, allowed_origin).await {
                Ok(ws) => ws,
                Err(e) => {
                    warn!("WebSocket handshake error: {e}");
                    return;
                }
            };

            let (mut ws_sender, mut ws_receiver) = ws_stream.split();

            // Outbound queue for this connection; the hub pushes onto it and
            // the writer task below drains it onto the socket.
            let (tx, mut rx) = mpsc::unbounded_channel::<WsMessage>();
            let connection = Connection::new(tx);
            let connection_id = connection.id.clone();

            {
                let mut hub = hub.lock().unwrap();
                hub.register(DEFAULT_CHANNEL, connection.clone());
            }
            info!("{connection_id} connected");

            let cleanup_called = Arc::new(AtomicBool::new(false));

            let do_cleanup = {
                let hub = hub.clone();
                let connection_id = connection_id.clone();

                move || {
                    if !cleanup_called.swap(true, Ordering::SeqCst) {
                        let mut hub = hub.lock().unwrap();
                        hub.deregister(&connection_id);
                    }
                }
            };

            {
                let connection_id = connection_id.clone();
                let do_cleanup = do_cleanup.clone();

                spawn(async move {
                    while let Some(msg) = rx.recv().await {
                        if let Err(e) = ws_sender.send(msg).await {
                            warn!("failed to send to {connection_id}: {e}");
                            break;
                        }
                    }

                    do_cleanup();
                    debug!("send loop closed for {connection_id}");
                });
            }

            while let Some(Ok(msg)) = ws_receiver.next().await {
                if !msg.is_text() {
                    continue;
                }
                if let Ok(text) = msg.to_text() {
                    handle_frame(&hub, &connection, text);
                }
            }

            info!("{connection_id} disconnected");
            do_cleanup();
        });
    }

    Ok(())
}

/// Translates one inbound text frame into hub operations.
pub(crate) fn handle_frame(hub: &Arc<Mutex<Hub>>, connection: &Connection, text: &str) {
    match serde_json::from_str::<ClientMessage>(text) {
        Ok(ClientMessage::Join { channel }) => {
            let mut hub = hub.lock().unwrap();
            hub.register(&channel, connection.clone());
            info!("{} joined {channel}", connection.id);
        }

        Ok(ClientMessage::Leave { channel }) => {
            let mut hub = hub.lock().unwrap();
            hub.leave(&channel, &connection.id);
            info!("{} left {channel}", connection.id);
        }

        Ok(ClientMessage::Send { channel, payload }) => {
            let channel = channel.unwrap_or_else(|| DEFAULT_CHANNEL.to_string());
            let message = Message::new(&channel, &payload, &connection.id);
            let hub = hub.lock().unwrap();
            hub.publish(&message, false);
        }

        Err(_) => {
            // Not a protocol frame: relay the raw text to the default channel.
            let message = Message::new(DEFAULT_CHANNEL, text, &connection.id);
            let hub = hub.lock().unwrap();
            hub.publish(&message, false);
        }
    }
}

/// Runs the WebSocket handshake, rejecting the upgrade with 403 when an
/// allowed origin is configured and the request's `Origin` differs.
async fn accept_checked(
    stream: TcpStream,
    allowed_origin: Option<String>,
) -> Result<WebSocketStream<TcpStream>, tungstenite::Error> {
    accept_hdr_async(stream, move |req: &Request, resp: Response| {
        let Some(allowed) = &allowed_origin else {
            return Ok(resp);
        };

        let origin = req.headers().get(ORIGIN).and_then(|v| v.to_str().ok());
        if origin == Some(allowed.as_str()) {
            Ok(resp)
        } else {
            let mut reject = ErrorResponse::new(Some("origin not allowed".to_string()));
            *reject.status_mut() = StatusCode::FORBIDDEN;
            Err(reject)
        }
    })
    .await
}
