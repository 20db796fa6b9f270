use super::Connection;
use tokio::sync::mpsc;
use tungstenite::protocol::Message as WsMessage;

#[test]
fn test_connection_new_assigns_unique_ids() {
    let (tx, _rx) = mpsc::unbounded_channel::<WsMessage>();
    let a = Connection::new(tx.clone());
    let b = Connection::new(tx);
    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
}

#[test]
fn test_connection_send_queues_text_frame() {
    let (tx, mut rx) = mpsc::unbounded_channel::<WsMessage>();
    let conn = Connection::new(tx);

    conn.send("hello").expect("send should succeed");

    assert_eq!(rx.try_recv().unwrap(), WsMessage::text("hello"));
}

#[test]
fn test_connection_send_fails_when_receiver_dropped() {
    let (tx, rx) = mpsc::unbounded_channel::<WsMessage>();
    let conn = Connection::new(tx);
    drop(rx);

    assert!(conn.send("hello").is_err());
}
