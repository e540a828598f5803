use crate::domain::model::Broadcast;
use crate::domain::ports::BroadcastFeed;
use crate::utils::error::Result;
use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::Message as Frame, MaybeTlsStream, WebSocketStream,
};

/// Live broadcast feed over a websocket.
///
/// The server pushes one JSON envelope per text frame. Frames that do not
/// parse are logged and skipped rather than killing the session; a stale or
/// foreign frame must not take the mirror down. There is no reconnect: when
/// the socket ends, the feed reports `Ok(None)` and the session is over.
#[derive(Debug)]
pub struct WsFeed {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsFeed {
    pub async fn connect(socket_url: &str) -> Result<Self> {
        tracing::info!("📡 Connecting to socket: {}", socket_url);
        let (stream, response) = connect_async(socket_url).await?;
        tracing::debug!("📡 Socket handshake status: {}", response.status());
        Ok(Self { stream })
    }
}

#[async_trait]
impl BroadcastFeed for WsFeed {
    async fn next_broadcast(&mut self) -> Result<Option<Broadcast>> {
        while let Some(frame) = self.stream.next().await {
            match frame? {
                Frame::Text(text) => match serde_json::from_str::<Broadcast>(&text) {
                    Ok(broadcast) => return Ok(Some(broadcast)),
                    Err(e) => {
                        tracing::warn!("Skipping malformed broadcast frame: {}", e);
                        tracing::debug!("Offending frame: {}", text);
                    }
                },
                Frame::Close(_) => {
                    tracing::info!("📡 Socket closed by server");
                    return Ok(None);
                }
                // Ping/pong is handled by the library; binary frames carry
                // nothing we understand.
                _ => {}
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::BroadcastKind;
    use futures_util::SinkExt;
    use tokio::net::TcpListener;
    use tokio_tungstenite::accept_async;

    async fn serve_frames(frames: Vec<Frame>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = accept_async(stream).await.unwrap();
            for frame in frames {
                ws.send(frame).await.unwrap();
            }
            ws.close(None).await.ok();
        });

        format!("ws://{}", addr)
    }

    fn new_broadcast_frame(id: i64, text: &str) -> Frame {
        Frame::Text(
            serde_json::json!({
                "message": {
                    "id": id,
                    "uuid": "9b2f7c1e-54a3-4a0b-8d7e-2f90ab1c44aa",
                    "message": text,
                    "author": "Seanie X"
                },
                "message_type": "NEW"
            })
            .to_string(),
        )
    }

    #[tokio::test]
    async fn yields_parsed_broadcasts_then_none_on_close() {
        let url = serve_frames(vec![
            new_broadcast_frame(1, "first"),
            new_broadcast_frame(2, "second"),
        ])
        .await;

        let mut feed = WsFeed::connect(&url).await.unwrap();

        let first = feed.next_broadcast().await.unwrap().unwrap();
        assert_eq!(first.message.id, 1);
        assert_eq!(first.message_type, BroadcastKind::New);

        let second = feed.next_broadcast().await.unwrap().unwrap();
        assert_eq!(second.message.id, 2);

        assert!(feed.next_broadcast().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn skips_frames_that_do_not_parse() {
        let url = serve_frames(vec![
            Frame::Text("definitely not json".to_string()),
            Frame::Binary(vec![0xde, 0xad]),
            new_broadcast_frame(5, "survivor"),
        ])
        .await;

        let mut feed = WsFeed::connect(&url).await.unwrap();

        let broadcast = feed.next_broadcast().await.unwrap().unwrap();
        assert_eq!(broadcast.message.id, 5);
        assert!(feed.next_broadcast().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn connect_failure_is_a_socket_error() {
        // Nothing is listening on this port.
        let err = WsFeed::connect("ws://127.0.0.1:1").await.unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::ChatError::SocketError(_)
        ));
    }
}
