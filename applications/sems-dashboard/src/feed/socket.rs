//! Push channel: one WebSocket, reopened after a delay whenever it drops

use futures::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message};
use gloo_timers::future::TimeoutFuture;

use super::{FeedError, PushMessage};
use crate::state::DashboardState;

/// Keep the push channel open for the lifetime of the page
pub async fn run(state: DashboardState) {
    let (url, delay_ms) = state
        .config
        .with_value(|c| (c.ws_url.clone(), c.reconnect_delay_ms));

    loop {
        match connect_and_read(&url, state).await {
            Ok(()) => log::info!("Push channel closed, reconnecting in {}ms", delay_ms),
            Err(e) => log::warn!("Push channel error: {}, reconnecting in {}ms", e, delay_ms),
        }
        state.set_connected(false);

        TimeoutFuture::new(delay_ms).await;
    }
}

async fn connect_and_read(url: &str, state: DashboardState) -> Result<(), FeedError> {
    let mut socket = WebSocket::open(url).map_err(|e| FeedError::Transport(e.to_string()))?;

    log::info!("Push channel opening to {}", url);

    while let Some(frame) = socket.next().await {
        let frame = frame.map_err(|e| FeedError::Transport(e.to_string()))?;
        // The stream yields nothing until the handshake is done
        state.set_connected(true);

        let text = match frame {
            Message::Text(text) => text,
            Message::Bytes(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => {
                    log::warn!("Dropping binary push frame");
                    continue;
                }
            },
        };

        match PushMessage::decode(&text) {
            Ok(message) => {
                log::debug!("Push event {}", message.event_name());
                state.apply_push(message);
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    Ok(())
}
