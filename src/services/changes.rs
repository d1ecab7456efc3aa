//! Database change feed backing the live-updates SSE endpoint
//!
//! Row changes on the guest-pass tables raise `pg_notify` through triggers
//! (see the migrations). A background task listens on that channel and fans
//! the payloads out to every connected SSE client through a broadcast
//! channel. Clients that fall behind miss events; there is no replay.

use sqlx::postgres::PgListener;
use sqlx::{Pool, Postgres};
use tokio::sync::broadcast;

use crate::error::AppResult;

/// Notification channel raised by the database triggers
pub const CHANGE_CHANNEL: &str = "grandcity_changes";

const FEED_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<String>,
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(FEED_CAPACITY);
        Self { sender }
    }

    /// Subscribe a new SSE client; the subscription ends when the receiver
    /// is dropped
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    /// Forward one raw payload to all connected clients
    pub fn publish(&self, payload: String) {
        // send only fails when no client is connected, which is fine
        let _ = self.sender.send(payload);
    }

    /// Spawn the background task relaying database notifications into the feed
    pub async fn spawn_listener(&self, pool: Pool<Postgres>) -> AppResult<()> {
        let mut listener = PgListener::connect_with(&pool)
            .await
            .map_err(crate::error::AppError::from)?;
        listener
            .listen(CHANGE_CHANNEL)
            .await
            .map_err(crate::error::AppError::from)?;

        let feed = self.clone();
        tokio::spawn(async move {
            loop {
                match listener.recv().await {
                    Ok(notification) => {
                        feed.publish(notification.payload().to_string());
                    }
                    Err(e) => {
                        // PgListener reconnects internally; log and keep going
                        tracing::warn!("Change listener error: {}", e);
                        tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                    }
                }
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_payloads() {
        let feed = ChangeFeed::new();
        let mut rx = feed.subscribe();
        feed.publish("{\"table\":\"visits\",\"action\":\"INSERT\"}".to_string());
        let payload = rx.recv().await.unwrap();
        assert!(payload.contains("visits"));
    }

    #[tokio::test]
    async fn publish_without_subscribers_does_not_panic() {
        let feed = ChangeFeed::new();
        feed.publish("ignored".to_string());
    }

    #[tokio::test]
    async fn dropped_subscriber_is_torn_down() {
        let feed = ChangeFeed::new();
        let rx = feed.subscribe();
        drop(rx);
        feed.publish("after-drop".to_string());
        // a fresh subscriber only sees events published after it joined
        let mut rx2 = feed.subscribe();
        feed.publish("fresh".to_string());
        assert_eq!(rx2.recv().await.unwrap(), "fresh");
    }
}
