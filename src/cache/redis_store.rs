//! Redis-backed store
//!
//! Wraps a `ConnectionManager`, which reconnects on its own and is cheap to
//! clone, so one handle is shared by every request.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, IntoConnectionInfo};
use tracing::debug;

use super::{KvStore, StoreResult};
use crate::error::StoreError;

/// Production store client.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to the store at `url`, authenticating with `token`.
    ///
    /// The token replaces any password embedded in the URL.
    pub async fn connect(url: &str, token: &str) -> StoreResult<Self> {
        let mut info = url.into_connection_info()?;
        info.redis.password = Some(token.to_string());

        let client = Client::open(info)?;
        let conn = ConnectionManager::new(client).await?;
        debug!("Connected to Redis at {}", client_host(url));

        Ok(Self { conn })
    }
}

/// Host part of a store URL, without credentials, for logging.
fn client_host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.rsplit_once('@').map_or(rest, |(_, host)| host)
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let reply: String = conn.set(key, value).await?;
        if reply == "OK" {
            Ok(())
        } else {
            Err(StoreError::Rejected(reply))
        }
    }
}
