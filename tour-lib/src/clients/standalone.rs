use crate::{Connection, StandaloneConfig, Topology};
use redis::aio::MultiplexedConnection;
use redis::{Cmd, RedisResult, Value};
use tracing::debug;

/// A single node, reached over one multiplexed connection.
///
/// Creating a `Standalone` does no I/O. The connection is opened by the
/// first command; if that fails the command fails and the next one tries
/// again.
pub struct Standalone {
    client: redis::Client,
    conn: Option<MultiplexedConnection>,
}

impl Standalone {
    pub fn new(config: &StandaloneConfig) -> RedisResult<Standalone> {
        let client = redis::Client::open(config.connection_info()?)?;

        Ok(Standalone { client, conn: None })
    }

    /// `true` once a command has successfully opened the connection.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    async fn connection(&mut self) -> RedisResult<&mut MultiplexedConnection> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                debug!(addr = %self.client.get_connection_info().addr, "connecting");
                self.client.get_multiplexed_async_connection().await?
            }
        };

        Ok(self.conn.insert(conn))
    }
}

impl Connection for Standalone {
    fn topology(&self) -> Topology {
        Topology::Standalone
    }

    async fn query(&mut self, cmd: &Cmd) -> RedisResult<Value> {
        let conn = self.connection().await?;
        cmd.query_async(conn).await
    }
}
