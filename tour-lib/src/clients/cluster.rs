use crate::{ClusterConfig, Connection, Topology};
use redis::cluster::ClusterClient;
use redis::cluster_async::ClusterConnection;
use redis::{Cmd, RedisResult, Value};
use tracing::debug;

/// A Redis cluster. Slot discovery, routing and redirects are handled by
/// `redis::cluster_async`.
///
/// Like [`Standalone`](crate::Standalone), the seeds are only contacted when
/// the first command is issued.
pub struct Cluster {
    client: ClusterClient,
    conn: Option<ClusterConnection>,
}

impl Cluster {
    pub fn new(config: &ClusterConfig) -> RedisResult<Cluster> {
        Ok(Cluster {
            client: config.client()?,
            conn: None,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    async fn connection(&mut self) -> RedisResult<&mut ClusterConnection> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                debug!("discovering cluster topology");
                self.client.get_async_connection().await?
            }
        };

        Ok(self.conn.insert(conn))
    }
}

impl Connection for Cluster {
    fn topology(&self) -> Topology {
        Topology::Cluster
    }

    async fn query(&mut self, cmd: &Cmd) -> RedisResult<Value> {
        let conn = self.connection().await?;
        cmd.query_async(conn).await
    }
}
