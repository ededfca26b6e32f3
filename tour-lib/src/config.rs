//! Deployment parameters of the two flows.
//!
//! The `Default` impls are the addresses the tour was written against: a
//! local node on the default port and a three node cluster on a docker
//! bridge network.

use crate::DEFAULT_PORT;
use redis::cluster::{ClusterClient, ClusterClientBuilder};
use redis::{ConnectionInfo, IntoConnectionInfo, RedisResult};

/// Cluster seed nodes used when none are given.
pub const DEFAULT_CLUSTER_SEEDS: [&str; 3] =
    ["172.29.0.2:6379", "172.29.0.3:6379", "172.29.0.4:6379"];

/// Password of the default cluster.
pub const DEFAULT_CLUSTER_PASSWORD: &str = "bitnami";

/// A single Redis node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneConfig {
    /// `host:port`
    pub addr: String,
    pub password: Option<String>,
    /// Logical database selected after connecting.
    pub db: i64,
}

impl Default for StandaloneConfig {
    fn default() -> StandaloneConfig {
        StandaloneConfig {
            addr: format!("127.0.0.1:{DEFAULT_PORT}"),
            password: None,
            db: 0,
        }
    }
}

impl StandaloneConfig {
    /// Resolve into connection parameters. No connection is made.
    pub fn connection_info(&self) -> RedisResult<ConnectionInfo> {
        let mut info = format!("redis://{}", self.addr).into_connection_info()?;
        info.redis.db = self.db;
        info.redis.password.clone_from(&self.password);

        Ok(info)
    }
}

/// A Redis cluster, reached through any of its seed nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    /// `host:port` of each seed. The rest of the topology is discovered.
    pub seeds: Vec<String>,
    /// Shared by every node of the cluster.
    pub password: Option<String>,
}

impl Default for ClusterConfig {
    fn default() -> ClusterConfig {
        ClusterConfig {
            seeds: DEFAULT_CLUSTER_SEEDS.iter().map(ToString::to_string).collect(),
            password: Some(DEFAULT_CLUSTER_PASSWORD.to_string()),
        }
    }
}

impl ClusterConfig {
    /// Build the cluster client. Seeds are only validated, not contacted.
    pub fn client(&self) -> RedisResult<ClusterClient> {
        let mut builder =
            ClusterClientBuilder::new(self.seeds.iter().map(|seed| format!("redis://{seed}")));
        if let Some(password) = &self.password {
            builder = builder.password(password.clone());
        }

        builder.build()
    }
}
