//! Reading `INFO` replies.

use redis::{ErrorKind, FromRedisValue, InfoDict, RedisResult, Value};
use std::fmt;

/// Whether the node answering `INFO cluster` runs with cluster support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterMode {
    Enabled,
    Disabled,
}

impl ClusterMode {
    /// Looks at the `cluster_enabled` field. A missing field means the
    /// server predates cluster support, so it counts as disabled.
    pub fn from_info(info: &InfoDict) -> ClusterMode {
        match info.get::<i64>("cluster_enabled") {
            Some(1) => ClusterMode::Enabled,
            _ => ClusterMode::Disabled,
        }
    }
}

impl fmt::Display for ClusterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterMode::Enabled => "cluster mode".fmt(f),
            ClusterMode::Disabled => "standalone cluster mode".fmt(f),
        }
    }
}

/// Turn an `INFO` reply into an `InfoDict`.
///
/// A cluster connection may fan `INFO` out and answer with one entry per
/// node; the first node's text is used then.
pub fn parse_info(value: &Value) -> RedisResult<InfoDict> {
    match value {
        Value::Map(nodes) => match nodes.first() {
            Some((_, text)) => parse_info(text),
            None => Err((ErrorKind::TypeError, "INFO returned no nodes").into()),
        },
        Value::VerbatimString { text, .. } => Ok(InfoDict::new(text)),
        other => InfoDict::from_redis_value(other),
    }
}
