use redis::{Cmd, RedisResult, Value};
use std::fmt;

/// Which kind of deployment a `Connection` talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Standalone,
    Cluster,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Standalone => "standalone".fmt(f),
            Topology::Cluster => "cluster".fmt(f),
        }
    }
}

/// The capability the tour needs from a deployment: send one command and get
/// one reply back.
///
/// Routing, redirection and the wire format are left to the implementation
/// (in practice the `redis` crate). Callers never learn whether a command hit
/// one node or was fanned out.
#[allow(async_fn_in_trait)]
pub trait Connection {
    fn topology(&self) -> Topology;

    /// Issue `cmd` and wait for its reply.
    ///
    /// A server error reply is returned as `Err`, as is a failure to reach
    /// the server at all.
    async fn query(&mut self, cmd: &Cmd) -> RedisResult<Value>;
}
