//! The major components are:
//! * `connection`: the `Connection` capability shared by both topologies.
//! * `clients`: lazy standalone/cluster connections and the typed `Client`.
//! * `cmd`: builders for the Redis commands the tour issues.
//! * `tour`: the fixed operation sequence and its `Report`.

#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]

pub mod clients;
pub use clients::{Client, Cluster, Standalone};

pub mod cmd;
pub use cmd::{Protocol, hash_tag};

pub mod config;
pub use config::{ClusterConfig, StandaloneConfig};

mod connection;
pub use connection::{Connection, Topology};

pub mod info;
pub use info::ClusterMode;

pub mod tour;
pub use tour::{Outcome, Report, Step};

#[cfg(test)]
mod mock;

/// Default port that a redis server listens on.
pub const DEFAULT_PORT: u16 = 6379;

/// simple Error. Used by setup paths; operations report `redis::RedisError`.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, Error>;
