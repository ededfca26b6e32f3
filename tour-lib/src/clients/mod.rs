mod client;
pub use client::Client;

mod cluster;
pub use cluster::Cluster;

mod standalone;
pub use standalone::Standalone;
