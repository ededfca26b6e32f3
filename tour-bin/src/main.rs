#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]

use clap::Parser;
use tour_lib::config::{DEFAULT_CLUSTER_PASSWORD, DEFAULT_CLUSTER_SEEDS};
use tour_lib::{Client, ClusterConfig, Connection, DEFAULT_PORT, Report, StandaloneConfig, tour};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "redis-tour",
    version,
    author,
    about = "Run a fixed set of Redis commands against a node and a cluster"
)]
struct CliCommand {
    /// `host:port` of the standalone node.
    #[clap(long, default_value_t = format!("127.0.0.1:{DEFAULT_PORT}"))]
    addr: String,

    #[clap(long)]
    password: Option<String>,

    /// Logical database of the standalone node.
    #[clap(long, default_value_t = 0)]
    db: i64,

    /// `host:port` of a cluster seed node, repeat for more seeds.
    #[clap(long = "node", default_values_t = DEFAULT_CLUSTER_SEEDS.map(String::from))]
    nodes: Vec<String>,

    #[clap(long, default_value = DEFAULT_CLUSTER_PASSWORD)]
    cluster_password: String,
}

impl CliCommand {
    fn standalone(&self) -> StandaloneConfig {
        StandaloneConfig {
            addr: self.addr.clone(),
            password: self.password.clone(),
            db: self.db,
        }
    }

    fn cluster(&self) -> ClusterConfig {
        ClusterConfig {
            seeds: self.nodes.clone(),
            password: Some(self.cluster_password.clone()).filter(|password| !password.is_empty()),
        }
    }
}

/// `flavor = "current_thread"`: the flows run one after another and every
/// command waits for its reply, there is nothing to spread over threads.
#[tokio::main(flavor = "current_thread")]
async fn main() -> tour_lib::Result<()> {
    set_up_logging()?;

    let cmd = CliCommand::parse();

    // Both clients are built before anything runs so that a bad address is
    // reported up front. Building them does no I/O.
    let mut standalone = Client::standalone(&cmd.standalone())?;
    let mut cluster = Client::cluster(&cmd.cluster())?;

    visit(&mut standalone).await;
    visit(&mut cluster).await;

    Ok(())
}

async fn visit<C: Connection>(client: &mut Client<C>) {
    let report = tour::run(client).await;
    summarize(&report);
}

fn summarize(report: &Report) {
    let failed = report.failures();
    if failed == 0 {
        info!(topology = %report.topology, steps = report.outcomes.len(), "tour finished");
    } else {
        warn!(
            topology = %report.topology,
            steps = report.outcomes.len(),
            failed,
            "tour finished with failures"
        );
    }
}

/// Log to stdout at `info` unless `RUST_LOG` says otherwise.
fn set_up_logging() -> tour_lib::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}
