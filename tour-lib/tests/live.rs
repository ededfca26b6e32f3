//! Tests against real deployments.
//!
//! They need a Redis node on `127.0.0.1:6379` and, for the cluster tests, the
//! default three node cluster. Run them with `cargo test -- --ignored`.

use redis::Value;
use tour_lib::cmd::{Eval, Expiry, MSet, ZInterStore, hash_tag};
use tour_lib::tour::{self, SCRIPT, Step};
use tour_lib::{Client, ClusterConfig, ClusterMode, Connection, Standalone, StandaloneConfig};

fn standalone() -> Client<Standalone> {
    Client::standalone(&StandaloneConfig::default()).unwrap()
}

async fn raw<C: Connection>(client: &mut Client<C>, args: &[&str]) -> Value {
    let mut cmd = redis::cmd(args[0]);
    for arg in &args[1..] {
        cmd.arg(*arg);
    }
    client.raw(&cmd).await.unwrap()
}

async fn ttl<C: Connection>(client: &mut Client<C>, key: &str) -> i64 {
    let mut cmd = redis::cmd("TTL");
    cmd.arg(key);
    client.raw(&cmd).await.unwrap()
}

#[tokio::test]
#[ignore = "needs a Redis node on 127.0.0.1:6379"]
async fn set_then_get() {
    let mut client = standalone();
    raw(&mut client, &["DEL", "tour:live:a"]).await;

    client.set("tour:live:a", "v", None).await.unwrap();
    assert_eq!(client.get("tour:live:a").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
#[ignore = "needs a Redis node on 127.0.0.1:6379"]
async fn hash_tagged_mset_then_mget() {
    let mut client = standalone();
    let keys = [hash_tag("tour:live", "a"), hash_tag("tour:live", "b")];

    client
        .mset(MSet::new().pair(&keys[0], "v").pair(&keys[1], "v"))
        .await
        .unwrap();
    let values = client.mget(&keys).await.unwrap();
    assert_eq!(values, [Some("v".to_string()), Some("v".to_string())]);
}

#[tokio::test]
#[ignore = "needs a Redis node on 127.0.0.1:6379"]
async fn set_nx_applies_ttl_only_when_it_writes() {
    let mut client = standalone();
    raw(&mut client, &["DEL", "tour:live:nx"]).await;

    assert!(client.set_nx("tour:live:nx", "value", Some(Expiry::Ex(10))).await.unwrap());
    let remaining = ttl(&mut client, "tour:live:nx").await;
    assert!(remaining > 0 && remaining <= 10);

    assert!(!client.set_nx("tour:live:nx", "value", Some(Expiry::KeepTtl)).await.unwrap());
    assert!(!client.set_nx("tour:live:nx", "value", Some(Expiry::Ex(100))).await.unwrap());
    assert!(ttl(&mut client, "tour:live:nx").await <= 10);
}

#[tokio::test]
#[ignore = "needs a Redis node on 127.0.0.1:6379"]
async fn keep_ttl_retains_the_previous_expiry() {
    let mut client = standalone();

    client.set("tour:live:keep", "first", Some(Expiry::Ex(100))).await.unwrap();
    client.set("tour:live:keep", "second", Some(Expiry::KeepTtl)).await.unwrap();

    assert!(ttl(&mut client, "tour:live:keep").await > 0);
    assert_eq!(
        client.get("tour:live:keep").await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
#[ignore = "needs a Redis node on 127.0.0.1:6379"]
async fn weighted_intersection_reports_cardinality() {
    let mut client = standalone();
    let (zset1, zset2, out) = (
        hash_tag("tour:live", "zset1"),
        hash_tag("tour:live", "zset2"),
        hash_tag("tour:live", "out"),
    );
    raw(&mut client, &["DEL", &zset1, &zset2, &out]).await;
    raw(&mut client, &["ZADD", &zset1, "1", "one", "2", "two"]).await;
    raw(&mut client, &["ZADD", &zset2, "1", "one", "2", "two", "3", "three"]).await;

    let stored = client
        .zinterstore(ZInterStore::new(&out, [&zset1, &zset2]).weights([2.0, 3.0]))
        .await
        .unwrap();
    assert_eq!(stored, 2);

    let Value::Int(card) = raw(&mut client, &["ZCARD", &out]).await else {
        panic!("ZCARD did not reply with an integer");
    };
    assert_eq!(stored, card);

    let score: f64 = {
        let mut cmd = redis::cmd("ZSCORE");
        cmd.arg(&out).arg("two");
        client.raw(&cmd).await.unwrap()
    };
    assert!((score - 10.0).abs() < f64::EPSILON);
}

#[tokio::test]
#[ignore = "needs a Redis node on 127.0.0.1:6379"]
async fn script_echoes_key_and_argument() {
    let mut client = standalone();

    let reply: Vec<String> = client
        .eval(Eval::new(SCRIPT).key("key").arg("hello"))
        .await
        .unwrap();
    assert_eq!(reply, ["key", "hello"]);
}

#[tokio::test]
#[ignore = "needs a Redis node on 127.0.0.1:6379"]
async fn standalone_node_is_not_clustered() {
    let mut client = standalone();
    assert_eq!(client.cluster_mode().await.unwrap(), ClusterMode::Disabled);
}

#[tokio::test]
#[ignore = "needs a Redis node on 127.0.0.1:6379"]
async fn standalone_tour_runs_every_step() {
    let mut client = standalone();

    let report = tour::run(&mut client).await;

    assert_eq!(report.steps().collect::<Vec<_>>(), Step::ALL);
    assert!(report.outcome(Step::Set).unwrap().is_ok());
    assert!(report.outcome(Step::Eval).unwrap().is_ok());
}

#[tokio::test]
#[ignore = "needs the three node cluster on 172.29.0.2-4"]
async fn cluster_is_clustered() {
    let mut client = Client::cluster(&ClusterConfig::default()).unwrap();
    assert_eq!(client.cluster_mode().await.unwrap(), ClusterMode::Enabled);
}

#[tokio::test]
#[ignore = "needs the three node cluster on 172.29.0.2-4"]
async fn cluster_rejects_intersection_across_slots() {
    let mut client = Client::cluster(&ClusterConfig::default()).unwrap();

    let untagged = ZInterStore::new("tour:out", ["tour:zset1", "tour:zset2"]).weights([2.0, 3.0]);
    assert!(client.zinterstore(untagged).await.is_err());

    let tagged = ZInterStore::new(
        hash_tag("tour", "out"),
        [hash_tag("tour", "zset1"), hash_tag("tour", "zset2")],
    );
    assert!(client.zinterstore(tagged).await.is_ok());
}

#[tokio::test]
#[ignore = "needs the three node cluster on 172.29.0.2-4"]
async fn cluster_tour_runs_every_step() {
    let mut client = Client::cluster(&ClusterConfig::default()).unwrap();

    let report = tour::run(&mut client).await;

    assert_eq!(report.steps().collect::<Vec<_>>(), Step::ALL);
    assert_eq!(
        report.outcome(Step::ClusterMode).unwrap().result.as_deref().unwrap(),
        "cluster mode"
    );
    assert!(report.outcome(Step::MGet).unwrap().is_ok());
}
