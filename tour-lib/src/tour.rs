//! The fixed sequence of operations run against each deployment.
//!
//! Every step is logged with its result or its error, and the next step runs
//! regardless of how the previous one went. The only branch is the log line
//! chosen from the cluster-mode check.

use crate::cmd::{Bound, Eval, Expiry, MSet, Order, Sort, ZInterStore, ZRangeByScore, hash_tag};
use crate::{Client, Connection, Topology};
use chrono::{DateTime, Local, TimeZone};
use redis::{RedisError, RedisResult, Value};
use std::fmt;
use tracing::{error, info, instrument};

/// Hash tag shared by the multi-key steps so they land on one shard.
pub const HASH_TAG: &str = "hashTag1";

/// Script of the [`Step::Eval`] step.
pub const SCRIPT: &str = "return {KEYS[1],ARGV[1]}";

const BANNER_WIDTH: usize = 20;

/// One operation of the tour, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `INFO cluster`
    ClusterMode,
    /// `CLIENT GETNAME`
    ClientGetName,
    /// `CLIENT ID`
    ClientId,
    /// `CLIENT LIST`
    ClientList,
    /// `SET a <stamp> KEEPTTL`
    Set,
    /// `GET a`
    Get,
    /// `MSET {hashTag1}:a <stamp> {hashTag1}:b <stamp>`
    MSet,
    /// `MGET {hashTag1}:a {hashTag1}:b`
    MGet,
    /// `SET key value EX 10 NX`
    SetNxEx,
    /// `SET key value KEEPTTL NX`
    SetNxKeepTtl,
    /// `SORT list LIMIT 0 2 ASC`
    Sort,
    /// `ZRANGEBYSCORE zset -inf +inf WITHSCORES LIMIT 0 2`
    ZRangeByScore,
    /// `ZINTERSTORE {hashTag1}:out 2 {hashTag1}:zset1 {hashTag1}:zset2 WEIGHTS 2 3`
    ZInterStore,
    /// `EVAL "return {KEYS[1],ARGV[1]}" 1 key hello`
    Eval,
    /// `set key value`, sent as a raw command
    Raw,
}

impl Step {
    pub const ALL: [Step; 15] = [
        Step::ClusterMode,
        Step::ClientGetName,
        Step::ClientId,
        Step::ClientList,
        Step::Set,
        Step::Get,
        Step::MSet,
        Step::MGet,
        Step::SetNxEx,
        Step::SetNxKeepTtl,
        Step::Sort,
        Step::ZRangeByScore,
        Step::ZInterStore,
        Step::Eval,
        Step::Raw,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Step::ClusterMode => "cluster_mode",
            Step::ClientGetName => "client_getname",
            Step::ClientId => "client_id",
            Step::ClientList => "client_list",
            Step::Set => "set",
            Step::Get => "get",
            Step::MSet => "mset",
            Step::MGet => "mget",
            Step::SetNxEx => "set_nx_ex",
            Step::SetNxKeepTtl => "set_nx_keepttl",
            Step::Sort => "sort",
            Step::ZRangeByScore => "zrangebyscore",
            Step::ZInterStore => "zinterstore",
            Step::Eval => "eval",
            Step::Raw => "raw",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// What one step produced: the rendered reply, or the error.
#[derive(Debug)]
pub struct Outcome {
    pub step: Step,
    pub result: Result<String, RedisError>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of one tour, in execution order.
#[derive(Debug)]
pub struct Report {
    pub topology: Topology,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    fn new(topology: Topology) -> Report {
        Report {
            topology,
            outcomes: Vec::with_capacity(Step::ALL.len()),
        }
    }

    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.outcomes.iter().map(|outcome| outcome.step)
    }

    pub fn outcome(&self, step: Step) -> Option<&Outcome> {
        self.outcomes.iter().find(|outcome| outcome.step == step)
    }

    /// Number of steps that ended in an error.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|outcome| !outcome.is_ok()).count()
    }

    /// Log the result of `step` and keep it.
    fn record<T: fmt::Debug>(&mut self, step: Step, result: RedisResult<T>) {
        let result = match result {
            Ok(value) => {
                info!(%step, result = ?value);
                Ok(format!("{value:?}"))
            }
            Err(err) => {
                error!(%step, cause = %err);
                Err(err)
            }
        };

        self.outcomes.push(Outcome { step, result });
    }

    /// Like [`Report::record`], but the value is kept and logged as its own
    /// line, in its `Display` form.
    fn record_line<T: fmt::Display>(&mut self, step: Step, result: RedisResult<T>) {
        let result = result.map(|value| value.to_string());
        match &result {
            Ok(line) => info!(%step, "{line}"),
            Err(err) => error!(%step, cause = %err),
        }

        self.outcomes.push(Outcome { step, result });
    }
}

/// `now` as `[YYYY-MM-DD,HH:MM:SS]`, the value written by the string steps.
pub fn stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    now.format("[%Y-%m-%d,%H:%M:%S]").to_string()
}

/// Run the tour, stamping values with the current local time.
pub async fn run<C: Connection>(client: &mut Client<C>) -> Report {
    run_with_stamp(client, &stamp(&Local::now())).await
}

/// Run the tour, writing `stamp` as the value of the string steps.
#[instrument(skip(client), fields(topology = %client.topology()))]
pub async fn run_with_stamp<C: Connection>(client: &mut Client<C>, stamp: &str) -> Report {
    info!("{}", "=".repeat(BANNER_WIDTH));

    let mut report = Report::new(client.topology());

    report.record_line(Step::ClusterMode, client.cluster_mode().await);

    report.record(Step::ClientGetName, client.client_getname().await);
    report.record(Step::ClientId, client.client_id().await);
    report.record(Step::ClientList, client.client_list().await);

    report.record(Step::Set, client.set("a", stamp, Some(Expiry::KeepTtl)).await);
    report.record(Step::Get, client.get("a").await);

    let tagged = [hash_tag(HASH_TAG, "a"), hash_tag(HASH_TAG, "b")];
    let pairs = MSet::new().pair(&tagged[0], stamp).pair(&tagged[1], stamp);
    report.record(Step::MSet, client.mset(pairs).await);
    report.record(Step::MGet, client.mget(&tagged).await);

    let ten_seconds = Expiry::Ex(10);
    report.record(Step::SetNxEx, client.set_nx("key", "value", Some(ten_seconds)).await);
    report.record(
        Step::SetNxKeepTtl,
        client.set_nx("key", "value", Some(Expiry::KeepTtl)).await,
    );

    let sort = Sort::new("list").limit(0, 2).order(Order::Asc);
    report.record(Step::Sort, client.sort(sort).await);

    let range = ZRangeByScore::new("zset", Bound::NegInf, Bound::PosInf).limit(0, 2);
    report.record(Step::ZRangeByScore, client.zrangebyscore_withscores(range).await);

    let store = ZInterStore::new(
        hash_tag(HASH_TAG, "out"),
        [hash_tag(HASH_TAG, "zset1"), hash_tag(HASH_TAG, "zset2")],
    )
    .weights([2.0, 3.0]);
    report.record(Step::ZInterStore, client.zinterstore(store).await);

    let script = Eval::new(SCRIPT).key("key").arg("hello");
    report.record(Step::Eval, client.eval::<Value>(script).await);

    let mut raw = redis::cmd("set");
    raw.arg("key").arg("value");
    report.record(Step::Raw, client.raw::<Value>(&raw).await);

    report
}
