use crate::cmd::Protocol;
use redis::Cmd;
use std::fmt;

/// One end of a score interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `-inf`
    NegInf,
    /// `+inf`
    PosInf,
    /// `score`, the score itself is part of the range.
    Inclusive(f64),
    /// `(score`
    Exclusive(f64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInf => "-inf".fmt(f),
            Bound::PosInf => "+inf".fmt(f),
            Bound::Inclusive(score) => write!(f, "{score}"),
            Bound::Exclusive(score) => write!(f, "({score}"),
        }
    }
}

/// Members of a sorted set with a score between `min` and `max`, lowest
/// score first.
///
/// ```text
/// ZRANGEBYSCORE key min max [WITHSCORES] [LIMIT offset count]
/// ```
#[derive(Debug)]
pub struct ZRangeByScore {
    key: String,
    min: Bound,
    max: Bound,
    with_scores: bool,
    limit: Option<(i64, i64)>,
}

impl ZRangeByScore {
    pub fn new(key: impl ToString, min: Bound, max: Bound) -> ZRangeByScore {
        ZRangeByScore {
            key: key.to_string(),
            min,
            max,
            with_scores: false,
            limit: None,
        }
    }

    /// Reply with `member, score` pairs instead of bare members.
    #[must_use]
    pub fn with_scores(mut self) -> ZRangeByScore {
        self.with_scores = true;
        self
    }

    #[must_use]
    pub fn limit(mut self, offset: i64, count: i64) -> ZRangeByScore {
        self.limit = Some((offset, count));
        self
    }
}

impl Protocol for ZRangeByScore {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("ZRANGEBYSCORE");
        cmd.arg(self.key)
            .arg(self.min.to_string())
            .arg(self.max.to_string());
        if self.with_scores {
            cmd.arg("WITHSCORES");
        }
        if let Some((offset, count)) = self.limit {
            cmd.arg("LIMIT").arg(offset).arg(count);
        }

        cmd
    }
}

/// How scores of the same member are combined across the input sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregate {
    #[default]
    Sum,
    Min,
    Max,
}

impl Aggregate {
    fn as_str(self) -> &'static str {
        match self {
            Aggregate::Sum => "SUM",
            Aggregate::Min => "MIN",
            Aggregate::Max => "MAX",
        }
    }
}

/// Intersect sorted sets, store the result in `destination` and reply with
/// its cardinality.
///
/// In cluster mode `destination` and every source must share a slot.
///
/// ```text
/// ZINTERSTORE destination numkeys key [key ...] [WEIGHTS weight ...] [AGGREGATE SUM|MIN|MAX]
/// ```
#[derive(Debug)]
pub struct ZInterStore {
    destination: String,
    keys: Vec<String>,
    weights: Vec<f64>,
    aggregate: Option<Aggregate>,
}

impl ZInterStore {
    pub fn new<K: ToString>(
        destination: impl ToString,
        keys: impl IntoIterator<Item = K>,
    ) -> ZInterStore {
        ZInterStore {
            destination: destination.to_string(),
            keys: keys.into_iter().map(|key| key.to_string()).collect(),
            weights: Vec::new(),
            aggregate: None,
        }
    }

    /// One multiplication factor per source key, in order.
    #[must_use]
    pub fn weights(mut self, weights: impl IntoIterator<Item = f64>) -> ZInterStore {
        self.weights = weights.into_iter().collect();
        self
    }

    #[must_use]
    pub fn aggregate(mut self, aggregate: Aggregate) -> ZInterStore {
        self.aggregate = Some(aggregate);
        self
    }
}

impl Protocol for ZInterStore {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("ZINTERSTORE");
        cmd.arg(self.destination).arg(self.keys.len()).arg(self.keys);
        if !self.weights.is_empty() {
            cmd.arg("WEIGHTS");
            for weight in self.weights {
                cmd.arg(weight.to_string());
            }
        }
        if let Some(aggregate) = self.aggregate {
            cmd.arg("AGGREGATE").arg(aggregate.as_str());
        }

        cmd
    }
}
