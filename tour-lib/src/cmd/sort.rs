use crate::cmd::Protocol;
use redis::Cmd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Sort the elements of a list, set or sorted set and return them.
///
/// ```text
/// SORT key [LIMIT offset count] [ASC|DESC] [ALPHA]
/// ```
#[derive(Debug)]
pub struct Sort {
    key: String,
    limit: Option<(i64, i64)>,
    order: Option<Order>,
    alpha: bool,
}

impl Sort {
    pub fn new(key: impl ToString) -> Sort {
        Sort {
            key: key.to_string(),
            limit: None,
            order: None,
            alpha: false,
        }
    }

    /// Return at most `count` elements starting at `offset`.
    #[must_use]
    pub fn limit(mut self, offset: i64, count: i64) -> Sort {
        self.limit = Some((offset, count));
        self
    }

    #[must_use]
    pub fn order(mut self, order: Order) -> Sort {
        self.order = Some(order);
        self
    }

    /// Compare elements lexicographically instead of as numbers.
    #[must_use]
    pub fn alpha(mut self) -> Sort {
        self.alpha = true;
        self
    }
}

impl Protocol for Sort {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("SORT");
        cmd.arg(self.key);
        if let Some((offset, count)) = self.limit {
            cmd.arg("LIMIT").arg(offset).arg(count);
        }
        if let Some(order) = self.order {
            cmd.arg(order.as_str());
        }
        if self.alpha {
            cmd.arg("ALPHA");
        }

        cmd
    }
}
