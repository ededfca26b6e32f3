use crate::cmd::Protocol;
use redis::Cmd;

/// Expiration options of `SET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// `EX seconds`, must be positive.
    Ex(u64),
    /// `KEEPTTL`: retain the time to live already associated with the key.
    KeepTtl,
}

impl Expiry {
    fn push_args(self, cmd: &mut Cmd) {
        match self {
            Expiry::Ex(secs) => {
                cmd.arg("EX").arg(secs);
            }
            Expiry::KeepTtl => {
                cmd.arg("KEEPTTL");
            }
        }
    }
}

/// Set `key` to hold `value`.
///
/// If `key` already holds a value, it is overwritten, regardless of its type.
/// Without an [`Expiry`] any previous time to live is discarded.
///
/// ```text
/// SET key value [EX seconds|KEEPTTL]
/// ```
#[derive(Debug)]
pub struct Set {
    key: String,
    value: String,
    expiry: Option<Expiry>,
}

impl Set {
    pub fn new(key: impl ToString, value: impl ToString, expiry: Option<Expiry>) -> Set {
        Set {
            key: key.to_string(),
            value: value.to_string(),
            expiry,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expiry(&self) -> Option<Expiry> {
        self.expiry
    }
}

impl Protocol for Set {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("SET");
        cmd.arg(self.key).arg(self.value);
        if let Some(expiry) = self.expiry {
            expiry.push_args(&mut cmd);
        }

        cmd
    }
}

/// Set `key` to hold `value` only if `key` does not exist yet.
///
/// The reply is nil when nothing was written.
///
/// ```text
/// SET key value [EX seconds|KEEPTTL] NX
/// ```
#[derive(Debug)]
pub struct SetNx {
    key: String,
    value: String,
    expiry: Option<Expiry>,
}

impl SetNx {
    pub fn new(key: impl ToString, value: impl ToString, expiry: Option<Expiry>) -> SetNx {
        SetNx {
            key: key.to_string(),
            value: value.to_string(),
            expiry,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Protocol for SetNx {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("SET");
        cmd.arg(self.key).arg(self.value);
        if let Some(expiry) = self.expiry {
            expiry.push_args(&mut cmd);
        }
        cmd.arg("NX");

        cmd
    }
}

/// Set several keys at once.
///
/// In cluster mode all keys must hash to the same slot, see
/// [`hash_tag`](crate::cmd::hash_tag).
///
/// ```text
/// MSET key value [key value ...]
/// ```
#[derive(Debug, Default)]
pub struct MSet {
    pairs: Vec<(String, String)>,
}

impl MSet {
    pub fn new() -> MSet {
        MSet::default()
    }

    #[must_use]
    pub fn pair(mut self, key: impl ToString, value: impl ToString) -> MSet {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }
}

impl Protocol for MSet {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("MSET");
        for (key, value) in self.pairs {
            cmd.arg(key).arg(value);
        }

        cmd
    }
}
