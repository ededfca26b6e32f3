use crate::cmd::Protocol;
use redis::Cmd;

/// Get the value of key.
///
/// If the key does not exist the special value nil is returned. An error is
/// returned if the value stored at key is not a string, because GET only
/// handles string values.
#[derive(Debug)]
pub struct Get {
    key: String,
}

impl Get {
    pub fn new(key: impl ToString) -> Get {
        Get {
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Protocol for Get {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("GET");
        cmd.arg(self.key);

        cmd
    }
}

/// Get the values of several keys, nil for every missing one.
///
/// ```text
/// MGET key [key ...]
/// ```
#[derive(Debug)]
pub struct MGet {
    keys: Vec<String>,
}

impl MGet {
    pub fn new<K: ToString>(keys: impl IntoIterator<Item = K>) -> MGet {
        MGet {
            keys: keys.into_iter().map(|key| key.to_string()).collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Protocol for MGet {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("MGET");
        cmd.arg(self.keys);

        cmd
    }
}
