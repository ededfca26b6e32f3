//! Builders for the commands the tour issues.
//!
//! Each builder only assembles arguments. Encoding, routing and sending are
//! done by the `redis` crate through a [`Connection`](crate::Connection).

mod eval;
pub use eval::Eval;

mod get;
pub use get::{Get, MGet};

mod server;
pub use server::{ClientGetName, ClientId, ClientList, Info};

mod set;
pub use set::{Expiry, MSet, Set, SetNx};

mod sort;
pub use sort::{Order, Sort};

mod zset;
pub use zset::{Aggregate, Bound, ZInterStore, ZRangeByScore};

use redis::Cmd;

/// Conversion of a command builder into the `redis::Cmd` that is sent.
pub trait Protocol {
    fn into_cmd(self) -> Cmd;
}

/// Name `key` under the hash tag `tag`, i.e. `{tag}:key`.
///
/// Keys sharing a tag hash to the same cluster slot, so multi-key commands
/// over them are served by a single shard.
pub fn hash_tag(tag: &str, key: &str) -> String {
    format!("{{{tag}}}:{key}")
}

/// The arguments of `cmd` as strings, command name included.
pub fn args(cmd: &Cmd) -> Vec<String> {
    cmd.args_iter()
        .map(|arg| match arg {
            redis::Arg::Simple(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            redis::Arg::Cursor => "<cursor>".to_string(),
        })
        .collect()
}

/// `cmd` rendered the way it would be typed into `redis-cli`.
pub fn describe(cmd: &Cmd) -> String {
    args(cmd).join(" ")
}
