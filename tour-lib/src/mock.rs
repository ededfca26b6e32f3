//! In-memory `Connection` for tests.

use crate::cmd;
use crate::{Connection, Topology};
use redis::{Cmd, ErrorKind, RedisResult, Value};
use std::collections::HashMap;
use std::io;

type Reply = Box<dyn FnMut(&[String]) -> RedisResult<Value> + Send>;

/// Records every command it receives and answers through `reply`.
pub(crate) struct Mock {
    topology: Topology,
    sent: Vec<Vec<String>>,
    reply: Reply,
}

impl Mock {
    /// Answer each command with `reply(args)`, command name in `args[0]`.
    pub(crate) fn replying(
        reply: impl FnMut(&[String]) -> RedisResult<Value> + Send + 'static,
    ) -> Mock {
        Mock {
            topology: Topology::Standalone,
            sent: Vec::new(),
            reply: Box::new(reply),
        }
    }

    /// Fail every command the way an unreachable server does.
    pub(crate) fn unreachable() -> Mock {
        Mock::replying(|_| {
            let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
            Err(refused.into())
        })
    }

    /// A tiny string store understanding `SET` (with `NX`), `GET`, `MSET`
    /// and `MGET`. Anything else is an unknown command.
    pub(crate) fn memory() -> Mock {
        let mut store: HashMap<String, String> = HashMap::new();

        Mock::replying(move |args| match args[0].to_uppercase().as_str() {
            "SET" => {
                let nx = args[3..].iter().any(|opt| opt.eq_ignore_ascii_case("NX"));
                if nx && store.contains_key(&args[1]) {
                    return Ok(Value::Nil);
                }
                store.insert(args[1].clone(), args[2].clone());
                Ok(Value::Okay)
            }
            "GET" => Ok(bulk_or_nil(store.get(&args[1]))),
            "MSET" => {
                for pair in args[1..].chunks(2) {
                    store.insert(pair[0].clone(), pair[1].clone());
                }
                Ok(Value::Okay)
            }
            "MGET" => Ok(Value::Array(
                args[1..].iter().map(|key| bulk_or_nil(store.get(key))).collect(),
            )),
            _ => Err((
                ErrorKind::ResponseError,
                "An error was signalled by the server",
                format!("unknown command '{}'", args[0]),
            )
                .into()),
        })
    }

    /// Report [`Topology::Cluster`] instead of standalone.
    pub(crate) fn clustered(mut self) -> Mock {
        self.topology = Topology::Cluster;
        self
    }

    /// Arguments of every command received so far, oldest first.
    pub(crate) fn sent(&self) -> &[Vec<String>] {
        &self.sent
    }

    /// Command names received so far, upper-cased, oldest first.
    pub(crate) fn names(&self) -> Vec<String> {
        self.sent.iter().map(|args| args[0].to_uppercase()).collect()
    }
}

fn bulk_or_nil(value: Option<&String>) -> Value {
    match value {
        Some(value) => Value::BulkString(value.as_bytes().to_vec()),
        None => Value::Nil,
    }
}

impl Connection for Mock {
    fn topology(&self) -> Topology {
        self.topology
    }

    async fn query(&mut self, command: &Cmd) -> RedisResult<Value> {
        let args = cmd::args(command);
        let reply = (self.reply)(&args);
        self.sent.push(args);
        reply
    }
}
