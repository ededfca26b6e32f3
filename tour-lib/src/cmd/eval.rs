use crate::cmd::Protocol;
use redis::Cmd;

/// Run a Lua script on the server.
///
/// Keys go to `KEYS`, plain arguments to `ARGV`. In cluster mode the command
/// is routed by its first key.
///
/// ```text
/// EVAL script numkeys [key ...] [arg ...]
/// ```
#[derive(Debug)]
pub struct Eval {
    script: String,
    keys: Vec<String>,
    args: Vec<String>,
}

impl Eval {
    pub fn new(script: impl ToString) -> Eval {
        Eval {
            script: script.to_string(),
            keys: Vec::new(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn key(mut self, key: impl ToString) -> Eval {
        self.keys.push(key.to_string());
        self
    }

    #[must_use]
    pub fn arg(mut self, arg: impl ToString) -> Eval {
        self.args.push(arg.to_string());
        self
    }

    pub fn script(&self) -> &str {
        &self.script
    }
}

impl Protocol for Eval {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("EVAL");
        cmd.arg(self.script)
            .arg(self.keys.len())
            .arg(self.keys)
            .arg(self.args);

        cmd
    }
}
