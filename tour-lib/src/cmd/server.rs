use crate::cmd::Protocol;
use redis::Cmd;

/// Server information and statistics, optionally restricted to one section.
///
/// ```text
/// INFO [section]
/// ```
#[derive(Debug, Default)]
pub struct Info {
    section: Option<String>,
}

impl Info {
    pub fn new(section: Option<&str>) -> Info {
        Info {
            section: section.map(str::to_string),
        }
    }
}

impl Protocol for Info {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("INFO");
        if let Some(section) = self.section {
            cmd.arg(section);
        }

        cmd
    }
}

/// `CLIENT GETNAME`: the name of the current connection, nil if unset.
#[derive(Debug, Default)]
pub struct ClientGetName;

impl Protocol for ClientGetName {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("CLIENT");
        cmd.arg("GETNAME");

        cmd
    }
}

/// `CLIENT ID`: the server-assigned id of the current connection.
#[derive(Debug, Default)]
pub struct ClientId;

impl Protocol for ClientId {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("CLIENT");
        cmd.arg("ID");

        cmd
    }
}

/// `CLIENT LIST`: one line per connected client.
#[derive(Debug, Default)]
pub struct ClientList;

impl Protocol for ClientList {
    fn into_cmd(self) -> Cmd {
        let mut cmd = redis::cmd("CLIENT");
        cmd.arg("LIST");

        cmd
    }
}
