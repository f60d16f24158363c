use std::fmt;

/// Which side of the connection the current process is acting as.
/// Fixed for the lifetime of a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProcessRole {
    Client,
    Server,
    Unknown,
}

impl ProcessRole {
    pub const ALL: [ProcessRole; 3] = [ProcessRole::Client, ProcessRole::Server, ProcessRole::Unknown];

    /// Name of the accessor on the capability entry point that yields the
    /// binding for this role
    pub fn accessor_name(self) -> &'static str {
        match self {
            ProcessRole::Server => "ServerAPI",
            ProcessRole::Client => "ClientAPI",
            ProcessRole::Unknown => "API",
        }
    }

    pub fn invert(self) -> Self {
        match self {
            ProcessRole::Server => ProcessRole::Client,
            ProcessRole::Client => ProcessRole::Server,
            ProcessRole::Unknown => ProcessRole::Unknown,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ProcessRole::Client => 0,
            ProcessRole::Server => 1,
            ProcessRole::Unknown => 2,
        }
    }
}

impl fmt::Display for ProcessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessRole::Client => "client",
            ProcessRole::Server => "server",
            ProcessRole::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
