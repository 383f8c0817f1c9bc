use std::fmt;

/// A single (host, port) pair to dial. Lives for the duration of one attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Probe {
    pub host: String,
    pub port: u16,
}

impl Probe {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port`, with IPv6 literals bracketed.
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}
