//! # Service Names
//!
//! A curated, read-only mapping from well-known TCP ports to a description.
//! Built once per process and shared by reference between probe tasks.

use std::collections::HashMap;

/// Returned for every port that is not in the table.
pub const UNKNOWN_SERVICE: &str = "Unknown";

const WELL_KNOWN_PORTS: &[(u16, &str)] = &[
    (1, "TCP Port Service Multiplexer (TCPMUX)"),
    (2, "CompressNET Management Utility"),
    (3, "CompressNET Compression Process"),
    (5, "Remote Job Entry (RJE)"),
    (7, "Echo Protocol"),
    (9, "Discard Protocol"),
    (11, "Active Users (systat service)"),
    (13, "Daytime Protocol"),
    (17, "Quote of the Day (QOTD)"),
    (18, "Message Send Protocol (MSP)"),
    (19, "Character Generator Protocol (CHARGEN)"),
    (20, "FTP Data (File Transfer Protocol)"),
    (21, "FTP Control (File Transfer Protocol)"),
    (22, "SSH (Secure Shell)"),
    (23, "Telnet"),
    (25, "SMTP (Simple Mail Transfer Protocol)"),
    (53, "DNS (Domain Name System)"),
    (80, "HTTP (Hypertext Transfer Protocol)"),
    (110, "POP3 (Post Office Protocol version 3)"),
    (123, "Network Time Protocol (NTP)"),
    (137, "NetBIOS Name Service"),
    (138, "NetBIOS Datagram Service"),
    (139, "NetBIOS Session Service"),
    (143, "IMAP (Internet Message Access Protocol)"),
    (161, "Simple Network Management Protocol (SNMP)"),
    (443, "HTTPS (HTTP Secure)"),
    (465, "Simple Mail Transfer Protocol Secure"),
    (587, "SMTP (Alternative Port)"),
    (993, "Internet Message Access Protocol Secure"),
    (995, "POP3S (Secure POP3)"),
    (3306, "MySQL Database"),
    (5432, "PostgresSQL Database"),
    (8080, "HTTP (Alternative Port)"),
    (8081, "HTTP (Alternative Port)"),
];

#[derive(Debug, Clone)]
pub struct ServiceTable {
    names: HashMap<u16, &'static str>,
}

impl Default for ServiceTable {
    fn default() -> Self {
        Self::well_known()
    }
}

impl ServiceTable {
    pub fn well_known() -> Self {
        Self {
            names: WELL_KNOWN_PORTS.iter().copied().collect(),
        }
    }

    /// Total lookup: never fails, falls back to [`UNKNOWN_SERVICE`].
    pub fn lookup(&self, port: u16) -> &'static str {
        self.names.get(&port).copied().unwrap_or(UNKNOWN_SERVICE)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_configured_names() {
        let table = ServiceTable::well_known();

        assert_eq!(table.lookup(22), "SSH (Secure Shell)");
        assert_eq!(table.lookup(1), "TCP Port Service Multiplexer (TCPMUX)");
        assert_eq!(table.lookup(5432), "PostgresSQL Database");
        assert_eq!(table.lookup(8081), "HTTP (Alternative Port)");
    }

    #[test]
    fn lookup_falls_back_to_unknown() {
        let table = ServiceTable::well_known();

        for port in [4, 6, 1024, 65535] {
            assert_eq!(table.lookup(port), "Unknown");
        }
    }

    #[test]
    fn every_table_entry_is_reachable() {
        let table = ServiceTable::well_known();

        assert_eq!(table.len(), WELL_KNOWN_PORTS.len());
        for (port, name) in WELL_KNOWN_PORTS {
            assert_eq!(table.lookup(*port), *name);
        }
    }
}
