//! Server configuration for navdeck.
//!
//! Loaded from environment variables with sensible defaults. All settings
//! can be overridden via `NAVDECK_*` variables.

use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Storage backend type.
    pub storage_backend: StorageBackendType,
    /// Admin token; a random one is generated at startup when unset.
    pub admin_token: Option<String>,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
}

/// Supported storage backend types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackendType {
    /// In-memory (board is lost on restart).
    Memory,
    /// redb persistent single-file storage.
    Redb { path: String },
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (binds to `0.0.0.0`, PaaS convention)
    /// - `NAVDECK_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8420`)
    /// - `NAVDECK_STORAGE` — `memory` or `redb` (default: `memory`)
    /// - `NAVDECK_STORAGE_PATH` — database file for `redb` (default: `./data/navdeck.redb`)
    /// - `NAVDECK_ADMIN_TOKEN` — shared secret for mutating routes (optional; generated when unset)
    /// - `NAVDECK_LOG_LEVEL` — log filter (default: `info`)
    #[must_use]
    pub fn from_env() -> Self {
        // Priority: NAVDECK_BIND_ADDR > PORT > default 127.0.0.1:8420
        let bind_addr = if let Ok(addr) = std::env::var("NAVDECK_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8420)))
        } else if let Ok(port_str) = std::env::var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(8420);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 8420))
        };

        let storage_path = std::env::var("NAVDECK_STORAGE_PATH")
            .unwrap_or_else(|_| "./data/navdeck.redb".to_owned());

        let storage_backend = match std::env::var("NAVDECK_STORAGE")
            .unwrap_or_else(|_| "memory".to_owned())
            .to_lowercase()
            .as_str()
        {
            "redb" => StorageBackendType::Redb { path: storage_path },
            _ => StorageBackendType::Memory,
        };

        let admin_token = std::env::var("NAVDECK_ADMIN_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        let log_level = std::env::var("NAVDECK_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        Self {
            bind_addr,
            storage_backend,
            admin_token,
            log_level,
        }
    }
}
