//! Application configuration loaded from environment variables.

use crate::errors::{IndexerError, Result};

/// `getEvents` accepts at most this many contract ids per filter.
pub const MAX_CONTRACT_IDS: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Soroban RPC endpoint (e.g. https://soroban-testnet.stellar.org)
    pub rpc_url: String,
    /// Marketplace contract addresses (Strkey format)
    pub contract_ids: Vec<String>,
    /// Path to the SQLite database file
    pub database_url: String,
    /// Port for the REST API server
    pub api_port: u16,
    /// How often (in seconds) to poll the RPC for new events
    pub poll_interval_secs: u64,
    /// Maximum number of events to fetch per RPC request
    pub events_per_page: u32,
    /// Ledger to start from if no cursor is saved
    pub start_ledger: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            rpc_url: var("RPC_URL", "https://soroban-testnet.stellar.org"),
            contract_ids: parse_contract_ids(&lookup("CONTRACT_IDS").ok_or_else(|| {
                IndexerError::Config("CONTRACT_IDS environment variable is required".to_string())
            })?)?,
            database_url: var("DATABASE_URL", "sqlite:./carbon_market_events.db"),
            api_port: var("API_PORT", "3001")
                .parse()
                .map_err(|_| IndexerError::Config("Invalid API_PORT".to_string()))?,
            poll_interval_secs: var("POLL_INTERVAL_SECS", "5")
                .parse()
                .map_err(|_| IndexerError::Config("Invalid POLL_INTERVAL_SECS".to_string()))?,
            events_per_page: var("EVENTS_PER_PAGE", "100")
                .parse()
                .map_err(|_| IndexerError::Config("Invalid EVENTS_PER_PAGE".to_string()))?,
            start_ledger: var("START_LEDGER", "0")
                .parse()
                .map_err(|_| IndexerError::Config("Invalid START_LEDGER".to_string()))?,
        })
    }
}

/// Split a comma separated list of contract ids.
pub fn parse_contract_ids(raw: &str) -> Result<Vec<String>> {
    let ids: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect();

    if ids.is_empty() {
        return Err(IndexerError::Config(
            "CONTRACT_IDS must list at least one contract".to_string(),
        ));
    }
    if ids.len() > MAX_CONTRACT_IDS {
        return Err(IndexerError::Config(format!(
            "CONTRACT_IDS lists {} contracts, at most {MAX_CONTRACT_IDS} are supported",
            ids.len()
        )));
    }
    Ok(ids)
}
