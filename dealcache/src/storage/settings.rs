// internal crates
use crate::deserialize_warn;
use crate::filesys::{file::File, path::PathExt};
use crate::logs::LogLevel;
use crate::refresh::StoreSelection;
use crate::storage::errors::StorageErr;
use crate::upstream::DEFAULT_BASE_URL;

// external crates
use serde::{Deserialize, Serialize};
use tracing::{error, info};

const TWELVE_HOURS_SECS: u64 = 12 * 60 * 60;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Settings {
    pub log_level: LogLevel,
    pub data_dir: String,
    pub server: Server,
    pub upstream: Upstream,
    pub refresh: Refresh,
    pub top_deals_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            data_dir: "data".to_string(),
            server: Server::default(),
            upstream: Upstream::default(),
            refresh: Refresh::default(),
            top_deals_count: 3,
        }
    }
}

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct DeserializeSettings {
            log_level: Option<LogLevel>,
            data_dir: Option<String>,
            server: Option<Server>,
            upstream: Option<Upstream>,
            refresh: Option<Refresh>,
            top_deals_count: Option<usize>,
        }

        let default = Settings::default();

        let result = match DeserializeSettings::deserialize(deserializer) {
            Ok(settings) => settings,
            Err(e) => {
                error!("Error deserializing settings: {}", e);
                return Err(e);
            }
        };

        Ok(Settings {
            log_level: result
                .log_level
                .unwrap_or_else(|| deserialize_warn!("settings", "log_level", default.log_level)),
            data_dir: result
                .data_dir
                .unwrap_or_else(|| deserialize_warn!("settings", "data_dir", default.data_dir)),
            server: result
                .server
                .unwrap_or_else(|| deserialize_warn!("settings", "server", default.server)),
            upstream: result
                .upstream
                .unwrap_or_else(|| deserialize_warn!("settings", "upstream", default.upstream)),
            refresh: result
                .refresh
                .unwrap_or_else(|| deserialize_warn!("settings", "refresh", default.refresh)),
            top_deals_count: result.top_deals_count.unwrap_or_else(|| {
                deserialize_warn!("settings", "top_deals_count", default.top_deals_count)
            }),
        })
    }
}

/// Reads settings from `file`. A missing file yields the defaults.
pub async fn read(file: &File) -> Result<Settings, StorageErr> {
    if !file.exists() {
        info!("settings file {} not found, using defaults", file);
        return Ok(Settings::default());
    }
    Ok(file.read_json::<Settings>().await?)
}

// ================================ SERVER ======================================== //

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Server {
    pub address: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:8000".to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Server {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct DeserializeServer {
            address: Option<String>,
        }

        let default = Server::default();

        let result = match DeserializeServer::deserialize(deserializer) {
            Ok(server) => server,
            Err(e) => {
                error!("Error deserializing server: {}", e);
                return Err(e);
            }
        };

        Ok(Server {
            address: result
                .address
                .unwrap_or_else(|| deserialize_warn!("server", "address", default.address)),
        })
    }
}

// ================================ UPSTREAM ====================================== //

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Upstream {
    pub base_url: String,
    pub timeout_secs: u64,
    pub page_size: usize,
    pub page_delay_secs: u64,
    pub store_cooldown_secs: u64,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            page_size: 60,
            page_delay_secs: 3,
            store_cooldown_secs: 30,
        }
    }
}

impl<'de> Deserialize<'de> for Upstream {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct DeserializeUpstream {
            base_url: Option<String>,
            timeout_secs: Option<u64>,
            page_size: Option<usize>,
            page_delay_secs: Option<u64>,
            store_cooldown_secs: Option<u64>,
        }

        let default = Upstream::default();

        let result = match DeserializeUpstream::deserialize(deserializer) {
            Ok(upstream) => upstream,
            Err(e) => {
                error!("Error deserializing upstream: {}", e);
                return Err(e);
            }
        };

        Ok(Upstream {
            base_url: result
                .base_url
                .unwrap_or_else(|| deserialize_warn!("upstream", "base_url", default.base_url)),
            timeout_secs: result.timeout_secs.unwrap_or_else(|| {
                deserialize_warn!("upstream", "timeout_secs", default.timeout_secs)
            }),
            page_size: result
                .page_size
                .unwrap_or_else(|| deserialize_warn!("upstream", "page_size", default.page_size)),
            page_delay_secs: result.page_delay_secs.unwrap_or_else(|| {
                deserialize_warn!("upstream", "page_delay_secs", default.page_delay_secs)
            }),
            store_cooldown_secs: result.store_cooldown_secs.unwrap_or_else(|| {
                deserialize_warn!(
                    "upstream",
                    "store_cooldown_secs",
                    default.store_cooldown_secs
                )
            }),
        })
    }
}

// ================================ REFRESH ======================================= //

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Refresh {
    pub deals_interval_secs: u64,
    pub stores_interval_secs: u64,
    pub on_startup: bool,
    pub store_selection: StoreSelection,
}

impl Default for Refresh {
    fn default() -> Self {
        Self {
            deals_interval_secs: TWELVE_HOURS_SECS,
            stores_interval_secs: TWELVE_HOURS_SECS,
            on_startup: true,
            store_selection: StoreSelection::default(),
        }
    }
}

impl<'de> Deserialize<'de> for Refresh {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct DeserializeRefresh {
            deals_interval_secs: Option<u64>,
            stores_interval_secs: Option<u64>,
            on_startup: Option<bool>,
            store_selection: Option<StoreSelection>,
        }

        let default = Refresh::default();

        let result = match DeserializeRefresh::deserialize(deserializer) {
            Ok(refresh) => refresh,
            Err(e) => {
                error!("Error deserializing refresh: {}", e);
                return Err(e);
            }
        };

        Ok(Refresh {
            deals_interval_secs: result.deals_interval_secs.unwrap_or_else(|| {
                deserialize_warn!("refresh", "deals_interval_secs", default.deals_interval_secs)
            }),
            stores_interval_secs: result.stores_interval_secs.unwrap_or_else(|| {
                deserialize_warn!(
                    "refresh",
                    "stores_interval_secs",
                    default.stores_interval_secs
                )
            }),
            on_startup: result
                .on_startup
                .unwrap_or_else(|| deserialize_warn!("refresh", "on_startup", default.on_startup)),
            store_selection: result.store_selection.unwrap_or_else(|| {
                deserialize_warn!("refresh", "store_selection", default.store_selection)
            }),
        })
    }
}
