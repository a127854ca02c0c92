// standard library
use std::time::Duration;

// internal crates
use crate::filesys::dir::Dir;
use crate::refresh::RefreshOptions;
use crate::server::serve::ServerOptions;
use crate::storage::{layout::StorageLayout, settings::Settings};
use crate::upstream::{UpstreamOptions, DEFAULT_BASE_URL};

#[derive(Debug, Clone, Copy)]
pub struct LifecycleOptions {
    pub max_shutdown_delay: Duration,
}

impl Default for LifecycleOptions {
    fn default() -> Self {
        Self {
            max_shutdown_delay: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOptions {
    pub deals_interval: Duration,
    pub stores_interval: Duration,
    pub on_startup: bool,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            deals_interval: Duration::from_secs(12 * 60 * 60),
            stores_interval: Duration::from_secs(12 * 60 * 60),
            on_startup: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub lifecycle: LifecycleOptions,
    pub layout: StorageLayout,

    pub upstream_base_url: String,
    pub refresh: RefreshOptions,
    pub schedule: ScheduleOptions,

    pub server: ServerOptions,
    pub top_deals_count: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            lifecycle: LifecycleOptions::default(),
            layout: StorageLayout::default(),

            upstream_base_url: DEFAULT_BASE_URL.to_string(),
            refresh: RefreshOptions::default(),
            schedule: ScheduleOptions::default(),

            server: ServerOptions::default(),
            top_deals_count: 3,
        }
    }
}

impl AppOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        let upstream = &settings.upstream;
        Self {
            lifecycle: LifecycleOptions::default(),
            layout: StorageLayout::new(Dir::new(&settings.data_dir)),

            upstream_base_url: upstream.base_url.clone(),
            refresh: RefreshOptions {
                upstream: UpstreamOptions {
                    timeout: Duration::from_secs(upstream.timeout_secs),
                    page_size: upstream.page_size,
                    page_delay: Duration::from_secs(upstream.page_delay_secs),
                },
                store_cooldown: Duration::from_secs(upstream.store_cooldown_secs),
                store_selection: settings.refresh.store_selection.clone(),
            },
            schedule: ScheduleOptions {
                deals_interval: Duration::from_secs(settings.refresh.deals_interval_secs),
                stores_interval: Duration::from_secs(settings.refresh.stores_interval_secs),
                on_startup: settings.refresh.on_startup,
            },

            server: ServerOptions {
                address: settings.server.address.clone(),
            },
            top_deals_count: settings.top_deals_count,
        }
    }
}
