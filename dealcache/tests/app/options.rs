// standard library
use std::time::Duration;

// internal crates
use dealcache::app::options::{AppOptions, ScheduleOptions};
use dealcache::filesys::dir::Dir;
use dealcache::refresh::{RefreshOptions, StoreSelection};
use dealcache::storage::{layout::StorageLayout, settings::Settings};
use dealcache::upstream::UpstreamOptions;

// external crates
use serde_json::json;

pub mod from_settings {
    use super::*;

    #[test]
    fn defaults_match() {
        let from_settings = AppOptions::from_settings(&Settings::default());
        let default = AppOptions::default();
        assert_eq!(from_settings.upstream_base_url, default.upstream_base_url);
        assert_eq!(from_settings.refresh, default.refresh);
        assert_eq!(from_settings.schedule, default.schedule);
        assert_eq!(from_settings.server.address, default.server.address);
        assert_eq!(from_settings.top_deals_count, default.top_deals_count);
        assert_eq!(
            from_settings.lifecycle.max_shutdown_delay,
            Duration::from_secs(15)
        );
    }

    #[test]
    fn maps_every_field() {
        let settings: Settings = serde_json::from_value(json!({
            "data_dir": "/srv/dealcache",
            "server": {"address": "127.0.0.1:9090"},
            "upstream": {
                "base_url": "http://localhost:4000/api",
                "timeout_secs": 2,
                "page_size": 10,
                "page_delay_secs": 1,
                "store_cooldown_secs": 5,
            },
            "refresh": {
                "deals_interval_secs": 600,
                "stores_interval_secs": 3600,
                "on_startup": false,
                "store_selection": {"first": 3},
            },
            "top_deals_count": 10,
        }))
        .unwrap();

        let options = AppOptions::from_settings(&settings);
        assert_eq!(
            options.layout.stores_file().to_string(),
            StorageLayout::new(Dir::new("/srv/dealcache"))
                .stores_file()
                .to_string()
        );
        assert_eq!(options.upstream_base_url, "http://localhost:4000/api");
        assert_eq!(
            options.refresh,
            RefreshOptions {
                upstream: UpstreamOptions {
                    timeout: Duration::from_secs(2),
                    page_size: 10,
                    page_delay: Duration::from_secs(1),
                },
                store_cooldown: Duration::from_secs(5),
                store_selection: StoreSelection::First(3),
            }
        );
        assert_eq!(
            options.schedule,
            ScheduleOptions {
                deals_interval: Duration::from_secs(600),
                stores_interval: Duration::from_secs(3600),
                on_startup: false,
            }
        );
        assert_eq!(options.server.address, "127.0.0.1:9090");
        assert_eq!(options.top_deals_count, 10);
    }
}
