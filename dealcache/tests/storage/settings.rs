// internal crates
use crate::mock::{remove_dir, temp_dir, write_file, write_json_file};
use dealcache::filesys::file::File;
use dealcache::logs::LogLevel;
use dealcache::refresh::StoreSelection;
use dealcache::storage::settings::{self, Refresh, Server, Settings, Upstream};

// external crates
use serde_json::json;

pub mod deserialize {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let settings: Settings = serde_json::from_value(json!({})).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.data_dir, "data");
        assert_eq!(settings.server.address, "0.0.0.0:8000");
        assert_eq!(
            settings.upstream.base_url,
            "https://www.cheapshark.com/api/1.0"
        );
        assert_eq!(settings.upstream.timeout_secs, 10);
        assert_eq!(settings.upstream.page_size, 60);
        assert_eq!(settings.upstream.page_delay_secs, 3);
        assert_eq!(settings.upstream.store_cooldown_secs, 30);
        assert_eq!(settings.refresh.deals_interval_secs, 12 * 60 * 60);
        assert_eq!(settings.refresh.stores_interval_secs, 12 * 60 * 60);
        assert!(settings.refresh.on_startup);
        assert_eq!(settings.refresh.store_selection, StoreSelection::First(1));
        assert_eq!(settings.top_deals_count, 3);
    }

    #[test]
    fn partial_nested_objects() {
        let settings: Settings = serde_json::from_value(json!({
            "log_level": "debug",
            "server": {},
            "upstream": {"page_delay_secs": 0},
            "refresh": {"store_selection": "all"},
            "top_deals_count": 5,
        }))
        .unwrap();
        assert_eq!(
            settings,
            Settings {
                log_level: LogLevel::Debug,
                server: Server::default(),
                upstream: Upstream {
                    page_delay_secs: 0,
                    ..Upstream::default()
                },
                refresh: Refresh {
                    store_selection: StoreSelection::All,
                    ..Refresh::default()
                },
                top_deals_count: 5,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn store_selection_forms() {
        struct TestCase {
            _name: &'static str,
            input: serde_json::Value,
            expected: StoreSelection,
        }

        let test_cases = vec![
            TestCase {
                _name: "all",
                input: json!("all"),
                expected: StoreSelection::All,
            },
            TestCase {
                _name: "first",
                input: json!({"first": 4}),
                expected: StoreSelection::First(4),
            },
            TestCase {
                _name: "allow list",
                input: json!({"allow_list": ["1", "GOG"]}),
                expected: StoreSelection::AllowList(vec!["1".to_string(), "GOG".to_string()]),
            },
        ];

        for test_case in test_cases {
            let refresh: Refresh =
                serde_json::from_value(json!({"store_selection": test_case.input})).unwrap();
            assert_eq!(
                refresh.store_selection, test_case.expected,
                "{}",
                test_case._name
            );
        }
    }

    #[test]
    fn wrong_type_is_an_error() {
        let result = serde_json::from_value::<Settings>(json!({"top_deals_count": "three"}));
        assert!(result.is_err());
    }
}

pub mod read {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_default() {
        let file = File::new("/tmp/dealcache-no-settings-9z8y7x.json");
        let settings = settings::read(&file).await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn reads_file() {
        let dir = temp_dir().await;
        let file = dir.file("settings.json");
        write_json_file(
            &file,
            &json!({"data_dir": "/var/lib/dealcache", "server": {"address": "127.0.0.1:9000"}}),
        )
        .await;
        let settings = settings::read(&file).await.unwrap();
        assert_eq!(settings.data_dir, "/var/lib/dealcache");
        assert_eq!(settings.server.address, "127.0.0.1:9000");
        remove_dir(&dir).await;
    }

    #[tokio::test]
    async fn invalid_file_is_an_error() {
        let dir = temp_dir().await;
        let file = dir.file("settings.json");
        write_file(&file, "not json").await;
        assert!(settings::read(&file).await.is_err());
        remove_dir(&dir).await;
    }
}
