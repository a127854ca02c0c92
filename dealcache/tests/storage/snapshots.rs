// internal crates
use crate::mock::{deal, remove_dir, store, temp_dir, write_file};
use cheapshark_api::models::Store;
use dealcache::filesys::dir::Dir;
use dealcache::models::DealsByStore;
use dealcache::storage::{SnapshotKey, SnapshotStore, StorageLayout};

async fn temp_store() -> (Dir, SnapshotStore) {
    let dir = temp_dir().await;
    let snapshots = SnapshotStore::new(StorageLayout::new(dir.clone()));
    (dir, snapshots)
}

pub mod load {
    use super::*;

    #[tokio::test]
    async fn absent_when_never_saved() {
        let (dir, snapshots) = temp_store().await;
        let stores = snapshots
            .load::<Vec<Store>>(SnapshotKey::Stores)
            .await
            .unwrap();
        assert!(stores.is_none());
        remove_dir(&dir).await;
    }

    #[tokio::test]
    async fn corrupt_file_is_absent() {
        let (dir, snapshots) = temp_store().await;
        write_file(&snapshots.file(SnapshotKey::Deals), "{\"Steam\": [").await;
        let deals = snapshots
            .load::<DealsByStore>(SnapshotKey::Deals)
            .await
            .unwrap();
        assert!(deals.is_none());
        remove_dir(&dir).await;
    }

    #[tokio::test]
    async fn reads_reference_layout() {
        let (dir, snapshots) = temp_store().await;
        write_file(
            &dir.file("stores.json"),
            r#"[{"storeID":"1","storeName":"Steam"}]"#,
        )
        .await;
        let stores = snapshots
            .load::<Vec<Store>>(SnapshotKey::Stores)
            .await
            .unwrap();
        assert_eq!(stores, Some(vec![store("1", "Steam")]));
        remove_dir(&dir).await;
    }
}

pub mod save {
    use super::*;

    #[tokio::test]
    async fn last_save_wins() {
        let (dir, snapshots) = temp_store().await;
        snapshots
            .save(SnapshotKey::Stores, &vec![store("1", "Steam")])
            .await
            .unwrap();
        snapshots
            .save(SnapshotKey::Stores, &vec![store("7", "GOG")])
            .await
            .unwrap();
        let stores = snapshots
            .load::<Vec<Store>>(SnapshotKey::Stores)
            .await
            .unwrap();
        assert_eq!(stores, Some(vec![store("7", "GOG")]));
        remove_dir(&dir).await;
    }

    #[tokio::test]
    async fn identical_values_are_byte_equal() {
        let (dir, snapshots) = temp_store().await;
        let mut deals = DealsByStore::new();
        deals.insert("Steam".to_string(), vec![deal("a", "9.99"), deal("b", "4.99")]);
        deals.insert("GOG".to_string(), vec![deal("c", "14.99")]);

        snapshots.save(SnapshotKey::Deals, &deals).await.unwrap();
        let first = tokio::fs::read(dir.file("deals.json").to_string())
            .await
            .unwrap();
        snapshots.save(SnapshotKey::Deals, &deals.clone()).await.unwrap();
        let second = tokio::fs::read(dir.file("deals.json").to_string())
            .await
            .unwrap();
        assert_eq!(first, second);
        remove_dir(&dir).await;
    }

    #[tokio::test]
    async fn keys_map_to_separate_files() {
        let (dir, snapshots) = temp_store().await;
        snapshots
            .save(SnapshotKey::Stores, &vec![store("1", "Steam")])
            .await
            .unwrap();
        assert!(tokio::fs::try_exists(dir.file("stores.json").to_string())
            .await
            .unwrap());
        assert!(!tokio::fs::try_exists(dir.file("deals.json").to_string())
            .await
            .unwrap());
        remove_dir(&dir).await;
    }
}
