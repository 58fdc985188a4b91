use memoark_core::model::{ProgressEntry, ProgressMap, WordStatus};
use memoark_core::time::fixed_now;
use sqlx::Row;
use storage::repository::{PROGRESS_SLOT_KEY, ProgressRepository, StorageError};
use storage::sqlite::SqliteRepository;

fn sample_map() -> ProgressMap {
    let mut map = ProgressMap::new();
    map.insert(
        "apple".to_string(),
        ProgressEntry::new(WordStatus::Learning, fixed_now()),
    );
    map.insert(
        "river".to_string(),
        ProgressEntry::new(WordStatus::Mastered, fixed_now()),
    );
    map
}

#[tokio::test]
async fn sqlite_slot_round_trips_progress() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.load().await.unwrap().is_none());

    let map = sample_map();
    repo.replace(&map).await.unwrap();

    let loaded = repo.load().await.unwrap().expect("slot written");
    assert_eq!(loaded, map);
}

#[tokio::test]
async fn sqlite_slot_survives_a_reconnect() {
    // Two repositories over the same shared-cache database stand in for a
    // process restart against the same db file.
    let url = "sqlite:file:memdb_restart?mode=memory&cache=shared";
    let first = SqliteRepository::connect(url).await.expect("connect");
    first.migrate().await.expect("migrate");

    let map = sample_map();
    first.replace(&map).await.unwrap();

    let second = SqliteRepository::connect(url).await.expect("reconnect");
    second.migrate().await.expect("migrate is idempotent");
    let loaded = second.load().await.unwrap().expect("slot persisted");
    assert_eq!(loaded, map);
}

#[tokio::test]
async fn sqlite_replace_overwrites_not_merges() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.replace(&sample_map()).await.unwrap();

    let mut smaller = ProgressMap::new();
    smaller.insert(
        "pear".to_string(),
        ProgressEntry::new(WordStatus::Learning, fixed_now()),
    );
    repo.replace(&smaller).await.unwrap();

    let loaded = repo.load().await.unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains_key("pear"));
    assert!(!loaded.contains_key("apple"));
}

#[tokio::test]
async fn sqlite_corrupt_slot_surfaces_serialization_error() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    sqlx::query("INSERT INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)")
        .bind(PROGRESS_SLOT_KEY)
        .bind("{definitely not a progress map")
        .bind(fixed_now())
        .execute(repo.pool())
        .await
        .expect("seed corrupt slot");

    let err = repo.load().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn sqlite_slot_is_stored_under_the_versioned_key() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_key?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.replace(&sample_map()).await.unwrap();

    let row = sqlx::query("SELECT key, value FROM kv_slots")
        .fetch_one(repo.pool())
        .await
        .expect("one slot row");
    let key: String = row.try_get("key").unwrap();
    let value: String = row.try_get("value").unwrap();
    assert_eq!(key, PROGRESS_SLOT_KEY);

    // The slot holds the plain JSON map, not the backup envelope.
    let parsed: ProgressMap = serde_json::from_str(&value).unwrap();
    assert_eq!(parsed.len(), 2);
}
