use commtrack_core::db::migrations::latest_version;
use commtrack_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn in_memory_database_is_fully_migrated() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert!(table_exists(&conn, "kv_store"));
}

#[test]
fn reopening_a_file_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO kv_store (key, value) VALUES ('marker', '{}');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), latest_version());
    let kept: i64 = second
        .query_row("SELECT COUNT(*) FROM kv_store WHERE key = 'marker';", [], |row| row.get(0))
        .unwrap();
    assert_eq!(kept, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 42);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("commtrack").join("tracker.sqlite3");

    let conn = open_db(&path).unwrap();

    assert!(path.exists());
    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn parent_that_is_a_file_reports_create_dir() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let path = blocker.join("nested").join("tracker.sqlite3");

    match open_db(&path).unwrap_err() {
        DbError::CreateDir { path: failed, .. } => {
            assert_eq!(failed, blocker.join("nested"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn table_exists(conn: &Connection, table_name: &str) -> bool {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
        [table_name],
        |row| row.get::<_, i64>(0),
    )
    .unwrap()
        == 1
}
