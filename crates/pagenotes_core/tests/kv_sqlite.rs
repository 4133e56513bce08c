use pagenotes_core::db::migrations::latest_version;
use pagenotes_core::db::{open_db, open_db_in_memory, DbError};
use pagenotes_core::{KeyValueStore, KvError, NoteStore, SqliteKeyValueStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pagenotes.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "kv_entries");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn store_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteKeyValueStore::try_new(&conn) {
        Err(KvError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("unmigrated connection must be rejected"),
    }
}

#[test]
fn get_set_overwrite_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKeyValueStore::try_new(&conn).unwrap();

    assert_eq!(kv.get("reviewCount").unwrap(), None);
    kv.set("reviewCount", "1").unwrap();
    kv.set("reviewCount", "2").unwrap();
    assert_eq!(kv.get("reviewCount").unwrap().as_deref(), Some("2"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn notes_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pagenotes.db");

    let expected = {
        let conn = open_db(&path).unwrap();
        let kv = SqliteKeyValueStore::try_new(&conn).unwrap();
        let store = NoteStore::open(&kv, "workoutNotes");
        let note = store.create().unwrap();
        store.update(note.id.as_str(), "Deadlift 5x5").unwrap();
        store.create().unwrap();
        store.list().unwrap()
    };

    let conn = open_db(&path).unwrap();
    let kv = SqliteKeyValueStore::try_new(&conn).unwrap();
    let store = NoteStore::open(&kv, "workoutNotes");
    assert_eq!(store.list().unwrap(), expected);
}

#[test]
fn corrupt_row_recovers_to_empty() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_entries (key, value) VALUES ('workoutNotes', '[{\"nope\":1}]');",
        [],
    )
    .unwrap();
    let kv = SqliteKeyValueStore::try_new(&conn).unwrap();
    let store = NoteStore::open(&kv, "workoutNotes");

    assert!(store.list().unwrap().is_empty());
    store.create().unwrap();
    assert_eq!(store.try_list().unwrap().len(), 1);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
