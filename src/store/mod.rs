// src/store/mod.rs
//
// Local key-value document store. Each key holds one whole JSON document;
// callers read and write documents wholesale, never patch them in place.

use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;

#[derive(Clone)]
pub struct LocalStore {
    path: String,
}

impl LocalStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Open a connection and run `f(conn)`. Documents are small and writes
    /// are wholesale, so a connection per operation is enough here.
    fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&Connection) -> Result<T, ServerError>,
    {
        let conn = Connection::open(&self.path)
            .map_err(|e| ServerError::StoreError(format!("Open store failed: {e}")))?;
        f(&conn)
    }

    /// Apply a SQL schema to the store.
    pub fn apply_schema(&self, schema_sql: &str) -> Result<(), ServerError> {
        self.with_conn(|conn| {
            conn.execute_batch(schema_sql)
                .map_err(|e| ServerError::StoreError(format!("Failed to apply schema: {e}")))
        })
    }

    /// Read the document stored under `key`, if any.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ServerError> {
        self.with_conn(|conn| {
            let raw: Option<String> = conn
                .query_row(
                    "select value from kv_store where key = ?",
                    params![key],
                    |row| row.get(0),
                )
                .optional()
                .map_err(|e| ServerError::StoreError(format!("Read of '{key}' failed: {e}")))?;

            raw.map(|json| {
                serde_json::from_str(&json).map_err(|e| {
                    ServerError::StoreError(format!("Document '{key}' is not valid JSON: {e}"))
                })
            })
            .transpose()
        })
    }

    /// Replace the document stored under `key`.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T, now: i64) -> Result<(), ServerError> {
        let json = serde_json::to_string(value)
            .map_err(|e| ServerError::StoreError(format!("Serialize of '{key}' failed: {e}")))?;

        self.with_conn(|conn| {
            conn.execute(
                r#"
                insert into kv_store (key, value, updated_at)
                values (?1, ?2, ?3)
                on conflict(key) do update set
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![key, json, now],
            )
            .map_err(|e| ServerError::StoreError(format!("Write of '{key}' failed: {e}")))?;
            Ok(())
        })
    }

    /// Drop the document stored under `key`. Missing keys are not an error.
    pub fn remove(&self, key: &str) -> Result<(), ServerError> {
        self.with_conn(|conn| {
            conn.execute("delete from kv_store where key = ?", params![key])
                .map_err(|e| ServerError::StoreError(format!("Delete of '{key}' failed: {e}")))?;
            Ok(())
        })
    }
}

/// Initialize the store from a SQL schema file.
pub fn init_store(store: &LocalStore, schema_path: &str) -> Result<(), ServerError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| ServerError::StoreError(format!("Failed to read schema file: {e}")))?;

    store.apply_schema(&schema_sql)?;

    println!("✅ Store initialized from {}", schema_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    const SCHEMA: &str = include_str!("../../sql/schema.sql");

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        count: i64,
    }

    fn temp_store(dir: &tempfile::TempDir) -> LocalStore {
        let path = dir.path().join("store.sqlite3");
        let store = LocalStore::new(path.to_string_lossy());
        store.apply_schema(SCHEMA).unwrap();
        store
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let got: Option<Doc> = store.get_json("nothing").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let doc = Doc {
            name: "users".to_string(),
            count: 3,
        };
        store.put_json("doc", &doc, 1000).unwrap();

        let got: Option<Doc> = store.get_json("doc").unwrap();
        assert_eq!(got, Some(doc));
    }

    #[test]
    fn put_replaces_the_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store
            .put_json(
                "doc",
                &Doc {
                    name: "a".into(),
                    count: 1,
                },
                1000,
            )
            .unwrap();
        store
            .put_json(
                "doc",
                &Doc {
                    name: "b".into(),
                    count: 2,
                },
                2000,
            )
            .unwrap();

        let got: Option<Doc> = store.get_json("doc").unwrap();
        assert_eq!(
            got,
            Some(Doc {
                name: "b".into(),
                count: 2
            })
        );
    }

    #[test]
    fn remove_deletes_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store
            .put_json(
                "doc",
                &Doc {
                    name: "a".into(),
                    count: 1,
                },
                1000,
            )
            .unwrap();
        store.remove("doc").unwrap();
        store.remove("doc").unwrap();

        let got: Option<Doc> = store.get_json("doc").unwrap();
        assert!(got.is_none());
    }
}
