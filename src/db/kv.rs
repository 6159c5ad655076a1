//! Key-value persistence seam.
//!
//! String keys, string values and a key listing for prefix scans.
//! Everything typed lives in `crate::store`.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove_item(&mut self, key: &str) -> AppResult<()>;

    fn all_keys(&self) -> AppResult<Vec<String>>;

    /// Keys starting with `prefix`, in lexical order.
    fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .all_keys()?
            .into_iter()
            .filter(|k| k.starts_with(prefix))
            .collect();
        keys.sort();
        Ok(keys)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        (**self).remove_item(key)
    }

    fn all_keys(&self) -> AppResult<Vec<String>> {
        (**self).all_keys()
    }

    fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<String>> {
        (**self).keys_with_prefix(prefix)
    }
}

impl KeyValueStore for DbPool {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn all_keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self.conn.prepare_cached("SELECT key FROM kv ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<String>> {
        // substr() instead of LIKE: '_' in a prefix must match literally.
        let mut stmt = self.conn.prepare_cached(
            "SELECT key FROM kv WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key ASC",
        )?;
        let rows = stmt.query_map([prefix], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
