use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use std::path::PathBuf;

use crate::models::Profile;

mod schema;

pub use schema::SCHEMA_VERSION;

/// Storage key of the serialized profile blob.
pub const PROFILE_KEY: &str = "userProfile";

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database, creating if needed, running migrations
    pub fn open() -> Result<Self> {
        let path = Self::default_path()?;
        Self::open_at(path)
    }

    pub fn open_at(path: PathBuf) -> Result<Self> {
        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;

        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open in-memory database for testing
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Directory holding the database and the stored profile photo.
    pub fn data_dir() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("cardcmd"))
    }

    fn default_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("card.db"))
    }

    fn migrate(&self) -> Result<()> {
        let version = self.get_schema_version()?;

        if version == 0 {
            // Run migration in a transaction for atomicity
            self.conn
                .execute_batch(&format!("BEGIN TRANSACTION; {} COMMIT;", schema::SCHEMA_V1))?;
            self.set_schema_version(1)?;
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Result<i32> {
        let result: Result<i32, _> =
            self.conn
                .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                    row.get(0)
                });

        match result {
            Ok(v) => Ok(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(rusqlite::Error::SqliteFailure(err, msg)) => {
                // "no such table" is error code 1 (SQLITE_ERROR)
                if err.code == rusqlite::ErrorCode::Unknown
                    && msg.as_ref().map_or(false, |m| m.contains("no such table"))
                {
                    Ok(0)
                } else {
                    Err(rusqlite::Error::SqliteFailure(err, msg).into())
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set_schema_version(&self, version: i32) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO schema_version (id, version) VALUES (1, ?)",
            [version],
        )?;
        Ok(())
    }

    /// Read a raw value from the store.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM store WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Write a raw value, replacing any previous one.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO store (key, value) VALUES (?, ?)",
            [key, value],
        )?;
        Ok(())
    }

    /// Drop every stored key. The profile reverts to empty on next load.
    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM store", [])?;
        Ok(())
    }

    /// Load the stored profile, or `None` when nothing has been saved yet.
    pub fn load_profile(&self) -> Result<Option<Profile>> {
        match self.get(PROFILE_KEY).context("Failed to load profile")? {
            Some(blob) => {
                let profile =
                    serde_json::from_str(&blob).context("Stored profile is not valid JSON")?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    /// Persist the profile as a JSON blob under [`PROFILE_KEY`].
    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        let blob = serde_json::to_string(profile).context("Failed to serialize profile")?;
        self.set(PROFILE_KEY, &blob).context("Failed to save profile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.get_schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_get_missing_key() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.get("nope").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let db = Database::open_memory().unwrap();
        db.set("k", "one").unwrap();
        db.set("k", "two").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_profile_round_trip() {
        let db = Database::open_memory().unwrap();
        assert!(db.load_profile().unwrap().is_none());

        let mut profile = Profile::new();
        profile.name = "Jane Doe".to_string();
        profile.email = "jane@x.co".to_string();
        db.save_profile(&profile).unwrap();

        let loaded = db.load_profile().unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_profile_stored_under_fixed_key() {
        let db = Database::open_memory().unwrap();
        db.save_profile(&Profile::new()).unwrap();
        let blob = db.get(PROFILE_KEY).unwrap().unwrap();
        assert!(blob.starts_with('{'));
    }

    #[test]
    fn test_clear_reverts_to_empty() {
        let db = Database::open_memory().unwrap();
        let mut profile = Profile::new();
        profile.name = "Jane Doe".to_string();
        db.save_profile(&profile).unwrap();

        db.clear().unwrap();
        assert!(db.load_profile().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_blob_is_an_error_not_a_panic() {
        let db = Database::open_memory().unwrap();
        db.set(PROFILE_KEY, "not json").unwrap();
        assert!(db.load_profile().is_err());
    }

    #[test]
    fn test_open_at_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("card.db");
        let db = Database::open_at(path.clone()).unwrap();
        db.save_profile(&Profile::new()).unwrap();
        assert!(path.exists());
    }
}
