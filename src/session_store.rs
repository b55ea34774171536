//! Persistent storage of the planning session
//!
//! The session is kept under a single key in a `fjall` keyspace, encoded with
//! `postcard`. Blocking store calls run on tokio's blocking pool, and every
//! write is synced before it returns so the next process sees it.

use anyhow::{Context, Result};
use fjall::Keyspace;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::task;

use crate::TripWizardError;
use crate::session::TripSession;

/// Bumped whenever the stored layout of `TripSession` changes
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoredEntry {
    version: u32,
    saved_at: u64, // Unix timestamp (seconds)
    session: TripSession,
}

fn get_from_store(store: Keyspace, key: Vec<u8>) -> anyhow::Result<Option<Vec<u8>>> {
    Ok(store.get(key)?.map(|v| v.to_vec()))
}

pub struct SessionStore {
    db: fjall::Database,
    store: Keyspace,
    key: String,
}

impl SessionStore {
    /// Open (or create) the store at `path`, keeping the session under `key`
    pub fn open(path: impl AsRef<Path>, key: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path)
            .map_err(TripWizardError::from)
            .with_context(|| format!("Failed to create session directory: {}", path.display()))?;
        let db = fjall::Database::builder(path)
            .open()
            .with_context(|| format!("Failed to open session database at {}", path.display()))?;
        let store = db.keyspace("sessions", fjall::KeyspaceCreateOptions::default)?;
        Ok(Self {
            db,
            store,
            key: key.into(),
        })
    }

    /// Stores the session, replacing any previous one.
    #[tracing::instrument(name = "save_session", level = "debug", skip(self, session))]
    pub async fn save(&self, session: &TripSession) -> Result<()> {
        let store = self.store.clone();
        let key = self.key.as_bytes().to_vec();
        let saved_at = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let entry = StoredEntry {
            version: FORMAT_VERSION,
            saved_at,
            session: session.clone(),
        };
        let bytes = postcard::to_stdvec(&entry)?;

        let db = self.db.clone();
        task::spawn_blocking(move || {
            store.insert(key, bytes)?;
            db.persist(fjall::PersistMode::SyncAll)
        })
        .await??;
        Ok(())
    }

    /// Loads the stored session.
    /// Returns `None` when nothing is stored or the entry has an older layout.
    #[tracing::instrument(name = "load_session", level = "debug", skip(self))]
    pub async fn load(&self) -> Result<Option<TripSession>> {
        let store = self.store.clone();
        let key = self.key.as_bytes().to_vec();

        let maybe_bytes: Option<Vec<u8>> =
            task::spawn_blocking(move || get_from_store(store, key)).await??;

        let Some(bytes) = maybe_bytes else {
            tracing::debug!("No stored session");
            return Ok(None);
        };

        let version = postcard::take_from_bytes::<u32>(&bytes)
            .map(|(version, _)| version)
            .map_err(|e| TripWizardError::storage(format!("Unreadable session entry: {e}")))?;
        if version != FORMAT_VERSION {
            tracing::warn!(
                "Stored session has format {}, expected {}; ignoring it",
                version,
                FORMAT_VERSION
            );
            return Ok(None);
        }

        let entry: StoredEntry = postcard::from_bytes(&bytes)
            .map_err(|e| TripWizardError::storage(format!("Corrupt session entry: {e}")))?;
        tracing::debug!("Loaded session saved at {}", entry.saved_at);
        Ok(Some(entry.session))
    }

    /// Loads the stored session or starts a fresh one.
    pub async fn load_or_default(&self) -> Result<TripSession> {
        Ok(self.load().await?.unwrap_or_default())
    }

    /// Removes the stored session.
    pub async fn clear(&self) -> Result<()> {
        let key = self.key.as_bytes().to_vec();
        let store = self.store.clone();
        let db = self.db.clone();
        task::spawn_blocking(move || {
            store.remove(key)?;
            db.persist(fjall::PersistMode::SyncAll)
        })
        .await??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormUpdate;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn planned_session() -> TripSession {
        let mut session = TripSession::new();
        session.update_form(FormUpdate {
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 3),
            travelers: Some(3),
            ..FormUpdate::default()
        });
        session.generate(4);
        session
    }

    #[tokio::test]
    async fn test_empty_store_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path(), "itin-trip-storage").unwrap();

        assert!(store.load().await.unwrap().is_none());
        assert_eq!(store.load_or_default().await.unwrap(), TripSession::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path(), "itin-trip-storage").unwrap();
        let session = planned_session();

        store.save(&session).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_clear_removes_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path(), "itin-trip-storage").unwrap();
        store.save(&planned_session()).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.load().await.unwrap().is_none());
    }

    fn insert_raw(store: &SessionStore, bytes: Vec<u8>) {
        store.store.insert(store.key.as_bytes(), bytes).unwrap();
    }

    #[tokio::test]
    async fn test_other_format_version_is_ignored() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path(), "itin-trip-storage").unwrap();
        let entry = StoredEntry {
            version: FORMAT_VERSION + 1,
            saved_at: 0,
            session: planned_session(),
        };
        insert_raw(&store, postcard::to_stdvec(&entry).unwrap());

        assert!(store.load().await.unwrap().is_none());
        assert_eq!(store.load_or_default().await.unwrap(), TripSession::default());
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path(), "itin-trip-storage").unwrap();
        insert_raw(&store, vec![FORMAT_VERSION as u8, 0xff, 0xff, 0xff]);

        let err = store.load().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TripWizardError>(),
            Some(TripWizardError::Storage { .. })
        ));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[test]
    fn test_open_on_file_path_is_io_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = SessionStore::open(file.path().join("session"), "itin-trip-storage")
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<TripWizardError>(),
            Some(TripWizardError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path(), "itin-trip-storage").unwrap();
        store.save(&planned_session()).await.unwrap();

        let mut reset = planned_session();
        reset.reset();
        store.save(&reset).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(TripSession::default()));
    }
}
