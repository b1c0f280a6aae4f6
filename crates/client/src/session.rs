//! Session store: the single persisted authority for the current actor.
//!
//! Backing storage is a JSON snapshot (the `access_token`,
//! `refresh_token`, `user_type` triple) under the per-user data
//! directory, so a session survives process restarts. All reads and
//! writes go through one `RwLock`, so `clear()` removes token and role
//! atomically from any reader's perspective.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use myduka_auth::{Role, Session};

/// Persisted snapshot shape. Field names are the client-persisted keys
/// the backend ecosystem already uses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
struct Snapshot {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user_type: Option<Role>,
}

/// Process-wide session store.
///
/// Cloning is cheap; all clones share the same state. Writes are
/// user-initiated (login/logout) or triggered by an `Unauthenticated`
/// response, and are last-writer-wins.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Snapshot>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Open the store backed by the default per-user snapshot path.
    ///
    /// A missing or corrupt snapshot yields a logged-out session, never
    /// an error.
    pub fn open() -> anyhow::Result<Self> {
        let path = default_snapshot_path().context("no user data directory available")?;
        Ok(Self::open_at(path))
    }

    /// Open the store backed by an explicit snapshot path.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let snapshot = load_snapshot(&path);
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
            path: Some(path),
        }
    }

    /// An unpersisted store (tests, ephemeral sessions).
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Snapshot::default())),
            path: None,
        }
    }

    /// Current session (token + role).
    pub fn get(&self) -> Session {
        let snapshot = self.read();
        Session {
            token: snapshot.access_token.clone(),
            role: snapshot.user_type,
        }
    }

    /// The stored refresh token, if any. Persisted for wire compatibility;
    /// no silent-refresh flow uses it.
    pub fn refresh_token(&self) -> Option<String> {
        self.read().refresh_token.clone()
    }

    /// Install a new session (login).
    pub fn set(&self, token: impl Into<String>, refresh_token: Option<String>, role: Role) {
        let snapshot = Snapshot {
            access_token: Some(token.into()),
            refresh_token,
            user_type: Some(role),
        };
        self.replace(snapshot);
    }

    /// Destroy the session (logout or token rejection). Token and role
    /// disappear together; no reader can observe one without the other.
    pub fn clear(&self) {
        self.replace(Snapshot::default());
    }

    fn replace(&self, snapshot: Snapshot) {
        {
            let mut guard = self.write();
            *guard = snapshot.clone();
        }
        if let Some(path) = &self.path {
            if let Err(err) = persist_snapshot(path, &snapshot) {
                // The in-memory session stays authoritative for this run.
                tracing::warn!(path = %path.display(), error = %err, "failed to persist session snapshot");
            }
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Snapshot> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Snapshot> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn default_snapshot_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("myduka").join("session.json"))
}

fn load_snapshot(path: &Path) -> Snapshot {
    match std::fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "corrupt session snapshot; starting logged out");
            Snapshot::default()
        }),
        Err(_) => Snapshot::default(),
    }
}

/// Write-then-rename so a crash mid-write never leaves a torn snapshot.
fn persist_snapshot(path: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create session directory at {}", parent.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    let raw = serde_json::to_string_pretty(snapshot).context("failed to serialize session")?;
    std::fs::write(&tmp, raw)
        .with_context(|| format!("failed to write session snapshot to {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("failed to move session snapshot into {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("myduka-session-{}-{}", std::process::id(), name))
            .join("session.json")
    }

    #[test]
    fn set_then_get_round_trips_token_and_role() {
        let store = SessionStore::in_memory();
        store.set("tok-abc", Some("refresh-xyz".to_string()), Role::Merchant);

        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("tok-abc"));
        assert_eq!(session.role, Some(Role::Merchant));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-xyz"));
    }

    #[test]
    fn clear_leaves_no_partial_state() {
        let store = SessionStore::in_memory();
        store.set("tok", None, Role::Clerk);
        store.clear();

        let session = store.get();
        assert_eq!(session.token, None);
        assert_eq!(session.role, None);
        assert_eq!(store.refresh_token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn session_survives_reopening_the_store() {
        let path = scratch_path("reopen");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        let store = SessionStore::open_at(&path);
        store.set("persisted-token", Some("r".to_string()), Role::Admin);
        drop(store);

        let reopened = SessionStore::open_at(&path);
        let session = reopened.get();
        assert_eq!(session.token.as_deref(), Some("persisted-token"));
        assert_eq!(session.role, Some(Role::Admin));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn clear_is_persisted_too() {
        let path = scratch_path("clear");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        let store = SessionStore::open_at(&path);
        store.set("tok", None, Role::Clerk);
        store.clear();
        drop(store);

        let reopened = SessionStore::open_at(&path);
        assert!(!reopened.get().is_authenticated());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_snapshot_yields_a_logged_out_session() {
        let path = scratch_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::open_at(&path);
        assert!(!store.get().is_authenticated());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::in_memory();
        let clone = store.clone();
        store.set("tok", None, Role::Merchant);
        assert!(clone.get().is_authenticated());
        clone.clear();
        assert!(!store.get().is_authenticated());
    }
}
