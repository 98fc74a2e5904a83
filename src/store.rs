//! In-memory session store: many sessions by id, dropped after inactivity.

use crate::models::{Session, SessionId};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum StoreError {
    #[error("No session")]
    NotFound,
    #[error("lock error")]
    Poisoned,
}

/// Per-session entry: session data + last activity time (for auto-cleanup).
struct SessionEntry {
    session: Session,
    last_activity: Instant,
}

#[derive(Default)]
pub struct SessionStore {
    entries: RwLock<HashMap<SessionId, SessionEntry>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session and return its id.
    pub fn insert(&self, session: Session) -> Result<SessionId, StoreError> {
        let id = session.id;
        let mut g = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        g.insert(
            id,
            SessionEntry {
                session,
                last_activity: Instant::now(),
            },
        );
        Ok(id)
    }

    /// Run `f` on a session, refreshing its last activity time.
    pub fn with_session<T, F>(&self, id: SessionId, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut g = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        let entry = g.get_mut(&id).ok_or(StoreError::NotFound)?;
        entry.last_activity = Instant::now();
        Ok(f(&mut entry.session))
    }

    /// Remove sessions inactive for at least `ttl`. Returns how many were removed.
    pub fn remove_inactive(&self, ttl: Duration) -> Result<usize, StoreError> {
        let mut g = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        let before = g.len();
        g.retain(|_, entry| entry.last_activity.elapsed() < ttl);
        Ok(before - g.len())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillTier;

    #[test]
    fn with_session_mutates_in_place() {
        let store = SessionStore::new();
        let id = store.insert(Session::new()).unwrap();
        store
            .with_session(id, |s| s.add_player("Ana", SkillTier::Good))
            .unwrap()
            .unwrap();
        let count = store.with_session(id, |s| s.players.len()).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn unknown_session_is_not_found() {
        let store = SessionStore::new();
        let res = store.with_session(uuid::Uuid::new_v4(), |_| ());
        assert_eq!(res, Err(StoreError::NotFound));
    }

    #[test]
    fn remove_inactive_drops_expired_only() {
        let store = SessionStore::new();
        store.insert(Session::new()).unwrap();
        store.insert(Session::new()).unwrap();
        assert_eq!(store.remove_inactive(Duration::from_secs(3600)).unwrap(), 0);
        assert_eq!(store.len(), 2);
        assert_eq!(store.remove_inactive(Duration::ZERO).unwrap(), 2);
        assert!(store.is_empty());
    }
}
