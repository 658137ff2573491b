//! Concurrency-safe session map.
//!
//! One session per user: logging in again replaces the previous session id.
//! When the store is full the oldest live session is evicted.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use forms_config::SessionConfig;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// User id reported for requests without a live session.
pub const ANONYMOUS_USER_ID: i64 = 0;

const SESSION_ID_BYTES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
}

impl SessionUser {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            id: ANONYMOUS_USER_ID,
            name: String::new(),
        }
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.id != ANONYMOUS_USER_ID
    }
}

#[derive(Debug, Default)]
struct Inner {
    by_session: HashMap<String, SessionUser>,
    by_user: HashMap<i64, String>,
    order: VecDeque<String>,
}

impl Inner {
    fn drop_session(&mut self, sid: &str) -> Option<SessionUser> {
        let user = self.by_session.remove(sid)?;
        if self.by_user.get(&user.id).is_some_and(|s| s == sid) {
            self.by_user.remove(&user.id);
        }
        self.order.retain(|s| s != sid);
        Some(user)
    }
}

#[derive(Debug)]
pub struct SessionStore {
    inner: RwLock<Inner>,
    max_sessions: usize,
}

impl SessionStore {
    #[must_use]
    pub fn new(max_sessions: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            max_sessions: max_sessions.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.max_sessions)
    }

    /// Start a session for `user`, replacing any session it already had.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionIdGeneration` if the OS RNG fails, or
    /// `AuthError::StorePoisoned` if a writer panicked.
    pub fn create(&self, user: SessionUser) -> Result<String, AuthError> {
        let sid = new_session_id()?;
        let mut inner = self.inner.write().map_err(|_| AuthError::StorePoisoned)?;

        if let Some(previous) = inner.by_user.get(&user.id).cloned() {
            inner.drop_session(&previous);
        }
        while inner.order.len() >= self.max_sessions {
            let Some(oldest) = inner.order.front().cloned() else {
                break;
            };
            tracing::debug!(session = %oldest, "evicting oldest session");
            inner.drop_session(&oldest);
        }

        inner.by_user.insert(user.id, sid.clone());
        inner.by_session.insert(sid.clone(), user);
        inner.order.push_back(sid.clone());
        Ok(sid)
    }

    /// # Errors
    ///
    /// Returns `AuthError::StorePoisoned` if a writer panicked.
    pub fn get(&self, sid: &str) -> Result<Option<SessionUser>, AuthError> {
        let inner = self.inner.read().map_err(|_| AuthError::StorePoisoned)?;
        Ok(inner.by_session.get(sid).cloned())
    }

    /// Identify the caller, falling back to the anonymous user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StorePoisoned` if a writer panicked.
    pub fn resolve(&self, sid: Option<&str>) -> Result<SessionUser, AuthError> {
        let Some(sid) = sid else {
            return Ok(SessionUser::anonymous());
        };
        Ok(self.get(sid)?.unwrap_or_else(SessionUser::anonymous))
    }

    /// End a session. Returns the user it belonged to.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StorePoisoned` if a writer panicked.
    pub fn remove(&self, sid: &str) -> Result<Option<SessionUser>, AuthError> {
        let mut inner = self.inner.write().map_err(|_| AuthError::StorePoisoned)?;
        Ok(inner.drop_session(sid))
    }

    /// # Errors
    ///
    /// Returns `AuthError::StorePoisoned` if a writer panicked.
    pub fn len(&self) -> Result<usize, AuthError> {
        let inner = self.inner.read().map_err(|_| AuthError::StorePoisoned)?;
        Ok(inner.by_session.len())
    }

    /// # Errors
    ///
    /// Returns `AuthError::StorePoisoned` if a writer panicked.
    pub fn is_empty(&self) -> Result<bool, AuthError> {
        Ok(self.len()? == 0)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

fn new_session_id() -> Result<String, AuthError> {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| AuthError::SessionIdGeneration(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    fn user(id: i64, name: &str) -> SessionUser {
        SessionUser {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn session_ids_are_hex_and_unique() {
        let a = new_session_id().unwrap();
        let b = new_session_id().unwrap();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn create_then_get() {
        let store = SessionStore::new(8);
        let sid = store.create(user(1, "ann")).unwrap();
        assert_eq!(store.get(&sid).unwrap(), Some(user(1, "ann")));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn relogin_replaces_previous_session() {
        let store = SessionStore::new(8);
        let first = store.create(user(1, "ann")).unwrap();
        let second = store.create(user(1, "ann")).unwrap();
        assert_eq!(store.get(&first).unwrap(), None);
        assert_eq!(store.get(&second).unwrap(), Some(user(1, "ann")));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn resolve_falls_back_to_anonymous() {
        let store = SessionStore::new(8);
        assert_eq!(store.resolve(None).unwrap(), SessionUser::anonymous());
        assert_eq!(store.resolve(Some("nope")).unwrap(), SessionUser::anonymous());
        assert!(!store.resolve(None).unwrap().is_signed_in());
    }

    #[test]
    fn remove_clears_both_indexes() {
        let store = SessionStore::new(8);
        let sid = store.create(user(2, "bo")).unwrap();
        assert_eq!(store.remove(&sid).unwrap(), Some(user(2, "bo")));
        assert!(store.is_empty().unwrap());
        // A fresh login after logout must not evict anything stale.
        let again = store.create(user(2, "bo")).unwrap();
        assert_eq!(store.get(&again).unwrap(), Some(user(2, "bo")));
    }

    #[test]
    fn full_store_evicts_oldest() {
        let store = SessionStore::new(2);
        let a = store.create(user(1, "a")).unwrap();
        let b = store.create(user(2, "b")).unwrap();
        let c = store.create(user(3, "c")).unwrap();
        assert_eq!(store.get(&a).unwrap(), None);
        assert!(store.get(&b).unwrap().is_some());
        assert!(store.get(&c).unwrap().is_some());
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn concurrent_logins_keep_indexes_consistent() {
        let store = Arc::new(SessionStore::new(1000));
        let handles: Vec<_> = (1..=8)
            .map(|id| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..50 {
                        let sid = store.create(user(id, "u")).unwrap();
                        let _ = store.get(&sid).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len().unwrap(), 8);
    }
}
