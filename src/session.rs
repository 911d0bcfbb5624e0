//! In-memory session management.
//!
//! One [`SessionStore`] is built at startup and shared by every connection.
//! Each session owns an attribute bag of arbitrary values. Sessions are never
//! evicted; they live as long as the process.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;
use uuid::Uuid;

/// A value stored in a session's attribute bag.
pub type Attribute = Arc<dyn Any + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no session with id {0}")]
    NotFound(String),
}

/// Snapshot of a session as it was when read from the store.
#[derive(Clone)]
pub struct Session {
    id: String,
    attributes: HashMap<String, Attribute>,
}

impl Session {
    fn new(id: String) -> Self {
        Self {
            id,
            attributes: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    /// Typed view of an attribute. `None` if absent or of another type.
    pub fn attribute_as<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.attributes
            .get(key)
            .cloned()
            .and_then(|value| value.downcast::<T>().ok())
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(|k| k.as_str())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("attributes", &self.attributes.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Concurrent table from session id to session.
///
/// Cloning is cheap and yields a handle onto the same table.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<DashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers an empty session under a fresh random id.
    pub fn create(&self) -> Session {
        loop {
            let id = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = self.inner.entry(id.clone()) {
                let session = Session::new(id);
                slot.insert(session.clone());
                tracing::debug!(session_id = %session.id, "Session created");
                return session;
            }
        }
    }

    pub fn find(&self, id: &str) -> Result<Session, SessionError> {
        self.inner
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Stores `value` under `key` in the live session.
    pub fn set_attribute(
        &self,
        session: &Session,
        key: impl Into<String>,
        value: Attribute,
    ) -> Result<(), SessionError> {
        let mut entry = self
            .inner
            .get_mut(&session.id)
            .ok_or_else(|| SessionError::NotFound(session.id.clone()))?;
        entry.attributes.insert(key.into(), value);
        Ok(())
    }

    /// Reads `key` from the live session, not from the snapshot passed in.
    pub fn get_attribute(&self, session: &Session, key: &str) -> Option<Attribute> {
        self.inner
            .get(&session.id)
            .and_then(|entry| entry.attributes.get(key).cloned())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
