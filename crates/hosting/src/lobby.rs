use super::*;
use abv_core::ID;
use abv_search::Trace;
use abv_tree::RawTree;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds every live session, keyed by id, up to a fixed capacity.
///
/// Trees are validated and traces built before the lock is taken, so
/// a large submission never blocks navigation in other sessions.
pub struct Lobby {
    cap: usize,
    sessions: RwLock<HashMap<ID<Session>, Session>>,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new(abv_core::DEFAULT_MAX_SESSIONS)
    }
}

impl Lobby {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            sessions: RwLock::new(HashMap::new()),
        }
    }
    pub fn cap(&self) -> usize {
        self.cap
    }
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Lobby {
    /// Validates the tree, searches it once, and registers a new session.
    pub async fn open(&self, raw: RawTree) -> Result<(ID<Session>, Arc<Trace>), SessionError> {
        let session = Session::try_from(raw)?;
        let trace = session.trace().clone();
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.cap {
            log::warn!("[lobby] refused session, {} already open", sessions.len());
            return Err(SessionError::Full(self.cap));
        }
        let id = ID::default();
        sessions.insert(id, session);
        log::info!("[lobby] opened session {} ({} steps)", id, trace.len());
        Ok((id, trace))
    }
    /// Swaps in a new tree. The old trace is discarded and the cursor
    /// starts over.
    pub async fn replace(&self, id: ID<Session>, raw: RawTree) -> Result<Arc<Trace>, SessionError> {
        let fresh = Session::try_from(raw)?;
        let trace = fresh.trace().clone();
        self.sessions
            .write()
            .await
            .get_mut(&id)
            .map(|session| *session = fresh)
            .ok_or(SessionError::NotFound(id))?;
        log::debug!("[lobby] replaced tree of session {}", id);
        Ok(trace)
    }
    pub async fn close(&self, id: ID<Session>) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| log::info!("[lobby] closed session {}", id))
            .ok_or(SessionError::NotFound(id))
    }
    /// Runs a read-only query against one session.
    pub async fn read<T, F>(&self, id: ID<Session>, f: F) -> Result<T, SessionError>
    where
        F: FnOnce(&Session) -> T,
    {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(f)
            .ok_or(SessionError::NotFound(id))
    }
    /// Runs a cursor move against one session.
    pub async fn write<T, F>(&self, id: ID<Session>, f: F) -> Result<T, SessionError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        self.sessions
            .write()
            .await
            .get_mut(&id)
            .map(f)
            .ok_or(SessionError::NotFound(id))
    }
}
