use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::Session;

/// In-memory sessions keyed by id.
///
/// Closures run under the lock and must stay synchronous, so no model call is
/// ever made while the map is locked.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Session {
        let session = Session::new();
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    pub async fn read<T>(&self, id: Uuid, f: impl FnOnce(&Session) -> T) -> Result<T, AppError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(f(session))
    }

    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        f(session)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::WizardStep;

    #[tokio::test]
    async fn test_create_then_read() {
        let store = SessionStore::new();
        let session = store.create().await;
        let step = store.read(session.id, |s| s.step).await.unwrap();
        assert_eq!(step, WizardStep::Import);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = SessionStore::new();
        let err = store.read(Uuid::new_v4(), |s| s.step).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_frees_the_session() {
        let store = SessionStore::new();
        let id = store.create().await.id;
        store.remove(id).await.unwrap();
        assert_eq!(store.len().await, 0);
        assert!(matches!(store.read(id, |s| s.step).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.remove(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_failed_update_is_reported() {
        let store = SessionStore::new();
        let id = store.create().await.id;
        let err = store
            .update(id, |s| Ok(s.advance()?))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.read(id, |s| s.step).await.unwrap(), WizardStep::Import);
    }
}
