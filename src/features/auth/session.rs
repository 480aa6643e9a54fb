use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::auth::store::{SessionStore, StoredSession};

/// Externally visible authentication state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticating,
    Authenticated,
}

#[derive(Debug, Clone)]
enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated { token: String },
}

/// Holds the bearer token in memory and mirrors it into a durable store.
///
/// At most one token is held at a time. Every transition back to
/// `Anonymous` clears both the memory copy and the store, including a
/// failed login that started from a restored token.
pub struct Session {
    state: RwLock<SessionState>,
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Fresh anonymous session; nothing is read from the store
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            state: RwLock::new(SessionState::Anonymous),
            store,
        }
    }

    /// Session resumed from whatever token the store still holds
    pub async fn restore(store: Arc<dyn SessionStore>) -> Result<Self> {
        let state = match store.load().await? {
            Some(stored) => {
                tracing::info!("Restored persisted session");
                SessionState::Authenticated {
                    token: stored.token,
                }
            }
            None => SessionState::Anonymous,
        };

        Ok(Self {
            state: RwLock::new(state),
            store,
        })
    }

    pub async fn state(&self) -> AuthState {
        match *self.state.read().await {
            SessionState::Anonymous => AuthState::Anonymous,
            SessionState::Authenticating => AuthState::Authenticating,
            SessionState::Authenticated { .. } => AuthState::Authenticated,
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state().await == AuthState::Authenticated
    }

    pub async fn token(&self) -> Option<String> {
        match &*self.state.read().await {
            SessionState::Authenticated { token } => Some(token.clone()),
            _ => None,
        }
    }

    /// Drop any held token and mark a login as in flight
    pub(crate) async fn begin_login(&self) {
        *self.state.write().await = SessionState::Authenticating;
    }

    /// Persist the new token first, then start attaching it.
    /// A store failure sends the session back to anonymous.
    pub(crate) async fn establish(&self, token: &str, user: Value) -> Result<()> {
        let stored = StoredSession {
            token: token.to_string(),
            user,
        };

        if let Err(e) = self.store.save(&stored).await {
            self.abort_login().await;
            return Err(e);
        }

        *self.state.write().await = SessionState::Authenticated {
            token: stored.token,
        };
        tracing::info!("Session established");
        Ok(())
    }

    /// Back to anonymous after a failed login. A token persisted before the
    /// attempt is wiped too, so a restart does not resurrect it.
    pub(crate) async fn abort_login(&self) {
        let mut state = self.state.write().await;
        if !matches!(*state, SessionState::Authenticating) {
            return;
        }
        *state = SessionState::Anonymous;
        if let Err(e) = self.store.clear().await {
            tracing::error!("Failed to clear persisted session after failed login: {}", e);
        }
    }

    /// Forget the token in memory, then wipe the durable copy.
    /// The memory copy is gone even when the store fails.
    pub async fn clear(&self) -> Result<()> {
        *self.state.write().await = SessionState::Anonymous;
        self.store.clear().await
    }

    /// Tear down the session a rejected request was sent under.
    ///
    /// `sent` is the token the request carried. Nothing happens when a
    /// different token, or a login in flight, has taken its place since.
    /// Returns whether the session was cleared.
    pub(crate) async fn invalidate(&self, sent: Option<&str>) -> Result<bool> {
        let mut state = self.state.write().await;
        let current = match &*state {
            SessionState::Authenticating => return Ok(false),
            SessionState::Authenticated { token } => Some(token.as_str()),
            SessionState::Anonymous => None,
        };
        if current.is_some() && current != sent {
            return Ok(false);
        }

        *state = SessionState::Anonymous;
        self.store.clear().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::store::MemorySessionStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_state_machine() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::new(store.clone());
        assert_eq!(session.state().await, AuthState::Anonymous);

        session.begin_login().await;
        assert_eq!(session.state().await, AuthState::Authenticating);
        assert_eq!(session.token().await, None);

        session.establish("tok", json!("admin")).await.unwrap();
        assert_eq!(session.state().await, AuthState::Authenticated);
        assert_eq!(session.token().await.as_deref(), Some("tok"));
        assert_eq!(store.load().await.unwrap().unwrap().token, "tok");

        session.clear().await.unwrap();
        assert!(!session.is_authenticated().await);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_login_returns_to_anonymous() {
        let session = Session::new(Arc::new(MemorySessionStore::new()));
        session.begin_login().await;
        session.abort_login().await;
        assert_eq!(session.state().await, AuthState::Anonymous);
    }

    #[tokio::test]
    async fn test_failed_login_wipes_restored_token() {
        let store = Arc::new(MemorySessionStore::with_session(StoredSession {
            token: "old".to_string(),
            user: json!("admin"),
        }));
        let session = Session::restore(store.clone()).await.unwrap();

        session.begin_login().await;
        session.abort_login().await;

        assert_eq!(session.state().await, AuthState::Anonymous);
        assert_eq!(store.load().await.unwrap(), None);
        assert!(!Session::restore(store).await.unwrap().is_authenticated().await);
    }

    #[tokio::test]
    async fn test_invalidate_ignores_replaced_token() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::new(store.clone());
        session.begin_login().await;
        session.establish("new", json!("admin")).await.unwrap();

        assert!(!session.invalidate(Some("old")).await.unwrap());
        assert_eq!(session.token().await.as_deref(), Some("new"));
        assert_eq!(store.load().await.unwrap().unwrap().token, "new");

        assert!(session.invalidate(Some("new")).await.unwrap());
        assert!(!session.is_authenticated().await);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalidate_leaves_login_in_flight() {
        let store = Arc::new(MemorySessionStore::with_session(StoredSession {
            token: "old".to_string(),
            user: json!("admin"),
        }));
        let session = Session::restore(store).await.unwrap();
        session.begin_login().await;

        assert!(!session.invalidate(Some("old")).await.unwrap());
        assert_eq!(session.state().await, AuthState::Authenticating);
    }

    #[tokio::test]
    async fn test_restore_reads_persisted_token() {
        let store = Arc::new(MemorySessionStore::with_session(StoredSession {
            token: "persisted".to_string(),
            user: json!("admin"),
        }));
        let session = Session::restore(store).await.unwrap();
        assert_eq!(session.token().await.as_deref(), Some("persisted"));
    }
}
