//! Application state
//!
//! UI state that outlives a single command (sidebar flag, signed-in user,
//! table preferences) goes through [`AppState`]. It exposes typed accessors
//! and keeps the storage behind the [`KeyValueStore`] trait:
//!
//! - the *persistent* store survives restarts (a JSON file in practice)
//! - the *session* store is in-memory and dies with the process
//!
//! A sign-in with "remember me" lands in the persistent store, otherwise in
//! the session store.

pub mod store;

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Result;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

/// Storage keys
pub mod keys {
    pub const LOGIN_STATE: &str = "isLoggedIn";
    pub const REMEMBER_ME: &str = "rememberMe";
    pub const USER_INFO: &str = "userInfo";
    pub const AUTH_TOKEN: &str = "authToken";
    pub const SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";
    pub const PAGE_SIZE: &str = "pageSize";
    pub const LAST_STATION: &str = "lastStation";
}

/// Signed-in operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserInfo,
    pub token: String,
    pub remembered: bool,
}

/// Typed application state over injected key-value stores
#[derive(Clone)]
pub struct AppState {
    persistent: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl AppState {
    /// Create state over a persistent store, with a fresh in-memory session store
    pub fn new(persistent: Arc<dyn KeyValueStore>) -> Self {
        Self::with_stores(persistent, Arc::new(MemoryStore::new()))
    }

    /// Create state over explicit persistent and session stores
    pub fn with_stores(persistent: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self {
            persistent,
            session,
        }
    }

    /// State that forgets everything on exit
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /* ------------------------------ layout ------------------------------ */

    pub fn sidebar_collapsed(&self) -> Result<bool> {
        Ok(self.persistent.get(keys::SIDEBAR_COLLAPSED)?.as_deref() == Some("true"))
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) -> Result<()> {
        self.persistent
            .set(keys::SIDEBAR_COLLAPSED, if collapsed { "true" } else { "false" })
    }

    /// Flip the sidebar flag and return the new value
    pub fn toggle_sidebar(&self) -> Result<bool> {
        let collapsed = !self.sidebar_collapsed()?;
        self.set_sidebar_collapsed(collapsed)?;
        Ok(collapsed)
    }

    /* ---------------------------- preferences --------------------------- */

    /// Preferred rows per page, if one was saved and is valid
    pub fn page_size(&self) -> Result<Option<usize>> {
        Ok(self
            .persistent
            .get(keys::PAGE_SIZE)?
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0))
    }

    pub fn set_page_size(&self, page_size: usize) -> Result<()> {
        self.persistent.set(keys::PAGE_SIZE, &page_size.to_string())
    }

    pub fn last_station(&self) -> Result<Option<String>> {
        self.persistent.get(keys::LAST_STATION)
    }

    pub fn set_last_station(&self, station_id: &str) -> Result<()> {
        self.persistent.set(keys::LAST_STATION, station_id)
    }

    /* ------------------------------ session ----------------------------- */

    /// Record a successful sign-in and issue a session token
    ///
    /// # Arguments
    /// * `user` - The authenticated operator
    /// * `remember` - Persist the session across restarts
    pub fn sign_in(&self, user: UserInfo, remember: bool) -> Result<Session> {
        let token = format!(
            "mock_token_{}_{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        );

        // A session lives in exactly one store
        self.clear_store(self.persistent.as_ref())?;
        self.clear_store(self.session.as_ref())?;

        let store = if remember {
            self.persistent.as_ref()
        } else {
            self.session.as_ref()
        };

        // The login flag goes last so a failed write never exposes a half session
        store.set(keys::USER_INFO, &serde_json::to_string(&user)?)?;
        store.set(keys::AUTH_TOKEN, &token)?;
        if remember {
            store.set(keys::REMEMBER_ME, "true")?;
        }
        store.set(keys::LOGIN_STATE, "true")?;

        info!("Signed in as {}", user.username);
        Ok(Session {
            user,
            token,
            remembered: remember,
        })
    }

    /// Current session, preferring a remembered one
    pub fn session(&self) -> Result<Option<Session>> {
        for (store, remembered) in [(&self.persistent, true), (&self.session, false)] {
            if store.get(keys::LOGIN_STATE)?.as_deref() != Some("true") {
                continue;
            }
            let (Some(user), Some(token)) =
                (store.get(keys::USER_INFO)?, store.get(keys::AUTH_TOKEN)?)
            else {
                debug!("Login flag set without user or token, ignoring");
                continue;
            };
            return Ok(Some(Session {
                user: serde_json::from_str(&user)?,
                token,
                remembered,
            }));
        }
        Ok(None)
    }

    pub fn auth_token(&self) -> Result<Option<String>> {
        Ok(self.session()?.map(|s| s.token))
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.session()?.is_some())
    }

    /// Forget the session in both stores
    pub fn sign_out(&self) -> Result<()> {
        self.clear_store(self.persistent.as_ref())?;
        self.clear_store(self.session.as_ref())?;
        info!("Signed out");
        Ok(())
    }

    fn clear_store(&self, store: &dyn KeyValueStore) -> Result<()> {
        for key in [
            keys::LOGIN_STATE,
            keys::REMEMBER_ME,
            keys::USER_INFO,
            keys::AUTH_TOKEN,
        ] {
            store.remove(key)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("persistent", &"<KeyValueStore>")
            .field("session", &"<KeyValueStore>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> UserInfo {
        UserInfo {
            id: "1".into(),
            username: "admin".into(),
            email: Some("admin@example.com".into()),
            role: "admin".into(),
            display_name: Some("Quản trị viên".into()),
        }
    }

    #[test]
    fn test_sidebar_toggle() {
        let state = AppState::in_memory();
        assert!(!state.sidebar_collapsed().unwrap());
        assert!(state.toggle_sidebar().unwrap());
        assert!(state.sidebar_collapsed().unwrap());
        assert!(!state.toggle_sidebar().unwrap());
    }

    #[test]
    fn test_sign_in_without_remember_uses_session_store() {
        let persistent = Arc::new(MemoryStore::new());
        let state = AppState::new(persistent.clone());

        let session = state.sign_in(operator(), false).unwrap();
        assert!(session.token.starts_with("mock_token_"));
        assert!(!session.remembered);
        assert_eq!(persistent.get(keys::AUTH_TOKEN).unwrap(), None);
        assert_eq!(state.auth_token().unwrap(), Some(session.token));
    }

    #[test]
    fn test_remembered_session_survives_new_state() {
        let persistent: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let state = AppState::new(persistent.clone());
        state.sign_in(operator(), true).unwrap();

        let restarted = AppState::new(persistent);
        let session = restarted.session().unwrap().unwrap();
        assert!(session.remembered);
        assert_eq!(session.user, operator());
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let state = AppState::in_memory();
        state.sign_in(operator(), true).unwrap();
        state.sign_out().unwrap();
        assert!(!state.is_authenticated().unwrap());
        assert_eq!(state.auth_token().unwrap(), None);
    }

    #[test]
    fn test_page_size_preference() {
        let state = AppState::in_memory();
        assert_eq!(state.page_size().unwrap(), None);
        state.set_page_size(20).unwrap();
        assert_eq!(state.page_size().unwrap(), Some(20));
        state.set_page_size(0).unwrap();
        assert_eq!(state.page_size().unwrap(), None);
    }

    #[test]
    fn test_last_station() {
        let state = AppState::in_memory();
        state.set_last_station("A002").unwrap();
        assert_eq!(state.last_station().unwrap().as_deref(), Some("A002"));
    }

    #[test]
    fn test_failed_sign_in_leaves_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let persistent = JsonFileStore::open(blocker.join("state.json")).unwrap();
        let state = AppState::new(Arc::new(persistent));

        assert!(state.sign_in(operator(), true).is_err());
        assert_eq!(state.session().unwrap(), None);
        assert!(!state.is_authenticated().unwrap());
    }
}
