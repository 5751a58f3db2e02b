use log::{info, warn};
use thiserror::Error;

use crate::config::{LOGGED_IN_KEY, USER_NAME_KEY};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not write {key} to local storage")]
    Write { key: &'static str },
}

/// String key/value storage that survives a page reload.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &'static str) -> Result<(), SessionError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(SessionError::Unavailable)
    }
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| SessionError::Write { key })
    }

    fn remove(&self, key: &'static str) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| SessionError::Write { key })
    }
}

/// Placeholder sign-in state. Nothing is verified: any non-empty name logs
/// the visitor in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSession {
    user: Option<String>,
}

impl AuthSession {
    pub fn load(store: &impl SessionStore) -> Self {
        let logged_in = store.get(LOGGED_IN_KEY).as_deref() == Some("true");
        let user = if logged_in {
            Some(store.get(USER_NAME_KEY).unwrap_or_default())
        } else {
            None
        };
        AuthSession { user }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns `Ok(false)` and leaves the session alone for blank names.
    pub fn login(&mut self, store: &impl SessionStore, name: &str) -> Result<bool, SessionError> {
        if name.trim().is_empty() {
            return Ok(false);
        }
        // the flag goes last so a reload never sees it without a name
        store.set(USER_NAME_KEY, name)?;
        if let Err(e) = store.set(LOGGED_IN_KEY, "true") {
            if store.remove(USER_NAME_KEY).is_err() {
                warn!("Could not roll back stored name");
            }
            return Err(e);
        }
        info!("Placeholder login as {}", name);
        self.user = Some(name.to_string());
        Ok(true)
    }

    /// The session stays logged in when the flag cannot be removed. A name
    /// left behind without the flag is ignored by `load`.
    pub fn logout(&mut self, store: &impl SessionStore) -> Result<(), SessionError> {
        store.remove(LOGGED_IN_KEY)?;
        if store.remove(USER_NAME_KEY).is_err() {
            warn!("Could not clear stored name");
        }
        self.user = None;
        info!("Logged out");
        Ok(())
    }

    /// Logs out when logged in, otherwise asks for a name and logs in with
    /// it. A cancelled or blank answer leaves the session as it was.
    pub fn toggle(
        &mut self,
        store: &impl SessionStore,
        ask_name: impl FnOnce() -> Option<String>,
    ) -> Result<(), SessionError> {
        if self.is_logged_in() {
            return self.logout(store);
        }
        if let Some(name) = ask_name() {
            self.login(store, &name)?;
        }
        Ok(())
    }
}

/// `window.prompt`. `None` when cancelled or unavailable.
pub fn prompt_for_name(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &'static str) -> Result<(), SessionError> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }

    /// Memory store whose writes to one key always fail.
    struct FailingStore {
        inner: MemoryStore,
        fail_on: &'static str,
    }

    impl FailingStore {
        fn on(fail_on: &'static str) -> Self {
            FailingStore { inner: MemoryStore::default(), fail_on }
        }
    }

    impl SessionStore for FailingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
            if key == self.fail_on {
                return Err(SessionError::Write { key });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &'static str) -> Result<(), SessionError> {
            if key == self.fail_on {
                return Err(SessionError::Write { key });
            }
            self.inner.remove(key)
        }
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &'static str, _value: &str) -> Result<(), SessionError> {
            Err(SessionError::Write { key })
        }

        fn remove(&self, _key: &'static str) -> Result<(), SessionError> {
            Err(SessionError::Unavailable)
        }
    }

    #[test]
    fn fresh_store_is_logged_out() {
        let store = MemoryStore::default();
        let session = AuthSession::load(&store);
        assert!(!session.is_logged_in());
        assert_eq!(session.user_name(), None);
    }

    #[test]
    fn login_persists_flag_and_name() {
        let store = MemoryStore::default();
        let mut session = AuthSession::load(&store);
        assert_eq!(session.login(&store, "maria"), Ok(true));
        assert!(session.is_logged_in());
        assert_eq!(store.get(LOGGED_IN_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(USER_NAME_KEY).as_deref(), Some("maria"));

        let reloaded = AuthSession::load(&store);
        assert_eq!(reloaded.user_name(), Some("maria"));
    }

    #[test]
    fn blank_name_does_not_log_in() {
        let store = MemoryStore::default();
        let mut session = AuthSession::default();
        assert_eq!(session.login(&store, "   "), Ok(false));
        assert!(!session.is_logged_in());
        assert!(store.items.borrow().is_empty());
    }

    #[test]
    fn logout_clears_both_entries() {
        let store = MemoryStore::default();
        let mut session = AuthSession::default();
        session.login(&store, "maria").unwrap();
        session.logout(&store).unwrap();
        assert!(!session.is_logged_in());
        assert!(store.items.borrow().is_empty());
        assert!(!AuthSession::load(&store).is_logged_in());
    }

    #[test]
    fn toggle_signs_in_then_out() {
        let store = MemoryStore::default();
        let mut session = AuthSession::load(&store);

        session.toggle(&store, || Some("maria".to_string())).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(store.get(LOGGED_IN_KEY).as_deref(), Some("true"));

        session
            .toggle(&store, || panic!("no prompt while logged in"))
            .unwrap();
        assert!(!session.is_logged_in());
        assert_eq!(store.get(LOGGED_IN_KEY), None);
        assert_eq!(store.get(USER_NAME_KEY), None);
    }

    #[test]
    fn cancelled_prompt_changes_nothing() {
        let store = MemoryStore::default();
        let mut session = AuthSession::default();
        session.toggle(&store, || None).unwrap();
        session.toggle(&store, || Some(String::new())).unwrap();
        assert!(!session.is_logged_in());
        assert!(store.items.borrow().is_empty());
    }

    #[test]
    fn only_the_literal_true_counts_as_logged_in() {
        let store = MemoryStore::default();
        store.set(LOGGED_IN_KEY, "yes").unwrap();
        store.set(USER_NAME_KEY, "maria").unwrap();
        assert!(!AuthSession::load(&store).is_logged_in());
    }

    #[test]
    fn failed_write_keeps_previous_state() {
        let mut session = AuthSession::default();
        assert_eq!(
            session.login(&BrokenStore, "maria"),
            Err(SessionError::Write { key: USER_NAME_KEY })
        );
        assert!(!session.is_logged_in());
    }

    #[test]
    fn failed_name_write_leaves_nothing_to_reload() {
        let store = FailingStore::on(USER_NAME_KEY);
        let mut session = AuthSession::default();
        assert_eq!(
            session.login(&store, "maria"),
            Err(SessionError::Write { key: USER_NAME_KEY })
        );
        assert!(!session.is_logged_in());
        assert_eq!(store.inner.get(LOGGED_IN_KEY), None);
        assert!(!AuthSession::load(&store).is_logged_in());
    }

    #[test]
    fn failed_flag_write_rolls_back_the_name() {
        let store = FailingStore::on(LOGGED_IN_KEY);
        let mut session = AuthSession::default();
        assert_eq!(
            session.login(&store, "maria"),
            Err(SessionError::Write { key: LOGGED_IN_KEY })
        );
        assert!(!session.is_logged_in());
        assert!(store.inner.items.borrow().is_empty());
    }

    #[test]
    fn logout_keeps_session_when_flag_cannot_be_removed() {
        let store = MemoryStore::default();
        let mut session = AuthSession::default();
        session.login(&store, "maria").unwrap();

        assert_eq!(session.logout(&BrokenStore), Err(SessionError::Unavailable));
        assert_eq!(session.user_name(), Some("maria"));
        assert!(AuthSession::load(&store).is_logged_in());
    }

    #[test]
    fn logout_tolerates_a_stale_name() {
        let store = FailingStore::on(USER_NAME_KEY);
        store.inner.set(USER_NAME_KEY, "maria").unwrap();
        store.inner.set(LOGGED_IN_KEY, "true").unwrap();
        let mut session = AuthSession::load(&store);
        assert!(session.is_logged_in());

        session.logout(&store).unwrap();
        assert!(!session.is_logged_in());
        assert_eq!(store.inner.get(USER_NAME_KEY).as_deref(), Some("maria"));
        assert!(!AuthSession::load(&store).is_logged_in());
    }
}
