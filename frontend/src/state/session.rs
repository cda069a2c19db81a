use crate::{api::Employee, utils::storage as storage_utils};
use leptos::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

const EMPLOYEE_PROFILE_KEY: &str = "employee_profile";

/// Stored in place of a token when login succeeds without one being issued.
pub const LOCAL_SESSION_MARKER: &str = "local-session";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn token_key(self) -> &'static str {
        match self {
            Role::Admin => "admin_token",
            Role::Employee => "employee_token",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
        }
    }
}

/// Persisted key/value storage backing the session tokens.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        storage_utils::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        storage_utils::local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = storage_utils::local_storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("failed to remove {} from storage", key);
            }
        }
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Role-scoped view over the persisted tokens. Written only by login and
/// logout; everything else reads.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Default for Session {
    fn default() -> Self {
        // Host builds (SSR tests) have no window to read storage from.
        if cfg!(target_arch = "wasm32") {
            Self::browser()
        } else {
            Self::in_memory()
        }
    }
}

impl Session {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserSessionStore))
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemorySessionStore::default()))
    }

    pub fn token(&self, role: Role) -> Option<String> {
        self.store
            .get(role.token_key())
            .filter(|token| !token.trim().is_empty())
    }

    /// Token suitable for an `Authorization` header; the local marker is not.
    pub fn bearer_token(&self, role: Role) -> Option<String> {
        self.token(role).filter(|token| token != LOCAL_SESSION_MARKER)
    }

    pub fn is_active(&self, role: Role) -> bool {
        self.token(role).is_some()
    }

    pub fn begin(&self, role: Role, token: &str) -> Result<(), String> {
        self.store.set(role.token_key(), token)
    }

    pub fn end(&self, role: Role) {
        self.store.remove(role.token_key());
        if role == Role::Employee {
            self.store.remove(EMPLOYEE_PROFILE_KEY);
        }
    }

    pub fn remember_employee(&self, employee: &Employee) -> Result<(), String> {
        let raw = serde_json::to_string(employee).map_err(|e| e.to_string())?;
        self.store.set(EMPLOYEE_PROFILE_KEY, &raw)
    }

    pub fn employee_profile(&self) -> Option<Employee> {
        self.store
            .get(EMPLOYEE_PROFILE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }
}

pub fn provide_session(session: Session) {
    provide_context(session);
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee {
            id: 7,
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
        }
    }

    #[test]
    fn tokens_are_scoped_by_role() {
        let session = Session::in_memory();
        session.begin(Role::Admin, "admin-token").unwrap();

        assert_eq!(session.token(Role::Admin).as_deref(), Some("admin-token"));
        assert!(!session.is_active(Role::Employee));
    }

    #[test]
    fn blank_token_counts_as_absent() {
        let session = Session::in_memory();
        session.begin(Role::Employee, "   ").unwrap();
        assert!(session.token(Role::Employee).is_none());
    }

    #[test]
    fn ending_employee_session_forgets_profile_only() {
        let session = Session::in_memory();
        session.begin(Role::Admin, "a").unwrap();
        session.begin(Role::Employee, "e").unwrap();
        session.remember_employee(&employee()).unwrap();
        assert_eq!(session.employee_profile(), Some(employee()));

        session.end(Role::Employee);

        assert!(session.employee_profile().is_none());
        assert!(!session.is_active(Role::Employee));
        assert!(session.is_active(Role::Admin));
    }

    #[test]
    fn local_marker_keeps_session_active_without_bearer() {
        let session = Session::in_memory();
        session.begin(Role::Admin, LOCAL_SESSION_MARKER).unwrap();
        assert!(session.is_active(Role::Admin));
        assert!(session.bearer_token(Role::Admin).is_none());
    }

    #[test]
    fn use_session_falls_back_without_context() {
        let runtime = create_runtime();
        let session = use_session();
        assert!(!session.is_active(Role::Admin));
        runtime.dispose();
    }
}
