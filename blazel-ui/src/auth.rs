//! Session token handling and the current-user probe.
//!
//! The backend issues a bearer token on OAuth redirect-back (`?token=`
//! in the query string); the client keeps it in localStorage and
//! attaches it to every authenticated call. Being signed out is a value
//! here, not an error: a missing token resolves to `None` without any
//! network traffic.

use dioxus::prelude::*;
use gloo_net::http::Request;
use shared_types::User;

use crate::api::{api_base, describe_http_error};

// ── Token store ───────────────────────────────────────────────────────────────

const TOKEN_KEY: &str = "blazel_token";

/// Narrow interface over wherever the session token lives, so storage
/// backends can be substituted (tests use an in-memory one).
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Browser localStorage under a fixed key
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

pub fn stored_token() -> Option<String> {
    LocalTokenStore.get()
}

pub fn store_token(token: &str) {
    LocalTokenStore.set(token);
}

pub fn clear_token() {
    LocalTokenStore.clear();
}

pub fn has_session(store: &dyn TokenStore) -> bool {
    store.get().is_some()
}

pub fn is_authenticated() -> bool {
    has_session(&LocalTokenStore)
}

// ── Auth state ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Default)]
pub enum AuthState {
    /// No session known yet (haven't checked /auth/me).
    #[default]
    Unknown,
    /// Confirmed no session.
    Unauthenticated,
    /// Session exists.
    Authenticated(User),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

// ── Redirect-back bootstrap ───────────────────────────────────────────────────

/// Handle an OAuth redirect-back: persist `?token=`, pick up `?error=`,
/// and strip both from the visible URL. Returns the login error message
/// when the redirect carried one.
pub fn consume_auth_redirect() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let search = location.search().ok()?;
    if search.is_empty() {
        return None;
    }

    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let token = params.get("token");
    let error = params.get("error");
    if token.is_none() && error.is_none() {
        return None;
    }

    if let Some(token) = token {
        store_token(&token);
    }

    if let (Ok(pathname), Ok(history)) = (location.pathname(), window.history()) {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&pathname));
    }

    error.map(|e| format!("Login error: {e}"))
}

// ── Current-user probe ────────────────────────────────────────────────────────

/// Resolve the current user through the given token store.
///
/// No token short-circuits to `Ok(None)` without a request; a 401 means
/// the token went stale, so it is cleared and the result is likewise
/// `Ok(None)`.
pub async fn fetch_current_user(store: &dyn TokenStore) -> Result<Option<User>, String> {
    let Some(token) = store.get() else {
        return Ok(None);
    };

    let url = format!("{}/auth/me", api_base());
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if response.status() == 401 {
        store.clear();
        return Ok(None);
    }

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let user: User = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(Some(user))
}

/// Probe /auth/me once and update the signal.
/// Called at startup from the session shell so the rest of the app knows
/// whether there's already a session without blocking render.
pub async fn probe_session(mut auth: Signal<AuthState>) {
    match fetch_current_user(&LocalTokenStore).await {
        Ok(Some(user)) => auth.set(AuthState::Authenticated(user)),
        Ok(None) => auth.set(AuthState::Unauthenticated),
        Err(e) => {
            dioxus_logger::tracing::warn!("Session probe failed: {}", e);
            auth.set(AuthState::Unauthenticated);
        }
    }
}

// ── Login / logout ────────────────────────────────────────────────────────────

/// Full-page redirect into the backend's OAuth flow
pub fn login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&format!("{}/auth/login", api_base()));
    }
}

/// Drop the session and reload so every view resets
pub fn logout() {
    clear_token();
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryTokenStore(RefCell<Option<String>>);

    impl TokenStore for MemoryTokenStore {
        fn get(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn set(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    #[test]
    fn missing_token_resolves_signed_out_without_network() {
        let store = MemoryTokenStore::default();
        // The future must complete on its first poll, i.e. before any
        // request could have been issued
        let result = fetch_current_user(&store).now_or_never();
        assert_eq!(result, Some(Ok(None)));
    }

    #[test]
    fn clearing_the_token_signs_out() {
        let store = MemoryTokenStore::default();
        store.set("tok-123");
        assert!(has_session(&store));
        assert_eq!(store.get().as_deref(), Some("tok-123"));

        store.clear();
        assert!(!has_session(&store));
        assert_eq!(fetch_current_user(&store).now_or_never(), Some(Ok(None)));
    }

    #[test]
    fn storing_a_token_replaces_the_previous_one() {
        let store = MemoryTokenStore::default();
        store.set("first");
        store.set("second");
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn auth_state_reports_authentication() {
        assert!(!AuthState::Unknown.is_authenticated());
        assert!(!AuthState::Unauthenticated.is_authenticated());
        assert!(AuthState::Authenticated(User {
            id: "u1".to_string(),
            email: "me@blazel.io".to_string(),
            first_name: None,
            last_name: None,
            customer_id: Some("c1".to_string()),
            is_admin: false,
        })
        .is_authenticated());
    }
}
