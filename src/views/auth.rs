//! Login / Register / Logout
//!
//! The only writers of the session store. Login stores the token and, when
//! the response carries one, the profile name; register takes the username
//! from the submitted form since its response only returns the token.

use crate::api::{ApiClient, RegisterRequest};
use crate::session::SessionManager;

/// Controller for the authentication view.
#[derive(Debug, Default)]
pub struct AuthView {
    pub error: Option<String>,
}

impl AuthView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in and persist the session. Success requires only `accessToken`
    /// in the response (the later contract; see DESIGN.md).
    pub async fn login(
        &mut self,
        api: &ApiClient,
        session: &SessionManager,
        email: &str,
        password: &str,
    ) -> bool {
        self.error = None;

        let auth = match api.login(email, password).await {
            Ok(auth) => auth,
            Err(e) => {
                tracing::error!(error = %e, "Login failed");
                self.error =
                    Some("Login failed. Please check your credentials and try again.".to_string());
                return false;
            }
        };

        if let Err(e) = session.set_session(&auth.access_token, auth.name.as_deref()) {
            tracing::error!(error = %e, "Failed to persist session");
            self.error = Some("An error occurred. Please try again later.".to_string());
            return false;
        }

        true
    }

    /// Register a new account and persist the session.
    pub async fn register(
        &mut self,
        api: &ApiClient,
        session: &SessionManager,
        request: &RegisterRequest,
    ) -> bool {
        self.error = None;

        let auth = match api.register(request).await {
            Ok(auth) => auth,
            Err(e) => {
                tracing::error!(error = %e, "Registration failed");
                self.error = Some("Registration failed. Please try again.".to_string());
                return false;
            }
        };

        // The register response carries no name; fall back to the form value.
        let name = auth.name.as_deref().unwrap_or(&request.name);
        if let Err(e) = session.set_session(&auth.access_token, Some(name)) {
            tracing::error!(error = %e, "Failed to persist session");
            self.error = Some("An error occurred. Please try again later.".to_string());
            return false;
        }

        true
    }

    /// Clear both persisted entries and return to the unauthenticated state.
    pub fn logout(&mut self, session: &SessionManager) -> bool {
        self.error = None;

        if let Err(e) = session.clear_session() {
            tracing::error!(error = %e, "Failed to clear session");
            self.error = Some("An error occurred while logging out.".to_string());
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    #[test]
    fn test_logout_clears_token_and_name() {
        let session = SessionManager::new(Box::<MemoryStore>::default()).unwrap();
        session.set_session("t1", Some("alice")).unwrap();

        let mut view = AuthView::new();
        assert!(view.logout(&session));
        assert!(view.error.is_none());
        assert_eq!(session.token(), None);
        assert_eq!(session.username(), None);
    }

    #[tokio::test]
    async fn test_failed_login_sets_error_and_no_session() {
        use crate::api::GatewayConfig;
        use std::sync::Arc;

        let session = Arc::new(SessionManager::new(Box::<MemoryStore>::default()).unwrap());
        let api = ApiClient::new(
            GatewayConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                request_timeout_secs: 1,
            },
            session.clone(),
        );

        let mut view = AuthView::new();
        let ok = view.login(&api, &session, "a@example.com", "pw").await;

        assert!(!ok);
        assert_eq!(
            view.error.as_deref(),
            Some("Login failed. Please check your credentials and try again.")
        );
        assert!(!session.is_logged_in());
    }
}
