//! Auth endpoints: login and register.

use super::dto::{AuthResponse, LoginRequest, RegisterRequest};
use super::{ApiClient, ApiResult};

impl ApiClient {
    /// POST /auth/login. A response without `accessToken` fails the schema
    /// parse; `name` is optional (see DESIGN.md).
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self.http.post(self.url("/auth/login")).json(&body);
        self.send_json(request, "logging in").await
    }

    /// POST /auth/register. The response carries only the token; the
    /// username is known from the submitted form.
    pub async fn register(&self, payload: &RegisterRequest) -> ApiResult<AuthResponse> {
        let request = self.http.post(self.url("/auth/register")).json(payload);
        self.send_json(request, "registering").await
    }
}
