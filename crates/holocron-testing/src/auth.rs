//! Auth helpers for integration tests.
//!
//! Protected endpoints expect `Authorization: Bearer <jwt>`. `MockAuth` signs a real token
//! so requests pass the same `Identity` extractor as production.

use holocron_auth_types::token::{ACCESS_TOKEN_EXP, issue_access_token};

/// Identity injected into test requests.
pub struct MockAuth {
    pub user_id: i32,
    pub secret: String,
}

impl MockAuth {
    /// `secret` may differ from the server's to exercise signature checks.
    pub fn new(user_id: i32, secret: impl Into<String>) -> Self {
        Self {
            user_id,
            secret: secret.into(),
        }
    }

    /// Signed bearer token for this identity, e.g. for `TestRequest::authorization_bearer`.
    pub fn token(&self) -> String {
        let (token, _) = issue_access_token(self.user_id, &self.secret, ACCESS_TOKEN_EXP)
            .expect("sign test token");
        token
    }
}
