use axum::http::{header, HeaderMap};
use std::fmt;

pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Identity of the person using the complaint module.
///
/// Passed explicitly into the report engine and the tab layout. The role only
/// selects which views are offered; it is not an access check.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: String,
    pub token: String,
}

impl Session {
    pub fn new(
        username: impl Into<String>,
        role: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
            token: token.into(),
        }
    }

    /// Reads the session forwarded by the auth layer in front of the service:
    /// `Authorization: Token <t>`, `X-User-Name` and `X-User-Role`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let text = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.trim().to_string())
                .unwrap_or_default()
        };

        let authorization = text(header::AUTHORIZATION.as_str());
        let token = authorization
            .strip_prefix("Token ")
            .unwrap_or(&authorization)
            .trim()
            .to_string();

        Self {
            username: text(USER_NAME_HEADER),
            role: text(USER_ROLE_HEADER),
            token,
        }
    }

    /// Value sent in the `Authorization` header of the complaint source.
    pub fn authorization(&self) -> String {
        format!("Token {}", self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("role", &self.role)
            .field("token", &"<redacted>")
            .finish()
    }
}
