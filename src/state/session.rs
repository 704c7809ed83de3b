//! Session Resolution
//!
//! The bearer credential is the only state the client persists. Its second
//! dot-delimited segment carries base64-encoded JSON claims from which the
//! in-memory identity is decoded; the identity therefore can never be stale
//! relative to the token, and never exists without a decodable token.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::router::{self, Route};

/// Local-storage key holding the bearer credential.
pub const TOKEN_KEY: &str = "accessToken";

/// Role claimed by the credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated identity decoded from the stored credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: Role,
}

/// Claims the client reads out of the credential payload. Everything else in
/// the token is ignored.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    username: String,
    role: Role,
}

/// Why a credential could not be resolved into an identity.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("credential has no payload segment")]
    MissingPayload,
    #[error("credential payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("credential payload is not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decode the identity embedded in a credential's payload segment.
pub fn decode_identity(token: &str) -> Result<Identity, SessionError> {
    let payload = token.split('.').nth(1).ok_or(SessionError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    let claims: TokenClaims = serde_json::from_slice(&bytes)?;
    Ok(Identity {
        username: claims.username,
        role: claims.role,
    })
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored credential, if any.
pub fn stored_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

/// Persist the credential after a successful login.
pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Drop every piece of persisted client state.
pub fn clear_storage() {
    if let Some(storage) = local_storage() {
        let _ = storage.clear();
    }
}

/// Resolve the identity embedded in the stored credential.
///
/// A malformed credential clears all persisted state and forces the login
/// screen; the failure never escapes to the caller.
pub fn load_identity() -> Option<Identity> {
    let token = stored_token()?;
    match decode_identity(&token) {
        Ok(identity) => Some(identity),
        Err(err) => {
            web_sys::console::error_1(&format!("Invalid token: {}", err).into());
            clear_storage();
            router::navigate(Route::Login);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn decodes_username_and_role() {
        let token = token_with_payload(r#"{"username":"amira","role":"manager"}"#);
        let identity = decode_identity(&token).unwrap();
        assert_eq!(identity.username, "amira");
        assert_eq!(identity.role, Role::Manager);
    }

    #[test]
    fn ignores_extra_claims() {
        let token = token_with_payload(
            r#"{"token_type":"access","exp":1700000000,"user_id":7,"username":"li","role":"admin"}"#,
        );
        let identity = decode_identity(&token).unwrap();
        assert_eq!(identity.username, "li");
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn rejects_token_without_payload_segment() {
        assert!(matches!(
            decode_identity("justonechunk"),
            Err(SessionError::MissingPayload)
        ));
    }

    #[test]
    fn rejects_payload_that_is_not_base64() {
        assert!(matches!(
            decode_identity("header.!!!not-base64!!!.sig"),
            Err(SessionError::Encoding(_))
        ));
    }

    #[test]
    fn rejects_payload_that_is_not_claims_json() {
        let token = token_with_payload("plain text, no json");
        assert!(matches!(decode_identity(&token), Err(SessionError::Claims(_))));

        let token = token_with_payload(r#"{"username":"no-role-claim"}"#);
        assert!(matches!(decode_identity(&token), Err(SessionError::Claims(_))));
    }

    #[test]
    fn rejects_unknown_role() {
        let token = token_with_payload(r#"{"username":"x","role":"superuser"}"#);
        assert!(matches!(decode_identity(&token), Err(SessionError::Claims(_))));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trips_through_storage() {
        clear_storage();
        assert!(stored_token().is_none());

        store_token("aaa.bbb.ccc");
        assert_eq!(stored_token().as_deref(), Some("aaa.bbb.ccc"));

        clear_storage();
        assert!(stored_token().is_none());
    }
}
