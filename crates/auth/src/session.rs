//! Session value type.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The current authentication state of the client.
///
/// A session with an absent token is never authorized for anything; the
/// route guard and the permission checks both refuse it. Exactly one
/// session exists per running client (owned by the session store).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token, absent when logged out.
    pub token: Option<String>,
    /// Role granted at login, absent when logged out.
    pub role: Option<Role>,
}

impl Session {
    /// A logged-out session (no token, no role).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    /// True only when a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_is_not_authenticated() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.token, None);
        assert_eq!(session.role, None);
    }

    #[test]
    fn authenticated_session_carries_token_and_role() {
        let session = Session::authenticated("tok-123", Role::Admin);
        assert!(session.is_authenticated());
        assert_eq!(session.role, Some(Role::Admin));
    }
}
