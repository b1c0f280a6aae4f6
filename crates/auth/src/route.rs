//! Route guard: who may enter which destination.
//!
//! The check is synchronous and runs before any destination content is
//! produced, so protected content is never observable prior to a redirect.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::session::Session;

/// Navigable destination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Landing,
    Login,
    Register,
    RegisterMerchant,
    MerchantDashboard,
    AdminDashboard,
    ClerkDashboard,
}

impl Destination {
    /// The role required to enter, or `None` for public destinations.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Destination::Landing
            | Destination::Login
            | Destination::Register
            | Destination::RegisterMerchant => None,
            Destination::MerchantDashboard => Some(Role::Merchant),
            Destination::AdminDashboard => Some(Role::Admin),
            Destination::ClerkDashboard => Some(Role::Clerk),
        }
    }

    /// The dashboard a role lands on after login.
    pub fn home_for(role: Role) -> Destination {
        match role {
            Role::Merchant => Destination::MerchantDashboard,
            Role::Admin => Destination::AdminDashboard,
            Role::Clerk => Destination::ClerkDashboard,
        }
    }
}

/// Result of a guard decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Allow,
    /// Entry denied; navigate here instead.
    Redirect(Destination),
}

/// Whether the session may enter the destination.
///
/// Public destinations always pass. Protected destinations require a
/// present token AND a role matching the destination's required role.
pub fn can_enter(destination: Destination, session: &Session) -> bool {
    match destination.required_role() {
        None => true,
        Some(required) => session.is_authenticated() && session.role == Some(required),
    }
}

/// Guard a navigation; denial redirects to the login destination.
pub fn guard(destination: Destination, session: &Session) -> RouteOutcome {
    if can_enter(destination, session) {
        RouteOutcome::Allow
    } else {
        RouteOutcome::Redirect(Destination::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DASHBOARDS: [Destination; 3] = [
        Destination::MerchantDashboard,
        Destination::AdminDashboard,
        Destination::ClerkDashboard,
    ];

    #[test]
    fn missing_token_denies_every_protected_destination() {
        // Even a session that somehow kept a role must be refused without
        // a token.
        for role in [None, Some(Role::Merchant), Some(Role::Admin), Some(Role::Clerk)] {
            let session = Session { token: None, role };
            for destination in DASHBOARDS {
                assert!(!can_enter(destination, &session));
                assert_eq!(
                    guard(destination, &session),
                    RouteOutcome::Redirect(Destination::Login)
                );
            }
        }
    }

    #[test]
    fn role_mismatch_is_denied() {
        let session = Session::authenticated("tok", Role::Clerk);
        assert!(!can_enter(Destination::MerchantDashboard, &session));
        assert!(!can_enter(Destination::AdminDashboard, &session));
        assert!(can_enter(Destination::ClerkDashboard, &session));
    }

    #[test]
    fn public_destinations_always_pass() {
        let anonymous = Session::anonymous();
        for destination in [
            Destination::Landing,
            Destination::Login,
            Destination::Register,
            Destination::RegisterMerchant,
        ] {
            assert!(can_enter(destination, &anonymous));
        }
    }

    #[test]
    fn each_role_enters_exactly_its_own_dashboard() {
        for role in Role::ALL {
            let session = Session::authenticated("tok", role);
            for destination in DASHBOARDS {
                let expected = destination == Destination::home_for(role);
                assert_eq!(can_enter(destination, &session), expected);
            }
        }
    }
}
