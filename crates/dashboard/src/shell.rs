//! Application shell: login/logout flows and navigation.

use myduka_auth::{
    Action, Destination, ResourceKind, Role, RouteOutcome, guard, is_allowed,
};
use myduka_client::api::Credentials;
use myduka_client::{ClientConfig, Gateway, SessionStore};

/// Owns the gateway (and through it, the session store) and drives the
/// flows that live outside any one section: login, logout, navigation,
/// and the merchant's admin invitation.
#[derive(Debug, Clone)]
pub struct AppShell {
    gateway: Gateway,
}

impl AppShell {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Process entry point: set up tracing, reopen the persisted
    /// session, and build a gateway from the environment config.
    pub fn bootstrap() -> anyhow::Result<Self> {
        myduka_observability::init();
        let session = SessionStore::open()?;
        let gateway = Gateway::new(ClientConfig::from_env(), session)?;
        Ok(Self::new(gateway))
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    fn session(&self) -> &SessionStore {
        self.gateway.session()
    }

    /// Authenticate and install the session. On success returns the
    /// dashboard the role lands on; on failure a displayable message.
    pub async fn login(&self, credentials: &Credentials) -> Result<Destination, String> {
        match self.gateway.login(credentials).await {
            Ok(response) => {
                self.session().set(
                    response.access_token,
                    Some(response.refresh_token),
                    response.user_type,
                );
                tracing::info!(role = %response.user_type, "logged in");
                Ok(Destination::home_for(response.user_type))
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                Err(err.message)
            }
        }
    }

    /// Destroy the session. Always lands on login.
    pub fn logout(&self) -> Destination {
        self.session().clear();
        tracing::info!("logged out");
        Destination::Login
    }

    /// Guard a navigation. Runs synchronously before any destination
    /// content is produced; denial carries the redirect target.
    pub fn navigate(&self, destination: Destination) -> RouteOutcome {
        guard(destination, &self.session().get())
    }

    /// Whether the current role may invite admins (controls the sidebar
    /// entry's visibility).
    pub fn can_invite_admin(&self) -> bool {
        self.current_role()
            .is_some_and(|role| is_allowed(role, ResourceKind::AdminAccount, Action::Invite))
    }

    /// Merchant-only: send an admin invitation, returning the link to
    /// show. Refused locally for other roles.
    pub async fn invite_admin(&self, email: &str) -> Result<String, String> {
        if !self.can_invite_admin() {
            return Err("only a merchant may invite admins".to_string());
        }
        match self.gateway.invite_admin(email).await {
            Ok(response) => Ok(response.invitation_link),
            Err(err) => {
                if err.is_unauthenticated() {
                    self.session().clear();
                }
                Err(err.message)
            }
        }
    }

    fn current_role(&self) -> Option<Role> {
        self.session().get().role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on this port; reaching it would surface a network
    // error, so policy refusals prove no call was attempted.
    fn offline_shell(session: SessionStore) -> AppShell {
        let gateway = Gateway::new(ClientConfig::new("http://127.0.0.1:9"), session).unwrap();
        AppShell::new(gateway)
    }

    #[test]
    fn logout_clears_the_session_and_redirects_to_login() {
        let session = SessionStore::in_memory();
        session.set("tok", None, Role::Merchant);
        let shell = offline_shell(session);

        assert_eq!(shell.logout(), Destination::Login);
        assert!(!shell.gateway().session().get().is_authenticated());
    }

    #[test]
    fn navigation_is_guarded_by_role() {
        let session = SessionStore::in_memory();
        session.set("tok", None, Role::Clerk);
        let shell = offline_shell(session);

        assert_eq!(
            shell.navigate(Destination::ClerkDashboard),
            RouteOutcome::Allow
        );
        assert_eq!(
            shell.navigate(Destination::MerchantDashboard),
            RouteOutcome::Redirect(Destination::Login)
        );
    }

    #[test]
    fn invite_admin_control_is_merchant_only() {
        let merchant = SessionStore::in_memory();
        merchant.set("tok", None, Role::Merchant);
        assert!(offline_shell(merchant).can_invite_admin());

        let admin = SessionStore::in_memory();
        admin.set("tok", None, Role::Admin);
        assert!(!offline_shell(admin).can_invite_admin());

        assert!(!offline_shell(SessionStore::in_memory()).can_invite_admin());
    }

    #[tokio::test]
    async fn invite_admin_is_refused_locally_for_non_merchants() {
        let session = SessionStore::in_memory();
        session.set("tok", None, Role::Clerk);
        let shell = offline_shell(session);

        let err = shell.invite_admin("new@duka.example").await.unwrap_err();
        assert_eq!(err, "only a merchant may invite admins");
    }
}
