//! Auth endpoints: login, registration flows, admin invitation.

use serde::{Deserialize, Serialize};

use myduka_auth::Role;

use crate::error::ApiError;
use crate::gateway::{Gateway, Method};

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login payload; exactly the triple the session persists.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user_type: Role,
}

/// Invited-admin registration; `token` is the invitation token from the
/// emailed link.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Self-service merchant registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterMerchant {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InviteAdminResponse {
    pub invitation_link: String,
}

impl Gateway {
    /// Authenticate. Public endpoint; does not touch the session store —
    /// the caller installs the returned triple.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body = Self::encode(credentials)?;
        self.call_decoded(Method::POST, "/api/auth/login", Some(&body))
            .await
    }

    /// Register an invited admin account. Public; session-free.
    pub async fn register_admin(&self, registration: &RegisterAdmin) -> Result<(), ApiError> {
        let body = Self::encode(registration)?;
        self.call(Method::POST, "/api/auth/register", Some(&body))
            .await?;
        Ok(())
    }

    /// Register a new merchant account. Public; session-free.
    pub async fn register_merchant(
        &self,
        registration: &RegisterMerchant,
    ) -> Result<(), ApiError> {
        let body = Self::encode(registration)?;
        self.call(Method::POST, "/api/auth/register-merchant", Some(&body))
            .await?;
        Ok(())
    }

    /// Send an admin invitation (merchant-only per policy).
    pub async fn invite_admin(&self, email: &str) -> Result<InviteAdminResponse, ApiError> {
        let body = serde_json::json!({ "email": email });
        self.call_decoded(Method::POST, "/api/auth/invite-admin", Some(&body))
            .await
    }
}
