//! Admin and clerk account endpoints.
//!
//! Both account kinds carry a [`StoreAssignment`]; the backend's `0`
//! sentinel for "unassigned" never leaks past the wire types.

use serde::{Deserialize, Serialize};

use myduka_core::{AdminId, ClerkId, StoreAssignment};

use crate::error::ApiError;
use crate::gateway::{Gateway, Method};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub id: AdminId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub store_id: StoreAssignment,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAdminAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub store_id: StoreAssignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClerkAccount {
    pub id: ClerkId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub store_id: StoreAssignment,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewClerkAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub store_id: StoreAssignment,
}

impl Gateway {
    pub async fn list_admins(&self) -> Result<Vec<AdminAccount>, ApiError> {
        self.call_decoded(Method::GET, "/api/admins", None).await
    }

    pub async fn create_admin(&self, admin: &NewAdminAccount) -> Result<AdminAccount, ApiError> {
        let body = Self::encode(admin)?;
        self.call_decoded(Method::POST, "/api/admins", Some(&body))
            .await
    }

    pub async fn deactivate_admin(&self, id: AdminId) -> Result<(), ApiError> {
        let body = serde_json::json!({ "is_active": false });
        self.call(Method::PUT, &format!("/api/admins/{id}"), Some(&body))
            .await?;
        Ok(())
    }

    /// Assign or unassign a store; unassignment writes the backend's `0`
    /// sentinel.
    pub async fn assign_admin_store(
        &self,
        id: AdminId,
        assignment: StoreAssignment,
    ) -> Result<(), ApiError> {
        let body = serde_json::json!({ "store_id": assignment.as_i64() });
        self.call(Method::PUT, &format!("/api/admins/{id}"), Some(&body))
            .await?;
        Ok(())
    }

    pub async fn delete_admin(&self, id: AdminId) -> Result<(), ApiError> {
        self.call(Method::DELETE, &format!("/api/admins/{id}"), None)
            .await?;
        Ok(())
    }

    pub async fn list_clerks(&self) -> Result<Vec<ClerkAccount>, ApiError> {
        self.call_decoded(Method::GET, "/api/clerk", None).await
    }

    /// Clerk accounts are registered through their own endpoint (admins
    /// do this; there is no clerk self-service signup).
    pub async fn register_clerk(&self, clerk: &NewClerkAccount) -> Result<ClerkAccount, ApiError> {
        let body = Self::encode(clerk)?;
        self.call_decoded(Method::POST, "/api/clerk/register", Some(&body))
            .await
    }
}
