//! Current-user profile endpoint.

use serde::{Deserialize, Serialize};

use myduka_core::StoreId;

use crate::error::ApiError;
use crate::gateway::{Gateway, Method};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    /// Present only for store-bound accounts (admins/clerks).
    #[serde(default)]
    pub store_id: Option<StoreId>,
    #[serde(default)]
    pub store_name: Option<String>,
}

impl Gateway {
    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.call_decoded(Method::GET, "/api/profile", None).await
    }
}
