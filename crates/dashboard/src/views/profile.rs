//! Current-user profile. Read-only.

use myduka_client::Gateway;
use myduka_client::api::Profile;

use super::ViewStatus;

#[derive(Debug, Clone, Default)]
pub struct ProfileView {
    pub profile: Option<Profile>,
    pub status: ViewStatus,
}

impl ProfileView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, gateway: &Gateway) {
        match gateway.fetch_profile().await {
            Ok(profile) => {
                self.profile = Some(profile);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }
}
