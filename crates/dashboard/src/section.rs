//! Dashboard sections per role (the sidebar contents).

use serde::{Deserialize, Serialize};

use myduka_auth::Role;

/// A dashboard sidebar entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overview,
    Stores,
    Products,
    Admins,
    Clerks,
    Inventory,
    Transactions,
    SupplyRequests,
    Reports,
    Profile,
}

/// The sections a role's dashboard shows, in sidebar order.
///
/// This governs visibility only; each view still consults the role
/// policy before exposing any mutating control within a section.
pub fn sections_for(role: Role) -> &'static [Section] {
    match role {
        Role::Merchant => &[
            Section::Overview,
            Section::Stores,
            Section::Products,
            Section::Admins,
            Section::Clerks,
            Section::Inventory,
            Section::Transactions,
            Section::SupplyRequests,
            Section::Reports,
            Section::Profile,
        ],
        Role::Admin => &[
            Section::Overview,
            Section::Products,
            Section::Clerks,
            Section::Inventory,
            Section::Transactions,
            Section::SupplyRequests,
            Section::Reports,
            Section::Profile,
        ],
        Role::Clerk => &[
            Section::Overview,
            Section::Inventory,
            Section::Transactions,
            Section::SupplyRequests,
            Section::Profile,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_merchant_sees_store_and_admin_management() {
        assert!(sections_for(Role::Merchant).contains(&Section::Stores));
        assert!(sections_for(Role::Merchant).contains(&Section::Admins));

        for role in [Role::Admin, Role::Clerk] {
            assert!(!sections_for(role).contains(&Section::Stores));
            assert!(!sections_for(role).contains(&Section::Admins));
        }
    }

    #[test]
    fn clerks_have_no_reports_or_catalog_section() {
        let clerk = sections_for(Role::Clerk);
        assert!(!clerk.contains(&Section::Reports));
        assert!(!clerk.contains(&Section::Products));
        assert!(clerk.contains(&Section::Inventory));
    }

    #[test]
    fn every_dashboard_opens_with_an_overview() {
        for role in Role::ALL {
            assert_eq!(sections_for(role)[0], Section::Overview);
        }
    }
}
