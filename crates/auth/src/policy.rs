//! Role policy: the authoritative (role, resource, action) table.
//!
//! Both the route guard and every dashboard view consult this table; no
//! other code is allowed to re-derive permission logic. Anything not
//! explicitly granted here is denied.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Kind of backend resource a permission applies to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Store,
    Product,
    AdminAccount,
    ClerkAccount,
    InventoryRecord,
    Transaction,
    SupplyRequest,
}

/// Action on a resource.
///
/// Inventory records distinguish two update paths because different roles
/// own them: admins settle payment status, clerks correct stock levels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    /// Generic field update (store deactivation, product edits,
    /// admin-account deactivation).
    Update,
    /// Settle/toggle payment status on an inventory record.
    UpdatePayment,
    /// Correct in-stock / spoilt counts on an inventory record.
    UpdateStock,
    Delete,
    /// Approve a pending supply request.
    Approve,
    /// Assign (or unassign) a store to an admin account.
    Assign,
    /// Send an admin invitation email.
    Invite,
}

/// Pure permission lookup. Deny-by-default: any (role, resource, action)
/// triple not matched below is refused.
pub fn is_allowed(role: Role, resource: ResourceKind, action: Action) -> bool {
    use Action::*;
    use ResourceKind::*;
    use Role::*;

    match (resource, action) {
        // Stores: merchant-owned; every dashboard embeds the list.
        (Store, Create) => role == Merchant,
        (Store, Read) => true,
        (Store, Update) => role == Merchant,
        (Store, Delete) => role == Merchant,

        // Products: merchants and admins maintain the catalog; only the
        // merchant removes entries.
        (Product, Create) => matches!(role, Merchant | Admin),
        (Product, Read) => true,
        (Product, Update) => matches!(role, Merchant | Admin),
        (Product, Delete) => role == Merchant,

        // Admin accounts: entirely merchant-controlled.
        (AdminAccount, Create) => role == Merchant,
        (AdminAccount, Read) => role == Merchant,
        (AdminAccount, Update) => role == Merchant,
        (AdminAccount, Delete) => role == Merchant,
        (AdminAccount, Assign) => role == Merchant,
        (AdminAccount, Invite) => role == Merchant,

        // Clerk accounts: admins register them; merchants can see them.
        (ClerkAccount, Create) => role == Admin,
        (ClerkAccount, Read) => matches!(role, Admin | Merchant),

        // Inventory records: clerks enter them, admins settle payment,
        // clerks correct stock, merchants may purge.
        (InventoryRecord, Create) => role == Clerk,
        (InventoryRecord, Read) => true,
        (InventoryRecord, UpdatePayment) => role == Admin,
        (InventoryRecord, UpdateStock) => role == Clerk,
        (InventoryRecord, Delete) => role == Merchant,

        // Transactions: clerks record sales; merchants may purge.
        (Transaction, Create) => role == Clerk,
        (Transaction, Read) => true,
        (Transaction, Delete) => role == Merchant,

        // Supply requests: clerk-raised, admin-approved, merchant-purged.
        (SupplyRequest, Create) => role == Clerk,
        (SupplyRequest, Read) => true,
        (SupplyRequest, Approve) => role == Admin,
        (SupplyRequest, Delete) => role == Merchant,

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_RESOURCES: [ResourceKind; 7] = [
        ResourceKind::Store,
        ResourceKind::Product,
        ResourceKind::AdminAccount,
        ResourceKind::ClerkAccount,
        ResourceKind::InventoryRecord,
        ResourceKind::Transaction,
        ResourceKind::SupplyRequest,
    ];

    const ALL_ACTIONS: [Action; 9] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::UpdatePayment,
        Action::UpdateStock,
        Action::Delete,
        Action::Approve,
        Action::Assign,
        Action::Invite,
    ];

    #[test]
    fn supply_request_approval_is_admin_only() {
        assert!(is_allowed(Role::Admin, ResourceKind::SupplyRequest, Action::Approve));
        assert!(!is_allowed(Role::Clerk, ResourceKind::SupplyRequest, Action::Approve));
        assert!(!is_allowed(Role::Merchant, ResourceKind::SupplyRequest, Action::Approve));
    }

    #[test]
    fn only_clerks_create_inventory_transactions_and_requests() {
        for resource in [
            ResourceKind::InventoryRecord,
            ResourceKind::Transaction,
            ResourceKind::SupplyRequest,
        ] {
            assert!(is_allowed(Role::Clerk, resource, Action::Create));
            assert!(!is_allowed(Role::Admin, resource, Action::Create));
            assert!(!is_allowed(Role::Merchant, resource, Action::Create));
        }
    }

    #[test]
    fn merchant_owns_destructive_actions() {
        for resource in [
            ResourceKind::Store,
            ResourceKind::Product,
            ResourceKind::InventoryRecord,
            ResourceKind::Transaction,
            ResourceKind::SupplyRequest,
        ] {
            assert!(is_allowed(Role::Merchant, resource, Action::Delete));
            assert!(!is_allowed(Role::Admin, resource, Action::Delete));
            assert!(!is_allowed(Role::Clerk, resource, Action::Delete));
        }
    }

    #[test]
    fn inventory_update_paths_split_between_admin_and_clerk() {
        assert!(is_allowed(Role::Admin, ResourceKind::InventoryRecord, Action::UpdatePayment));
        assert!(!is_allowed(Role::Clerk, ResourceKind::InventoryRecord, Action::UpdatePayment));

        assert!(is_allowed(Role::Clerk, ResourceKind::InventoryRecord, Action::UpdateStock));
        assert!(!is_allowed(Role::Admin, ResourceKind::InventoryRecord, Action::UpdateStock));
    }

    #[test]
    fn clerk_accounts_are_immutable_once_created() {
        for role in Role::ALL {
            assert!(!is_allowed(role, ResourceKind::ClerkAccount, Action::Update));
            assert!(!is_allowed(role, ResourceKind::ClerkAccount, Action::Delete));
        }
    }

    #[test]
    fn invite_is_merchant_only_and_scoped_to_admin_accounts() {
        assert!(is_allowed(Role::Merchant, ResourceKind::AdminAccount, Action::Invite));
        for resource in ALL_RESOURCES {
            if resource == ResourceKind::AdminAccount {
                continue;
            }
            for role in Role::ALL {
                assert!(!is_allowed(role, resource, Action::Invite));
            }
        }
    }

    // Enumerate the full grant set and check everything outside it is
    // denied, so a new arm can never silently widen the policy.
    #[test]
    fn deny_by_default_over_the_whole_matrix() {
        let granted: &[(Role, ResourceKind, Action)] = &[
            (Role::Merchant, ResourceKind::Store, Action::Create),
            (Role::Merchant, ResourceKind::Store, Action::Update),
            (Role::Merchant, ResourceKind::Store, Action::Delete),
            (Role::Merchant, ResourceKind::Product, Action::Create),
            (Role::Admin, ResourceKind::Product, Action::Create),
            (Role::Merchant, ResourceKind::Product, Action::Update),
            (Role::Admin, ResourceKind::Product, Action::Update),
            (Role::Merchant, ResourceKind::Product, Action::Delete),
            (Role::Merchant, ResourceKind::AdminAccount, Action::Create),
            (Role::Merchant, ResourceKind::AdminAccount, Action::Read),
            (Role::Merchant, ResourceKind::AdminAccount, Action::Update),
            (Role::Merchant, ResourceKind::AdminAccount, Action::Delete),
            (Role::Merchant, ResourceKind::AdminAccount, Action::Assign),
            (Role::Merchant, ResourceKind::AdminAccount, Action::Invite),
            (Role::Admin, ResourceKind::ClerkAccount, Action::Create),
            (Role::Admin, ResourceKind::ClerkAccount, Action::Read),
            (Role::Merchant, ResourceKind::ClerkAccount, Action::Read),
            (Role::Clerk, ResourceKind::InventoryRecord, Action::Create),
            (Role::Admin, ResourceKind::InventoryRecord, Action::UpdatePayment),
            (Role::Clerk, ResourceKind::InventoryRecord, Action::UpdateStock),
            (Role::Merchant, ResourceKind::InventoryRecord, Action::Delete),
            (Role::Clerk, ResourceKind::Transaction, Action::Create),
            (Role::Merchant, ResourceKind::Transaction, Action::Delete),
            (Role::Clerk, ResourceKind::SupplyRequest, Action::Create),
            (Role::Admin, ResourceKind::SupplyRequest, Action::Approve),
            (Role::Merchant, ResourceKind::SupplyRequest, Action::Delete),
        ];

        let universally_readable = [
            ResourceKind::Store,
            ResourceKind::Product,
            ResourceKind::InventoryRecord,
            ResourceKind::Transaction,
            ResourceKind::SupplyRequest,
        ];

        for role in Role::ALL {
            for resource in ALL_RESOURCES {
                for action in ALL_ACTIONS {
                    let expected = granted.contains(&(role, resource, action))
                        || (action == Action::Read
                            && universally_readable.contains(&resource));
                    assert_eq!(
                        is_allowed(role, resource, action),
                        expected,
                        "unexpected policy result for {role:?} {resource:?} {action:?}"
                    );
                }
            }
        }
    }
}
