//! Sales transactions.

use myduka_auth::{Action, ResourceKind, Role, is_allowed};
use myduka_client::Gateway;
use myduka_client::api::{NewTransaction, Transaction};
use myduka_core::TransactionId;

use super::{ViewStatus, permitted};

#[derive(Debug, Clone, Default)]
pub struct TransactionsView {
    pub rows: Vec<Transaction>,
    pub status: ViewStatus,
}

impl TransactionsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clerks see the sale form.
    pub fn can_record(role: Role) -> bool {
        is_allowed(role, ResourceKind::Transaction, Action::Create)
    }

    /// Merchants see the delete button.
    pub fn can_delete(role: Role) -> bool {
        is_allowed(role, ResourceKind::Transaction, Action::Delete)
    }

    pub async fn refresh(&mut self, gateway: &Gateway) {
        match gateway.list_transactions().await {
            Ok(rows) => {
                self.rows = rows;
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn record_sale(&mut self, gateway: &Gateway, transaction: NewTransaction) {
        if !permitted(gateway, ResourceKind::Transaction, Action::Create) {
            self.status.deny("record sales");
            return;
        }
        match gateway.create_transaction(&transaction).await {
            Ok(created) => {
                self.rows.push(created);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn remove(&mut self, gateway: &Gateway, id: TransactionId) {
        if !permitted(gateway, ResourceKind::Transaction, Action::Delete) {
            self.status.deny("delete transactions");
            return;
        }
        match gateway.delete_transaction(id).await {
            Ok(()) => {
                self.rows.retain(|t| t.id != id);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use myduka_client::{ClientConfig, SessionStore};

    #[test]
    fn sale_entry_is_clerk_only() {
        assert!(TransactionsView::can_record(Role::Clerk));
        assert!(!TransactionsView::can_record(Role::Admin));
        assert!(!TransactionsView::can_record(Role::Merchant));
    }

    #[tokio::test]
    async fn admin_delete_attempt_is_refused_locally() {
        let session = SessionStore::in_memory();
        session.set("tok", None, Role::Admin);
        let gateway = Gateway::new(ClientConfig::new("http://127.0.0.1:9"), session).unwrap();

        let mut view = TransactionsView::new();
        view.remove(&gateway, TransactionId::new(9)).await;
        assert_eq!(view.status.last_error(), Some("current role may not delete transactions"));
    }
}
