//! Invoices and Payments

use tracing::info;

use super::{require_fields, MockBackend};
use crate::domain::*;
use crate::repository::Repository;

/// Most recently issued first
fn newest_first(mut invoices: Vec<Invoice>) -> Vec<Invoice> {
    invoices.sort_by(|a, b| b.issued_on.cmp(&a.issued_on).then_with(|| a.id.cmp(&b.id)));
    invoices
}

/// Sum of unpaid amounts
pub fn outstanding_cents(invoices: &[Invoice]) -> u64 {
    invoices.iter().filter(|i| !i.is_paid()).map(|i| i.amount_cents).sum()
}

impl MockBackend {
    pub async fn list_invoices(&self) -> DomainResult<Vec<Invoice>> {
        self.read_delay().await;
        Ok(newest_first(self.stores().invoices.list().await?))
    }

    pub async fn invoices_for_parent(&self, parent_id: &str) -> DomainResult<Vec<Invoice>> {
        self.read_delay().await;
        let list = self.stores().invoices.list_where(&|i: &Invoice| i.parent_id == parent_id).await?;
        Ok(newest_first(list))
    }

    pub async fn invoices_for_child(&self, child_id: &str) -> DomainResult<Vec<Invoice>> {
        self.read_delay().await;
        let list = self.stores().invoices.list_where(&|i: &Invoice| i.child_id == child_id).await?;
        Ok(newest_first(list))
    }

    pub async fn create_invoice(&self, new_invoice: &NewInvoice) -> DomainResult<Invoice> {
        self.write_delay().await;
        require_fields(&[
            ("Parent", &new_invoice.parent_id),
            ("Child", &new_invoice.child_id),
            ("Description", &new_invoice.description),
        ])?;
        if new_invoice.amount_cents == 0 {
            return Err(DomainError::InvalidInput("Amount must be positive".to_string()));
        }
        let due_on = new_invoice
            .due_on
            .ok_or_else(|| DomainError::InvalidInput("Due date required".to_string()))?;
        let child = self
            .stores()
            .children
            .find_by_id(&new_invoice.child_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Child", new_invoice.child_id.as_str()))?;
        if child.parent_id != new_invoice.parent_id {
            return Err(DomainError::InvalidInput(format!("{} is not this parent's child", child.name)));
        }

        let invoice = Invoice {
            id: String::new(),
            parent_id: new_invoice.parent_id.clone(),
            child_id: child.id,
            description: new_invoice.description.trim().to_string(),
            amount_cents: new_invoice.amount_cents,
            issued_on: self.today(),
            due_on,
            status: InvoiceStatus::Unpaid,
            paid_on: None,
        };
        let created = self.stores().invoices.create(&invoice).await?;
        self.notify(
            &created.parent_id,
            NotificationKind::Alert,
            "New invoice",
            &format!("{} ({}) is due {}.", created.description, format_cents(created.amount_cents), due_on),
        )
        .await?;
        Ok(created)
    }

    pub async fn pay_invoice(&self, id: &str) -> DomainResult<Invoice> {
        self.write_delay().await;
        let today = self.today();
        let paid = self.stores().invoices.modify(id, |invoice| {
            if invoice.is_paid() {
                return Err(DomainError::Conflict("invoice is already paid".to_string()));
            }
            invoice.status = InvoiceStatus::Paid;
            invoice.paid_on = Some(today);
            Ok(())
        })?;
        info!(invoice_id = %id, amount_cents = paid.amount_cents, "invoice paid");
        Ok(paid)
    }
}
