//! Invoices

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::impl_entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Unpaid,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub parent_id: String,
    pub child_id: String,
    pub description: String,
    /// Amount in cents to avoid float rounding
    pub amount_cents: u64,
    pub issued_on: NaiveDate,
    pub due_on: NaiveDate,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub paid_on: Option<NaiveDate>,
}

impl_entity!(Invoice, "invoice");

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_paid() && self.due_on < today
    }
}

/// "$1,234.50" style rendering for cent amounts
pub fn format_cents(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.{:02}", grouped, cents % 100)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub parent_id: String,
    pub child_id: String,
    pub description: String,
    pub amount_cents: u64,
    pub due_on: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(4500), "$45.00");
        assert_eq!(format_cents(123456), "$1,234.56");
        assert_eq!(format_cents(100000000), "$1,000,000.00");
    }
}
