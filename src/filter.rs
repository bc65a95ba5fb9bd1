//! List Filters
//!
//! Search and status tabs shared by the table pages.

use chrono::NaiveDate;

use crate::models::{Assignment, AssignmentStatus, Invoice};

/// Case-insensitive, trimmed substring match against any of `fields`.
/// A blank query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignmentFilter {
    #[default]
    All,
    Pending,
    Submitted,
    Graded,
    Overdue,
}

impl AssignmentFilter {
    pub const ALL: [AssignmentFilter; 5] = [
        AssignmentFilter::All,
        AssignmentFilter::Pending,
        AssignmentFilter::Submitted,
        AssignmentFilter::Graded,
        AssignmentFilter::Overdue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssignmentFilter::All => "All",
            AssignmentFilter::Pending => "Pending",
            AssignmentFilter::Submitted => "Submitted",
            AssignmentFilter::Graded => "Graded",
            AssignmentFilter::Overdue => "Overdue",
        }
    }

    pub fn matches(&self, assignment: &Assignment, today: NaiveDate) -> bool {
        match self {
            AssignmentFilter::All => true,
            AssignmentFilter::Pending => assignment.status == AssignmentStatus::Pending,
            AssignmentFilter::Submitted => assignment.status == AssignmentStatus::Submitted,
            AssignmentFilter::Graded => assignment.status == AssignmentStatus::Graded,
            AssignmentFilter::Overdue => assignment.is_overdue(today),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvoiceFilter {
    #[default]
    All,
    Unpaid,
    Overdue,
    Paid,
}

impl InvoiceFilter {
    pub const ALL: [InvoiceFilter; 4] = [
        InvoiceFilter::All,
        InvoiceFilter::Unpaid,
        InvoiceFilter::Overdue,
        InvoiceFilter::Paid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceFilter::All => "All",
            InvoiceFilter::Unpaid => "Unpaid",
            InvoiceFilter::Overdue => "Overdue",
            InvoiceFilter::Paid => "Paid",
        }
    }

    pub fn matches(&self, invoice: &Invoice, today: NaiveDate) -> bool {
        match self {
            InvoiceFilter::All => true,
            InvoiceFilter::Unpaid => !invoice.is_paid(),
            InvoiceFilter::Overdue => invoice.is_overdue(today),
            InvoiceFilter::Paid => invoice.is_paid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_data::fixtures;

    #[test]
    fn test_matches_query() {
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("   ", &[]));
        assert!(matches_query("  MAYA ", &["Maya Chen", "maya@brightpath.test"]));
        assert!(matches_query("brightpath", &["Maya Chen", "maya@brightpath.test"]));
        assert!(!matches_query("zzz", &["Maya Chen"]));
    }

    #[test]
    fn test_assignment_filters_partition_statuses() {
        let today = fixtures::fixture_today();
        let assignments = fixtures::assignments();
        let by_status: usize = [AssignmentFilter::Pending, AssignmentFilter::Submitted, AssignmentFilter::Graded]
            .iter()
            .map(|f| assignments.iter().filter(|a| f.matches(a, today)).count())
            .sum();
        assert_eq!(by_status, assignments.len());
        assert!(assignments
            .iter()
            .filter(|a| AssignmentFilter::Overdue.matches(a, today))
            .all(|a| a.status == AssignmentStatus::Pending));
    }

    #[test]
    fn test_invoice_filters() {
        let today = fixtures::fixture_today();
        let invoices = fixtures::invoices();
        let unpaid = invoices.iter().filter(|i| InvoiceFilter::Unpaid.matches(i, today)).count();
        let paid = invoices.iter().filter(|i| InvoiceFilter::Paid.matches(i, today)).count();
        assert_eq!(unpaid + paid, invoices.len());
        assert!(invoices
            .iter()
            .filter(|i| InvoiceFilter::Overdue.matches(i, today))
            .all(|i| !i.is_paid()));
    }
}
