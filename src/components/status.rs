//! Small status widgets: badges, empty and loading placeholders

use leptos::prelude::*;

use crate::models::{AccountStatus, AssignmentStatus, BookingStatus, ClassStatus, InvoiceStatus};

/// Colored pill, `tone` is one of "ok", "warn", "bad", "muted", "info"
#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: &'static str) -> impl IntoView {
    view! { <span class=format!("status-badge status-{}", tone)>{label}</span> }
}

pub fn assignment_tone(status: AssignmentStatus, overdue: bool) -> &'static str {
    match status {
        AssignmentStatus::Pending if overdue => "bad",
        AssignmentStatus::Pending => "warn",
        AssignmentStatus::Submitted => "info",
        AssignmentStatus::Graded => "ok",
    }
}

pub fn class_tone(status: ClassStatus) -> &'static str {
    match status {
        ClassStatus::Scheduled => "info",
        ClassStatus::Completed => "ok",
        ClassStatus::Cancelled => "muted",
    }
}

pub fn invoice_tone(status: InvoiceStatus, overdue: bool) -> &'static str {
    match status {
        InvoiceStatus::Paid => "ok",
        InvoiceStatus::Unpaid if overdue => "bad",
        InvoiceStatus::Unpaid => "warn",
    }
}

pub fn booking_tone(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Requested => "warn",
        BookingStatus::Confirmed => "ok",
        BookingStatus::Declined => "muted",
    }
}

pub fn account_tone(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "ok",
        AccountStatus::Suspended => "bad",
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String, #[prop(optional)] icon: &'static str) -> impl IntoView {
    let icon = if icon.is_empty() { "📭" } else { icon };
    view! {
        <div class="empty-state">
            <span class="empty-icon">{icon}</span>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
            "Loading..."
        </div>
    }
}
