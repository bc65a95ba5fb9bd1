//! Parent Billing
//!
//! Invoices for the active child by default, or the whole family. Unpaid
//! invoices can be paid from the table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use super::{active_child_name, use_child_data, ChildData, NoChildren};
use crate::components::{FilterTabs, Loading, StatCard};
use crate::context::use_app;
use crate::filter::InvoiceFilter;
use crate::format::format_cents;
use crate::models::{outstanding_cents, Invoice, Session};
use crate::pages::tables::InvoiceTable;
use crate::toast::use_toasts;

#[component]
pub fn ParentBilling(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let today = ctx.today();
    let parent_id = session.user_id;

    let status = RwSignal::new(InvoiceFilter::All);
    let whole_family = RwSignal::new(false);
    let child_name = active_child_name();

    // The parent's invoices are fetched once per child change and narrowed
    // locally, so the family toggle needs no extra request
    let ChildData { child_id, data } = use_child_data("Loading invoices", move |api, _child| {
        let parent_id = parent_id.clone();
        async move { api.invoices_for_parent(&parent_id).await }
    });

    let on_pay = Callback::new(move |id: String| {
        let api = ctx.api();
        spawn_local(async move {
            match api.pay_invoice(&id).await {
                Ok(invoice) => {
                    info!(invoice = %invoice.id, amount_cents = invoice.amount_cents, "invoice paid by parent");
                    toasts.success(format!("Paid {}. Thank you!", format_cents(invoice.amount_cents)));
                    ctx.reload();
                }
                Err(e) => toasts.failed("Payment", &e),
            }
        });
    });

    let scoped = move || -> Option<Vec<Invoice>> {
        let list = data.get()?;
        let child = child_id.get()?;
        let family = whole_family.get();
        Some(list.into_iter().filter(|inv| family || inv.child_id == child).collect())
    };

    view! {
        <section class="page billing-page">
            {move || {
                if child_id.with(Option::is_none) {
                    return view! { <NoChildren /> }.into_any();
                }
                let Some(list) = scoped() else {
                    return view! { <Loading /> }.into_any();
                };
                let balance = outstanding_cents(&list);
                let overdue = list.iter().filter(|inv| inv.is_overdue(today)).count();
                let filter = status.get();
                let shown: Vec<_> = list.into_iter().filter(|inv| filter.matches(inv, today)).collect();
                let scope = if whole_family.get() { "All children".to_string() } else { child_name.get() };
                view! {
                    <div class="stat-grid">
                        <StatCard label="Balance due" value=format_cents(balance) icon="💳" hint=scope />
                        <StatCard label="Overdue" value=overdue.to_string() icon="⏰" />
                    </div>
                    <div class="page-toolbar">
                        <FilterTabs options=InvoiceFilter::ALL.to_vec() label=InvoiceFilter::label selected=status />
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || whole_family.get()
                                on:change=move |ev| whole_family.set(event_target_checked(&ev))
                            />
                            "Show all children"
                        </label>
                    </div>
                    <InvoiceTable invoices=shown today=today on_pay=on_pay />
                }
                .into_any()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use crate::models::outstanding_cents;
    use portal_data::fixtures;

    #[test]
    fn test_family_balance_covers_every_child() {
        let family: Vec<_> = fixtures::invoices().into_iter().filter(|i| i.parent_id == "parent-1").collect();
        let per_child: u64 = ["child-1", "child-2"]
            .iter()
            .map(|child| {
                let own: Vec<_> = family.iter().filter(|i| i.child_id == *child).cloned().collect();
                outstanding_cents(&own)
            })
            .sum();
        assert_eq!(outstanding_cents(&family), per_child);
    }
}
