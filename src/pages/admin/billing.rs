//! Billing
//!
//! Every invoice in the system with status tabs, a running outstanding
//! total and a dialog to bill a parent for one of their children.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::{FilterTabs, Loading, Modal, SearchBar, StatCard};
use crate::context::use_app;
use crate::filter::{matches_query, InvoiceFilter};
use crate::format::format_cents;
use crate::forms::{parse_amount_cents, parse_date, submit_if_valid};
use crate::models::{outstanding_cents, Child, Invoice, NewInvoice, Role, UserAccount};
use crate::pages::tables::InvoiceTable;
use crate::toast::use_toasts;

#[component]
pub fn AdminBilling() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let today = ctx.today();

    let (invoices, set_invoices) = signal::<Option<Vec<Invoice>>>(None);
    let (parents, set_parents) = signal(Vec::<UserAccount>::new());
    let status = RwSignal::new(InvoiceFilter::All);
    let query = RwSignal::new(String::new());
    let show_dialog = RwSignal::new(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_invoices().await {
                Ok(list) => set_invoices.set(Some(list)),
                Err(e) => toasts.failed("Loading invoices", &e),
            }
        });
    });

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.users_by_role(Role::Parent).await {
                Ok(list) => set_parents.set(list),
                Err(e) => toasts.failed("Loading parents", &e),
            }
        });
    });

    let parent_names = Memo::new(move |_| {
        parents.with(|list| list.iter().map(|p| (p.id.clone(), p.name.clone())).collect::<HashMap<_, _>>())
    });

    let on_pay = Callback::new(move |id: String| {
        let api = ctx.api();
        spawn_local(async move {
            match api.pay_invoice(&id).await {
                Ok(invoice) => {
                    info!(invoice = %invoice.id, "payment recorded");
                    toasts.success(format!("Recorded payment of {}", format_cents(invoice.amount_cents)));
                    ctx.reload();
                }
                Err(e) => toasts.failed("Recording payment", &e),
            }
        });
    });

    let visible = move || {
        let list = invoices.get()?;
        let (filter, q) = (status.get(), query.get());
        Some(parent_names.with(|names| {
            list.into_iter()
                .filter(|inv| filter.matches(inv, today))
                .filter(|inv| {
                    let parent = names.get(&inv.parent_id).map(String::as_str).unwrap_or_default();
                    matches_query(&q, &[&inv.id, &inv.description, parent])
                })
                .collect::<Vec<_>>()
        }))
    };

    let totals = move || {
        invoices.with(|list| {
            list.as_ref().map(|l| {
                let overdue = l.iter().filter(|inv| inv.is_overdue(today)).count();
                (outstanding_cents(l), overdue)
            })
        })
    };

    view! {
        <section class="page billing-page">
            {move || totals().map(|(outstanding, overdue)| view! {
                <div class="stat-grid">
                    <StatCard label="Outstanding" value=format_cents(outstanding) icon="🧾" />
                    <StatCard label="Overdue invoices" value=overdue.to_string() icon="⏰" />
                </div>
            })}
            <div class="page-toolbar">
                <FilterTabs options=InvoiceFilter::ALL.to_vec() label=InvoiceFilter::label selected=status />
                <SearchBar value=query placeholder="Search invoices or parents" />
                <button type="button" class="btn btn-primary" on:click=move |_| show_dialog.set(true)>
                    "+ New invoice"
                </button>
            </div>
            {move || match visible() {
                None => view! { <Loading /> }.into_any(),
                Some(list) => view! { <InvoiceTable invoices=list today=today on_pay=on_pay /> }.into_any(),
            }}
            <Show when=move || show_dialog.get()>
                <InvoiceDialog parents=parents on_close=move |_| show_dialog.set(false) />
            </Show>
        </section>
    }
}

#[component]
fn InvoiceDialog(parents: ReadSignal<Vec<UserAccount>>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let parent_id = RwSignal::new(String::new());
    let child_id = RwSignal::new(String::new());
    let (children, set_children) = signal(Vec::<Child>::new());
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let due_on = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);

    // Children follow the chosen parent
    Effect::new(move |_| {
        let parent = parent_id.get();
        child_id.set(String::new());
        if parent.is_empty() {
            set_children.set(Vec::new());
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.children_for_parent(&parent).await {
                Ok(list) => {
                    if let [only] = list.as_slice() {
                        child_id.set(only.id.clone());
                    }
                    set_children.set(list);
                }
                Err(e) => toasts.failed("Loading children", &e),
            }
        });
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (parent_value, child_value, description_value, amount_value, due_value) =
            (parent_id.get(), child_id.get(), description.get(), amount.get(), due_on.get());
        let submitted = submit_if_valid(
            &[
                ("Parent", &parent_value),
                ("Child", &child_value),
                ("Description", &description_value),
                ("Amount", &amount_value),
                ("Due date", &due_value),
            ],
            || {
                let new_invoice = NewInvoice {
                    parent_id: parent_value.clone(),
                    child_id: child_value.clone(),
                    description: description_value.clone(),
                    amount_cents: parse_amount_cents("Amount", &amount_value)?,
                    due_on: Some(parse_date("Due date", &due_value)?),
                };
                set_saving.set(true);
                let api = ctx.api();
                spawn_local(async move {
                    let result = api.create_invoice(&new_invoice).await;
                    set_saving.set(false);
                    match result {
                        Ok(invoice) => {
                            info!(invoice = %invoice.id, parent = %invoice.parent_id, "invoice created");
                            toasts.success(format!("Invoice {} sent", invoice.id));
                            on_close.run(());
                            ctx.reload();
                        }
                        Err(e) => toasts.failed("Creating invoice", &e),
                    }
                });
                Ok(())
            },
        );
        if let Err(e) = submitted {
            toasts.error(e.to_string());
        }
    };

    view! {
        <Modal title="New invoice" on_close=on_close>
            <form class="form" on:submit=save>
                <label class="field">
                    <span>"Parent"</span>
                    <select prop:value=move || parent_id.get() on:change=move |ev| parent_id.set(event_target_value(&ev))>
                        <option value="">"Choose a parent"</option>
                        <For each=move || parents.get() key=|p| p.id.clone() let:parent>
                            <option value=parent.id.clone()>{parent.name.clone()}</option>
                        </For>
                    </select>
                </label>
                <label class="field">
                    <span>"Child"</span>
                    <select
                        prop:value=move || child_id.get()
                        disabled=move || children.with(Vec::is_empty)
                        on:change=move |ev| child_id.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a child"</option>
                        <For each=move || children.get() key=|c| c.id.clone() let:child>
                            <option value=child.id.clone()>{child.name.clone()}</option>
                        </For>
                    </select>
                </label>
                <label class="field">
                    <span>"Description"</span>
                    <input
                        type="text"
                        placeholder="e.g. March tutoring package"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <div class="field-row">
                    <label class="field">
                        <span>"Amount"</span>
                        <input
                            type="text"
                            inputmode="decimal"
                            placeholder="$0.00"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Due"</span>
                        <input type="date" prop:value=move || due_on.get() on:input=move |ev| due_on.set(event_target_value(&ev)) />
                    </label>
                </div>
                <div class="form-actions">
                    <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Sending..." } else { "Send invoice" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
