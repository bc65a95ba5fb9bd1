//! User Management
//!
//! Search and filter accounts, create or edit them in a dialog, suspend and
//! delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::{account_tone, DeleteConfirmButton, EmptyState, Loading, Modal, SearchBar, StatusBadge};
use crate::context::use_app;
use crate::format;
use crate::forms::submit_if_valid;
use crate::models::{AccountStatus, NewUser, Role, Session, UserAccount, UserFilter};
use crate::toast::use_toasts;

/// What the user dialog is doing
#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(UserAccount),
}

#[component]
pub fn AdminUsers(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let me = StoredValue::new(session.user_id);

    let query = RwSignal::new(String::new());
    let role_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let (users, set_users) = signal::<Option<Vec<UserAccount>>>(None);
    let dialog = RwSignal::new(Dialog::Closed);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let filter = UserFilter {
            query: query.get(),
            role: Role::parse(&role_filter.get()),
            status: match status_filter.get().as_str() {
                "active" => Some(AccountStatus::Active),
                "suspended" => Some(AccountStatus::Suspended),
                _ => None,
            },
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.list_users(&filter).await {
                Ok(list) => set_users.set(Some(list)),
                Err(e) => toasts.failed("Loading users", &e),
            }
        });
    });

    let set_status = move |id: String, status: AccountStatus| {
        let api = ctx.api();
        spawn_local(async move {
            match api.set_user_status(&id, status).await {
                Ok(user) => {
                    info!(user = %user.id, status = user.status.label(), "account status changed");
                    toasts.success(format!("{} is now {}", user.name, user.status.label().to_lowercase()));
                    ctx.reload();
                }
                Err(e) => toasts.failed("Updating account", &e),
            }
        });
    };

    let delete = move |id: String| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_user(&id).await {
                Ok(()) => {
                    info!(user = %id, "account deleted");
                    toasts.success("Account deleted");
                    ctx.reload();
                }
                Err(e) => toasts.failed("Deleting account", &e),
            }
        });
    };

    view! {
        <section class="page users-page">
            <div class="page-toolbar">
                <SearchBar value=query placeholder="Search by name or email" />
                <select prop:value=move || role_filter.get() on:change=move |ev| role_filter.set(event_target_value(&ev))>
                    <option value="">"All roles"</option>
                    {Role::ALL
                        .iter()
                        .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                        .collect_view()}
                </select>
                <select prop:value=move || status_filter.get() on:change=move |ev| status_filter.set(event_target_value(&ev))>
                    <option value="">"Any status"</option>
                    <option value="active">"Active"</option>
                    <option value="suspended">"Suspended"</option>
                </select>
                <button type="button" class="btn btn-primary" on:click=move |_| dialog.set(Dialog::Create)>
                    "+ New user"
                </button>
            </div>

            {move || match users.get() {
                None => view! { <Loading /> }.into_any(),
                Some(list) if list.is_empty() => view! { <EmptyState message="No users match" icon="👥" /> }.into_any(),
                Some(list) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Joined"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|user| {
                                    let is_me = user.id == me.get_value();
                                    let (status_id, delete_id) = (user.id.clone(), user.id.clone());
                                    let next_status = if user.is_active() { AccountStatus::Suspended } else { AccountStatus::Active };
                                    let status_action = if user.is_active() { "Suspend" } else { "Reactivate" };
                                    let editing = user.clone();
                                    view! {
                                        <tr class:muted=!user.is_active()>
                                            <td>
                                                <img class="avatar avatar-small" src=user.avatar.clone() alt="" />
                                                {user.name.clone()}
                                            </td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.role.label()}</td>
                                            <td>{format::date(user.joined_on)}</td>
                                            <td><StatusBadge label=user.status.label() tone=account_tone(user.status) /></td>
                                            <td class="row-actions">
                                                <button
                                                    type="button"
                                                    class="btn btn-ghost btn-small"
                                                    on:click=move |_| dialog.set(Dialog::Edit(editing.clone()))
                                                >
                                                    "Edit"
                                                </button>
                                                <Show when=move || !is_me>
                                                    <button
                                                        type="button"
                                                        class="btn btn-ghost btn-small"
                                                        on:click={
                                                            let id = status_id.clone();
                                                            move |_| set_status(id.clone(), next_status)
                                                        }
                                                    >
                                                        {status_action}
                                                    </button>
                                                    <DeleteConfirmButton
                                                        label="Delete"
                                                        on_confirm={
                                                            let id = delete_id.clone();
                                                            move |_| delete(id.clone())
                                                        }
                                                    />
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}

            {move || match dialog.get() {
                Dialog::Closed => None,
                Dialog::Create => Some(view! { <UserDialog editing=None dialog=dialog /> }),
                Dialog::Edit(user) => Some(view! { <UserDialog editing=Some(user) dialog=dialog /> }),
            }}
        </section>
    }
}

#[component]
fn UserDialog(editing: Option<UserAccount>, dialog: RwSignal<Dialog>) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let title = if editing.is_some() { "Edit user" } else { "New user" };
    let editing_id = editing.as_ref().map(|u| u.id.clone());
    let name = RwSignal::new(editing.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(editing.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let role = RwSignal::new(editing.as_ref().map(|u| u.role.as_str().to_string()).unwrap_or_default());
    let (saving, set_saving) = signal(false);

    let close = move || dialog.set(Dialog::Closed);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (name_value, email_value, role_value) = (name.get(), email.get(), role.get());
        let submitted = submit_if_valid(&[("Name", &name_value), ("Email", &email_value), ("Role", &role_value)], || {
            let new_user = NewUser {
                name: name_value.clone(),
                email: email_value.clone(),
                role: Role::parse(&role_value),
            };
            set_saving.set(true);
            let api = ctx.api();
            let editing_id = editing_id.clone();
            spawn_local(async move {
                let result = match &editing_id {
                    Some(id) => api.update_user(id, &new_user).await,
                    None => api.create_user(&new_user).await,
                };
                set_saving.set(false);
                match result {
                    Ok(user) => {
                        info!(user = %user.id, created = editing_id.is_none(), "user saved");
                        toasts.success(format!("Saved {}", user.name));
                        close();
                        ctx.reload();
                    }
                    Err(e) => toasts.failed("Saving user", &e),
                }
            });
            Ok(())
        });
        if let Err(e) = submitted {
            toasts.error(e.to_string());
        }
    };

    view! {
        <Modal title=title on_close=move |_| close()>
            <form class="form" on:submit=save>
                <label class="field">
                    <span>"Full name"</span>
                    <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev)) />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev)) />
                </label>
                <label class="field">
                    <span>"Role"</span>
                    <select prop:value=move || role.get() on:change=move |ev| role.set(event_target_value(&ev))>
                        <option value="">"Choose a role"</option>
                        {Role::ALL
                            .iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="form-actions">
                    <button type="button" class="btn btn-ghost" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
