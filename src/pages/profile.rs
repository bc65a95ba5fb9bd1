//! Profile Page
//!
//! Account details for the signed-in user with name and email editing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::{account_tone, Loading, StatusBadge};
use crate::context::use_app;
use crate::format;
use crate::forms::submit_if_valid;
use crate::models::{NewUser, Session, UserAccount};
use crate::store::{store_sign_in, use_app_store};
use crate::toast::use_toasts;

#[component]
pub fn Profile(session: Session) -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let toasts = use_toasts();
    let user_id = session.user_id.clone();

    let (account, set_account) = signal::<Option<UserAccount>>(None);
    let name = RwSignal::new(session.name.clone());
    let email = RwSignal::new(session.email.clone());
    let (saving, set_saving) = signal(false);

    Effect::new({
        let user_id = user_id.clone();
        move |_| {
            let _ = ctx.reload_trigger.get();
            let api = ctx.api();
            let user_id = user_id.clone();
            spawn_local(async move {
                match api.user_by_id(&user_id).await {
                    Ok(found) => set_account.set(Some(found)),
                    Err(e) => toasts.failed("Loading profile", &e),
                }
            });
        }
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (name_value, email_value) = (name.get(), email.get());
        let submitted = submit_if_valid(&[("Name", &name_value), ("Email", &email_value)], || {
            let changes = NewUser {
                name: name_value.clone(),
                email: email_value.clone(),
                role: Some(session.role),
            };
            set_saving.set(true);
            let api = ctx.api();
            let user_id = user_id.clone();
            spawn_local(async move {
                let result = api.update_user(&user_id, &changes).await;
                set_saving.set(false);
                match result {
                    Ok(updated) => {
                        info!(user = %updated.id, "profile updated");
                        store_sign_in(&store, Session::from_account(&updated));
                        toasts.success("Profile saved");
                        ctx.reload();
                    }
                    Err(e) => toasts.failed("Saving profile", &e),
                }
            });
            Ok(())
        });
        if let Err(e) = submitted {
            toasts.error(e.to_string());
        }
    };

    view! {
        <section class="page profile-page">
            {move || match account.get() {
                None => view! { <Loading /> }.into_any(),
                Some(account) => view! {
                    <div class="card profile-card">
                        <img class="avatar avatar-large" src=account.avatar.clone() alt="" />
                        <div>
                            <h2>{account.name.clone()}</h2>
                            <p class="muted">{account.email.clone()}</p>
                            <p>
                                {account.role.label()} " · joined " {format::date(account.joined_on)} " "
                                <StatusBadge label=account.status.label() tone=account_tone(account.status) />
                            </p>
                        </div>
                    </div>
                }
                .into_any(),
            }}
            <form class="card form" on:submit=save>
                <h3>"Edit details"</h3>
                <label class="field">
                    <span>"Name"</span>
                    <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev)) />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev)) />
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </section>
    }
}
