//! Sign-In Page
//!
//! Email and password against the demo accounts, plus one-click quick picks
//! for each role.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::context::use_app;
use crate::forms::submit_if_valid;
use crate::models::{Session, UserAccount};
use crate::store::{store_sign_in, use_app_store};
use crate::toast::use_toasts;

/// Any non-empty password is accepted
const DEMO_PASSWORD: &str = "demo";

#[component]
pub fn SignIn() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let toasts = use_toasts();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (demo_accounts, set_demo_accounts) = signal(Vec::<UserAccount>::new());

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.demo_accounts().await {
                Ok(accounts) => set_demo_accounts.set(accounts),
                Err(e) => toasts.failed("Loading demo accounts", &e),
            }
        });
    });

    let sign_in = move |email: String, password: String| {
        if submitting.get_untracked() {
            return;
        }
        let submitted = submit_if_valid(&[("Email", &email), ("Password", &password)], || {
            set_error.set(None);
            set_submitting.set(true);
            let api = ctx.api();
            let (email, password) = (email.clone(), password.clone());
            spawn_local(async move {
                let result = api.sign_in(&email, &password).await;
                set_submitting.set(false);
                match result {
                    Ok(account) => {
                        let session = Session::from_account(&account);
                        info!(user = %session.user_id, role = session.role.as_str(), "session started");
                        toasts.success(format!("Welcome back, {}", session.first_name()));
                        // The guard sees the new role and leaves the sign-in page
                        store_sign_in(&store, session);
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
            Ok(())
        });
        if let Err(e) = submitted {
            set_error.set(Some(e.to_string()));
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        sign_in(email.get(), password.get());
    };

    view! {
        <div class="sign-in-page">
            <form class="sign-in-card" on:submit=on_submit>
                <h1>{ctx.config().app_name}</h1>
                <p class="sign-in-subtitle">"Sign in to your portal"</p>

                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <div class="demo-accounts">
                    <p>"Demo accounts"</p>
                    <For
                        each=move || demo_accounts.get()
                        key=|account| account.id.clone()
                        let:account
                    >
                        <button
                            type="button"
                            class="btn btn-ghost demo-account"
                            disabled=move || submitting.get()
                            on:click={
                                let email = account.email.clone();
                                move |_| {
                                    set_email.set(email.clone());
                                    set_password.set(DEMO_PASSWORD.to_string());
                                    sign_in(email.clone(), DEMO_PASSWORD.to_string());
                                }
                            }
                        >
                            <span class="demo-role">{account.role.label()}</span>
                            <span class="demo-name">{account.name.clone()}</span>
                        </button>
                    </For>
                </div>
            </form>
        </div>
    }
}
