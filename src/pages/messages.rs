//! Messages Page
//!
//! Inbox and sent folders, a reading pane and a compose dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use std::collections::HashMap;

use crate::components::{EmptyState, FilterTabs, Loading, MarkdownView, Modal};
use crate::context::use_app;
use crate::format;
use crate::forms::submit_if_valid;
use crate::markdown::excerpt;
use crate::models::{Message, NewMessage, Session, UserAccount, UserFilter};
use crate::pages::{name_or_id, names_by_id};
use crate::toast::use_toasts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Folder {
    Inbox,
    Sent,
}

impl Folder {
    fn label(&self) -> &'static str {
        match self {
            Folder::Inbox => "Inbox",
            Folder::Sent => "Sent",
        }
    }

    /// Who the row is with: the recipient in Sent, the sender in Inbox
    fn counterpart(&self, message: &Message, names: &HashMap<String, String>) -> String {
        match self {
            Folder::Inbox => message.from_name.clone(),
            Folder::Sent => format!("To {}", name_or_id(names, &message.to_id)),
        }
    }
}

#[component]
pub fn Messages(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let user_id = StoredValue::new(session.user_id);

    let folder = RwSignal::new(Folder::Inbox);
    let (messages, set_messages) = signal::<Option<Vec<Message>>>(None);
    let (open_message, set_open_message) = signal::<Option<Message>>(None);
    let composing = RwSignal::new(false);
    let (accounts, set_accounts) = signal(Vec::<UserAccount>::new());
    let names = Memo::new(move |_| accounts.with(|a| names_by_id(a)));

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_users(&UserFilter::default()).await {
                Ok(users) => set_accounts.set(users),
                Err(e) => toasts.failed("Loading contacts", &e),
            }
        });
    });

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let current = folder.get();
        let api = ctx.api();
        let user_id = user_id.get_value();
        spawn_local(async move {
            let result = match current {
                Folder::Inbox => api.inbox(&user_id).await,
                Folder::Sent => api.sent(&user_id).await,
            };
            match result {
                Ok(list) => set_messages.set(Some(list)),
                Err(e) => toasts.failed("Loading messages", &e),
            }
        });
    });

    let open = move |message: Message| {
        let should_mark = !message.read && message.to_id == user_id.get_value();
        let id = message.id.clone();
        set_open_message.set(Some(message));
        if should_mark {
            let api = ctx.api();
            spawn_local(async move {
                match api.mark_message_read(&id).await {
                    Ok(_) => ctx.reload(),
                    Err(e) => toasts.failed("Marking message", &e),
                }
            });
        }
    };

    view! {
        <section class="page messages-page">
            <div class="page-toolbar">
                <FilterTabs options=vec![Folder::Inbox, Folder::Sent] label=Folder::label selected=folder />
                <button type="button" class="btn btn-primary" on:click=move |_| composing.set(true)>
                    "✉️ Compose"
                </button>
            </div>
            <div class="split-view">
                <div class="message-list">
                    {move || match messages.get() {
                        None => view! { <Loading /> }.into_any(),
                        Some(list) if list.is_empty() => {
                            view! { <EmptyState message="No messages" icon="✉️" /> }.into_any()
                        }
                        Some(list) => list
                            .into_iter()
                            .map(|m| {
                                let selected = open_message.with(|o| o.as_ref().is_some_and(|o| o.id == m.id));
                                let current = folder.get_untracked();
                                let sent_folder = current == Folder::Sent;
                                let counterpart = names.with(|names| current.counterpart(&m, names));
                                let preview = excerpt(&m.body, 80);
                                let unread = !m.read && !sent_folder;
                                let subject = m.subject.clone();
                                let sent_at = format::date_time(m.sent_at);
                                view! {
                                    <button
                                        type="button"
                                        class="message-row"
                                        class:unread=unread
                                        class:selected=selected
                                        on:click=move |_| open(m.clone())
                                    >
                                        <span class="message-from">{counterpart}</span>
                                        <span class="message-subject">{subject}</span>
                                        <span class="message-preview">{preview}</span>
                                        <span class="message-date">{sent_at}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }}
                </div>
                <article class="message-pane">
                    {move || match open_message.get() {
                        None => view! { <EmptyState message="Select a message to read it" icon="📨" /> }.into_any(),
                        Some(m) => view! {
                            <header>
                                <h2>{m.subject.clone()}</h2>
                                <p class="muted">{format!("From {} · {}", m.from_name, format::date_time(m.sent_at))}</p>
                            </header>
                            <MarkdownView text=m.body.clone() />
                        }
                        .into_any(),
                    }}
                </article>
            </div>
            <Show when=move || composing.get()>
                <ComposeDialog from_id=user_id.get_value() accounts=accounts open=composing />
            </Show>
        </section>
    }
}

#[component]
fn ComposeDialog(from_id: String, accounts: ReadSignal<Vec<UserAccount>>, open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let sender = StoredValue::new(from_id.clone());
    let recipients = move || -> Vec<UserAccount> {
        let sender = sender.get_value();
        accounts.with(|list| list.iter().filter(|u| u.id != sender && u.is_active()).cloned().collect())
    };
    let to_id = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let (sending, set_sending) = signal(false);

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (to_value, subject_value, body_value) = (to_id.get(), subject.get(), body.get());
        let submitted = submit_if_valid(
            &[("To", &to_value), ("Subject", &subject_value), ("Message", &body_value)],
            || {
                let new_message = NewMessage {
                    from_id: from_id.clone(),
                    to_id: to_value.clone(),
                    subject: subject_value.clone(),
                    body: body_value.clone(),
                };
                set_sending.set(true);
                let api = ctx.api();
                spawn_local(async move {
                    let result = api.send_message(&new_message).await;
                    set_sending.set(false);
                    match result {
                        Ok(sent) => {
                            info!(message = %sent.id, to = %sent.to_id, "message sent");
                            toasts.success("Message sent");
                            open.set(false);
                            ctx.reload();
                        }
                        Err(e) => toasts.failed("Sending message", &e),
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
        <Modal title="New message" on_close=move |_| open.set(false)>
            <form class="form" on:submit=send>
                <label class="field">
                    <span>"To"</span>
                    <select prop:value=move || to_id.get() on:change=move |ev| to_id.set(event_target_value(&ev))>
                        <option value="">"Choose a recipient"</option>
                        {move || {
                            recipients()
                                .into_iter()
                                .map(|u| view! { <option value=u.id.clone()>{format!("{} ({})", u.name, u.role.label())}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="field">
                    <span>"Subject"</span>
                    <input type="text" prop:value=move || subject.get() on:input=move |ev| subject.set(event_target_value(&ev)) />
                </label>
                <label class="field">
                    <span>"Message"</span>
                    <textarea rows="6" prop:value=move || body.get() on:input=move |ev| body.set(event_target_value(&ev))></textarea>
                    <small class="muted">"Markdown is supported"</small>
                </label>
                <div class="form-actions">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_data::fixtures;

    #[test]
    fn test_sent_rows_name_the_recipient() {
        let names = names_by_id(&fixtures::users());
        let message = fixtures::messages()
            .into_iter()
            .find(|m| m.to_id == "tutor-1")
            .expect("fixture message to tutor-1");
        let tutor = &names["tutor-1"];

        assert_eq!(Folder::Sent.counterpart(&message, &names), format!("To {}", tutor));
        assert_eq!(Folder::Inbox.counterpart(&message, &names), message.from_name);
        assert_eq!(Folder::Sent.counterpart(&message, &HashMap::new()), "To tutor-1");
    }
}
