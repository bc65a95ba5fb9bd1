//! UI Components
//!
//! Reusable Leptos components shared by every portal.

mod link;
mod shell;
mod sidebar;
mod top_bar;
mod toast_host;
mod modal;
mod search_bar;
mod stat_card;
mod status;
mod delete_confirm_button;
mod child_switcher;
mod markdown_view;

pub use link::Link;
pub use shell::Shell;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
pub use toast_host::ToastHost;
pub use modal::Modal;
pub use search_bar::{FilterTabs, SearchBar};
pub use stat_card::StatCard;
pub use status::{
    account_tone, assignment_tone, booking_tone, class_tone, invoice_tone, EmptyState, Loading, StatusBadge,
};
pub use delete_confirm_button::DeleteConfirmButton;
pub use child_switcher::ChildSwitcher;
pub use markdown_view::MarkdownView;
