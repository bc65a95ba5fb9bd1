//! Portal Shell
//!
//! Sidebar on the left, top bar above the page content.

use leptos::prelude::*;

use crate::components::{Sidebar, TopBar};
use crate::models::Session;

#[component]
pub fn Shell(session: Session, children: Children) -> impl IntoView {
    let role = session.role;
    view! {
        <div class="app-layout">
            <Sidebar role=role />
            <div class="main-column">
                <TopBar session=session />
                <main class="main-content">{children()}</main>
            </div>
        </div>
    }
}
