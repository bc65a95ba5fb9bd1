//! Application Context
//!
//! Shared handles provided via Leptos Context API: the mock backend, the
//! runtime config, a reload trigger and the browser navigator.

use leptos::ev;
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::models::MockBackend;
use crate::router::normalize;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every write so list pages refetch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every write so list pages refetch - write
    set_reload_trigger: WriteSignal<u32>,
    api: StoredValue<MockBackend>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), api: MockBackend, config: AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of page data and badges
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Cloned handle to the backend, cheap to move into a task
    pub fn api(&self) -> MockBackend {
        self.api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.api.with_value(|api| api.today())
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Current location plus History API navigation
#[derive(Clone, Copy)]
pub struct Navigator {
    path: RwSignal<String>,
}

impl Navigator {
    /// Seed from `window.location` and follow back/forward
    pub fn from_location() -> Self {
        let path = RwSignal::new(current_location());
        // The listener lives as long as the app
        let _ = window_event_listener(ev::popstate, move |_| {
            let location = current_location();
            debug!(path = %location, "popstate");
            path.set(location);
        });
        Self { path }
    }

    pub fn path(&self) -> String {
        self.path.get()
    }

    pub fn path_signal(&self) -> RwSignal<String> {
        self.path
    }

    pub fn push(&self, to: &str) {
        self.go(to, false);
    }

    /// Navigate without a new history entry, used for redirects
    pub fn replace(&self, to: &str) {
        self.go(to, true);
    }

    fn go(&self, to: &str, replace: bool) {
        let target = normalize(to);
        if self.path.get_untracked() == target {
            return;
        }
        if let Ok(history) = window().history() {
            let result = if replace {
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target))
            } else {
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target))
            };
            if let Err(e) = result {
                warn!(path = %target, "history update failed: {:?}", e);
            }
        }
        self.path.set(target);
    }
}

fn current_location() -> String {
    let pathname = window().location().pathname().unwrap_or_else(|_| "/".to_string());
    normalize(&pathname)
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
