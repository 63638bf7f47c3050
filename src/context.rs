//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::route::Route;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loaded once at startup
    pub config: StoredValue<AppConfig>,
    /// Current hash route
    pub route: ReadSignal<Route>,
    /// Whether the nav sidebar is collapsed (board gets more width)
    pub sidebar_collapsed: ReadSignal<bool>,
    set_sidebar_collapsed: WriteSignal<bool>,
    /// Trigger to reload lists from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        route: ReadSignal<Route>,
        sidebar_collapsed: (ReadSignal<bool>, WriteSignal<bool>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            route,
            sidebar_collapsed: sidebar_collapsed.0,
            set_sidebar_collapsed: sidebar_collapsed.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.page_size)
    }

    pub fn diagnostic_preview_limit(&self) -> usize {
        self.config.with_value(|c| c.diagnostic_preview_limit)
    }

    /// Trigger a reload of the bulk lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn toggle_sidebar(&self) {
        self.set_sidebar_collapsed.update(|v| *v = !*v);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
