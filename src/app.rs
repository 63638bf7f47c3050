//! Hiring Board Frontend App
//!
//! Sidebar plus the routed main view (board or candidate profile).

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CandidateProfile, KanbanBoard};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{load_candidates, load_jobs, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Routing
    let (route, set_route) = signal(Route::current());
    let hashchange = window_event_listener(ev::hashchange, move |_| {
        let next = Route::current();
        log::debug!("route -> {:?}", next);
        set_route.set(next);
    });
    on_cleanup(move || hashchange.remove());

    // Provide store and context to all children
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(config, route, signal(false), signal(0u32));
    provide_context(ctx);

    // Load bulk lists on mount and on reload
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let page_size = ctx.page_size();
        log::info!("loading candidates and jobs (page size {}, trigger={})", page_size, trigger);
        load_candidates(store, page_size);
        load_jobs(store, page_size);
    });

    view! {
        <div class=move || if ctx.sidebar_collapsed.get() { "app-layout sidebar-collapsed" } else { "app-layout" }>
            <nav class="sidebar">
                <button class="sidebar-toggle" on:click=move |_| ctx.toggle_sidebar()>
                    {move || if ctx.sidebar_collapsed.get() { "»" } else { "«" }}
                </button>
                <a class="sidebar-link" href=Route::Board.href()>"Board"</a>
            </nav>

            <main class="main-content">
                {move || match ctx.route.get() {
                    Route::Board => view! { <KanbanBoard /> }.into_any(),
                    Route::Profile(id) => view! { <CandidateProfile candidate_id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
