//! Kanban Board Component
//!
//! Candidates partitioned into one column per stage. Dropping a card on
//! another column moves the candidate to that stage.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::board::{drag_end_update, BoardView};
use crate::commands;
use crate::components::{KanbanColumn, LoadingSpinner};
use crate::context::use_app_context;
use crate::models::{Candidate, Stage};
use crate::scroll::{ScrollAffordance, ScrollMetrics};
use crate::store::{store_update_candidate, use_app_store, AppStateStoreFields};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let dnd = create_dnd_signals::<String, Stage>();

    bind_global_handlers(dnd, move |end: DragEnd<String, Stage>| {
        let update = store.candidates().with_untracked(|state| {
            state.data().and_then(|candidates| drag_end_update(candidates, &end.dragged, end.over))
        });
        let Some(update) = update else {
            log::debug!("[DND] drop of {} over {:?} ignored", end.dragged, end.over);
            return;
        };
        log::info!("[DND] moving candidate {} to {}", update.id, update.stage.as_str());
        spawn_local(async move {
            match commands::update_candidate(&update).await {
                Ok(updated) => store_update_candidate(&store, updated),
                Err(e) => log::error!("stage update for {} failed: {}", update.id, e),
            }
        });
    });

    let board = Memo::new(move |_| store.candidates().with(BoardView::from_query));
    let is_ready = move || board.with(|b| matches!(b, BoardView::Columns(_)));
    let column = move |stage: Stage| -> Vec<Candidate> {
        board.with(|b| match b {
            BoardView::Columns(columns) => columns
                .iter()
                .find(|c| c.stage == stage)
                .map(|c| c.candidates.clone())
                .unwrap_or_default(),
            _ => Vec::new(),
        })
    };

    // Scroll affordances
    let scroll_ref = NodeRef::<html::Div>::new();
    let (affordance, set_affordance) = signal(ScrollAffordance::default());
    let update_scroll = move || {
        if let Some(el) = scroll_ref.get_untracked() {
            set_affordance.set(ScrollAffordance::from_metrics(ScrollMetrics::of(&el)));
        }
    };

    // Re-measure once the container mounts and whenever the columns change
    Effect::new(move |_| {
        board.track();
        if scroll_ref.get().is_some() {
            update_scroll();
        }
    });

    let resize = window_event_listener(ev::resize, move |_| update_scroll());
    on_cleanup(move || resize.remove());

    let container_class = move || {
        if ctx.sidebar_collapsed.get() {
            "kanban-scroll sidebar-collapsed"
        } else {
            "kanban-scroll"
        }
    };

    view! {
        <div class="kanban-board">
            <div class="page-header">
                <h1>"Kanban Board"</h1>
                <p>"Drag candidates between stages to update their status"</p>
            </div>

            {move || board.with(|b| match b {
                BoardView::Loading => Some(view! { <LoadingSpinner size="lg" /> }.into_any()),
                BoardView::Failed(message) => Some(view! {
                    <div class="board-message error">
                        <div class="board-message-title">"Failed to load candidates"</div>
                        <p>{message.clone()}</p>
                    </div>
                }.into_any()),
                BoardView::Empty => Some(view! {
                    <div class="board-message">
                        <div class="board-message-title">"No candidates found"</div>
                        <p>"Try refreshing the page or check if candidates are properly seeded."</p>
                        <button on:click=move |_| ctx.reload()>"Refresh"</button>
                    </div>
                }.into_any()),
                BoardView::Columns(_) => None,
            })}

            <Show when=is_ready>
                <div
                    class=container_class
                    node_ref=scroll_ref
                    on:scroll=move |_| update_scroll()
                >
                    <div class="kanban-columns">
                        <For
                            each=|| Stage::ALL
                            key=|stage| *stage
                            children=move |stage| {
                                let candidates = Signal::derive(move || column(stage));
                                view! { <KanbanColumn stage=stage candidates=candidates dnd=dnd /> }
                            }
                        />
                    </div>

                    <Show when=move || affordance.get().can_scroll_left>
                        <div class="scroll-hint left">"‹"</div>
                    </Show>
                    <Show when=move || affordance.get().can_scroll_right>
                        <div class="scroll-hint right">"›"</div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
