//! Kanban Card Component
//!
//! A draggable candidate card. Clicking it opens the candidate profile.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::models::{Candidate, Stage};
use crate::route::Route;

#[component]
pub fn KanbanCard(candidate: Candidate, dnd: DndSignals<String, Stage>) -> impl IntoView {
    let id = candidate.id.clone();
    let on_mousedown = make_on_mousedown(dnd, id.clone());

    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id_read.with(|d| d.as_deref() == Some(id.as_str()))
    };

    let profile = Route::Profile(id);
    let on_click = move |_: web_sys::MouseEvent| {
        // Mouseup at the end of a drag also produces a click
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        profile.navigate();
    };

    view! {
        <div
            class=move || if is_dragging() { "kanban-card dragging" } else { "kanban-card" }
            on:mousedown=on_mousedown
            on:click=on_click
        >
            <div class="kanban-card-name">{candidate.name.clone()}</div>
            <div class="kanban-card-email">{candidate.email.clone()}</div>
            <div class="kanban-card-date">{format!("Applied {}", candidate.applied_on())}</div>
        </div>
    }
}
