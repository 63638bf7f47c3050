//! Kanban Column Component
//!
//! One stage column; acts as a drop target while a card is dragged.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter, DndSignals};

use crate::components::KanbanCard;
use crate::models::{Candidate, Stage};

#[component]
pub fn KanbanColumn(
    stage: Stage,
    /// Candidates currently in this stage, in list order
    candidates: Signal<Vec<Candidate>>,
    dnd: DndSignals<String, Stage>,
) -> impl IntoView {
    let on_mouseenter = make_on_target_mouseenter(dnd, stage);
    let on_mouseleave = make_on_mouseleave(dnd);

    let column_class = move || {
        let mut c = format!("kanban-column {}", stage.color_class());
        if dnd.drop_target_read.get() == Some(stage) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=column_class
            data-stage=stage.as_str()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="kanban-column-header">
                <h3>{stage.title()}</h3>
                <span class="kanban-column-count">{move || candidates.with(Vec::len)}</span>
            </div>
            <div class="kanban-column-cards">
                <For
                    each=move || candidates.get()
                    key=|candidate| (candidate.id.clone(), candidate.name.clone(), candidate.email.clone())
                    children=move |candidate| view! { <KanbanCard candidate=candidate dnd=dnd /> }
                />
            </div>
        </div>
    }
}
