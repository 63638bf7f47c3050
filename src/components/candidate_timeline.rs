//! Candidate Timeline Component

use leptos::prelude::*;

use crate::models::TimelineEntry;

/// Timeline events in the order the backend returned them
#[component]
pub fn CandidateTimeline(entries: Vec<TimelineEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <div class="timeline-empty">"No activity yet"</div> }.into_any();
    }

    view! {
        <ol class="timeline">
            {entries
                .into_iter()
                .map(|entry| {
                    let transition = match (entry.from_stage, entry.to_stage) {
                        (Some(from), Some(to)) => Some(format!("{} → {}", from.title(), to.title())),
                        (None, Some(to)) => Some(format!("→ {}", to.title())),
                        _ => None,
                    };
                    view! {
                        <li class=format!("timeline-entry timeline-{}", entry.event_type) data-entry-id=entry.id>
                            <div class="timeline-description">{entry.description}</div>
                            {transition.map(|t| view! { <div class="timeline-transition">{t}</div> })}
                            <time class="timeline-time" datetime=entry.timestamp.to_rfc3339()>
                                {entry.timestamp.format("%b %d, %Y %H:%M").to_string()}
                            </time>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_any()
}
