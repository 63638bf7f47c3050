//! Candidate Profile Component
//!
//! Resolves the routed candidate (bulk list first, then a direct fetch)
//! and shows its header, job and timeline.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{CandidateTimeline, LoadingSpinner};
use crate::context::use_app_context;
use crate::models::{Candidate, Job, TimelineEntry};
use crate::query::QueryState;
use crate::resolve::{find_job, resolve_candidate, should_fetch_single, NotFoundDiagnostics, Resolution, Source};
use crate::route::Route;
use crate::store::{fetch_single_candidate, store_single_candidate, use_app_store, AppStateStoreFields};

#[component]
pub fn CandidateProfile(candidate_id: String) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Fall back to a direct fetch once the list is known not to contain the id
    {
        let id = candidate_id.clone();
        Effect::new(move |_| {
            if store.candidates().with(|list| should_fetch_single(&id, list)) {
                fetch_single_candidate(store, id.clone());
            }
        });
    }

    let resolution = {
        let id = candidate_id.clone();
        Memo::new(move |_| {
            let single = store_single_candidate(&store, &id);
            store.candidates().with(|list| {
                resolve_candidate(&id, list, &single, ctx.diagnostic_preview_limit())
            })
        })
    };

    // Timeline loads independently of the candidate record
    let (timeline, set_timeline) = signal(QueryState::<Vec<TimelineEntry>>::Loading);
    {
        let id = candidate_id.clone();
        spawn_local(async move {
            let result = commands::get_timeline(&id).await;
            if let Err(e) = &result {
                log::warn!("timeline for {} failed: {}", id, e);
            }
            set_timeline.set(result.into());
        });
    }

    view! {
        <div class="candidate-profile">
            <a class="back-link" href=Route::Board.href()>"← Back to board"</a>
            {move || match resolution.get() {
                Resolution::Loading => view! { <LoadingSpinner size="lg" /> }.into_any(),
                Resolution::Failed(message) => view! {
                    <div class="profile-message error">
                        <div class="profile-message-title">"Failed to load candidate"</div>
                        <div class="profile-message-detail">{message}</div>
                    </div>
                }.into_any(),
                Resolution::NotFound(diagnostics) => view! {
                    <NotFoundPanel diagnostics=diagnostics />
                }.into_any(),
                Resolution::Found { candidate, source } => {
                    if source == Source::Single {
                        log::debug!("candidate {} resolved by direct fetch", candidate.id);
                    }
                    let job_id = candidate.job_id.clone();
                    let job = store.jobs().with(|jobs| {
                        jobs.data().and_then(|jobs| find_job(jobs, &job_id)).cloned()
                    });
                    view! {
                        <ProfileHeader candidate=candidate job=job />
                        <div class="profile-grid">
                            <section class="profile-card">
                                <h2>"Timeline"</h2>
                                {move || timeline.with(|t| {
                                    if t.is_pending() {
                                        return view! { <LoadingSpinner /> }.into_any();
                                    }
                                    // A failed timeline renders as empty
                                    let entries = t.data().cloned().unwrap_or_default();
                                    view! { <CandidateTimeline entries=entries /> }.into_any()
                                })}
                            </section>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProfileHeader(candidate: Candidate, job: Option<Job>) -> impl IntoView {
    let stage = candidate.stage;
    view! {
        <header class="profile-card profile-header">
            <div class="profile-identity">
                <div class="profile-avatar">{candidate.name.chars().next().unwrap_or('?').to_string()}</div>
                <div>
                    <h1>{candidate.name.clone()}</h1>
                    <div class="profile-meta">
                        <span class="profile-email">{candidate.email.clone()}</span>
                        {job.map(|job| view! { <span class="profile-job">{job.title}</span> })}
                        <span class="profile-applied">{format!("Applied {}", candidate.applied_on())}</span>
                    </div>
                </div>
            </div>
            <span class=format!("badge badge-{}", stage.badge_variant())>{stage.as_str()}</span>
        </header>
    }
}

#[component]
fn NotFoundPanel(diagnostics: NotFoundDiagnostics) -> impl IntoView {
    let NotFoundDiagnostics { requested_id, total_loaded, sample_ids, remaining } = diagnostics;
    view! {
        <div class="profile-message">
            <div class="profile-message-title">"Candidate not found"</div>
            <div class="profile-diagnostics">
                <p>{format!("Candidate ID: {}", requested_id)}</p>
                <p>{format!("Total candidates loaded: {}", total_loaded)}</p>
                {(!sample_ids.is_empty()).then(|| view! {
                    <p>"Available IDs:"</p>
                    <ul class="profile-sample-ids">
                        {sample_ids.into_iter().map(|id| {
                            let href = Route::Profile(id.clone()).href();
                            view! { <li><a href=href>{id}</a></li> }
                        }).collect_view()}
                    </ul>
                })}
                {(remaining > 0).then(|| view! { <p>{format!("...and {} more", remaining)}</p> })}
                <p>"Please check if the candidate exists or try refreshing the page."</p>
            </div>
        </div>
    }
}
