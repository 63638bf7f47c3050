//! Candidate Resolution
//!
//! Resolves a candidate by id from the bulk list, falling back to a
//! single-record fetch when the list does not contain it.

use crate::models::{Candidate, Job};
use crate::query::QueryState;

/// Where a resolved candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    List,
    Single,
}

/// Debug info shown when a candidate cannot be found anywhere
#[derive(Debug, Clone, PartialEq)]
pub struct NotFoundDiagnostics {
    pub requested_id: String,
    /// Candidates in the bulk list
    pub total_loaded: usize,
    /// First few ids from the bulk list
    pub sample_ids: Vec<String>,
    /// Ids not shown in `sample_ids`
    pub remaining: usize,
}

impl NotFoundDiagnostics {
    pub fn new(requested_id: &str, loaded: &[Candidate], preview_limit: usize) -> Self {
        let sample_ids: Vec<String> = loaded.iter().take(preview_limit).map(|c| c.id.clone()).collect();
        Self {
            requested_id: requested_id.to_string(),
            total_loaded: loaded.len(),
            remaining: loaded.len() - sample_ids.len(),
            sample_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Loading,
    Found { candidate: Candidate, source: Source },
    NotFound(NotFoundDiagnostics),
    Failed(String),
}

/// Issue the per-id fetch only once the list has loaded without the id.
pub fn should_fetch_single(id: &str, list: &QueryState<Vec<Candidate>>) -> bool {
    list.data().is_some_and(|candidates| !candidates.iter().any(|c| c.id == id))
}

/// Combine the bulk list and the per-id fetch into one outcome.
///
/// A hit in the list wins outright. A failed single fetch counts as absent.
pub fn resolve_candidate(
    id: &str,
    list: &QueryState<Vec<Candidate>>,
    single: &QueryState<Option<Candidate>>,
    preview_limit: usize,
) -> Resolution {
    let loaded = match list {
        QueryState::Idle | QueryState::Loading => return Resolution::Loading,
        QueryState::Failed(message) => return Resolution::Failed(message.clone()),
        QueryState::Ready(candidates) => candidates,
    };

    if let Some(candidate) = loaded.iter().find(|c| c.id == id) {
        return Resolution::Found {
            candidate: candidate.clone(),
            source: Source::List,
        };
    }

    match single {
        QueryState::Idle | QueryState::Loading => Resolution::Loading,
        QueryState::Ready(Some(candidate)) => Resolution::Found {
            candidate: candidate.clone(),
            source: Source::Single,
        },
        QueryState::Ready(None) | QueryState::Failed(_) => {
            Resolution::NotFound(NotFoundDiagnostics::new(id, loaded, preview_limit))
        }
    }
}

/// The job a candidate applied to, if it is in the loaded job list
pub fn find_job<'a>(jobs: &'a [Job], job_id: &str) -> Option<&'a Job> {
    jobs.iter().find(|j| j.id == job_id)
}
