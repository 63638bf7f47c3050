//! Candidate Commands
//!
//! Frontend bindings for candidate-related backend commands.

use serde::Serialize;

use super::call;
use crate::error::ApiResult;
use crate::models::{Candidate, Page, StageUpdate, TimelineEntry};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageArgs {
    page_size: usize,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn list_candidates(page_size: usize) -> ApiResult<Page<Candidate>> {
    call("list_candidates", &PageArgs { page_size }).await
}

/// `Ok(None)` when the backend has no candidate with this id
pub async fn get_candidate(id: &str) -> ApiResult<Option<Candidate>> {
    call("get_candidate", &IdArgs { id }).await
}

pub async fn get_timeline(id: &str) -> ApiResult<Vec<TimelineEntry>> {
    call("get_candidate_timeline", &IdArgs { id }).await
}

/// Set a candidate's stage; returns the updated record
pub async fn update_candidate(update: &StageUpdate) -> ApiResult<Candidate> {
    call("update_candidate", update).await
}
