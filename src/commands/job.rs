//! Job Commands

use serde::Serialize;

use super::call;
use crate::error::ApiResult;
use crate::models::{Job, Page};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageArgs {
    page_size: usize,
}

pub async fn list_jobs(page_size: usize) -> ApiResult<Page<Job>> {
    call("list_jobs", &PageArgs { page_size }).await
}
