//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stage a candidate sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Applied,
    Screen,
    Tech,
    Offer,
    Hired,
    Rejected,
}

impl Stage {
    /// All stages in board display order
    pub const ALL: [Stage; 6] = [
        Stage::Applied,
        Stage::Screen,
        Stage::Tech,
        Stage::Offer,
        Stage::Hired,
        Stage::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Applied => "applied",
            Stage::Screen => "screen",
            Stage::Tech => "tech",
            Stage::Offer => "offer",
            Stage::Hired => "hired",
            Stage::Rejected => "rejected",
        }
    }

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::Screen => "Screening",
            Stage::Tech => "Technical",
            Stage::Offer => "Offer",
            Stage::Hired => "Hired",
            Stage::Rejected => "Rejected",
        }
    }

    /// CSS class for the column background
    pub fn color_class(&self) -> &'static str {
        match self {
            Stage::Applied => "stage-applied",
            Stage::Screen => "stage-screen",
            Stage::Tech => "stage-tech",
            Stage::Offer => "stage-offer",
            Stage::Hired => "stage-hired",
            Stage::Rejected => "stage-rejected",
        }
    }

    /// Badge variant used on the profile header
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Stage::Applied => "default",
            Stage::Screen => "warning",
            Stage::Tech => "info",
            Stage::Offer | Stage::Hired => "success",
            Stage::Rejected => "error",
        }
    }
}

/// Candidate data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub job_id: String,
    pub stage: Stage,
    pub created_at: DateTime<Utc>,
}

impl Candidate {
    /// Creation date as shown on the profile ("Applied Mar 04, 2024")
    pub fn applied_on(&self) -> String {
        self.created_at.format("%b %d, %Y").to_string()
    }
}

/// Job data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
}

/// One historical event on a candidate's timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub candidate_id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub from_stage: Option<Stage>,
    #[serde(default)]
    pub to_stage: Option<Stage>,
}

/// Paged list response (`{ data, total }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<usize>,
}

/// Single-field stage mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageUpdate {
    pub id: String,
    pub stage: Stage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_wire_name_matches_as_str() {
        for stage in Stage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
        }
        assert!(serde_json::from_str::<Stage>("\"interview\"").is_err());
    }

    #[test]
    fn test_candidate_deserializes_from_camel_case() {
        let json = r#"{
            "id": "c-1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "jobId": "j-7",
            "stage": "tech",
            "createdAt": "2024-03-04T10:00:00Z"
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.job_id, "j-7");
        assert_eq!(candidate.stage, Stage::Tech);
        assert_eq!(candidate.applied_on(), "Mar 04, 2024");
    }

    #[test]
    fn test_timeline_entry_stages_are_optional() {
        let json = r#"{
            "id": "t-1",
            "candidateId": "c-1",
            "type": "note",
            "description": "Phone screen booked",
            "timestamp": "2024-03-05T09:30:00Z"
        }"#;
        let entry: TimelineEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.event_type, "note");
        assert!(entry.from_stage.is_none() && entry.to_stage.is_none());
    }

    #[test]
    fn test_page_total_defaults_to_none() {
        let page: Page<Job> = serde_json::from_str(r#"{"data":[{"id":"j-1","title":"Engineer","status":"active"}]}"#).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, None);
    }
}
