//! Board State
//!
//! Stage partitioning and drag-end handling for the kanban board.

use crate::models::{Candidate, Stage, StageUpdate};
use crate::query::QueryState;

/// One board column: a stage and the candidates currently in it
#[derive(Debug, Clone, PartialEq)]
pub struct StageColumn {
    pub stage: Stage,
    pub candidates: Vec<Candidate>,
}

/// Split candidates into one column per stage, in display order.
/// Order within a column follows the input order.
pub fn partition_by_stage(candidates: &[Candidate]) -> Vec<StageColumn> {
    Stage::ALL
        .into_iter()
        .map(|stage| StageColumn {
            stage,
            candidates: candidates.iter().filter(|c| c.stage == stage).cloned().collect(),
        })
        .collect()
}

/// Stage update to issue when a drag ends, if any.
///
/// No update when there is no drop target, the candidate is unknown,
/// or it is already in the target stage.
pub fn drag_end_update(candidates: &[Candidate], dragged_id: &str, over: Option<Stage>) -> Option<StageUpdate> {
    let target = over?;
    let candidate = candidates.iter().find(|c| c.id == dragged_id)?;
    if candidate.stage == target {
        return None;
    }
    Some(StageUpdate {
        id: candidate.id.clone(),
        stage: target,
    })
}

/// What the board renders for a given list state
#[derive(Debug, Clone, PartialEq)]
pub enum BoardView {
    Loading,
    Failed(String),
    Empty,
    Columns(Vec<StageColumn>),
}

impl BoardView {
    pub fn from_query(state: &QueryState<Vec<Candidate>>) -> Self {
        match state {
            QueryState::Idle | QueryState::Loading => BoardView::Loading,
            QueryState::Failed(message) => BoardView::Failed(message.clone()),
            QueryState::Ready(candidates) if candidates.is_empty() => BoardView::Empty,
            QueryState::Ready(candidates) => BoardView::Columns(partition_by_stage(candidates)),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub(crate) fn make_candidate(id: &str, stage: Stage) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Candidate {}", id),
            email: format!("{}@example.com", id),
            job_id: "job-1".to_string(),
            stage,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_every_candidate_lands_in_its_stage_column() {
        let candidates = vec![
            make_candidate("a", Stage::Tech),
            make_candidate("b", Stage::Applied),
            make_candidate("c", Stage::Tech),
            make_candidate("d", Stage::Rejected),
        ];

        let columns = partition_by_stage(&candidates);

        assert_eq!(columns.len(), Stage::ALL.len());
        assert_eq!(columns.iter().map(|c| c.stage).collect::<Vec<_>>(), Stage::ALL.to_vec());
        for candidate in &candidates {
            let hits: Vec<_> = columns
                .iter()
                .filter(|col| col.candidates.iter().any(|c| c.id == candidate.id))
                .collect();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].stage, candidate.stage);
        }
    }

    #[test]
    fn test_column_keeps_input_order() {
        let candidates = vec![
            make_candidate("z", Stage::Offer),
            make_candidate("a", Stage::Offer),
            make_candidate("m", Stage::Offer),
        ];
        let columns = partition_by_stage(&candidates);
        let offer = columns.iter().find(|c| c.stage == Stage::Offer).unwrap();
        let ids: Vec<_> = offer.candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_drag_to_other_stage_yields_one_update() {
        let candidates = vec![make_candidate("a", Stage::Applied), make_candidate("b", Stage::Screen)];
        let update = drag_end_update(&candidates, "a", Some(Stage::Hired));
        assert_eq!(update, Some(StageUpdate { id: "a".into(), stage: Stage::Hired }));
    }

    #[test]
    fn test_drag_to_same_stage_is_noop() {
        let candidates = vec![make_candidate("a", Stage::Screen)];
        assert_eq!(drag_end_update(&candidates, "a", Some(Stage::Screen)), None);
    }

    #[test]
    fn test_drop_outside_columns_is_noop() {
        let candidates = vec![make_candidate("a", Stage::Screen)];
        assert_eq!(drag_end_update(&candidates, "a", None), None);
    }

    #[test]
    fn test_unknown_candidate_is_noop() {
        let candidates = vec![make_candidate("a", Stage::Screen)];
        assert_eq!(drag_end_update(&candidates, "ghost", Some(Stage::Offer)), None);
    }

    #[test]
    fn test_board_view_states() {
        assert_eq!(BoardView::from_query(&QueryState::Loading), BoardView::Loading);
        assert_eq!(BoardView::from_query(&QueryState::Ready(vec![])), BoardView::Empty);
        assert_eq!(
            BoardView::from_query(&QueryState::Failed("offline".into())),
            BoardView::Failed("offline".into())
        );
        match BoardView::from_query(&QueryState::Ready(vec![make_candidate("a", Stage::Tech)])) {
            BoardView::Columns(columns) => assert_eq!(columns.len(), 6),
            other => panic!("expected columns, got {:?}", other),
        }
    }
}
