//! Request State
//!
//! The state of one fetch as seen by the views.

use crate::error::ApiResult;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Not requested yet
    Idle,
    Loading,
    Ready(T),
    /// Fetch failed; holds the error message
    Failed(String),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

impl<T> QueryState<T> {
    /// Idle or in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Idle | QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> From<ApiResult<T>> for QueryState<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => QueryState::Ready(data),
            Err(e) => QueryState::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_pending_states() {
        assert!(QueryState::<u32>::Idle.is_pending());
        assert!(QueryState::<u32>::Loading.is_pending());
        assert!(!QueryState::Ready(1).is_pending());
        assert!(!QueryState::<u32>::Failed("boom".into()).is_pending());
    }

    #[test]
    fn test_from_result_keeps_error_message() {
        let err: ApiResult<u32> = Err(ApiError::Invoke {
            command: "list_candidates",
            message: "database locked".into(),
        });
        let state = QueryState::from(err);
        assert_eq!(
            state,
            QueryState::Failed("Backend rejected 'list_candidates': database locked".into())
        );
        assert_eq!(QueryState::from(Ok::<_, ApiError>(3)).data(), Some(&3));
    }
}
