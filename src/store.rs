//! Global Application State Store
//!
//! Client-side cache of backend data, using Leptos reactive_stores for
//! fine-grained reactivity. All writes go through the helpers below.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::models::{Candidate, Job};
use crate::query::QueryState;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Bulk candidate list (one large page)
    pub candidates: QueryState<Vec<Candidate>>,
    /// Bulk job list
    pub jobs: QueryState<Vec<Job>>,
    /// Per-id fetches for candidates missing from the bulk list
    pub single_candidates: HashMap<String, QueryState<Option<Candidate>>>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a cached candidate by ID, wherever it is cached
pub fn store_update_candidate(store: &AppStore, updated: Candidate) {
    if let QueryState::Ready(list) = &mut *store.candidates().write() {
        if let Some(candidate) = list.iter_mut().find(|c| c.id == updated.id) {
            *candidate = updated.clone();
        }
    }
    if let Some(QueryState::Ready(Some(candidate))) = store.single_candidates().write().get_mut(&updated.id) {
        *candidate = updated;
    }
}

/// Mark a per-id fetch as started. Returns false when one is in flight or
/// has already succeeded; idle and failed entries are (re)fetched.
pub fn store_begin_single_fetch(store: &AppStore, id: &str) -> bool {
    let binding = store.single_candidates();
    let mut singles = binding.write();
    if matches!(singles.get(id), Some(QueryState::Loading | QueryState::Ready(_))) {
        return false;
    }
    singles.insert(id.to_string(), QueryState::Loading);
    true
}

/// Drop every per-id result so profiles resolve against fresh data
pub fn store_clear_single_candidates(store: &AppStore) {
    store.single_candidates().write().clear();
}

/// Single-fetch state for one id (`Idle` if never requested)
pub fn store_single_candidate(store: &AppStore, id: &str) -> QueryState<Option<Candidate>> {
    store.single_candidates().with(|m| m.get(id).cloned().unwrap_or_default())
}

// ========================
// Loaders
// ========================

/// Fetch the bulk candidate list into the store
pub fn load_candidates(store: AppStore, page_size: usize) {
    *store.candidates().write() = QueryState::Loading;
    store_clear_single_candidates(&store);
    spawn_local(async move {
        let result = commands::list_candidates(page_size).await;
        match &result {
            Ok(page) => log::info!("loaded {} candidates (backend total {:?})", page.data.len(), page.total),
            Err(e) => log::error!("candidate list failed: {}", e),
        }
        *store.candidates().write() = result.map(|page| page.data).into();
    });
}

/// Fetch the bulk job list into the store
pub fn load_jobs(store: AppStore, page_size: usize) {
    *store.jobs().write() = QueryState::Loading;
    spawn_local(async move {
        let result = commands::list_jobs(page_size).await;
        if let Err(e) = &result {
            log::warn!("job list failed: {}", e);
        }
        *store.jobs().write() = result.map(|page| page.data).into();
    });
}

/// Fetch one candidate by id unless it is already loading or loaded
pub fn fetch_single_candidate(store: AppStore, id: String) {
    if !store_begin_single_fetch(&store, &id) {
        return;
    }
    log::debug!("candidate {} not in bulk list, fetching directly", id);
    spawn_local(async move {
        let result = commands::get_candidate(&id).await;
        if let Err(e) = &result {
            log::warn!("fetching candidate {} failed: {}", id, e);
        }
        store.single_candidates().write().insert(id, result.into());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::make_candidate;
    use crate::models::Stage;

    fn new_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(AppState::default()))
    }

    #[test]
    fn test_update_replaces_list_entry() {
        let (_owner, store) = new_store();
        *store.candidates().write() = QueryState::Ready(vec![
            make_candidate("a", Stage::Applied),
            make_candidate("b", Stage::Screen),
        ]);

        store_update_candidate(&store, make_candidate("b", Stage::Offer));

        let list = store.candidates().get_untracked();
        let stages: Vec<_> = list.data().unwrap().iter().map(|c| (c.id.clone(), c.stage)).collect();
        assert_eq!(stages, vec![("a".to_string(), Stage::Applied), ("b".to_string(), Stage::Offer)]);
    }

    #[test]
    fn test_update_of_unknown_id_leaves_list_alone() {
        let (_owner, store) = new_store();
        let before = vec![make_candidate("a", Stage::Applied)];
        *store.candidates().write() = QueryState::Ready(before.clone());

        store_update_candidate(&store, make_candidate("ghost", Stage::Hired));

        assert_eq!(store.candidates().get_untracked(), QueryState::Ready(before));
        assert_eq!(store_single_candidate(&store, "ghost"), QueryState::Idle);
    }

    #[test]
    fn test_update_replaces_single_entry() {
        let (_owner, store) = new_store();
        store
            .single_candidates()
            .write()
            .insert("z".into(), QueryState::Ready(Some(make_candidate("z", Stage::Tech))));

        store_update_candidate(&store, make_candidate("z", Stage::Rejected));

        match store_single_candidate(&store, "z") {
            QueryState::Ready(Some(c)) => assert_eq!(c.stage, Stage::Rejected),
            other => panic!("expected ready entry, got {:?}", other),
        }
    }

    #[test]
    fn test_single_fetch_is_not_duplicated() {
        let (_owner, store) = new_store();
        assert!(store_begin_single_fetch(&store, "z"));
        assert_eq!(store_single_candidate(&store, "z"), QueryState::Loading);
        assert!(!store_begin_single_fetch(&store, "z"));

        store.single_candidates().write().insert("z".into(), QueryState::Ready(None));
        assert!(!store_begin_single_fetch(&store, "z"));
    }

    #[test]
    fn test_failed_single_fetch_is_retried() {
        let (_owner, store) = new_store();
        store.single_candidates().write().insert("z".into(), QueryState::Failed("net".into()));

        assert!(store_begin_single_fetch(&store, "z"));
        assert_eq!(store_single_candidate(&store, "z"), QueryState::Loading);
    }

    #[test]
    fn test_clearing_singles_resets_to_idle() {
        let (_owner, store) = new_store();
        store.single_candidates().write().insert("z".into(), QueryState::Ready(None));

        store_clear_single_candidates(&store);

        assert_eq!(store_single_candidate(&store, "z"), QueryState::Idle);
        assert!(store_begin_single_fetch(&store, "z"));
    }
}
