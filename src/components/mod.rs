//! UI Components
//!
//! Reusable Leptos components.

mod loading_spinner;
mod kanban_card;
mod kanban_column;
mod kanban_board;
mod candidate_timeline;
mod candidate_profile;

pub use loading_spinner::LoadingSpinner;
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use kanban_board::KanbanBoard;
pub use candidate_timeline::CandidateTimeline;
pub use candidate_profile::CandidateProfile;
