//! Persistence adapters — append-only feedback log and the single style
//! profile document. Both sit behind traits so the engine can run against
//! in-memory stores.

pub mod feedback_log;
pub mod path_utils;
pub mod profile_store;

pub use feedback_log::{FeedbackStore, JsonlFeedbackStore};
pub use profile_store::{JsonProfileStore, ProfileStore};
