// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod highlight;
pub mod history;
pub mod lexicon;
pub mod model;
pub mod normalize;
pub mod report;
pub mod sentiment;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{analyze, tier, AnalysisResult, Label, Tier};
pub use crate::api::{router, AppState};
pub use crate::model::AbuseModel;
pub use crate::sentiment::Sentiment;
