//! Study Match - partner matching engine for student rosters
//!
//! This library scores how well students fit each other as study partners
//! from their courses, goals and availability, and ranks the results.
//! Every operation is a pure function of the roster passed in.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{Matcher, calculate_match_score, calculate_weighted_score, similarity, filter_matches_by_course, filter_matches_by_time};
pub use crate::error::MatchError;
pub use crate::models::{Student, StudentRecord, StudentKey, MatchEntry, MatchStatistics, MatchReport, Roster, ScoringWeights};
