// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod statistics;

pub use filters::{filter_matches_by_course, filter_matches_by_time};
pub use matcher::{Matcher, DEFAULT_TOP_LIMIT, DEFAULT_TOP_N};
pub use scoring::{calculate_match_score, calculate_weighted_score, similarity};
pub use statistics::{summarize_matches, GOOD_MATCH_THRESHOLD, MATCH_THRESHOLD};
