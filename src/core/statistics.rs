use crate::core::scoring::round_to;
use crate::models::{MatchEntry, MatchStatistics};

/// Score at which a pairing counts as a match
pub const MATCH_THRESHOLD: f64 = 20.0;

/// Score at which a match counts as a good one
pub const GOOD_MATCH_THRESHOLD: f64 = 50.0;

/// Summarize an unfiltered list of scored matches
///
/// `total_users` is the number of peers considered and `course_count` the
/// size of the querying student's course set.
pub fn summarize_matches(
    matches: &[MatchEntry],
    total_users: usize,
    course_count: usize,
) -> MatchStatistics {
    if matches.is_empty() {
        return MatchStatistics::empty(total_users, course_count);
    }

    let total_matches = matches.iter().filter(|m| m.score >= MATCH_THRESHOLD).count();
    let good_matches = matches.iter().filter(|m| m.score >= GOOD_MATCH_THRESHOLD).count();
    let sum: f64 = matches.iter().map(|m| m.score).sum();
    let best_match_score = matches
        .iter()
        .map(|m| m.score)
        .fold(f64::MIN, f64::max);

    MatchStatistics {
        total_users,
        total_matches,
        good_matches,
        avg_score: round_to(sum / matches.len() as f64, 1),
        best_match_score,
        courses_with_matches: course_count,
    }
}
