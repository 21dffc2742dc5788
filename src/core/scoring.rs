use std::collections::BTreeSet;
use crate::models::{Student, ScoringWeights};

/// Calculate the directional match score (0-100) of `candidate` for `student`
///
/// Scoring formula, with default weights:
/// score = (
///     shared_courses / own_courses * 40 +
///     shared_goals / own_goals * 30 +
///     shared_slots / own_slots * 30
/// )
///
/// Each ratio is normalized by `student`'s own set size, so the score answers
/// "how well does `candidate` cover what `student` is looking for" and is not
/// symmetric.
pub fn calculate_match_score(student: &Student, candidate: &Student) -> f64 {
    calculate_weighted_score(student, candidate, &ScoringWeights::default())
}

/// Directional match score with custom category weights
pub fn calculate_weighted_score(
    student: &Student,
    candidate: &Student,
    weights: &ScoringWeights,
) -> f64 {
    let course_score = coverage(&student.courses, &candidate.courses) * weights.courses;
    let goal_score = coverage(&student.goals, &candidate.goals) * weights.goals;
    let time_score = coverage(&student.availability, &candidate.availability) * weights.availability;

    let total_score = course_score + goal_score + time_score;

    round_to(total_score.min(100.0).max(0.0), 2)
}

/// Symmetric overlap measure (0-100)
///
/// For every category populated on both sides, the overlap is the shared
/// count over the mean of both set sizes. Categories missing on either side
/// are skipped; the result is the mean over the compared categories.
pub fn similarity(a: &Student, b: &Student) -> f64 {
    let categories = [
        (&a.courses, &b.courses),
        (&a.goals, &b.goals),
        (&a.availability, &b.availability),
    ];

    let mut total = 0.0;
    let mut compared = 0usize;

    for (left, right) in categories {
        if left.is_empty() || right.is_empty() {
            continue;
        }
        let shared = left.intersection(right).count() as f64;
        let mean_size = (left.len() + right.len()) as f64 / 2.0;
        total += shared / mean_size * 100.0;
        compared += 1;
    }

    if compared == 0 {
        return 0.0;
    }

    round_to(total / compared as f64, 2)
}

/// Elements present in both sets
#[inline]
pub fn shared(left: &BTreeSet<String>, right: &BTreeSet<String>) -> BTreeSet<String> {
    left.intersection(right).cloned().collect()
}

/// Fraction (0-1) of `own` also found in `other`; 0 when `own` is empty
#[inline]
fn coverage(own: &BTreeSet<String>, other: &BTreeSet<String>) -> f64 {
    if own.is_empty() {
        return 0.0;
    }
    own.intersection(other).count() as f64 / own.len() as f64
}

/// Round to `decimals` places, ties to even on the exact binary value
///
/// Goes through decimal formatting, which is correctly rounded, so 5.625
/// becomes 5.62 where `(x * 100.0).round() / 100.0` would give 5.63.
#[inline]
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
