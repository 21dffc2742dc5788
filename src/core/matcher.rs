use std::collections::BTreeMap;
use crate::models::{Student, StudentKey, MatchEntry, MatchStatistics, MatchReport, ScoringWeights};
use crate::core::{
    scoring::{calculate_weighted_score, shared},
    statistics::{summarize_matches, MATCH_THRESHOLD},
};

/// Default number of matches kept per student by `match_all_students`
pub const DEFAULT_TOP_N: usize = 3;

/// Default number of matches returned by `get_top_matches`
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Main matching orchestrator
///
/// Holds only scoring weights and the default threshold; every roster is
/// passed in per call, so one matcher can serve any number of runs.
///
/// # Pipeline
/// 1. Self exclusion (identifier, else name)
/// 2. Directional scoring
/// 3. Threshold filtering
/// 4. Stable ranking by score
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: f64,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            min_score: MATCH_THRESHOLD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Override the threshold used by `match_all_students`
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Find and rank every roster member scoring at least `min_score`
    ///
    /// # Arguments
    /// * `current` - The student looking for partners
    /// * `roster` - All students in this run (may include `current`)
    /// * `min_score` - Inclusive lower bound on the score
    ///
    /// # Returns
    /// Matches sorted by descending score; ties keep roster order
    pub fn find_matches(&self, current: &Student, roster: &[Student], min_score: f64) -> Vec<MatchEntry> {
        let mut matches: Vec<MatchEntry> = roster
            .iter()
            .filter(|other| !current.is_same_student(other))
            .filter_map(|other| {
                let score = calculate_weighted_score(current, other, &self.weights);

                if score >= min_score {
                    Some(MatchEntry {
                        student: other.clone(),
                        score,
                        shared_courses: shared(&current.courses, &other.courses),
                        shared_availability: shared(&current.availability, &other.availability),
                    })
                } else {
                    None
                }
            })
            .collect();

        // Vec::sort_by is stable
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Found {} matches for {} (min_score: {})",
            matches.len(),
            current.name,
            min_score
        );

        matches
    }

    /// Best `limit` matches regardless of threshold
    pub fn get_top_matches(&self, current: &Student, roster: &[Student], limit: usize) -> Vec<MatchEntry> {
        let mut matches = self.find_matches(current, roster, 0.0);
        matches.truncate(limit);
        matches
    }

    /// Summary statistics for one student across the roster
    pub fn get_match_statistics(&self, current: &Student, roster: &[Student]) -> MatchStatistics {
        let matches = self.find_matches(current, roster, 0.0);
        let total_users = roster.len().saturating_sub(1);

        summarize_matches(&matches, total_users, current.courses.len())
    }

    /// Top `top_n` matches for every student, keyed by name
    ///
    /// Students sharing a name overwrite each other; the last one in roster
    /// order wins. Use [`Matcher::match_all_students_by_key`] to keep all of
    /// them.
    pub fn match_all_students(&self, roster: &[Student], top_n: usize) -> BTreeMap<String, Vec<MatchEntry>> {
        let mut results = BTreeMap::new();
        for student in roster {
            results.insert(student.name.clone(), self.top_n_for(student, roster, top_n));
        }
        results
    }

    /// Top `top_n` matches for every student, in roster order
    pub fn match_all_students_by_key(&self, roster: &[Student], top_n: usize) -> Vec<(StudentKey, Vec<MatchEntry>)> {
        roster
            .iter()
            .map(|student| (student.key(), self.top_n_for(student, roster, top_n)))
            .collect()
    }

    /// Matches and statistics for every student, in roster order
    pub fn build_reports(&self, roster: &[Student], top_n: usize) -> Vec<MatchReport> {
        roster
            .iter()
            .map(|student| MatchReport {
                student: student.key(),
                name: student.name.clone(),
                matches: self.top_n_for(student, roster, top_n),
                statistics: self.get_match_statistics(student, roster),
            })
            .collect()
    }

    fn top_n_for(&self, student: &Student, roster: &[Student], top_n: usize) -> Vec<MatchEntry> {
        let mut matches = self.find_matches(student, roster, self.min_score);
        matches.truncate(top_n);
        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
