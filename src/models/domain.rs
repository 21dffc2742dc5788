use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Canonical student profile used by the matching engine
///
/// Built from a [`StudentRecord`](crate::models::StudentRecord) by
/// `StudentRecord::normalize`; the engine never sees the raw field-name
/// variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub courses: BTreeSet<String>,
    #[serde(default)]
    pub goals: BTreeSet<String>,
    #[serde(default)]
    pub availability: BTreeSet<String>,
    #[serde(default)]
    pub profile: ProfileDetails,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            courses: BTreeSet::new(),
            goals: BTreeSet::new(),
            availability: BTreeSet::new(),
            profile: ProfileDetails::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = courses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goals = goals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_availability<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Identity key: the identifier when present, otherwise the name
    pub fn key(&self) -> StudentKey {
        match &self.id {
            Some(id) => StudentKey::Id(id.clone()),
            None => StudentKey::Name(self.name.clone()),
        }
    }

    /// Whether `other` is this same student
    ///
    /// Identifiers are compared when both records carry one, names otherwise.
    #[inline]
    pub fn is_same_student(&self, other: &Student) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.name == other.name,
        }
    }
}

/// Free-text profile fields collected at signup; never used in scoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::NaiveDateTime>,
}

/// Identity of a student within one roster
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum StudentKey {
    Id(String),
    Name(String),
}

impl fmt::Display for StudentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentKey::Id(id) => write!(f, "#{}", id),
            StudentKey::Name(name) => f.write_str(name),
        }
    }
}

/// Scored match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub student: Student,
    pub score: f64,
    #[serde(rename = "sharedCourses")]
    pub shared_courses: BTreeSet<String>,
    #[serde(rename = "sharedAvailability")]
    pub shared_availability: BTreeSet<String>,
}

/// Aggregate summary of one student's matches across a roster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchStatistics {
    #[serde(rename = "totalUsers")]
    pub total_users: usize,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    #[serde(rename = "goodMatches")]
    pub good_matches: usize,
    #[serde(rename = "avgScore")]
    pub avg_score: f64,
    #[serde(rename = "bestMatchScore")]
    pub best_match_score: f64,
    #[serde(rename = "coursesWithMatches")]
    pub courses_with_matches: usize,
}

impl MatchStatistics {
    /// Summary for a student with nobody to match against
    pub fn empty(total_users: usize, courses_with_matches: usize) -> Self {
        Self {
            total_users,
            total_matches: 0,
            good_matches: 0,
            avg_score: 0.0,
            best_match_score: 0.0,
            courses_with_matches,
        }
    }
}

/// Scoring weights for the directional match score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub courses: f64,
    pub goals: f64,
    pub availability: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.courses + self.goals + self.availability
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            courses: 40.0,
            goals: 30.0,
            availability: 30.0,
        }
    }
}
