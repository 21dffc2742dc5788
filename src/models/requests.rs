use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::error::MatchError;
use crate::models::domain::{ProfileDetails, Student};

/// Raw student record as supplied by the signup layer
///
/// Two naming schemes are in circulation for courses and availability
/// (`courses`/`subjects`, `study_times`/`availability`). Both are accepted
/// here and resolved once in [`StudentRecord::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StudentRecord {
    #[validate(length(min = 1))]
    #[serde(default, deserialize_with = "deserialize_student_id")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub courses: Option<Vec<String>>,
    #[serde(default)]
    pub subjects: Option<Vec<String>>,
    #[serde(default)]
    pub goals: Option<Vec<String>>,
    #[serde(default)]
    pub study_times: Option<Vec<String>>,
    #[serde(default)]
    pub availability: Option<Vec<String>>,
    #[serde(flatten)]
    pub profile: ProfileDetails,
}

impl StudentRecord {
    /// Validate the record and convert it into the canonical [`Student`] shape
    ///
    /// `courses` wins over `subjects` and `study_times` over `availability`
    /// when both are present. Missing categories become empty sets.
    pub fn normalize(self) -> Result<Student, MatchError> {
        self.validate()?;

        let courses = self.courses.or(self.subjects).unwrap_or_default();
        let availability = self.study_times.or(self.availability).unwrap_or_default();
        let goals = self.goals.unwrap_or_default();

        Ok(Student {
            id: self.id,
            name: self.name,
            courses: courses.into_iter().collect(),
            goals: goals.into_iter().collect(),
            availability: availability.into_iter().collect(),
            profile: self.profile,
        })
    }
}

/// Identifiers arrive either as strings or as integer row numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStudentId {
    Text(String),
    Number(i64),
}

fn deserialize_student_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawStudentId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawStudentId::Text(text) => text,
        RawStudentId::Number(number) => number.to_string(),
    }))
}
