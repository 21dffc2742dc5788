use std::collections::HashSet;
use std::path::Path;
use crate::error::MatchError;
use crate::models::domain::Student;
use crate::models::requests::StudentRecord;

/// Ordered set of students considered in one matching run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Validate and normalize raw records into a roster
    ///
    /// Duplicate identifiers are rejected. Duplicate names are accepted with
    /// a warning: `match_all_students` keys by name and only keeps the last.
    pub fn from_records(records: Vec<StudentRecord>) -> Result<Self, MatchError> {
        let students = records
            .into_iter()
            .map(StudentRecord::normalize)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_students(students)
    }

    /// Build a roster from already canonical students
    pub fn from_students(students: Vec<Student>) -> Result<Self, MatchError> {
        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();

        for student in &students {
            if let Some(id) = &student.id {
                if !seen_ids.insert(id.as_str()) {
                    return Err(MatchError::DuplicateId(id.clone()));
                }
            }
            if !seen_names.insert(student.name.as_str()) {
                tracing::warn!(
                    "Duplicate student name in roster: {} (results keyed by name will keep only the last)",
                    student.name
                );
            }
        }

        tracing::debug!("Roster built with {} students", students.len());

        Ok(Self { students })
    }

    /// Parse a JSON array of student records
    pub fn from_json_str(json: &str) -> Result<Self, MatchError> {
        let records: Vec<StudentRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read and parse a JSON roster file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, MatchError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Three-student demonstration roster
    pub fn sample() -> Self {
        let alice = Student::new("Alice")
            .with_courses(["COMP 1701", "MATH 1200", "GNED 1101"])
            .with_goals(["Exam prep", "Assignments"])
            .with_availability(["Mon 10:00", "Mon 10:30", "Wed 11:00", "Fri 13:00"]);
        let bob = Student::new("Bob")
            .with_courses(["COMP 1701", "MATH 1200", "GNED 1101"])
            .with_goals(["Exam prep", "Assignments"])
            .with_availability(["Mon 10:00", "Mon 10:30", "Wed 11:00", "Fri 13:00"]);
        let charlie = Student::new("Charlie")
            .with_courses(["DATA 2721", "MATH 1200", "GNED 1401"])
            .with_goals(["Exam prep"])
            .with_availability(["Mon 10:00", "Wed 11:00", "Thu 14:30"]);

        Self {
            students: vec![alice, bob, charlie],
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}
