use crate::models::MatchEntry;

/// Keep matches whose student takes `course`
#[inline]
pub fn filter_matches_by_course(matches: &[MatchEntry], course: &str) -> Vec<MatchEntry> {
    matches
        .iter()
        .filter(|entry| entry.student.courses.contains(course))
        .cloned()
        .collect()
}

/// Keep matches whose student is available in `slot`
#[inline]
pub fn filter_matches_by_time(matches: &[MatchEntry], slot: &str) -> Vec<MatchEntry> {
    matches
        .iter()
        .filter(|entry| entry.student.availability.contains(slot))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Student;
    use std::collections::BTreeSet;

    fn create_entry(name: &str, courses: &[&str], slots: &[&str], score: f64) -> MatchEntry {
        MatchEntry {
            student: Student::new(name)
                .with_courses(courses.iter().copied())
                .with_availability(slots.iter().copied()),
            score,
            shared_courses: BTreeSet::new(),
            shared_availability: BTreeSet::new(),
        }
    }

    fn create_matches() -> Vec<MatchEntry> {
        vec![
            create_entry("Bob", &["CS101", "MATH201"], &["Morning"], 90.0),
            create_entry("Cara", &["PHYS101"], &["Night"], 60.0),
            create_entry("Dev", &["CS101"], &["Night"], 30.0),
        ]
    }

    #[test]
    fn test_filter_by_course_keeps_order() {
        let filtered = filter_matches_by_course(&create_matches(), "CS101");

        let names: Vec<&str> = filtered.iter().map(|e| e.student.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Dev"]);
    }

    #[test]
    fn test_filter_by_time() {
        let filtered = filter_matches_by_time(&create_matches(), "Night");

        let names: Vec<&str> = filtered.iter().map(|e| e.student.name.as_str()).collect();
        assert_eq!(names, vec!["Cara", "Dev"]);
    }

    #[test]
    fn test_filter_unknown_values_empty() {
        assert!(filter_matches_by_course(&create_matches(), "HIST999").is_empty());
        assert!(filter_matches_by_time(&create_matches(), "Sun 23:00").is_empty());
    }
}
