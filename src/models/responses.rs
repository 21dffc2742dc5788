use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchEntry, MatchStatistics, StudentKey};

/// Per-student match report handed to presentation code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub student: StudentKey,
    pub name: String,
    pub matches: Vec<MatchEntry>,
    pub statistics: MatchStatistics,
}

impl MatchReport {
    /// Title line for text output; carries the identifier when there is one
    pub fn heading(&self) -> String {
        match &self.student {
            StudentKey::Id(_) => format!("Best matches for {} ({}):", self.name, self.student),
            StudentKey::Name(_) => format!("Best matches for {}:", self.student),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_report(student: StudentKey, name: &str) -> MatchReport {
        MatchReport {
            student,
            name: name.to_string(),
            matches: vec![],
            statistics: MatchStatistics::empty(0, 0),
        }
    }

    #[test]
    fn test_heading_with_id() {
        let report = create_report(StudentKey::Id("7".to_string()), "Alex");
        assert_eq!(report.heading(), "Best matches for Alex (#7):");
    }

    #[test]
    fn test_heading_without_id() {
        let report = create_report(StudentKey::Name("Alice".to_string()), "Alice");
        assert_eq!(report.heading(), "Best matches for Alice:");
    }
}
