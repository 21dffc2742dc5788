// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod roster;

pub use domain::{Student, ProfileDetails, StudentKey, MatchEntry, MatchStatistics, ScoringWeights};
pub use requests::StudentRecord;
pub use responses::MatchReport;
pub use roster::Roster;
