pub mod ballot;
pub mod config;
pub mod error;
pub mod models;
pub mod voting;

pub use ballot::{BallotBox, ReplaySummary, RevotePolicy, SubmitOutcome};
pub use error::{BallotError, ReportError, ValidationError};
pub use models::{
    AwardCategory, CategoryId, NominatorId, NomineeId, Vote, VoteId, VoteSubmission, VotingStatus,
};
