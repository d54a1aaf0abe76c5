use thiserror::Error;

use crate::models::CategoryId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyId(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BallotError {
    #[error("Voting is currently closed")]
    VotingClosed,

    #[error("Unknown award category: {0}")]
    UnknownCategory(CategoryId),

    #[error("Nominator has already voted in category {0}")]
    AlreadyVoted(CategoryId),

    #[error("Results are not visible yet")]
    ResultsHidden,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ballot error: {0}")]
    Ballot(#[from] BallotError),
}
