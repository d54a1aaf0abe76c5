use chrono::{DateTime, Utc};
use log::{info, warn};
use std::str::FromStr;

use crate::error::BallotError;
use crate::models::{AwardCategory, Vote, VoteSubmission, VotingStatus};
use crate::voting::{self, CategoryResults};

/// What happens when a nominator votes again in a category they already voted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevotePolicy {
    /// Refuse the new vote.
    Reject,
    /// Drop the earlier vote and keep the new one.
    #[default]
    Replace,
}

impl FromStr for RevotePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(RevotePolicy::Reject),
            "replace" => Ok(RevotePolicy::Replace),
            other => Err(format!("Unknown revote policy: {}", other)),
        }
    }
}

/// Counts from replaying a stored ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(Vote),
    Replaced { previous: Vote, vote: Vote },
}

/// In-memory ledger of cast votes for one voting round.
///
/// Owns the category listing, the votes in submission order and the voting
/// status. All aggregation runs over `votes()`.
pub struct BallotBox {
    categories: Vec<AwardCategory>,
    votes: Vec<Vote>,
    status: VotingStatus,
    policy: RevotePolicy,
}

impl BallotBox {
    pub fn new(categories: Vec<AwardCategory>, policy: RevotePolicy) -> Self {
        Self {
            categories,
            votes: Vec::new(),
            status: VotingStatus::default(),
            policy,
        }
    }

    pub fn categories(&self) -> &[AwardCategory] {
        &self.categories
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    pub fn status(&self) -> &VotingStatus {
        &self.status
    }

    pub fn policy(&self) -> RevotePolicy {
        self.policy
    }

    pub fn open_voting(&mut self, ends_at: Option<DateTime<Utc>>, updated_by: Option<String>) {
        self.status.is_voting_open = true;
        self.status.ends_at = ends_at;
        self.touch(updated_by);
        info!("Voting opened");
    }

    pub fn close_voting(&mut self, updated_by: Option<String>) {
        self.status.is_voting_open = false;
        self.touch(updated_by);
        info!("Voting closed");
    }

    pub fn set_results_visible(&mut self, visible: bool, updated_by: Option<String>) {
        self.status.results_visible = visible;
        self.touch(updated_by);
    }

    /// Close voting once its end time has passed. Returns true if this call closed it.
    pub fn close_if_expired(&mut self, now: DateTime<Utc>) -> bool {
        if self.status.is_voting_open && self.status.is_expired(now) {
            info!("Voting window ended at {:?}, closing", self.status.ends_at);
            self.close_voting(None);
            return true;
        }
        false
    }

    /// Cast a new vote. Voting must be open and the category must be listed.
    pub fn submit(&mut self, submission: VoteSubmission) -> Result<SubmitOutcome, BallotError> {
        self.record(Vote::new(submission))
    }

    /// Record an already-identified vote, e.g. when replaying a stored ledger.
    pub fn record(&mut self, vote: Vote) -> Result<SubmitOutcome, BallotError> {
        if !self.status.is_voting_open {
            warn!("Rejected vote {} from {}: voting is closed", vote.id, vote.nominator_id);
            return Err(BallotError::VotingClosed);
        }

        if !self.categories.iter().any(|c| c.id == vote.award_category_id) {
            warn!(
                "Rejected vote {} from {}: unknown category {}",
                vote.id, vote.nominator_id, vote.award_category_id
            );
            return Err(BallotError::UnknownCategory(vote.award_category_id));
        }

        let existing = self.votes.iter().position(|v| {
            v.nominator_id == vote.nominator_id && v.award_category_id == vote.award_category_id
        });

        match (existing, self.policy) {
            (Some(_), RevotePolicy::Reject) => {
                warn!(
                    "Rejected vote {} from {}: already voted in {}",
                    vote.id, vote.nominator_id, vote.award_category_id
                );
                Err(BallotError::AlreadyVoted(vote.award_category_id))
            }
            (Some(index), RevotePolicy::Replace) => {
                let previous = self.votes.remove(index);
                info!(
                    "Vote {} from {} in {} replaces {}",
                    vote.id, vote.nominator_id, vote.award_category_id, previous.id
                );
                self.votes.push(vote.clone());
                Ok(SubmitOutcome::Replaced { previous, vote })
            }
            (None, _) => {
                info!(
                    "Vote {} from {} in {} accepted",
                    vote.id, vote.nominator_id, vote.award_category_id
                );
                self.votes.push(vote.clone());
                Ok(SubmitOutcome::Accepted(vote))
            }
        }
    }

    /// Record stored votes in order. Votes stamped after the voting window's
    /// end are refused one by one; the window itself is left open, so input
    /// order does not matter.
    pub fn replay(&mut self, votes: impl IntoIterator<Item = Vote>) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for vote in votes {
            if self.status.is_expired(vote.timestamp) {
                warn!(
                    "Rejected vote {} from {}: cast at {} after voting ended",
                    vote.id, vote.nominator_id, vote.timestamp
                );
                summary.rejected += 1;
                continue;
            }

            match self.record(vote) {
                Ok(_) => summary.accepted += 1,
                Err(_) => summary.rejected += 1,
            }
        }

        summary
    }

    /// Top 3 results per listed category, once results have been made visible.
    pub fn results(&self) -> Result<Vec<CategoryResults>, BallotError> {
        if !self.status.results_visible {
            return Err(BallotError::ResultsHidden);
        }
        Ok(voting::category_results(&self.votes, &self.categories))
    }

    fn touch(&mut self, updated_by: Option<String>) {
        self.status.updated_at = Utc::now();
        self.status.updated_by = updated_by;
    }
}
