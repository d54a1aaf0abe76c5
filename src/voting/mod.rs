pub mod leaderboard;
pub mod stats;
pub mod tally;

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{CategoryId, NominatorId};

pub use leaderboard::{category_results, rank_top3, CategoryResults};
pub use stats::{
    has_voted_in_category, total_votes, unique_nominees_count, unique_voters_count,
    votes_by_nominator, votes_for_nominee, votes_for_nominee_name, voting_stats,
    CategoryVoteTotal, VotingStats,
};
pub use tally::aggregate_vote_counts;

pub const UNKNOWN_NOMINEE: &str = "Unknown Nominee";

/// Maximum number of entries in a category leaderboard.
pub const LEADERBOARD_SIZE: usize = 3;

pub type VoteCounts = BTreeMap<CategoryId, Vec<VoteCount>>;
pub type Leaderboards = BTreeMap<CategoryId, Vec<LeaderboardEntry>>;

/// Grouping key for a nominee within a category.
///
/// Votes without a display name group under `Unknown`, which renders as
/// "Unknown Nominee" but never merges with a nominee literally named that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NomineeKey {
    Named(String),
    Unknown,
}

impl NomineeKey {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(name) if !name.is_empty() => NomineeKey::Named(name.to_string()),
            _ => NomineeKey::Unknown,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            NomineeKey::Named(name) => name,
            NomineeKey::Unknown => UNKNOWN_NOMINEE,
        }
    }
}

impl fmt::Display for NomineeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for NomineeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

// Tally of votes for one nominee within one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteCount {
    pub award_category_id: CategoryId,
    pub nominee: NomineeKey,
    pub count: usize,
    pub voters: Vec<NominatorId>,
}

// One ranked position (1st to 3rd) in a category's results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub nominee: NomineeKey,
    pub vote_count: usize,
    pub percentage: f64,
}
