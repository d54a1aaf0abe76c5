use crate::models::{AwardCategory, CategoryId, NominatorId, NomineeId, Vote};
use crate::voting::NomineeKey;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryVoteTotal {
    pub category_id: CategoryId,
    pub category_name: String,
    pub vote_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingStats {
    pub total_votes: usize,
    pub unique_voters: usize,
    pub unique_nominees: usize,
    pub categories_count: usize,
    pub votes_by_category: Vec<CategoryVoteTotal>,
}

pub fn votes_by_nominator<'a>(votes: &'a [Vote], nominator: &NominatorId) -> Vec<&'a Vote> {
    votes.iter().filter(|v| &v.nominator_id == nominator).collect()
}

/// Votes received by a nominee, matched on the stable nominee id.
pub fn votes_for_nominee<'a>(votes: &'a [Vote], nominee: &NomineeId) -> Vec<&'a Vote> {
    votes.iter().filter(|v| &v.nominee_id == nominee).collect()
}

/// Votes received under a display name. Only meaningful for guest nominees,
/// since two people can share a name.
pub fn votes_for_nominee_name<'a>(votes: &'a [Vote], name: &str) -> Vec<&'a Vote> {
    votes
        .iter()
        .filter(|v| v.nominee_name.as_deref() == Some(name))
        .collect()
}

pub fn has_voted_in_category(
    votes: &[Vote],
    nominator: &NominatorId,
    category: &CategoryId,
) -> bool {
    votes
        .iter()
        .any(|v| &v.nominator_id == nominator && &v.award_category_id == category)
}

pub fn total_votes(votes: &[Vote]) -> usize {
    votes.len()
}

pub fn unique_voters_count(votes: &[Vote]) -> usize {
    votes
        .iter()
        .map(|v| &v.nominator_id)
        .collect::<HashSet<_>>()
        .len()
}

// Distinct by grouping key, so every unnamed nominee counts once
pub fn unique_nominees_count(votes: &[Vote]) -> usize {
    votes
        .iter()
        .map(|v| NomineeKey::from_name(v.nominee_name.as_deref()))
        .collect::<HashSet<_>>()
        .len()
}

/// Overall statistics. Per-category totals follow the listing order of
/// `categories`; votes for unlisted categories still count toward the totals.
pub fn voting_stats(votes: &[Vote], categories: &[AwardCategory]) -> VotingStats {
    let votes_by_category = categories
        .iter()
        .map(|category| CategoryVoteTotal {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            vote_count: votes
                .iter()
                .filter(|v| v.award_category_id == category.id)
                .count(),
        })
        .collect();

    VotingStats {
        total_votes: total_votes(votes),
        unique_voters: unique_voters_count(votes),
        unique_nominees: unique_nominees_count(votes),
        categories_count: categories.len(),
        votes_by_category,
    }
}
