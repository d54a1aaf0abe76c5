use crate::models::Vote;
use crate::voting::{NomineeKey, VoteCount, VoteCounts};
use log::debug;
use std::collections::HashMap;

/// Count votes per nominee within each award category.
///
/// Each category's list keeps nominees in the order they were first seen in
/// `votes`, and each entry's `voters` keeps the nominators in input order.
pub fn aggregate_vote_counts(votes: &[Vote]) -> VoteCounts {
    let mut counts = VoteCounts::new();
    // Position of each nominee within its category list
    let mut positions: HashMap<(&str, NomineeKey), usize> = HashMap::new();

    for vote in votes {
        let nominee = NomineeKey::from_name(vote.nominee_name.as_deref());
        let category = counts.entry(vote.award_category_id.clone()).or_default();

        let key = (vote.award_category_id.as_str(), nominee);
        match positions.get(&key).copied() {
            Some(index) => {
                let existing = &mut category[index];
                existing.count += 1;
                existing.voters.push(vote.nominator_id.clone());
            }
            None => {
                category.push(VoteCount {
                    award_category_id: vote.award_category_id.clone(),
                    nominee: key.1.clone(),
                    count: 1,
                    voters: vec![vote.nominator_id.clone()],
                });
                positions.insert(key, category.len() - 1);
            }
        }
    }

    debug!(
        "Aggregated {} votes into {} categories",
        votes.len(),
        counts.len()
    );

    counts
}
