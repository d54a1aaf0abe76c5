use crate::models::{AwardCategory, CategoryId, Vote};
use crate::voting::{
    aggregate_vote_counts, LeaderboardEntry, Leaderboards, VoteCounts, LEADERBOARD_SIZE,
};
use serde::Serialize;
use std::collections::HashSet;

// Results for one award category, as shown on the awards page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResults {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_icon: String,
    pub total_votes: usize,
    pub top_3: Vec<LeaderboardEntry>,
    pub summary: String,
}

/// Rank the top nominees of every category by vote count.
///
/// Ties keep the order of `vote_counts` (the sort is stable). Percentages are
/// relative to the category's own total, not to all votes cast.
pub fn rank_top3(vote_counts: &VoteCounts) -> Leaderboards {
    vote_counts
        .iter()
        .map(|(category_id, counts)| {
            let total_votes: usize = counts.iter().map(|c| c.count).sum();

            let mut sorted: Vec<_> = counts.iter().collect();
            sorted.sort_by(|a, b| b.count.cmp(&a.count));

            let entries = sorted
                .into_iter()
                .take(LEADERBOARD_SIZE)
                .enumerate()
                .map(|(index, entry)| LeaderboardEntry {
                    rank: index + 1,
                    nominee: entry.nominee.clone(),
                    vote_count: entry.count,
                    percentage: percentage(entry.count, total_votes),
                })
                .collect();

            (category_id.clone(), entries)
        })
        .collect()
}

/// Top 3 results for every listed category, in listing order.
///
/// Categories without votes are included with an empty leaderboard. Votes for
/// categories missing from the listing are ignored here.
pub fn category_results(votes: &[Vote], categories: &[AwardCategory]) -> Vec<CategoryResults> {
    let leaderboards = rank_top3(&aggregate_vote_counts(votes));

    categories
        .iter()
        .map(|category| {
            let category_votes: Vec<&Vote> = votes
                .iter()
                .filter(|v| v.award_category_id == category.id)
                .collect();
            let voters: HashSet<_> = category_votes.iter().map(|v| &v.nominator_id).collect();
            let top_3 = leaderboards.get(&category.id).cloned().unwrap_or_default();
            let summary = format_summary(&top_3, voters.len());

            CategoryResults {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                category_icon: category.icon.clone(),
                total_votes: category_votes.len(),
                top_3,
                summary,
            }
        })
        .collect()
}

fn percentage(count: usize, total: usize) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

// Plain-text rendering of a leaderboard, winner in bold
fn format_summary(entries: &[LeaderboardEntry], voters: usize) -> String {
    if entries.is_empty() {
        return "No votes yet for this category.".to_string();
    }

    let mut summary = String::new();

    for entry in entries {
        let line = if entry.rank == 1 {
            format!(
                "**{}**: {} votes ({:.1}%)",
                entry.nominee, entry.vote_count, entry.percentage
            )
        } else {
            format!(
                "{}: {} votes ({:.1}%)",
                entry.nominee, entry.vote_count, entry.percentage
            )
        };

        summary.push_str(&line);
        summary.push('\n');
    }

    summary.push_str(&format!("\n{} voters participated.", voters));
    summary
}
