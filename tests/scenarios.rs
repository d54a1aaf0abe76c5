use elevate_awards::voting::{aggregate_vote_counts, rank_top3, NomineeKey, LEADERBOARD_SIZE};
use elevate_awards::{CategoryId, Vote};
use serde_json::json;
use std::time::Instant;

fn votes_from(entries: &[(&str, &str, Option<&str>)]) -> Vec<Vote> {
    let raw: Vec<_> = entries
        .iter()
        .enumerate()
        .map(|(i, (category, nominator, nominee))| {
            json!({
                "id": format!("v{}", i),
                "award_category_id": category,
                "nominator_id": nominator,
                "nominee_id": format!("id-{}", nominee.unwrap_or("guest")),
                "nominee_name": nominee,
                "timestamp": "2025-03-01T09:00:00Z"
            })
        })
        .collect();
    serde_json::from_value(json!(raw)).unwrap()
}

fn cat(id: &str) -> CategoryId {
    CategoryId::new(id).unwrap()
}

#[test]
fn test_scenario_a_simple_majority() {
    let votes = votes_from(&[
        ("cat1", "u1", Some("Alice")),
        ("cat1", "u2", Some("Bob")),
        ("cat1", "u3", Some("Alice")),
    ]);

    let counts = aggregate_vote_counts(&votes);
    let cat1 = &counts[&cat("cat1")];
    assert_eq!(cat1.len(), 2);
    assert_eq!(cat1[0].nominee.to_string(), "Alice");
    assert_eq!(cat1[0].count, 2);
    assert_eq!(cat1[1].nominee.to_string(), "Bob");
    assert_eq!(cat1[1].count, 1);

    let board = &rank_top3(&counts)[&cat("cat1")];
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[0].nominee.to_string(), "Alice");
    assert_eq!(board[0].vote_count, 2);
    assert!((board[0].percentage - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(board[1].rank, 2);
    assert_eq!(board[1].vote_count, 1);
    assert!((board[1].percentage - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_scenario_b_empty_input() {
    let counts = aggregate_vote_counts(&[]);
    assert!(counts.is_empty());
    assert!(rank_top3(&counts).is_empty());
}

#[test]
fn test_scenario_c_missing_nominee_name() {
    let votes = votes_from(&[("cat2", "u1", None)]);
    let counts = aggregate_vote_counts(&votes);
    let cat2 = &counts[&cat("cat2")];

    assert_eq!(cat2.len(), 1);
    assert_eq!(cat2[0].nominee, NomineeKey::Unknown);
    assert_eq!(cat2[0].nominee.to_string(), "Unknown Nominee");
    assert_eq!(cat2[0].count, 1);
}

#[test]
fn test_scenario_d_full_tie_keeps_first_three() {
    let votes = votes_from(&[
        ("cat3", "u1", Some("A")),
        ("cat3", "u2", Some("B")),
        ("cat3", "u3", Some("C")),
        ("cat3", "u4", Some("D")),
        ("cat3", "u5", Some("E")),
    ]);

    let board = &rank_top3(&aggregate_vote_counts(&votes))[&cat("cat3")];
    let names: Vec<_> = board.iter().map(|e| e.nominee.to_string()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert!(board.iter().all(|e| (e.percentage - 20.0).abs() < 1e-9));
}

#[test]
fn test_scenario_e_categories_are_independent() {
    let votes = votes_from(&[
        ("cat1", "u1", Some("Alice")),
        ("cat2", "u1", Some("Alice")),
        ("cat2", "u2", Some("Alice")),
        ("cat1", "u2", Some("Bob")),
        ("cat2", "u3", Some("Alice")),
    ]);

    let counts = aggregate_vote_counts(&votes);
    let alice_in = |id: &str| {
        counts[&cat(id)]
            .iter()
            .find(|c| c.nominee.to_string() == "Alice")
            .map(|c| c.count)
    };
    assert_eq!(alice_in("cat1"), Some(1));
    assert_eq!(alice_in("cat2"), Some(3));

    let boards = rank_top3(&counts);
    assert!((boards[&cat("cat1")][0].percentage - 50.0).abs() < 1e-9);
    assert!((boards[&cat("cat2")][0].percentage - 100.0).abs() < 1e-9);
}

#[test]
fn test_aggregation_is_idempotent() {
    let votes = votes_from(&[
        ("cat1", "u1", Some("Alice")),
        ("cat1", "u2", None),
        ("cat2", "u3", Some("Bob")),
        ("cat1", "u4", Some("Alice")),
    ]);

    let first = rank_top3(&aggregate_vote_counts(&votes));
    let second = rank_top3(&aggregate_vote_counts(&votes));
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_full_breakdown_percentages_sum_to_100() {
    let names = ["A", "B", "C", "D", "E", "F", "G"];
    let entries: Vec<_> = (0..50)
        .map(|i| ("cat1", "voter", Some(names[(i * i) % names.len()])))
        .collect();
    let votes = votes_from(&entries);
    let counts = aggregate_vote_counts(&votes);

    let total: usize = counts[&cat("cat1")].iter().map(|c| c.count).sum();
    assert_eq!(total, 50);
    let full: f64 = counts[&cat("cat1")]
        .iter()
        .map(|c| c.count as f64 / total as f64 * 100.0)
        .sum();
    assert!((full - 100.0).abs() < 1e-9);

    let board = &rank_top3(&counts)[&cat("cat1")];
    assert_eq!(board.len(), LEADERBOARD_SIZE);
    assert!(board.windows(2).all(|w| w[0].vote_count >= w[1].vote_count));
    assert!(board.iter().map(|e| e.percentage).sum::<f64>() <= 100.0 + 1e-9);
}

#[test]
fn test_recompute_on_large_volume() {
    let nominators: Vec<String> = (0..5_000).map(|i| format!("u{}", i)).collect();
    let nominees: Vec<String> = (0..200).map(|i| format!("n{}", i)).collect();
    let entries: Vec<_> = nominators
        .iter()
        .enumerate()
        .map(|(i, u)| {
            let category = if i % 2 == 0 { "cat1" } else { "cat2" };
            (category, u.as_str(), Some(nominees[i % nominees.len()].as_str()))
        })
        .collect();
    let votes = votes_from(&entries);

    let started = Instant::now();
    for _ in 0..10 {
        let boards = rank_top3(&aggregate_vote_counts(&votes));
        assert_eq!(boards.len(), 2);
    }
    // Ten full recomputes over 5k votes should stay well under a UI frame budget each
    assert!(started.elapsed().as_secs() < 5);
}
