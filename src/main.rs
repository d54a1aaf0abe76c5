use elevate_awards::config::ReportConfig;
use elevate_awards::voting::voting_stats;
use elevate_awards::{AwardCategory, BallotBox, BallotError, ReportError, Vote};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ReportError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn run(config: &ReportConfig) -> Result<(), ReportError> {
    let categories: Vec<AwardCategory> = load_json(&config.categories_path)?;
    let votes: Vec<Vote> = load_json(&config.votes_path)?;
    info!(
        "Loaded {} categories from {} and {} votes from {}",
        categories.len(),
        config.categories_path.display(),
        votes.len(),
        config.votes_path.display()
    );

    // Replay the stored ledger through the same rules a live submission follows
    let mut ballot = BallotBox::new(categories, config.revote_policy);
    ballot.open_voting(config.voting_ends_at, None);

    let summary = ballot.replay(votes);
    if summary.rejected > 0 {
        warn!("{} votes were rejected during replay", summary.rejected);
    }

    ballot.set_results_visible(config.results_visible, None);
    info!(
        "{} votes accepted, {} counted after revotes, {} rejected",
        summary.accepted,
        ballot.votes().len(),
        summary.rejected
    );

    match ballot.results() {
        Ok(results) => {
            for result in results {
                println!("{} {}", result.category_icon, result.category_name);
                println!("{}\n", result.summary);
            }
        }
        Err(BallotError::ResultsHidden) => info!("Results are hidden, printing statistics only"),
        Err(e) => return Err(e.into()),
    }

    let stats = voting_stats(ballot.votes(), ballot.categories());
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    // Initialize logging
    env_logger::init();

    let config = ReportConfig::from_env();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to build awards report: {}", e);
            ExitCode::FAILURE
        }
    }
}
