//! Report configuration loaded from environment variables.
//!
//! Every setting has a default, so the report runs with no configuration
//! against `votes.json` and `categories.json` in the working directory.

use chrono::{DateTime, Utc};
use log::warn;
use std::path::PathBuf;

use crate::ballot::RevotePolicy;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// JSON array of votes, in submission order.
    /// Env: `VOTES_FILE`
    /// Default: `votes.json`
    pub votes_path: PathBuf,

    /// JSON array of award categories.
    /// Env: `CATEGORIES_FILE`
    /// Default: `categories.json`
    pub categories_path: PathBuf,

    /// Env: `REVOTE_POLICY` (`replace` or `reject`)
    /// Default: `replace`
    pub revote_policy: RevotePolicy,

    /// Env: `RESULTS_VISIBLE` (true/false)
    /// Default: `true`
    pub results_visible: bool,

    /// End of the voting window; votes stamped later are refused.
    /// Env: `VOTING_ENDS_AT` (RFC 3339)
    /// Default: none (window never closes)
    pub voting_ends_at: Option<DateTime<Utc>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            votes_path: PathBuf::from("votes.json"),
            categories_path: PathBuf::from("categories.json"),
            revote_policy: RevotePolicy::default(),
            results_visible: true,
            voting_ends_at: None,
        }
    }
}

impl ReportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("VOTES_FILE") {
            config.votes_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("CATEGORIES_FILE") {
            config.categories_path = PathBuf::from(path);
        }

        if let Some(val) = lookup("REVOTE_POLICY") {
            match val.parse() {
                Ok(policy) => config.revote_policy = policy,
                Err(e) => warn!("{}, using default ({:?})", e, config.revote_policy),
            }
        }

        if let Some(val) = lookup("RESULTS_VISIBLE") {
            config.results_visible = val != "false" && val != "0";
        }

        if let Some(val) = lookup("VOTING_ENDS_AT") {
            match DateTime::parse_from_rfc3339(&val) {
                Ok(ends_at) => config.voting_ends_at = Some(ends_at.with_timezone(&Utc)),
                Err(e) => warn!("Invalid VOTING_ENDS_AT ({}), voting window left open", e),
            }
        }

        config
    }
}
