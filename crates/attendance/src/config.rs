use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use infra::repos::{FilterCriteria, TournamentTiming};
use infra::DEFAULT_ENDPOINT;

pub const DEFAULT_PAGE_SIZE: i32 = 345;
pub const DEFAULT_REGION: &str = "IN";
pub const DEFAULT_VIDEOGAME_IDS: &str = "1386";
/// 2025-04-01T00:00:00Z
pub const DEFAULT_AFTER_DATE: i64 = 1_743_465_600;
/// 2025-05-01T00:00:00Z
pub const DEFAULT_BEFORE_DATE: i64 = 1_746_057_600;
pub const DEFAULT_COUNT_TARGET: &str = "0f43507e";
pub const DEFAULT_STATS_PATH: &str = "stats.txt";

#[derive(Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub api_key: String,
    pub request_timeout: Option<Duration>,
    pub criteria: FilterCriteria,
    /// Identifier whose occurrences are reported after each run.
    pub count_target: String,
    pub stats_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source. Unset keys fall back to
    /// defaults; set but unparseable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("START_GG_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("START_GG_KEY must be set"))?;

        let request_timeout = match lookup("STARTGG_TIMEOUT_SECS") {
            Some(v) if !v.trim().is_empty() => Some(Duration::from_secs(
                v.trim()
                    .parse()
                    .with_context(|| format!("STARTGG_TIMEOUT_SECS is not a number: {v}"))?,
            )),
            _ => None,
        };

        let videogame_ids = parse_id_list(
            &lookup("VIDEOGAME_IDS").unwrap_or_else(|| DEFAULT_VIDEOGAME_IDS.to_string()),
        )?;

        let timing = match lookup("TOURNAMENT_TIMING") {
            Some(v) => TournamentTiming::from_str(&v).map_err(anyhow::Error::msg)?,
            None => TournamentTiming::Past,
        };

        let criteria = FilterCriteria {
            page_size: parse_or(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            region: lookup("REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            videogame_ids,
            after_date: parse_bound(&lookup, "AFTER_DATE", DEFAULT_AFTER_DATE)?,
            before_date: parse_bound(&lookup, "BEFORE_DATE", DEFAULT_BEFORE_DATE)?,
            timing,
        };

        Ok(Self {
            api_url: lookup("STARTGG_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
            request_timeout,
            criteria,
            count_target: lookup("COUNT_TARGET")
                .unwrap_or_else(|| DEFAULT_COUNT_TARGET.to_string()),
            stats_path: lookup("STATS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_PATH)),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {v}")),
        None => Ok(default),
    }
}

/// Date bounds: unset uses the default, an empty value disables the bound.
fn parse_bound<F>(lookup: &F, key: &str, default: i64) -> Result<Option<i64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key} must be epoch seconds: {v}")),
        None => Ok(Some(default)),
    }
}

fn parse_id_list(s: &str) -> Result<Vec<u64>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse()
                .with_context(|| format!("VIDEOGAME_IDS has an invalid id: {part}"))
        })
        .collect()
}
