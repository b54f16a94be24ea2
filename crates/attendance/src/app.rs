use std::io::{self, Write};

use chrono::Utc;
use tracing::{error, info, warn};

use infra::repos::{AttendanceLog, FilterCriteria, ParticipantRepo, TournamentRepo};
use infra::{Roster, RunRecord, StartggClient};

use crate::config::AppConfig;
use crate::error::RunError;
use crate::report::{write_listing, write_occurrences};
use crate::services::{ParticipantSource, RosterService, RosterSink, TournamentSource};

/// Outcome of one completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub roster: Roster,
    pub target: String,
    pub target_occurrences: usize,
    /// False when the attendance log could not be written.
    pub persisted: bool,
}

pub struct Driver<T, P, S> {
    roster_service: RosterService<T, P>,
    sink: S,
    count_target: String,
}

pub type LiveDriver =
    Driver<TournamentRepo<StartggClient>, ParticipantRepo<StartggClient>, AttendanceLog>;

impl<T, P, S> Driver<T, P, S>
where
    T: TournamentSource,
    P: ParticipantSource,
    S: RosterSink,
{
    pub fn new(
        roster_service: RosterService<T, P>,
        sink: S,
        count_target: impl Into<String>,
    ) -> Self {
        Self {
            roster_service,
            sink,
            count_target: count_target.into(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Accumulate, print the listing to `out`, then append the record.
    ///
    /// A discovery failure returns before anything is printed or written.
    /// Failing to print or to append is logged but does not fail the run;
    /// the roster is still returned and [`RunSummary::persisted`] reports
    /// whether the log was written.
    pub async fn run<W: Write>(
        &self,
        criteria: &FilterCriteria,
        out: &mut W,
    ) -> Result<RunSummary, RunError> {
        let roster = self.roster_service.accumulate(criteria).await?;

        let target_occurrences = roster.occurrences(&self.count_target);
        if let Err(e) = print_report(out, &roster, &self.count_target, target_occurrences) {
            warn!("Failed to print attendee list: {}", e);
        }

        let record = RunRecord::new(Utc::now(), roster);
        let persisted = match self.sink.append(&record).await {
            Ok(()) => {
                info!("Appended {} entries to the attendance log", record.roster.len());
                true
            }
            Err(e) => {
                error!("Error writing attendance log: {}", e);
                false
            }
        };

        Ok(RunSummary {
            roster: record.roster,
            target: self.count_target.clone(),
            target_occurrences,
            persisted,
        })
    }
}

fn print_report<W: Write>(
    out: &mut W,
    roster: &Roster,
    target: &str,
    occurrences: usize,
) -> io::Result<()> {
    write_listing(out, roster)?;
    write_occurrences(out, target, occurrences)?;
    out.flush()
}

/// Wire the live client, repositories and log from `config`.
pub fn build_driver(config: &AppConfig) -> anyhow::Result<LiveDriver> {
    let client = match config.request_timeout {
        Some(timeout) => StartggClient::with_timeout(&config.api_url, &config.api_key, timeout)?,
        None => StartggClient::new(&config.api_url, &config.api_key),
    };

    let roster_service = RosterService::new(
        TournamentRepo::new(client.clone()),
        ParticipantRepo::new(client),
    );

    Ok(Driver::new(
        roster_service,
        AttendanceLog::new(&config.stats_path),
        &config.count_target,
    ))
}
