use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// Slug naming one tournament, without the `tournament/` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TournamentRef(String);

impl TournamentRef {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Normalise a slug as returned by the remote service.
    pub fn from_remote_slug(slug: &str) -> Self {
        Self(slug.strip_prefix("tournament/").unwrap_or(slug).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TournamentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TournamentRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TournamentRef {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

impl From<String> for TournamentRef {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

/// Competitor identifier: the linked user's slug, without the `user/` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_user_slug(slug: &str) -> Self {
        Self(slug.strip_prefix("user/").unwrap_or(slug).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ParticipantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Attendance multiset: participants in the order they were gathered.
/// Duplicates are kept, one entry per tournament attended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(Vec<ParticipantId>);

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: ParticipantId) {
        self.0.push(id);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParticipantId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ParticipantId] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ParticipantId> {
        self.0
    }

    /// Number of times `id` appears in the roster.
    pub fn occurrences(&self, id: &str) -> usize {
        self.0.iter().filter(|p| p.as_str() == id).count()
    }
}

impl Extend<ParticipantId> for Roster {
    fn extend<I: IntoIterator<Item = ParticipantId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<ParticipantId> for Roster {
    fn from_iter<I: IntoIterator<Item = ParticipantId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a ParticipantId;
    type IntoIter = std::slice::Iter<'a, ParticipantId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One run's output as written to the attendance log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    pub roster: Roster,
}

impl RunRecord {
    pub fn new(timestamp: DateTime<Utc>, roster: Roster) -> Self {
        Self { timestamp, roster }
    }

    /// Render the block appended to the log: a blank-line separated header
    /// followed by one identifier per line.
    pub fn render(&self) -> String {
        let ids: Vec<&str> = self.roster.iter().map(ParticipantId::as_str).collect();
        format!(
            "\n\n=== Run at {} ===\n{}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            ids.join("\n")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSummary {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub addr_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRef {
    pub id: u64,
    pub name: Option<String>,
}
