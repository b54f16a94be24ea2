pub mod attendance_log;
pub mod events;
pub mod participants;
pub mod tournaments;

pub use attendance_log::AttendanceLog;
pub use events::EventRepo;
pub use participants::{ParticipantRepo, PARTICIPANT_PAGE_SIZE};
pub use tournaments::{FilterCriteria, TournamentRepo, TournamentTiming};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Remote ids are declared as `ID`, which may arrive as a number or a string.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

/// `{ nodes: [...] }` wrapper; null lists and null nodes are dropped.
#[derive(Deserialize)]
pub(crate) struct Connection<T> {
    nodes: Option<Vec<Option<T>>>,
}

impl<T> Connection<T> {
    pub(crate) fn into_nodes(self) -> Vec<T> {
        self.nodes.unwrap_or_default().into_iter().flatten().collect()
    }
}
