use serde::{Deserialize, Deserializer};

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    /// `None` when the field is absent, `Some(None)` when it is `null`.
    #[serde(default, deserialize_with = "present")]
    pub puuid: Option<Option<String>>,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ============================================================================
// Match-v5
// ============================================================================

/// Raw match detail as returned by Match-v5, left untouched.
pub type MatchRecord = serde_json::Value;

/// Page of match ids to request for a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchIdsQuery {
    /// Index of the first id to return, 0 being the most recent match.
    pub start: u32,
    pub count: u32,
    /// Earliest match start, as `YYYY-MM-DD HH:MM:SS` in UTC.
    pub start_time: String,
}

impl MatchIdsQuery {
    pub fn new(start: u32, count: u32, start_time: impl Into<String>) -> Self {
        Self {
            start,
            count,
            start_time: start_time.into(),
        }
    }
}
