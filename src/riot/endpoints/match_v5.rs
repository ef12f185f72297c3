use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::{MatchIdsQuery, MatchRecord};
use crate::time::convert_to_epoch_time;

impl RiotClient {
    /// Get list of match IDs by PUUID, most recent first.
    /// Uses regional routing (americas, europe, asia, sea)
    ///
    /// The query's `start_time` is validated before any request is sent.
    pub fn get_match_ids(
        &self,
        puuid: &str,
        query: &MatchIdsQuery,
    ) -> Result<Vec<String>, AppError> {
        let start_time = convert_to_epoch_time(&query.start_time)?;

        tracing::trace!(
            "[RIOT::MATCH-V5] get_match_ids {} since {} ({}..+{})",
            puuid,
            start_time,
            query.start,
            query.count
        );

        let url = self.endpoint(
            &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
            &[
                ("startTime", start_time.to_string()),
                ("start", query.start.to_string()),
                ("count", query.count.to_string()),
            ],
        )?;

        self.get(url)
    }

    /// Get match details by match ID
    /// Uses regional routing (americas, europe, asia, sea)
    pub fn get_match(&self, match_id: &str) -> Result<MatchRecord, AppError> {
        tracing::trace!("[RIOT::MATCH-V5] get_match {}", match_id);

        let url = self.endpoint(&["lol", "match", "v5", "matches", match_id], &[])?;

        self.get(url)
    }
}
