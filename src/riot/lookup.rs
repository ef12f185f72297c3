//! Lookups returning `None` when the Riot API cannot be reached or refuses
//! the request.
//!
//! Request failures are logged and swallowed. Invalid input (a malformed
//! start time, an account without PUUID) is still returned as an error.

use tracing::warn;

use crate::error::AppError;

use super::client::RiotClient;
use super::types::{MatchIdsQuery, MatchRecord};

/// Resolve the PUUID of a Riot ID.
///
/// A `null` PUUID resolves to `None`; an account without the field at all is
/// an error.
pub fn get_summoner_puuid(
    client: &RiotClient,
    game_name: &str,
    tag_line: &str,
) -> Result<Option<String>, AppError> {
    let Some(account) = swallow_transport(
        "Something went wrong with getting puuid",
        client.get_account_by_riot_id(game_name, tag_line),
    )?
    else {
        return Ok(None);
    };

    account.puuid.ok_or(AppError::MissingField("puuid"))
}

/// List the ids of the matches a player started since `start_time`.
pub fn get_match_ids(
    client: &RiotClient,
    puuid: &str,
    start: u32,
    count: u32,
    start_time: &str,
) -> Result<Option<Vec<String>>, AppError> {
    let query = MatchIdsQuery::new(start, count, start_time);

    swallow_transport(
        "Something went wrong with getting match ids",
        client.get_match_ids(puuid, &query),
    )
}

/// Fetch the full record of a match.
pub fn get_match_info(client: &RiotClient, match_id: &str) -> Result<Option<MatchRecord>, AppError> {
    swallow_transport(
        "Something went wrong with getting match info",
        client.get_match(match_id),
    )
}

fn swallow_transport<T>(context: &str, res: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match res {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_transport() => {
            warn!("⚠️ {context}, error details: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
