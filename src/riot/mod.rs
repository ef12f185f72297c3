//! Riot API access: routing, the blocking client and its endpoints.

pub mod client;
mod endpoints;
pub mod lookup;
pub mod metrics;
pub mod region;
pub mod types;

pub use client::RiotClient;
pub use lookup::{get_match_ids, get_match_info, get_summoner_puuid};
pub use region::{Platform, Region};
pub use types::{AccountDto, MatchIdsQuery, MatchRecord};
