//! Minimal Riot Games API client.
//!
//! Resolves a player's PUUID from their Riot ID, lists the ids of their
//! recent matches and fetches raw match records from Match-v5.

pub mod config;
pub mod error;
pub mod logging;
pub mod riot;
pub mod time;

pub use config::Config;
pub use error::AppError;
pub use riot::{RiotClient, get_match_ids, get_match_info, get_summoner_puuid};
pub use time::convert_to_epoch_time;
