use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use riftfetch::{
    AppError, Config, RiotClient, get_match_ids, get_match_info, get_summoner_puuid, logging,
};
use tracing::{error, info};

/// Fetch the recent League of Legends matches of a player as JSON lines.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Riot ID game name (before the #)
    game_name: String,

    /// Riot ID tag line (after the #)
    tag_line: String,

    /// Only list matches started after this UTC time, "YYYY-MM-DD HH:MM:SS"
    #[arg(long, short = 's')]
    since: String,

    /// Index of the first match id to request, 0 being the most recent
    #[arg(long, default_value_t = 0)]
    start: u32,

    /// Number of match ids to request
    #[arg(long, short = 'c', default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
    count: u32,

    /// Print match ids instead of full match records
    #[arg(long)]
    ids_only: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };
    let client = RiotClient::new(&config);

    let code = match run(&client, &args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("❌ {e}");
            ExitCode::FAILURE
        }
    };

    client.metrics().log_summary();
    code
}

/// Returns `Ok(false)` when a lookup came back empty.
fn run(client: &RiotClient, args: &Args) -> Result<bool, AppError> {
    info!(
        "🔎 Fetching matches of {}#{} since {}",
        args.game_name, args.tag_line, args.since
    );

    let Some(puuid) = get_summoner_puuid(client, &args.game_name, &args.tag_line)? else {
        return Ok(false);
    };

    let Some(match_ids) = get_match_ids(client, &puuid, args.start, args.count, &args.since)? else {
        return Ok(false);
    };
    info!("{} matches found", match_ids.len());

    let mut out = io::stdout().lock();

    if args.ids_only {
        for id in &match_ids {
            writeln!(out, "{}", serde_json::to_string(id)?)?;
        }
        return Ok(true);
    }

    for id in &match_ids {
        let Some(record) = get_match_info(client, id)? else {
            return Ok(false);
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["riftfetch", "Name", "TAG", "--since", "2021-06-10 12:00:00"]);

        assert_eq!(args.game_name, "Name");
        assert_eq!(args.tag_line, "TAG");
        assert_eq!(args.start, 0);
        assert_eq!(args.count, 20);
        assert!(!args.ids_only);
    }

    #[test]
    fn count_out_of_range_is_rejected() {
        let res = Args::try_parse_from([
            "riftfetch",
            "Name",
            "TAG",
            "--since",
            "2021-06-10 12:00:00",
            "--count",
            "0",
        ]);

        assert!(res.is_err());
    }
}
