use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::types::AccountDto;

impl RiotClient {
    /// Get account by Riot ID (game name + tag line)
    /// Uses regional routing (americas, europe, asia, sea)
    pub fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError> {
        tracing::trace!(
            "[RIOT::ACCOUNT-V1] get_account_by_riot_id {}#{}",
            game_name,
            tag_line
        );

        let url = self.endpoint(
            &[
                "riot", "account", "v1", "accounts", "by-riot-id", game_name, tag_line,
            ],
            &[],
        )?;

        self.get(url)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::config::Config;
    use crate::error::AppError;
    use crate::riot::{Region, RiotClient};

    fn client_for(server: &MockServer) -> RiotClient {
        let mut config = Config::new("RGAPI-TEST", Region::Europe).unwrap();
        config.base_url = server.base_url().parse().unwrap();
        RiotClient::new(&config)
    }

    #[test]
    fn get_account_by_riot_id_works() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/Chalop/3012")
                .query_param("api_key", "RGAPI-TEST");
            then.status(200).json_body(json!({
                "puuid": "jG0VKFsMuF2aWaQoiDxJ1brhlXyMY7kj4HfIAucciWH_9YVdWVpbQDIRhJWQQGhP89qCrp5EwLxl3Q",
                "gameName": "Chalop",
                "tagLine": "3012"
            }));
        });

        let account = client_for(&server)
            .get_account_by_riot_id("Chalop", "3012")
            .unwrap();

        mock.assert();
        assert_eq!(
            account.puuid.clone().flatten().as_deref(),
            Some("jG0VKFsMuF2aWaQoiDxJ1brhlXyMY7kj4HfIAucciWH_9YVdWVpbQDIRhJWQQGhP89qCrp5EwLxl3Q")
        );
        assert_eq!(account.game_name, Some("Chalop".to_string()));
        assert_eq!(account.tag_line, Some("3012".to_string()));
    }

    #[test]
    fn get_account_by_riot_id_surfaces_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/Nobody/000");
            then.status(404).body("Data not found");
        });

        let res = client_for(&server).get_account_by_riot_id("Nobody", "000");

        assert!(matches!(res, Err(AppError::RiotApi { status: 404, .. })));
    }

    #[test]
    #[ignore = "API Key required"]
    fn get_account_by_riot_id_live() {
        dotenvy::dotenv().ok();
        let config = Config::from_env().unwrap();
        let client = RiotClient::new(&config);

        let account = client
            .get_account_by_riot_id("Le Conservateur", "3012")
            .unwrap();

        assert!(account.puuid.flatten().is_some_and(|p| !p.is_empty()));
    }
}
