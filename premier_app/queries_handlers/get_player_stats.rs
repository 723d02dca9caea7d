use async_trait::async_trait;
use std::sync::Arc;

use premier_types::{errors::ApplicationError, stats::PlayerStats};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetPlayerStats},
    uow::UnitOfWork,
};

pub struct GetPlayerStatsHandler {}

impl GetPlayerStatsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetPlayerStats> for GetPlayerStatsHandler {
    async fn handle(
        &self,
        _query: GetPlayerStats,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetPlayerStats as Query>::Output, ApplicationError> {
        let players = uow.players().find_all().await?;
        Ok(PlayerStats::from_players(&players))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use premier_types::filter::FilterMode;

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, PlayerFactoryOptions, seed_player, test_config};

    #[tokio::test]
    async fn test_stats_over_store() {
        let config = Arc::new(test_config(FilterMode::Precedence));
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let repo = mock_uow.players();

        for (team, goals) in [("Arsenal", 5), ("Arsenal", 12), ("Fulham", 9)] {
            seed_player(
                repo.as_ref(),
                PlayerFactoryOptions {
                    team: Some(team),
                    goals: Some(goals),
                    ..Default::default()
                },
            )
            .await;
        }

        let stats = GetPlayerStatsHandler::new()
            .handle(GetPlayerStats, &mock_uow, &config)
            .await
            .unwrap();

        assert_eq!(stats.total_players, 3);
        assert_eq!(stats.players_by_team["Arsenal"], 2);
        assert_eq!(stats.players_by_team["Fulham"], 1);
        let goals: Vec<Option<i32>> = stats.top_scorers.iter().map(|p| p.goals).collect();
        assert_eq!(goals, vec![Some(12), Some(9), Some(5)]);
    }
}
