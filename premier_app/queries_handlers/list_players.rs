use async_trait::async_trait;
use std::sync::Arc;

use premier_types::{
    errors::ApplicationError,
    filter::{FilterMode, FilterPlan},
};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListPlayers},
    uow::UnitOfWork,
};

/// Resolves the optional filters into one collection query.
///
/// With [`FilterMode::Precedence`] the first present filter wins, in the order
/// team+position, team, name, position, nation; anything else supplied is
/// ignored. Exact-match plans are pushed down to the store, substring plans
/// scan everything and match in memory.
///
/// With [`FilterMode::Combined`] all present filters must match.
pub struct ListPlayersHandler {}

impl ListPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPlayers> for ListPlayersHandler {
    async fn handle(
        &self,
        query: ListPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<<ListPlayers as Query>::Output, ApplicationError> {
        let repo = uow.players();

        if config.filter_mode == FilterMode::Combined {
            let players = repo.find_all().await?;
            return Ok(players
                .into_iter()
                .filter(|p| query.filter.matches_all(p))
                .collect());
        }

        let plan = query.filter.plan();
        tracing::debug!(?plan, "Resolved player filter");

        match plan {
            FilterPlan::TeamAndPosition { team, position } => {
                repo.find_by_team_and_position(&team, &position).await
            }
            FilterPlan::Team(team) => repo.find_by_team(&team).await,
            FilterPlan::All => repo.find_all().await,
            substring => {
                let players = repo.find_all().await?;
                Ok(players.into_iter().filter(|p| substring.matches(p)).collect())
            }
        }
    }
}
