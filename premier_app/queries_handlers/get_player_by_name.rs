use async_trait::async_trait;
use std::sync::Arc;

use premier_types::errors::{ApplicationError, DbError};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetPlayerByName},
    uow::UnitOfWork,
};

pub struct GetPlayerByNameHandler {}

impl GetPlayerByNameHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetPlayerByName> for GetPlayerByNameHandler {
    async fn handle(
        &self,
        query: GetPlayerByName,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetPlayerByName as Query>::Output, ApplicationError> {
        let repo = uow.players();
        match repo.find_by_name(&query.name).await? {
            Some(player) => Ok(player),
            None => Err(DbError::PlayerByNameNotFound(query.name).into()),
        }
    }
}
