use std::sync::Arc;

use premier_types::{Result, errors::ApplicationError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeletePlayerByName},
    uow::UnitOfWork,
};

pub struct DeletePlayerByNameCommandHandler {}

impl Default for DeletePlayerByNameCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePlayerByNameCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePlayerByName> for DeletePlayerByNameCommandHandler {
    async fn handle(
        &self,
        command: DeletePlayerByName,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        uow.players().delete_by_name(&command.name).await?;
        tracing::info!(name = %command.name, "Player deleted by name");

        Ok(())
    }
}
