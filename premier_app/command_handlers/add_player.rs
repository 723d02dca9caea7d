use std::sync::Arc;

use premier_types::{Result, errors::ApplicationError, player::Player};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::AddPlayer},
    uow::UnitOfWork,
};

pub struct AddPlayerCommandHandler {}

impl Default for AddPlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AddPlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddPlayer> for AddPlayerCommandHandler {
    async fn handle(
        &self,
        command: AddPlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let player = uow.players().insert(&command.player).await?;
        tracing::info!(player_id = player.id, name = %player.name, "Player added");

        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use premier_types::filter::FilterMode;

    use super::*;
    use crate::test_utils::tests::{
        MockUnitOfWork, PlayerFactoryOptions, new_player_factory, test_config,
    };

    #[tokio::test]
    async fn test_add_player_assigns_id_and_keeps_fields() {
        let config = Arc::new(test_config(FilterMode::Precedence));
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = AddPlayerCommandHandler::new();

        let payload = new_player_factory(PlayerFactoryOptions {
            name: Some("Mohamed Salah"),
            team: Some("Liverpool"),
            goals: Some(18),
            ..Default::default()
        });

        let created = handler
            .handle(
                AddPlayer {
                    player: payload.clone(),
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created, Player::from_new(created.id, payload));

        let all = mock_uow.players().find_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn test_add_player_allows_duplicates() {
        let config = Arc::new(test_config(FilterMode::Precedence));
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = AddPlayerCommandHandler::new();

        let payload = new_player_factory(PlayerFactoryOptions {
            name: Some("Same Name"),
            ..Default::default()
        });

        let first = handler
            .handle(AddPlayer { player: payload.clone() }, &mock_uow, &config)
            .await
            .unwrap();
        let second = handler
            .handle(AddPlayer { player: payload }, &mock_uow, &config)
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(mock_uow.players().find_all().await.unwrap().len(), 2);
    }
}
