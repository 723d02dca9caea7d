use std::sync::Arc;

use premier_types::{
    Result,
    errors::{ApplicationError, DbError},
    player::Player,
};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayer},
    uow::UnitOfWork,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let repo = uow.players();
        let id = command.patch.id;

        let Some(mut player) = repo.find_by_id(id).await? else {
            return Err(DbError::PlayerNotFound(id).into());
        };

        player.apply_patch(command.patch);
        repo.save(&player).await?;
        tracing::info!(player_id = id, "Player updated");

        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use premier_types::{filter::FilterMode, player::PlayerPatch};

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, PlayerFactoryOptions, seed_player, test_config};

    #[tokio::test]
    async fn test_update_changes_only_patchable_fields() {
        let config = Arc::new(test_config(FilterMode::Precedence));
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = UpdatePlayerCommandHandler::new();

        let before = seed_player(
            mock_uow.players().as_ref(),
            PlayerFactoryOptions {
                name: Some("Erling Haaland"),
                nation: Some("no NOR"),
                position: Some("FW"),
                team: Some("Manchester City"),
                goals: Some(27),
                ..Default::default()
            },
        )
        .await;

        let command = UpdatePlayer {
            patch: PlayerPatch {
                id: before.id,
                name: Some("E. Haaland".to_string()),
                position: Some("CF".to_string()),
                nation: Some("NOR".to_string()),
            },
        };

        let updated = handler.handle(command, &mock_uow, &config).await.unwrap();

        assert_eq!(updated.name, "E. Haaland");
        assert_eq!(updated.position, "CF");
        assert_eq!(updated.nation, "NOR");

        let expected = Player {
            name: "E. Haaland".to_string(),
            position: "CF".to_string(),
            nation: "NOR".to_string(),
            ..before
        };
        assert_eq!(updated, expected);

        let stored = mock_uow.players().find_by_id(expected.id).await.unwrap();
        assert_eq!(stored, Some(expected));
    }

    #[tokio::test]
    async fn test_update_missing_player_is_not_found() {
        let config = Arc::new(test_config(FilterMode::Precedence));
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = UpdatePlayerCommandHandler::new();

        let existing = seed_player(mock_uow.players().as_ref(), Default::default()).await;

        let command = UpdatePlayer {
            patch: PlayerPatch {
                id: existing.id + 100,
                name: Some("Ghost".to_string()),
                position: None,
                nation: None,
            },
        };

        let result = handler.handle(command, &mock_uow, &config).await;

        match result.unwrap_err() {
            ApplicationError::Db(DbError::PlayerNotFound(id)) => assert_eq!(id, existing.id + 100),
            e => panic!("Expected PlayerNotFound error, got: {:?}", e),
        }

        let all = mock_uow.players().find_all().await.unwrap();
        assert_eq!(all, vec![existing]);
    }
}
