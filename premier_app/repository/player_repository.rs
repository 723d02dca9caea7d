use premier_types::errors::ApplicationError;
use premier_types::player::{NewPlayer, Player};

/// Storage capability for players. Iteration order of the list methods is
/// whatever the store returns naturally.
#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns every stored player.
    async fn find_all(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Returns a player by id, if any.
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, ApplicationError>;

    /// Returns the first player whose name is exactly `name`, if any.
    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, ApplicationError>;

    /// Players whose team equals `team`.
    async fn find_by_team(&self, team: &str) -> Result<Vec<Player>, ApplicationError>;

    /// Players whose team equals `team` and position equals `position`.
    async fn find_by_team_and_position(
        &self,
        team: &str,
        position: &str,
    ) -> Result<Vec<Player>, ApplicationError>;

    /// Inserts a new player and returns it with the assigned id.
    async fn insert(&self, player: &NewPlayer) -> Result<Player, ApplicationError>;

    /// Persists an already stored player.
    async fn save(&self, player: &Player) -> Result<(), ApplicationError>;

    /// Deletes a player by id. Missing ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), ApplicationError>;

    /// Deletes players by exact name. Missing names are not an error.
    async fn delete_by_name(&self, name: &str) -> Result<(), ApplicationError>;
}
