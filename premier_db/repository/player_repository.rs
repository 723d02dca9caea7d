use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use premier_app::repository::PlayerRepository;
use premier_types::{
    Result,
    errors::{ApplicationError, DbError},
    player::{NewPlayer, Player},
};

use crate::models::{self as db_models, PLAYER_COLUMNS};

/// Implements PlayerRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresPlayerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPlayerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

fn db_error(e: sqlx::Error) -> ApplicationError {
    ApplicationError::Db(DbError::Database(e))
}

#[async_trait::async_trait]
impl<'a> PlayerRepository for PostgresPlayerRepository<'a> {
    async fn find_all(&self) -> Result<Vec<Player>, ApplicationError> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players_stats ORDER BY id");
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, db_models::Player>(&sql)
            .fetch_all(&mut **tx_guard)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, ApplicationError> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players_stats WHERE id = $1");
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(&sql)
            .bind(id)
            .fetch_optional(&mut **tx_guard)
            .await
            .map_err(db_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, ApplicationError> {
        let sql = format!(
            "SELECT {PLAYER_COLUMNS} FROM players_stats WHERE name = $1 ORDER BY id LIMIT 1"
        );
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(&sql)
            .bind(name)
            .fetch_optional(&mut **tx_guard)
            .await
            .map_err(db_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_team(&self, team: &str) -> Result<Vec<Player>, ApplicationError> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players_stats WHERE team = $1 ORDER BY id");
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, db_models::Player>(&sql)
            .bind(team)
            .fetch_all(&mut **tx_guard)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_team_and_position(
        &self,
        team: &str,
        position: &str,
    ) -> Result<Vec<Player>, ApplicationError> {
        let sql = format!(
            r#"
              SELECT {PLAYER_COLUMNS} FROM players_stats
              WHERE team = $1 AND position = $2
              ORDER BY id
              "#
        );
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, db_models::Player>(&sql)
            .bind(team)
            .bind(position)
            .fetch_all(&mut **tx_guard)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, player: &NewPlayer) -> Result<Player, ApplicationError> {
        let sql = format!(
            r#"
              INSERT INTO players_stats (
                  name, nation, position, team, age, born, played, starts, minutes, goals,
                  assists, penalty_kicks, penalty_kicks_attempts, yellow, red, expected_goals,
                  progressive_carries, progressive_passes, received_progressive_passes
              )
              VALUES (
                  $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                  $11, $12, $13, $14, $15, $16, $17, $18, $19
              )
              RETURNING {PLAYER_COLUMNS}
              "#
        );
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Player>(&sql)
            .bind(&player.name)
            .bind(&player.nation)
            .bind(&player.position)
            .bind(&player.team)
            .bind(player.age)
            .bind(player.born)
            .bind(player.played)
            .bind(player.starts)
            .bind(player.minutes)
            .bind(player.goals)
            .bind(player.assists)
            .bind(player.penalty_kicks)
            .bind(player.penalty_kicks_attempts)
            .bind(player.yellow)
            .bind(player.red)
            .bind(player.expected_goals)
            .bind(player.progressive_carries)
            .bind(player.progressive_passes)
            .bind(player.received_progressive_passes)
            .fetch_one(&mut **tx_guard)
            .await
            .map_err(db_error)?;

        Ok(row.into())
    }

    async fn save(&self, player: &Player) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
              UPDATE players_stats
              SET
                  name = $2, nation = $3, position = $4, team = $5, age = $6, born = $7,
                  played = $8, starts = $9, minutes = $10, goals = $11, assists = $12,
                  penalty_kicks = $13, penalty_kicks_attempts = $14, yellow = $15, red = $16,
                  expected_goals = $17, progressive_carries = $18, progressive_passes = $19,
                  received_progressive_passes = $20
              WHERE id = $1
              "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.nation)
        .bind(&player.position)
        .bind(&player.team)
        .bind(player.age)
        .bind(player.born)
        .bind(player.played)
        .bind(player.starts)
        .bind(player.minutes)
        .bind(player.goals)
        .bind(player.assists)
        .bind(player.penalty_kicks)
        .bind(player.penalty_kicks_attempts)
        .bind(player.yellow)
        .bind(player.red)
        .bind(player.expected_goals)
        .bind(player.progressive_carries)
        .bind(player.progressive_passes)
        .bind(player.received_progressive_passes)
        .execute(&mut **tx_guard)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query("DELETE FROM players_stats WHERE id = $1")
            .bind(id)
            .execute(&mut **tx_guard)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!(player_id = id, "Delete matched no player");
        }

        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query("DELETE FROM players_stats WHERE name = $1")
            .bind(name)
            .execute(&mut **tx_guard)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use premier_app::test_utils::tests::{PlayerFactoryOptions, new_player_factory};
    use premier_types::player::PlayerPatch;

    use super::*;
    use crate::{establish_test_connection_pool, run_migrations};

    #[tokio::test]
    #[ignore = "needs TEST_DATABASE_URL"]
    async fn test_postgres_player_crud() -> Result<(), ApplicationError> {
        let pool = establish_test_connection_pool().await?;
        run_migrations(&pool).await?;
        let tx = pool.begin().await.map_err(db_error)?;
        let tx = Arc::new(Mutex::new(tx));
        let repo = PostgresPlayerRepository::new(tx.clone());

        let created = repo
            .insert(&new_player_factory(PlayerFactoryOptions {
                name: Some("Integration Player"),
                team: Some("Integration FC"),
                position: Some("GK"),
                goals: Some(0),
                ..Default::default()
            }))
            .await?;
        assert!(created.id > 0);

        let by_team = repo.find_by_team_and_position("Integration FC", "GK").await?;
        assert_eq!(by_team, vec![created.clone()]);

        let mut updated = created.clone();
        updated.apply_patch(PlayerPatch {
            id: created.id,
            name: Some("Renamed Player".to_string()),
            position: None,
            nation: None,
        });
        repo.save(&updated).await?;
        assert_eq!(repo.find_by_id(created.id).await?, Some(updated));
        assert_eq!(
            repo.find_by_name("Renamed Player").await?.map(|p| p.id),
            Some(created.id)
        );

        repo.delete_by_id(created.id).await?;
        repo.delete_by_id(created.id).await?;
        assert_eq!(repo.find_by_id(created.id).await?, None);

        drop(repo);
        if let Ok(mutex) = Arc::try_unwrap(tx) {
            mutex.into_inner().rollback().await.map_err(db_error)?;
        }
        Ok(())
    }
}
