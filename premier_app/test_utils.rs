#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use rand::Rng;
    use std::{
        collections::BTreeMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, AtomicUsize, Ordering},
        },
    };

    use premier_types::{
        errors::ApplicationError,
        filter::FilterMode,
        player::{NewPlayer, Player},
    };

    use crate::{
        config::{Config, DEFAULT_HTTP_PORT},
        repository::PlayerRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// In-memory player store. Players iterate in id order.
    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        players: Arc<Mutex<BTreeMap<i64, Player>>>,
        last_id: Arc<Mutex<i64>>,
        unavailable: Arc<AtomicBool>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Default::default()
        }

        /// Makes every call fail as if the database went away.
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        pub fn len(&self) -> usize {
            self.players.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn check_available(&self) -> Result<(), ApplicationError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ApplicationError::Infrastructure(
                    "player store unavailable".to_string(),
                ));
            }
            Ok(())
        }

        fn filtered(&self, predicate: impl Fn(&Player) -> bool) -> Vec<Player> {
            self.players
                .lock()
                .unwrap()
                .values()
                .filter(|p| predicate(p))
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn find_all(&self) -> Result<Vec<Player>, ApplicationError> {
            self.check_available()?;
            Ok(self.filtered(|_| true))
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Player>, ApplicationError> {
            self.check_available()?;
            Ok(self.players.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Player>, ApplicationError> {
            self.check_available()?;
            Ok(self.filtered(|p| p.name == name).into_iter().next())
        }

        async fn find_by_team(&self, team: &str) -> Result<Vec<Player>, ApplicationError> {
            self.check_available()?;
            Ok(self.filtered(|p| p.team == team))
        }

        async fn find_by_team_and_position(
            &self,
            team: &str,
            position: &str,
        ) -> Result<Vec<Player>, ApplicationError> {
            self.check_available()?;
            Ok(self.filtered(|p| p.team == team && p.position == position))
        }

        async fn insert(&self, player: &NewPlayer) -> Result<Player, ApplicationError> {
            self.check_available()?;
            let id = {
                let mut last_id = self.last_id.lock().unwrap();
                *last_id += 1;
                *last_id
            };
            let stored = Player::from_new(id, player.clone());
            self.players.lock().unwrap().insert(id, stored.clone());
            Ok(stored)
        }

        async fn save(&self, player: &Player) -> Result<(), ApplicationError> {
            self.check_available()?;
            self.players
                .lock()
                .unwrap()
                .insert(player.id, player.clone());
            Ok(())
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ApplicationError> {
            self.check_available()?;
            self.players.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn delete_by_name(&self, name: &str) -> Result<(), ApplicationError> {
            self.check_available()?;
            self.players.lock().unwrap().retain(|_, p| p.name != name);
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        players: Arc<MockPlayerRepository>,

        // Counters to check if commit/rollback was called
        committed: Arc<AtomicUsize>,
        rolled_back: Arc<AtomicUsize>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Default::default()
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            self.players.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            self.committed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.rolled_back.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Hands out units of work that all share one in-memory store.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        shared: MockUnitOfWork,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn players(&self) -> Arc<MockPlayerRepository> {
            self.shared.players.clone()
        }

        pub fn commits(&self) -> usize {
            self.shared.committed.load(Ordering::SeqCst)
        }

        pub fn rollbacks(&self) -> usize {
            self.shared.rolled_back.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(self.shared.clone());
            Ok(uow)
        }
    }

    /// Config built without reading `.env` or the process environment.
    pub fn test_config(filter_mode: FilterMode) -> Config {
        Config {
            http_port: DEFAULT_HTTP_PORT,
            filter_mode,
            cors_origin: None,
        }
    }

    #[derive(Default, Clone)]
    pub struct PlayerFactoryOptions<'a> {
        pub name: Option<&'a str>,
        pub nation: Option<&'a str>,
        pub position: Option<&'a str>,
        pub team: Option<&'a str>,
        pub goals: Option<i32>,
        pub assists: Option<i32>,
    }

    /// Builds a payload with random season numbers for whatever is not set.
    pub fn new_player_factory(options: PlayerFactoryOptions) -> NewPlayer {
        let mut rng = rand::thread_rng();
        let played: i32 = rng.gen_range(1..=38);
        let starts: i32 = rng.gen_range(0..=played);

        NewPlayer {
            name: options.name.unwrap_or("Test Player").to_string(),
            nation: options.nation.unwrap_or("eng ENG").to_string(),
            position: options.position.unwrap_or("MF").to_string(),
            team: options.team.unwrap_or("Test FC").to_string(),
            age: Some(rng.gen_range(17..=38) as f64),
            born: Some(rng.gen_range(1985..=2007) as f64),
            played: Some(played),
            starts: Some(starts),
            minutes: Some(starts * 90),
            goals: Some(options.goals.unwrap_or_else(|| rng.gen_range(0..=20))),
            assists: Some(options.assists.unwrap_or_else(|| rng.gen_range(0..=15))),
            penalty_kicks: Some(0),
            penalty_kicks_attempts: Some(0),
            yellow: Some(rng.gen_range(0..=10)),
            red: Some(rng.gen_range(0..=1)),
            expected_goals: Some(rng.gen_range(0..200) as f64 / 10.0),
            progressive_carries: Some(rng.gen_range(0..=150)),
            progressive_passes: Some(rng.gen_range(0..=250)),
            received_progressive_passes: Some(rng.gen_range(0..=300)),
        }
    }

    /// Inserts a player built by [`new_player_factory`] into `repo`.
    pub async fn seed_player(
        repo: &dyn PlayerRepository,
        options: PlayerFactoryOptions<'_>,
    ) -> Player {
        repo.insert(&new_player_factory(options)).await.unwrap()
    }
}
