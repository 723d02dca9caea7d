use premier_types::{filter::PlayerFilter, player::Player, stats::PlayerStats};

use crate::cqrs::Query;

/// Lists players narrowed by the optional filters.
pub struct ListPlayers {
    pub filter: PlayerFilter,
}

impl Query for ListPlayers {
    type Output = Vec<Player>;
}

/// Fetch a player by id.
pub struct GetPlayerById {
    pub id: i64,
}

impl Query for GetPlayerById {
    type Output = Player;
}

/// Fetch a player by exact name.
pub struct GetPlayerByName {
    pub name: String,
}

impl Query for GetPlayerByName {
    type Output = Player;
}

/// Team counts and top scorers/assisters over the whole store.
pub struct GetPlayerStats;

impl Query for GetPlayerStats {
    type Output = PlayerStats;
}
