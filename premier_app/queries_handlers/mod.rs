mod get_player_by_id;
mod get_player_by_name;
mod get_player_stats;
mod list_players;

pub use get_player_by_id::GetPlayerByIdHandler;
pub use get_player_by_name::GetPlayerByNameHandler;
pub use get_player_stats::GetPlayerStatsHandler;
pub use list_players::ListPlayersHandler;
