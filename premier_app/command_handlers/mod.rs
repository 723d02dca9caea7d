mod add_player;
mod delete_player;
mod delete_player_by_name;
mod update_player;

pub use add_player::AddPlayerCommandHandler;
pub use delete_player::DeletePlayerCommandHandler;
pub use delete_player_by_name::DeletePlayerByNameCommandHandler;
pub use update_player::UpdatePlayerCommandHandler;
