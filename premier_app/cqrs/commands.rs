use premier_types::player::{NewPlayer, Player, PlayerPatch};

use crate::cqrs::Command;

/// Stores a new player. The store assigns the id.
pub struct AddPlayer {
    pub player: NewPlayer,
}

impl Command for AddPlayer {
    type Output = Player;
}

/// Overwrites name, position and nation of an existing player.
pub struct UpdatePlayer {
    pub patch: PlayerPatch,
}

impl Command for UpdatePlayer {
    type Output = Player;
}

/// Removes a player by id. Unknown ids are ignored.
pub struct DeletePlayer {
    pub id: i64,
}

impl Command for DeletePlayer {
    type Output = ();
}

/// Removes every player with exactly this name. Unknown names are ignored.
pub struct DeletePlayerByName {
    pub name: String,
}

impl Command for DeletePlayerByName {
    type Output = ();
}
