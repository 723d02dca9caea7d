use serde::Serialize;
use std::collections::BTreeMap;

use crate::player::Player;

pub const TOP_PLAYERS_LIMIT: usize = 10;

/// Summary shown on the dashboard.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub total_players: usize,
    pub players_by_team: BTreeMap<String, usize>,
    pub top_scorers: Vec<Player>,
    pub top_assists: Vec<Player>,
}

impl PlayerStats {
    pub fn from_players(players: &[Player]) -> Self {
        let mut players_by_team = BTreeMap::new();
        for player in players {
            *players_by_team.entry(player.team.clone()).or_insert(0) += 1;
        }

        Self {
            total_players: players.len(),
            players_by_team,
            top_scorers: top_by(players, |p| p.goals.unwrap_or(0)),
            top_assists: top_by(players, |p| p.assists.unwrap_or(0)),
        }
    }
}

// Stable sort, so ties keep store order.
fn top_by(players: &[Player], key: impl Fn(&Player) -> i32) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by_key(|p| std::cmp::Reverse(key(p)));
    sorted.truncate(TOP_PLAYERS_LIMIT);
    sorted
}
