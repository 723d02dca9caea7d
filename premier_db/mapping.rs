use premier_types::player::Player;

use crate::models::{self as db_models};

impl From<db_models::Player> for Player {
    fn from(row: db_models::Player) -> Self {
        Player {
            id: row.id,
            name: row.name,
            nation: row.nation,
            position: row.position,
            team: row.team,
            age: row.age,
            born: row.born,
            played: row.played,
            starts: row.starts,
            minutes: row.minutes,
            goals: row.goals,
            assists: row.assists,
            penalty_kicks: row.penalty_kicks,
            penalty_kicks_attempts: row.penalty_kicks_attempts,
            yellow: row.yellow,
            red: row.red,
            expected_goals: row.expected_goals,
            progressive_carries: row.progressive_carries,
            progressive_passes: row.progressive_passes,
            received_progressive_passes: row.received_progressive_passes,
        }
    }
}
