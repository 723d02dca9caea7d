use sqlx::FromRow;

/// Column list shared by every query returning a full `players_stats` row.
pub const PLAYER_COLUMNS: &str = "id, name, nation, position, team, age, born, played, starts, \
    minutes, goals, assists, penalty_kicks, penalty_kicks_attempts, yellow, red, expected_goals, \
    progressive_carries, progressive_passes, received_progressive_passes";

#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub nation: String,
    pub position: String,
    pub team: String,
    pub age: Option<f64>,
    pub born: Option<f64>,
    pub played: Option<i32>,
    pub starts: Option<i32>,
    pub minutes: Option<i32>,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    pub penalty_kicks: Option<i32>,
    pub penalty_kicks_attempts: Option<i32>,
    pub yellow: Option<i32>,
    pub red: Option<i32>,
    pub expected_goals: Option<f64>,
    pub progressive_carries: Option<i32>,
    pub progressive_passes: Option<i32>,
    pub received_progressive_passes: Option<i32>,
}
