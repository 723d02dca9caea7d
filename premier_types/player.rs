use serde::{Deserialize, Deserializer, Serialize, de};

/// One footballer's season statistics.
///
/// The `id` is assigned by the store on insert and never changes afterwards.
/// None of the other attributes are constrained.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub nation: String,
    pub position: String,
    pub team: String,
    #[serde(deserialize_with = "number_or_text")]
    pub age: Option<f64>,
    #[serde(deserialize_with = "number_or_text")]
    pub born: Option<f64>,
    pub played: Option<i32>,
    pub starts: Option<i32>,
    pub minutes: Option<i32>,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    #[serde(alias = "penalty_kicks")]
    pub penalty_kicks: Option<i32>,
    #[serde(alias = "penalty_kicks_attempts")]
    pub penalty_kicks_attempts: Option<i32>,
    pub yellow: Option<i32>,
    pub red: Option<i32>,
    #[serde(alias = "expected_goals")]
    pub expected_goals: Option<f64>,
    #[serde(alias = "progressive_carries")]
    pub progressive_carries: Option<i32>,
    #[serde(alias = "progressive_passes")]
    pub progressive_passes: Option<i32>,
    #[serde(alias = "received_progressive_passes")]
    pub received_progressive_passes: Option<i32>,
}

impl Player {
    /// Builds the stored record for a payload once the store assigned its id.
    pub fn from_new(id: i64, new: NewPlayer) -> Self {
        Self {
            id,
            name: new.name,
            nation: new.nation,
            position: new.position,
            team: new.team,
            age: new.age,
            born: new.born,
            played: new.played,
            starts: new.starts,
            minutes: new.minutes,
            goals: new.goals,
            assists: new.assists,
            penalty_kicks: new.penalty_kicks,
            penalty_kicks_attempts: new.penalty_kicks_attempts,
            yellow: new.yellow,
            red: new.red,
            expected_goals: new.expected_goals,
            progressive_carries: new.progressive_carries,
            progressive_passes: new.progressive_passes,
            received_progressive_passes: new.received_progressive_passes,
        }
    }

    /// Overwrites the patchable fields present in `patch`. Everything else is kept.
    pub fn apply_patch(&mut self, patch: PlayerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(nation) = patch.nation {
            self.nation = nation;
        }
    }
}

/// Payload for a player that has not been stored yet.
///
/// An `id` sent by the client is dropped during deserialization.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPlayer {
    pub name: String,
    pub nation: String,
    pub position: String,
    pub team: String,
    #[serde(deserialize_with = "number_or_text")]
    pub age: Option<f64>,
    #[serde(deserialize_with = "number_or_text")]
    pub born: Option<f64>,
    pub played: Option<i32>,
    pub starts: Option<i32>,
    pub minutes: Option<i32>,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    #[serde(alias = "penalty_kicks")]
    pub penalty_kicks: Option<i32>,
    #[serde(alias = "penalty_kicks_attempts")]
    pub penalty_kicks_attempts: Option<i32>,
    pub yellow: Option<i32>,
    pub red: Option<i32>,
    #[serde(alias = "expected_goals")]
    pub expected_goals: Option<f64>,
    #[serde(alias = "progressive_carries")]
    pub progressive_carries: Option<i32>,
    #[serde(alias = "progressive_passes")]
    pub progressive_passes: Option<i32>,
    #[serde(alias = "received_progressive_passes")]
    pub received_progressive_passes: Option<i32>,
}

/// Sparse update for an existing player. Only `name`, `position` and
/// `nation` can change through an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPatch {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub nation: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Reads a number sent either as a JSON number or as numeric text.
/// Blank text reads as no value.
fn number_or_text<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected a number, got {text:?}"))),
    }
}
