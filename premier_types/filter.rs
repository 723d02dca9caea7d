use serde::Deserialize;
use std::{fmt, str::FromStr};

use crate::{errors::AppError, player::Player};

/// Optional filters accepted by the player listing.
/// Empty values are treated as if they were not sent at all.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct PlayerFilter {
    pub team: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub nation: Option<String>,
}

/// How several filters supplied together are combined.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// First matching filter wins: team+position, team, name, position, nation, all.
    #[default]
    Precedence,
    /// Every supplied filter must match.
    Combined,
}

impl FromStr for FilterMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "precedence" => Ok(FilterMode::Precedence),
            "combined" => Ok(FilterMode::Combined),
            _ => Err(AppError::InvalidFilterMode(s.to_string())),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Precedence => write!(f, "precedence"),
            FilterMode::Combined => write!(f, "combined"),
        }
    }
}

/// The single collection query selected for a [`PlayerFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPlan {
    /// Exact team and exact position.
    TeamAndPosition { team: String, position: String },
    /// Exact team.
    Team(String),
    /// Case-insensitive substring of the name.
    Name(String),
    /// Case-insensitive substring of the position.
    Position(String),
    /// Case-insensitive substring of the nation.
    Nation(String),
    All,
}

impl FilterPlan {
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            FilterPlan::TeamAndPosition { team, position } => {
                player.team == *team && player.position == *position
            }
            FilterPlan::Team(team) => player.team == *team,
            FilterPlan::Name(text) => contains_ignore_case(&player.name, text),
            FilterPlan::Position(text) => contains_ignore_case(&player.position, text),
            FilterPlan::Nation(text) => contains_ignore_case(&player.nation, text),
            FilterPlan::All => true,
        }
    }
}

impl PlayerFilter {
    pub fn team(&self) -> Option<&str> {
        present(&self.team)
    }

    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn position(&self) -> Option<&str> {
        present(&self.position)
    }

    pub fn nation(&self) -> Option<&str> {
        present(&self.nation)
    }

    pub fn is_empty(&self) -> bool {
        self.team().is_none()
            && self.name().is_none()
            && self.position().is_none()
            && self.nation().is_none()
    }

    /// Picks exactly one query following the fixed precedence order.
    /// Filters that lose to an earlier one are ignored.
    pub fn plan(&self) -> FilterPlan {
        if let (Some(team), Some(position)) = (self.team(), self.position()) {
            return FilterPlan::TeamAndPosition {
                team: team.to_string(),
                position: position.to_string(),
            };
        }
        if let Some(team) = self.team() {
            return FilterPlan::Team(team.to_string());
        }
        if let Some(name) = self.name() {
            return FilterPlan::Name(name.to_string());
        }
        if let Some(position) = self.position() {
            return FilterPlan::Position(position.to_string());
        }
        if let Some(nation) = self.nation() {
            return FilterPlan::Nation(nation.to_string());
        }
        FilterPlan::All
    }

    /// AND of every supplied filter. Team is exact, the others are substrings.
    pub fn matches_all(&self, player: &Player) -> bool {
        self.team().is_none_or(|team| player.team == team)
            && self
                .name()
                .is_none_or(|text| contains_ignore_case(&player.name, text))
            && self
                .position()
                .is_none_or(|text| contains_ignore_case(&player.position, text))
            && self
                .nation()
                .is_none_or(|text| contains_ignore_case(&player.nation, text))
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
