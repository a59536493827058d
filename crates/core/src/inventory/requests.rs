//! API request types for inventory operations.
//!
//! Pure data with validation helpers. Each `validate` returns a normalized copy
//! of the request (trimmed names, blank descriptions dropped) that the
//! handlers pass on to the repositories.

use serde::{Deserialize, Serialize};

use super::error::InventoryError;
use super::operations::{
    normalize_description, validate_board_game_name, validate_descriptor,
    validate_developer_name, validate_rating,
};
use super::types::BoardGameDescriptor;

/// Request payload for creating a developer together with their board games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDeveloperRequest {
    pub name: String,
    #[serde(default)]
    pub board_games: Vec<BoardGameDescriptor>,
}

impl CreateDeveloperRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board_games: Vec::new(),
        }
    }

    /// Add a board game the developer worked on.
    pub fn with_board_game(mut self, board_game: BoardGameDescriptor) -> Self {
        self.board_games.push(board_game);
        self
    }

    pub fn validate(self) -> Result<Self, InventoryError> {
        Ok(Self {
            name: validate_developer_name(&self.name)?,
            board_games: self
                .board_games
                .into_iter()
                .map(validate_descriptor)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Request payload for creating a board game together with its developers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBoardGameRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Developer names; each is looked up and created when missing.
    #[serde(default)]
    pub developers: Vec<String>,
}

impl CreateBoardGameRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating: None,
            description: None,
            developers: Vec::new(),
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
        self.developers.push(developer.into());
        self
    }

    pub fn validate(self) -> Result<Self, InventoryError> {
        Ok(Self {
            name: validate_board_game_name(&self.name)?,
            rating: validate_rating(self.rating)?,
            description: normalize_description(self.description),
            developers: self
                .developers
                .iter()
                .map(|name| validate_developer_name(name))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Request payload for replacing a board game's fields.
///
/// Every field is written: a missing rating or description clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBoardGameRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateBoardGameRequest {
    pub fn validate(self) -> Result<Self, InventoryError> {
        Ok(Self {
            name: validate_board_game_name(&self.name)?,
            rating: validate_rating(self.rating)?,
            description: normalize_description(self.description),
        })
    }
}

/// Request payload for renaming a developer and replacing their board games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDeveloperRequest {
    pub name: String,
    #[serde(default)]
    pub board_games: Vec<BoardGameDescriptor>,
}

impl UpdateDeveloperRequest {
    pub fn validate(self) -> Result<Self, InventoryError> {
        Ok(Self {
            name: validate_developer_name(&self.name)?,
            board_games: self
                .board_games
                .into_iter()
                .map(validate_descriptor)
                .collect::<Result<_, _>>()?,
        })
    }
}
