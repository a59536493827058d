use serde::{Deserialize, Serialize};

/// A board game tracked by the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardGame {
    pub id: i64,
    pub name: String,
    /// Optional score, typically on a 0-10 scale.
    pub rating: Option<f64>,
    pub description: Option<String>,
}

impl BoardGame {
    /// Creates a board game with only a name set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rating: None,
            description: None,
        }
    }

    /// Sets the rating for this board game.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the description for this board game.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A person or studio that worked on one or more board games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: i64,
    pub name: String,
}

impl Developer {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A join row recording that a developer worked on a board game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Association {
    pub developer_id: i64,
    pub board_game_id: i64,
}

impl Association {
    pub fn new(developer_id: i64, board_game_id: i64) -> Self {
        Self {
            developer_id,
            board_game_id,
        }
    }
}

/// Describes a board game to associate with a developer.
///
/// The name is the lookup key: an existing board game with the same name is
/// reused as-is, otherwise a new one is created from the rating and
/// description carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardGameDescriptor {
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BoardGameDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating: None,
            description: None,
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
}
