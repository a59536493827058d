use async_trait::async_trait;

use crate::inventory::{BoardGame, BoardGameDescriptor, Developer};

use super::Result;

/// Repository for board game operations.
///
/// Write operations run as one transaction each: either every row change
/// is applied or none is.
#[async_trait]
pub trait BoardGameRepository: Send + Sync {
    /// Gets all board games, ordered by id.
    async fn list_board_games(&self) -> Result<Vec<BoardGame>>;

    /// Gets a board game by its ID.
    async fn get_board_game(&self, id: i64) -> Result<Option<BoardGame>>;

    /// Gets every board game linked to the given developer.
    async fn board_games_by_developer(&self, developer_id: i64) -> Result<Vec<BoardGame>>;

    /// Creates a board game and links it to the named developers.
    ///
    /// Each developer is looked up by name and created when missing.
    /// Returns the id of the new board game.
    async fn insert_board_game(
        &self,
        name: &str,
        rating: Option<f64>,
        description: Option<&str>,
        developer_names: &[String],
    ) -> Result<i64>;

    /// Overwrites name, rating and description.
    ///
    /// Returns `false` when no board game has this id.
    async fn update_board_game(
        &self,
        id: i64,
        name: &str,
        rating: Option<f64>,
        description: Option<&str>,
    ) -> Result<bool>;

    /// Deletes the board game and every association referencing it.
    ///
    /// Returns `false` when no board game has this id.
    async fn delete_board_game(&self, id: i64) -> Result<bool>;
}

/// Repository for developer operations.
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Cheap read that succeeds when the developer store can answer queries.
    async fn health_check(&self) -> Result<()>;

    /// Gets all developers, ordered by id.
    async fn list_developers(&self) -> Result<Vec<Developer>>;

    /// Gets a developer by their ID.
    async fn get_developer(&self, id: i64) -> Result<Option<Developer>>;

    /// Gets every developer linked to the given board game.
    async fn developers_by_board_game(&self, board_game_id: i64) -> Result<Vec<Developer>>;

    /// Creates a developer and links them to the described board games.
    ///
    /// Board games are looked up by name and created from the descriptor
    /// when missing. Returns the id of the new developer.
    async fn insert_developer(&self, name: &str, board_games: &[BoardGameDescriptor])
        -> Result<i64>;

    /// Renames a developer and replaces all of their board game links.
    ///
    /// Returns `false` when no developer has this id; nothing is written then.
    async fn update_developer(
        &self,
        id: i64,
        name: &str,
        board_games: &[BoardGameDescriptor],
    ) -> Result<bool>;

    /// Deletes the developer and every association referencing them.
    ///
    /// Returns `false` when no developer has this id.
    async fn delete_developer(&self, id: i64) -> Result<bool>;
}
