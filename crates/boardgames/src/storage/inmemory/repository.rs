//! In-memory repository implementation.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use boardgames_core::inventory::{Association, BoardGame, BoardGameDescriptor, Developer};
use boardgames_core::storage::{
    BoardGameRepository, DeveloperRepository, RepositoryError, Result,
};

/// The three tables, mirroring the SQLite schema.
#[derive(Debug, Clone, Default)]
struct Tables {
    board_games: BTreeMap<i64, BoardGame>,
    developers: BTreeMap<i64, Developer>,
    associations: BTreeSet<Association>,
    last_board_game_id: i64,
    last_developer_id: i64,
}

impl Tables {
    fn board_game_id_by_name(&self, name: &str) -> Option<i64> {
        self.board_games
            .values()
            .find(|game| game.name == name)
            .map(|game| game.id)
    }

    fn developer_id_by_name(&self, name: &str) -> Option<i64> {
        self.developers
            .values()
            .find(|developer| developer.name == name)
            .map(|developer| developer.id)
    }

    fn insert_board_game(
        &mut self,
        name: &str,
        rating: Option<f64>,
        description: Option<&str>,
    ) -> Result<i64> {
        if self.board_game_id_by_name(name).is_some() {
            return Err(RepositoryError::ConstraintViolation {
                entity_type: "BoardGame",
                detail: format!("board game name '{name}' already exists"),
            });
        }

        self.last_board_game_id += 1;
        let id = self.last_board_game_id;
        self.board_games.insert(
            id,
            BoardGame {
                id,
                name: name.to_string(),
                rating,
                description: description.map(str::to_string),
            },
        );
        Ok(id)
    }

    fn insert_developer(&mut self, name: &str) -> Result<i64> {
        if self.developer_id_by_name(name).is_some() {
            return Err(RepositoryError::ConstraintViolation {
                entity_type: "Developer",
                detail: format!("developer name '{name}' already exists"),
            });
        }

        self.last_developer_id += 1;
        let id = self.last_developer_id;
        self.developers.insert(id, Developer::new(id, name));
        Ok(id)
    }

    fn resolve_board_game_id(&mut self, descriptor: &BoardGameDescriptor) -> Result<i64> {
        match self.board_game_id_by_name(&descriptor.name) {
            Some(id) => Ok(id),
            None => self.insert_board_game(
                &descriptor.name,
                descriptor.rating,
                descriptor.description.as_deref(),
            ),
        }
    }

    fn resolve_developer_id(&mut self, name: &str) -> Result<i64> {
        match self.developer_id_by_name(name) {
            Some(id) => Ok(id),
            None => self.insert_developer(name),
        }
    }

    fn link(&mut self, developer_id: i64, board_game_id: i64) -> Result<()> {
        if !self
            .associations
            .insert(Association::new(developer_id, board_game_id))
        {
            return Err(RepositoryError::ConstraintViolation {
                entity_type: "Association",
                detail: format!(
                    "developer {developer_id} is already linked to board game {board_game_id}"
                ),
            });
        }
        Ok(())
    }

    fn link_board_games(
        &mut self,
        developer_id: i64,
        board_games: &[BoardGameDescriptor],
    ) -> Result<()> {
        for descriptor in board_games {
            let board_game_id = self.resolve_board_game_id(descriptor)?;
            self.link(developer_id, board_game_id)?;
        }
        Ok(())
    }
}

/// In-memory storage backend.
///
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against a copy of the tables and keeps the copy only on success.
    async fn write<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T> + Send,
    {
        let mut tables = self.tables.write().await;
        let mut staged = tables.clone();
        let value = f(&mut staged)?;
        *tables = staged;
        Ok(value)
    }
}

#[async_trait]
impl BoardGameRepository for InMemoryRepository {
    async fn list_board_games(&self) -> Result<Vec<BoardGame>> {
        let tables = self.tables.read().await;
        Ok(tables.board_games.values().cloned().collect())
    }

    async fn get_board_game(&self, id: i64) -> Result<Option<BoardGame>> {
        let tables = self.tables.read().await;
        Ok(tables.board_games.get(&id).cloned())
    }

    async fn board_games_by_developer(&self, developer_id: i64) -> Result<Vec<BoardGame>> {
        let tables = self.tables.read().await;
        Ok(tables
            .associations
            .iter()
            .filter(|a| a.developer_id == developer_id)
            .filter_map(|a| tables.board_games.get(&a.board_game_id))
            .cloned()
            .collect())
    }

    async fn insert_board_game(
        &self,
        name: &str,
        rating: Option<f64>,
        description: Option<&str>,
        developer_names: &[String],
    ) -> Result<i64> {
        let id = self
            .write(|tables| {
                let board_game_id = tables.insert_board_game(name, rating, description)?;
                for developer_name in developer_names {
                    let developer_id = tables.resolve_developer_id(developer_name)?;
                    tables.link(developer_id, board_game_id)?;
                }
                Ok(board_game_id)
            })
            .await?;

        tracing::debug!(board_game_id = id, "Inserted board game");
        Ok(id)
    }

    async fn update_board_game(
        &self,
        id: i64,
        name: &str,
        rating: Option<f64>,
        description: Option<&str>,
    ) -> Result<bool> {
        self.write(|tables| {
            if !tables.board_games.contains_key(&id) {
                return Ok(false);
            }
            if tables
                .board_game_id_by_name(name)
                .is_some_and(|existing| existing != id)
            {
                return Err(RepositoryError::ConstraintViolation {
                    entity_type: "BoardGame",
                    detail: format!("board game name '{name}' already exists"),
                });
            }

            tables.board_games.insert(
                id,
                BoardGame {
                    id,
                    name: name.to_string(),
                    rating,
                    description: description.map(str::to_string),
                },
            );
            Ok(true)
        })
        .await
    }

    async fn delete_board_game(&self, id: i64) -> Result<bool> {
        let deleted = self
            .write(|tables| {
                tables.associations.retain(|a| a.board_game_id != id);
                Ok(tables.board_games.remove(&id).is_some())
            })
            .await?;

        tracing::debug!(board_game_id = id, deleted, "Deleted board game");
        Ok(deleted)
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryRepository {
    async fn health_check(&self) -> Result<()> {
        let _tables = self.tables.read().await;
        Ok(())
    }

    async fn list_developers(&self) -> Result<Vec<Developer>> {
        let tables = self.tables.read().await;
        Ok(tables.developers.values().cloned().collect())
    }

    async fn get_developer(&self, id: i64) -> Result<Option<Developer>> {
        let tables = self.tables.read().await;
        Ok(tables.developers.get(&id).cloned())
    }

    async fn developers_by_board_game(&self, board_game_id: i64) -> Result<Vec<Developer>> {
        let tables = self.tables.read().await;
        Ok(tables
            .associations
            .iter()
            .filter(|a| a.board_game_id == board_game_id)
            .filter_map(|a| tables.developers.get(&a.developer_id))
            .cloned()
            .collect())
    }

    async fn insert_developer(
        &self,
        name: &str,
        board_games: &[BoardGameDescriptor],
    ) -> Result<i64> {
        let id = self
            .write(|tables| {
                let developer_id = tables.insert_developer(name)?;
                tables.link_board_games(developer_id, board_games)?;
                Ok(developer_id)
            })
            .await?;

        tracing::debug!(
            developer_id = id,
            board_games = board_games.len(),
            "Inserted developer"
        );
        Ok(id)
    }

    async fn update_developer(
        &self,
        id: i64,
        name: &str,
        board_games: &[BoardGameDescriptor],
    ) -> Result<bool> {
        self.write(|tables| {
            if !tables.developers.contains_key(&id) {
                return Ok(false);
            }
            if tables
                .developer_id_by_name(name)
                .is_some_and(|existing| existing != id)
            {
                return Err(RepositoryError::ConstraintViolation {
                    entity_type: "Developer",
                    detail: format!("developer name '{name}' already exists"),
                });
            }

            tables.developers.insert(id, Developer::new(id, name));
            tables.associations.retain(|a| a.developer_id != id);
            tables.link_board_games(id, board_games)?;
            Ok(true)
        })
        .await
    }

    async fn delete_developer(&self, id: i64) -> Result<bool> {
        let deleted = self
            .write(|tables| {
                tables.associations.retain(|a| a.developer_id != id);
                Ok(tables.developers.remove(&id).is_some())
            })
            .await?;

        tracing::debug!(developer_id = id, deleted, "Deleted developer");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(games: &[BoardGame]) -> Vec<&str> {
        games.iter().map(|g| g.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_insert_developer_creates_games_and_links() {
        let repo = InMemoryRepository::new();

        let id = repo
            .insert_developer(
                "Klaus Teuber",
                &[BoardGameDescriptor::new("Catan").with_rating(8.1)],
            )
            .await
            .unwrap();

        assert_eq!(
            repo.list_developers().await.unwrap(),
            vec![Developer::new(id, "Klaus Teuber")]
        );
        let games = repo.board_games_by_developer(id).await.unwrap();
        assert_eq!(games, vec![BoardGame::new(1, "Catan").with_rating(8.1)]);
    }

    #[tokio::test]
    async fn test_duplicate_developer_leaves_tables_untouched() {
        let repo = InMemoryRepository::new();
        repo.insert_developer("Klaus Teuber", &[BoardGameDescriptor::new("Catan")])
            .await
            .unwrap();

        let result = repo
            .insert_developer(
                "Klaus Teuber",
                &[
                    BoardGameDescriptor::new("Catan"),
                    BoardGameDescriptor::new("Barbarossa"),
                ],
            )
            .await;

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation {
                entity_type: "Developer",
                ..
            })
        ));
        assert_eq!(repo.list_developers().await.unwrap().len(), 1);
        assert_eq!(names(&repo.list_board_games().await.unwrap()), vec!["Catan"]);
    }

    #[tokio::test]
    async fn test_failed_link_discards_staged_rows() {
        let repo = InMemoryRepository::new();

        let result = repo
            .insert_developer(
                "Uwe Rosenberg",
                &[
                    BoardGameDescriptor::new("Agricola"),
                    BoardGameDescriptor::new("Caverna"),
                    BoardGameDescriptor::new("Agricola"),
                ],
            )
            .await;

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation {
                entity_type: "Association",
                ..
            })
        ));
        assert!(repo.list_developers().await.unwrap().is_empty());
        assert!(repo.list_board_games().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = InMemoryRepository::new();

        assert!(repo.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_insert_board_game_failed_link_rolls_back() {
        let repo = InMemoryRepository::new();
        let old = repo.insert_developer("Old Dev", &[]).await.unwrap();

        // "New Dev" is created once, then its second link repeats the pair.
        let result = repo
            .insert_board_game(
                "Azul",
                Some(7.8),
                None,
                &[
                    "Old Dev".to_string(),
                    "New Dev".to_string(),
                    "New Dev".to_string(),
                ],
            )
            .await;

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation {
                entity_type: "Association",
                ..
            })
        ));
        assert!(repo.list_board_games().await.unwrap().is_empty());
        let developers = repo.list_developers().await.unwrap();
        assert_eq!(developers.len(), 1);
        assert_eq!(developers[0].name, "Old Dev");
        assert!(repo.board_games_by_developer(old).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_reuses_board_game_by_name() {
        let repo = InMemoryRepository::new();

        let matt = repo
            .insert_developer("Matt Leacock", &[BoardGameDescriptor::new("Pandemic")])
            .await
            .unwrap();
        let rob = repo
            .insert_developer("Rob Daviau", &[BoardGameDescriptor::new("Pandemic")])
            .await
            .unwrap();

        let games = repo.list_board_games().await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(
            repo.developers_by_board_game(games[0].id).await.unwrap(),
            vec![Developer::new(matt, "Matt Leacock"), Developer::new(rob, "Rob Daviau")]
        );
    }

    #[tokio::test]
    async fn test_insert_board_game_upserts_developers() {
        let repo = InMemoryRepository::new();
        let matt = repo.insert_developer("Matt Leacock", &[]).await.unwrap();

        let id = repo
            .insert_board_game(
                "Pandemic",
                Some(7.6),
                None,
                &["Matt Leacock".to_string(), "Rob Daviau".to_string()],
            )
            .await
            .unwrap();

        let developers = repo.developers_by_board_game(id).await.unwrap();
        assert_eq!(developers.len(), 2);
        assert_eq!(developers[0].id, matt);
        assert_eq!(developers[1].name, "Rob Daviau");
    }

    #[tokio::test]
    async fn test_update_developer_replaces_all_links() {
        let repo = InMemoryRepository::new();
        let id = repo
            .insert_developer(
                "Uwe Rosenberg",
                &[
                    BoardGameDescriptor::new("Agricola"),
                    BoardGameDescriptor::new("Caverna"),
                ],
            )
            .await
            .unwrap();

        let updated = repo
            .update_developer(id, "Uwe Rosenberg", &[BoardGameDescriptor::new("Patchwork")])
            .await
            .unwrap();

        assert!(updated);
        assert_eq!(
            names(&repo.board_games_by_developer(id).await.unwrap()),
            vec!["Patchwork"]
        );
        assert_eq!(repo.list_board_games().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_missing_rows_returns_false() {
        let repo = InMemoryRepository::new();

        assert!(!repo
            .update_developer(3, "Nobody", &[BoardGameDescriptor::new("Catan")])
            .await
            .unwrap());
        assert!(!repo.update_board_game(3, "Catan", None, None).await.unwrap());
        assert!(repo.list_board_games().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_board_game_rejects_taken_name() {
        let repo = InMemoryRepository::new();
        repo.insert_board_game("Catan", None, None, &[]).await.unwrap();
        let azul = repo.insert_board_game("Azul", None, None, &[]).await.unwrap();

        let result = repo.update_board_game(azul, "Catan", None, None).await;

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation { .. })
        ));
        assert_eq!(
            repo.get_board_game(azul).await.unwrap(),
            Some(BoardGame::new(azul, "Azul"))
        );
    }

    #[tokio::test]
    async fn test_delete_cascades_links() {
        let repo = InMemoryRepository::new();
        let klaus = repo
            .insert_developer("Klaus Teuber", &[BoardGameDescriptor::new("Catan")])
            .await
            .unwrap();
        let catan = repo.list_board_games().await.unwrap()[0].id;

        assert!(repo.delete_board_game(catan).await.unwrap());
        assert!(repo.board_games_by_developer(klaus).await.unwrap().is_empty());
        assert!(repo.developers_by_board_game(catan).await.unwrap().is_empty());

        assert!(repo.delete_developer(klaus).await.unwrap());
        assert!(!repo.delete_developer(klaus).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryRepository::new();
        let first = repo.insert_board_game("Catan", None, None, &[]).await.unwrap();
        repo.delete_board_game(first).await.unwrap();

        let second = repo.insert_board_game("Catan", None, None, &[]).await.unwrap();

        assert!(second > first);
    }
}
