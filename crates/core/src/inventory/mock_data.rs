//! Demo catalog for seeding a fresh database.
//!
//! Pure data, no I/O. The server inserts it through the developer repository
//! so board games shared between developers are resolved by name.

use super::requests::CreateDeveloperRequest;
use super::types::BoardGameDescriptor;

/// Returns a small fixed catalog of developers and the games they worked on.
///
/// "Pandemic Legacy: Season 1" appears under two developers, so seeding it
/// exercises the find-or-create path.
///
/// # Example
///
/// ```
/// use boardgames_core::inventory::demo_catalog;
///
/// let catalog = demo_catalog();
/// assert!(catalog.iter().any(|dev| dev.name == "Klaus Teuber"));
/// ```
pub fn demo_catalog() -> Vec<CreateDeveloperRequest> {
    vec![
        CreateDeveloperRequest::new("Klaus Teuber")
            .with_board_game(
                BoardGameDescriptor::new("Catan")
                    .with_rating(7.1)
                    .with_description("Trade, build and settle the island of Catan."),
            )
            .with_board_game(BoardGameDescriptor::new("Barbarossa").with_rating(6.2)),
        CreateDeveloperRequest::new("Uwe Rosenberg")
            .with_board_game(
                BoardGameDescriptor::new("Agricola")
                    .with_rating(7.9)
                    .with_description("Farming in 17th century Europe."),
            )
            .with_board_game(BoardGameDescriptor::new("Caverna: The Cave Farmers").with_rating(8.0)),
        CreateDeveloperRequest::new("Matt Leacock")
            .with_board_game(
                BoardGameDescriptor::new("Pandemic")
                    .with_rating(7.6)
                    .with_description("Cooperative race against four diseases."),
            )
            .with_board_game(BoardGameDescriptor::new("Pandemic Legacy: Season 1").with_rating(8.5)),
        CreateDeveloperRequest::new("Rob Daviau")
            .with_board_game(BoardGameDescriptor::new("Pandemic Legacy: Season 1"))
            .with_board_game(BoardGameDescriptor::new("Risk Legacy").with_rating(7.5)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_catalog_developers_are_unique() {
        let catalog = demo_catalog();
        let names: HashSet<&str> = catalog.iter().map(|dev| dev.name.as_str()).collect();

        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_demo_catalog_is_valid() {
        for developer in demo_catalog() {
            assert!(developer.validate().is_ok());
        }
    }

    #[test]
    fn test_demo_catalog_shares_a_game() {
        let catalog = demo_catalog();
        let shared = catalog
            .iter()
            .filter(|dev| {
                dev.board_games
                    .iter()
                    .any(|game| game.name == "Pandemic Legacy: Season 1")
            })
            .count();

        assert_eq!(shared, 2);
    }
}
