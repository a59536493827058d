use serde::Deserialize;

use boardgames_core::inventory::{
    parse_board_game_lines, BoardGame, CreateDeveloperRequest, InventoryError,
    UpdateDeveloperRequest,
};

/// HTML form payload for adding or editing a developer.
///
/// Board games are entered one per line as `name | rating | description`.
#[derive(Debug, Deserialize)]
pub struct DeveloperForm {
    pub name: String,
    #[serde(default)]
    pub board_games: String,
}

impl DeveloperForm {
    pub fn into_create_request(self) -> Result<CreateDeveloperRequest, InventoryError> {
        Ok(CreateDeveloperRequest {
            board_games: parse_board_game_lines(&self.board_games)?,
            name: self.name,
        })
    }

    pub fn into_update_request(self) -> Result<UpdateDeveloperRequest, InventoryError> {
        Ok(UpdateDeveloperRequest {
            board_games: parse_board_game_lines(&self.board_games)?,
            name: self.name,
        })
    }
}

/// Formats board games back into the textarea syntax read by
/// [`DeveloperForm`], one `name | rating | description` line each.
pub fn board_game_lines(board_games: &[BoardGame]) -> String {
    board_games
        .iter()
        .map(|game| {
            let rating = game.rating.map(|r| r.to_string()).unwrap_or_default();
            match (&game.rating, &game.description) {
                (_, Some(description)) => format!("{} | {rating} | {description}", game.name),
                (Some(_), None) => format!("{} | {rating}", game.name),
                (None, None) => game.name.clone(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardgames_core::inventory::BoardGameDescriptor;

    #[test]
    fn test_form_parses_board_game_lines() {
        let form = DeveloperForm {
            name: "Klaus Teuber".to_string(),
            board_games: "Catan | 8.1 | Trade and build\n\nBarbarossa".to_string(),
        };

        let request = form.into_create_request().unwrap();

        assert_eq!(
            request,
            CreateDeveloperRequest::new("Klaus Teuber")
                .with_board_game(
                    BoardGameDescriptor::new("Catan")
                        .with_rating(8.1)
                        .with_description("Trade and build")
                )
                .with_board_game(BoardGameDescriptor::new("Barbarossa"))
        );
    }

    #[test]
    fn test_form_without_board_games() {
        let form: DeveloperForm = serde_json::from_str(r#"{"name": "Rob Daviau"}"#).unwrap();

        let request = form.into_update_request().unwrap();

        assert!(request.board_games.is_empty());
    }

    #[test]
    fn test_board_game_lines_parse_back() {
        let games = vec![
            BoardGame::new(1, "Catan")
                .with_rating(8.1)
                .with_description("Trade | build"),
            BoardGame::new(2, "Barbarossa").with_rating(6.0),
            BoardGame::new(3, "Elasund").with_description("Harbor town"),
            BoardGame::new(4, "Anno 1701"),
        ];

        let lines = board_game_lines(&games);
        let parsed = parse_board_game_lines(&lines).unwrap();

        assert_eq!(
            parsed,
            vec![
                BoardGameDescriptor::new("Catan")
                    .with_rating(8.1)
                    .with_description("Trade | build"),
                BoardGameDescriptor::new("Barbarossa").with_rating(6.0),
                BoardGameDescriptor::new("Elasund").with_description("Harbor town"),
                BoardGameDescriptor::new("Anno 1701"),
            ]
        );
    }

    #[test]
    fn test_board_game_names_with_line_separators_are_never_stored() {
        // Such a name could not survive a trip through board_game_lines.
        let request = CreateDeveloperRequest::new("Someone")
            .with_board_game(BoardGameDescriptor::new("Tic|Tac").with_rating(5.0));
        assert_eq!(
            request.validate(),
            Err(InventoryError::ReservedCharacterInName('|'))
        );

        let form = DeveloperForm {
            name: "Someone".to_string(),
            board_games: "Tic|Tac|Toe | 5".to_string(),
        };
        assert!(form.into_create_request().is_err());
    }

    #[test]
    fn test_form_with_bad_rating() {
        let form = DeveloperForm {
            name: "Klaus Teuber".to_string(),
            board_games: "Catan | lots".to_string(),
        };

        assert!(matches!(
            form.into_create_request(),
            Err(InventoryError::InvalidRating(_))
        ));
    }
}
