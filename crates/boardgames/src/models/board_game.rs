use serde::Deserialize;

use boardgames_core::inventory::{
    parse_developer_names, parse_rating, CreateBoardGameRequest, InventoryError,
    UpdateBoardGameRequest,
};
use boardgames_core::serde::deserialize_optional_string;

/// HTML form payload for adding or editing a board game.
///
/// The rating stays as typed until conversion so a bad value can be shown
/// back to the user. Developers are typed into a single comma-separated field.
#[derive(Debug, Deserialize)]
pub struct BoardGameForm {
    pub name: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub developers: String,
}

impl BoardGameForm {
    /// Converts the form into a create request. Validation happens later.
    pub fn into_create_request(self) -> Result<CreateBoardGameRequest, InventoryError> {
        Ok(CreateBoardGameRequest {
            rating: parse_rating(&self.rating)?,
            developers: parse_developer_names(&self.developers),
            name: self.name,
            description: self.description,
        })
    }

    /// Converts the form into an update request. The developers field is ignored.
    pub fn into_update_request(self) -> Result<UpdateBoardGameRequest, InventoryError> {
        Ok(UpdateBoardGameRequest {
            rating: parse_rating(&self.rating)?,
            name: self.name,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_with_empty_optionals() {
        let form: BoardGameForm =
            serde_json::from_str(r#"{"name": "Catan", "rating": "", "description": ""}"#)
                .unwrap();

        let request = form.into_create_request().unwrap();

        assert_eq!(request, CreateBoardGameRequest::new("Catan"));
    }

    #[test]
    fn test_form_splits_developers() {
        let form: BoardGameForm = serde_json::from_str(
            r#"{"name": "Pandemic Legacy", "rating": "8.5",
                "developers": "Matt Leacock, Rob Daviau,"}"#,
        )
        .unwrap();

        let request = form.into_create_request().unwrap();

        assert_eq!(request.rating, Some(8.5));
        assert_eq!(
            request.developers,
            vec!["Matt Leacock".to_string(), "Rob Daviau".to_string()]
        );
    }

    #[test]
    fn test_form_with_non_numeric_rating_is_invalid() {
        let form: BoardGameForm =
            serde_json::from_str(r#"{"name": "Catan", "rating": "great"}"#).unwrap();

        assert_eq!(form.rating, "great");
        assert_eq!(
            form.into_create_request(),
            Err(InventoryError::InvalidRating("great".to_string()))
        );
    }

    #[test]
    fn test_update_form_with_non_numeric_rating_is_invalid() {
        let form: BoardGameForm =
            serde_json::from_str(r#"{"name": "Catan", "rating": "7,5"}"#).unwrap();

        assert_eq!(
            form.into_update_request(),
            Err(InventoryError::InvalidRating("7,5".to_string()))
        );
    }

    #[test]
    fn test_into_update_request() {
        let form: BoardGameForm = serde_json::from_str(
            r#"{"name": "Catan", "rating": "7.2", "description": "Classic", "developers": "x"}"#,
        )
        .unwrap();

        let request = form.into_update_request().unwrap();

        assert_eq!(request.name, "Catan");
        assert_eq!(request.rating, Some(7.2));
        assert_eq!(request.description.as_deref(), Some("Classic"));
    }
}
