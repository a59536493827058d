use thiserror::Error;

/// Errors raised while validating inventory input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Board game name cannot be empty")]
    EmptyBoardGameName,
    #[error("Board game name too long (max 200 characters)")]
    BoardGameNameTooLong,
    #[error("Board game name cannot contain {0:?}")]
    ReservedCharacterInName(char),
    #[error("Developer name cannot be empty")]
    EmptyDeveloperName,
    #[error("Developer name too long (max 200 characters)")]
    DeveloperNameTooLong,
    #[error("Rating must be between 0 and 10, got {0}")]
    RatingOutOfRange(f64),
    #[error("Invalid rating: {0}")]
    InvalidRating(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_error_display() {
        assert_eq!(
            InventoryError::EmptyBoardGameName.to_string(),
            "Board game name cannot be empty"
        );
        assert_eq!(
            InventoryError::RatingOutOfRange(11.5).to_string(),
            "Rating must be between 0 and 10, got 11.5"
        );
        assert_eq!(
            InventoryError::InvalidRating("abc".to_string()).to_string(),
            "Invalid rating: abc"
        );
        assert_eq!(
            InventoryError::ReservedCharacterInName('|').to_string(),
            "Board game name cannot contain '|'"
        );
    }
}
