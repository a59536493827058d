use super::error::InventoryError;
use super::types::BoardGameDescriptor;

const MAX_NAME_LEN: usize = 200;
const MAX_RATING: f64 = 10.0;

/// Trims a board game name and checks it is usable as a lookup key.
pub fn validate_board_game_name(name: &str) -> Result<String, InventoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InventoryError::EmptyBoardGameName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(InventoryError::BoardGameNameTooLong);
    }
    // `|` and line breaks delimit games in the developer form textarea.
    if let Some(c) = name.chars().find(|c| matches!(c, '|' | '\n' | '\r')) {
        return Err(InventoryError::ReservedCharacterInName(c));
    }
    Ok(name.to_string())
}

/// Trims a developer name and checks it is usable as a lookup key.
pub fn validate_developer_name(name: &str) -> Result<String, InventoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InventoryError::EmptyDeveloperName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(InventoryError::DeveloperNameTooLong);
    }
    Ok(name.to_string())
}

/// Accepts a missing rating or a finite one in `0..=10`.
pub fn validate_rating(rating: Option<f64>) -> Result<Option<f64>, InventoryError> {
    match rating {
        None => Ok(None),
        Some(r) if r.is_finite() && (0.0..=MAX_RATING).contains(&r) => Ok(Some(r)),
        Some(r) => Err(InventoryError::RatingOutOfRange(r)),
    }
}

/// Parses a rating typed as text. Blank input means no rating.
pub fn parse_rating(raw: &str) -> Result<Option<f64>, InventoryError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| InventoryError::InvalidRating(raw.to_string()))
}

/// Blank descriptions are stored as `None`.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Validates a descriptor and returns its normalized form.
pub fn validate_descriptor(
    descriptor: BoardGameDescriptor,
) -> Result<BoardGameDescriptor, InventoryError> {
    Ok(BoardGameDescriptor {
        name: validate_board_game_name(&descriptor.name)?,
        rating: validate_rating(descriptor.rating)?,
        description: normalize_description(descriptor.description),
    })
}

/// Splits a comma-separated list of developer names.
///
/// Blank segments are skipped. Duplicates are kept as given.
pub fn parse_developer_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses one board game per line in the form `name | rating | description`.
///
/// Rating and description are optional, blank lines are skipped. The
/// description is everything after the second `|`, so it may itself
/// contain the separator.
pub fn parse_board_game_lines(input: &str) -> Result<Vec<BoardGameDescriptor>, InventoryError> {
    let mut descriptors = Vec::new();

    for line in input.lines() {
        let mut parts = line.splitn(3, '|').map(str::trim);
        let name = match parts.next() {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };

        let rating = parse_rating(parts.next().unwrap_or_default())?;

        let description = parts.next().map(str::to_string);

        descriptors.push(validate_descriptor(BoardGameDescriptor {
            name: name.to_string(),
            rating,
            description,
        })?);
    }

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_board_game_name_trims() {
        assert_eq!(validate_board_game_name("  Catan ").unwrap(), "Catan");
    }

    #[test]
    fn test_validate_board_game_name_rejects_blank() {
        assert_eq!(
            validate_board_game_name("   "),
            Err(InventoryError::EmptyBoardGameName)
        );
    }

    #[test]
    fn test_validate_developer_name_rejects_too_long() {
        let name = "x".repeat(201);
        assert_eq!(
            validate_developer_name(&name),
            Err(InventoryError::DeveloperNameTooLong)
        );
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert_eq!(validate_rating(None), Ok(None));
        assert_eq!(validate_rating(Some(0.0)), Ok(Some(0.0)));
        assert_eq!(validate_rating(Some(10.0)), Ok(Some(10.0)));
        assert_eq!(
            validate_rating(Some(10.5)),
            Err(InventoryError::RatingOutOfRange(10.5))
        );
        assert!(validate_rating(Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_board_game_name_rejects_separators() {
        assert_eq!(
            validate_board_game_name("Tic|Tac"),
            Err(InventoryError::ReservedCharacterInName('|'))
        );
        assert_eq!(
            validate_board_game_name("Tic\nTac"),
            Err(InventoryError::ReservedCharacterInName('\n'))
        );
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(""), Ok(None));
        assert_eq!(parse_rating("  "), Ok(None));
        assert_eq!(parse_rating(" 8.1 "), Ok(Some(8.1)));
        assert_eq!(
            parse_rating("great"),
            Err(InventoryError::InvalidRating("great".to_string()))
        );
    }

    #[test]
    fn test_normalize_description_drops_blank() {
        assert_eq!(normalize_description(Some("  ".to_string())), None);
        assert_eq!(
            normalize_description(Some(" Worker placement ".to_string())),
            Some("Worker placement".to_string())
        );
    }

    #[test]
    fn test_parse_developer_names_skips_blank_segments() {
        let names = parse_developer_names("Klaus Teuber, , Uwe Rosenberg,");
        assert_eq!(names, vec!["Klaus Teuber", "Uwe Rosenberg"]);
    }

    #[test]
    fn test_parse_board_game_lines_full_and_partial() {
        let input = "Catan | 8.1 | Trade, build, settle\n\nAgricola\nCaverna | | Dig | deeper";
        let games = parse_board_game_lines(input).unwrap();

        assert_eq!(games.len(), 3);
        assert_eq!(
            games[0],
            BoardGameDescriptor::new("Catan")
                .with_rating(8.1)
                .with_description("Trade, build, settle")
        );
        assert_eq!(games[1], BoardGameDescriptor::new("Agricola"));
        assert_eq!(
            games[2],
            BoardGameDescriptor::new("Caverna").with_description("Dig | deeper")
        );
    }

    #[test]
    fn test_parse_board_game_lines_invalid_rating() {
        let result = parse_board_game_lines("Catan | great");
        assert_eq!(
            result,
            Err(InventoryError::InvalidRating("great".to_string()))
        );
    }
}
