use serde::{Deserialize, Serialize};

pub const MIN_CARD_COUNT: u32 = 10;
pub const MAX_CARD_COUNT: u32 = 100;
pub const DEFAULT_CARD_COUNT: u32 = MIN_CARD_COUNT;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateGameRequest {
    pub theme: String,
    pub card_count: u32,
    pub style: String,
    #[serde(default)]
    pub description: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Theme is required")]
    MissingTheme,
    #[error("Style is required")]
    MissingStyle,
    #[error("Card count {0:?} is not a number")]
    InvalidCardCount(String),
    #[error("Card count must be between 10 and 100, got {0}")]
    CardCountOutOfRange(u32),
}

impl GenerateGameRequest {
    /// Builds a request from raw form input, trimming every field.
    pub fn from_form(
        theme: &str,
        card_count: &str,
        style: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(ValidationError::MissingTheme);
        }
        let style = style.trim();
        if style.is_empty() {
            return Err(ValidationError::MissingStyle);
        }
        let card_count = card_count.trim();
        let card_count: u32 = card_count
            .parse()
            .map_err(|_| ValidationError::InvalidCardCount(card_count.to_string()))?;
        if !(MIN_CARD_COUNT..=MAX_CARD_COUNT).contains(&card_count) {
            return Err(ValidationError::CardCountOutOfRange(card_count));
        }
        Ok(GenerateGameRequest {
            theme: theme.to_string(),
            card_count,
            style: style.to_string(),
            description: description.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Role,
    Event,
    Item,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub game_id: i64,
    #[serde(rename = "type", default)]
    pub kind: CardKind,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateGameResponse {
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(rename = "pdfUrl", default)]
    pub pdf_url: Option<String>,
}

/// Error envelope returned by the backend on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_is_trimmed() {
        let request =
            GenerateGameRequest::from_form("  Space pirates ", " 24 ", "cartoon", " ").unwrap();
        assert_eq!(
            request,
            GenerateGameRequest {
                theme: "Space pirates".to_string(),
                card_count: 24,
                style: "cartoon".to_string(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            GenerateGameRequest::from_form(" ", "10", "noir", ""),
            Err(ValidationError::MissingTheme)
        );
        assert_eq!(
            GenerateGameRequest::from_form("Heist", "10", "", ""),
            Err(ValidationError::MissingStyle)
        );
    }

    #[test]
    fn test_card_count_bounds() {
        assert!(GenerateGameRequest::from_form("Heist", "10", "noir", "").is_ok());
        assert!(GenerateGameRequest::from_form("Heist", "100", "noir", "").is_ok());
        assert_eq!(
            GenerateGameRequest::from_form("Heist", "9", "noir", ""),
            Err(ValidationError::CardCountOutOfRange(9))
        );
        assert_eq!(
            GenerateGameRequest::from_form("Heist", "101", "noir", ""),
            Err(ValidationError::CardCountOutOfRange(101))
        );
        assert_eq!(
            GenerateGameRequest::from_form("Heist", "ten", "noir", ""),
            Err(ValidationError::InvalidCardCount("ten".to_string()))
        );
        assert_eq!(
            GenerateGameRequest::from_form("Heist", "-5", "noir", ""),
            Err(ValidationError::InvalidCardCount("-5".to_string()))
        );
    }

    #[test]
    fn test_request_uses_backend_field_names() {
        let request = GenerateGameRequest::from_form("Heist", "12", "noir", "A bank job").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "theme": "Heist",
                "card_count": 12,
                "style": "noir",
                "description": "A bank job",
            })
        );
    }

    #[test]
    fn test_decode_generate_response() {
        let body = r#"{
            "cards": [
                {"id": 0, "game_id": 1, "type": "", "name": "Heist Magic Sword",
                 "description": "A shining sword", "effect": "Deals 2 damage",
                 "created_by": "", "is_del": 0},
                {"name": "The Fixer", "type": "role"}
            ],
            "pdfUrl": "http://localhost:8080/files/game_1.pdf"
        }"#;
        let response: GenerateGameResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.cards.len(), 2);
        assert_eq!(response.cards[0].kind, CardKind::Unspecified);
        assert_eq!(response.cards[0].effect, "Deals 2 damage");
        assert_eq!(response.cards[1].kind, CardKind::Role);
        assert_eq!(
            response.pdf_url.as_deref(),
            Some("http://localhost:8080/files/game_1.pdf")
        );
    }

    #[test]
    fn test_decode_error_body() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error": "Invalid input: missing theme"}"#).unwrap();
        assert_eq!(body.error, "Invalid input: missing theme");
    }
}
