// src/suggestion/models.rs
use serde::{Deserialize, Serialize};

/// Form fields sent to the suggestion-generation service, as typed by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub age: String,
    pub height: String,
    pub skin_tone: String,
    pub color_preferences: String,
}

/// Body returned by the service: `{"result": "..."}` on success,
/// `{"error": "..."}` when the generation flow failed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
