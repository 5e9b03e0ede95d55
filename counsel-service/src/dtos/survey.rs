use serde::{Deserialize, Serialize};
use validator::Validate;

/// One answered interview question, replayed by the client on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaItem {
    pub question: String,
    pub answer: String,
}

/// Request body shared by both survey endpoints. Every field is optional on
/// the wire; validation is shape-only, so there are no field rules.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SurveyRequest {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default)]
    pub history: Vec<QaItem>,
}

fn default_language() -> String {
    "English".to_string()
}

fn default_name() -> String {
    "User".to_string()
}

fn default_age() -> u32 {
    18
}

fn default_gender() -> String {
    "Other".to_string()
}

/// The structured shape the question model is constrained to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportResponse {
    pub report: String,
}

/// Gemini `responseSchema` enforcing the `QuestionResponse` shape, with the
/// option list bounded to 3-4 entries.
pub fn question_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "question": {
                "type": "STRING",
                "description": "The dynamic question to ask the user"
            },
            "options": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "minItems": 3,
                "maxItems": 4,
                "description": "3 to 4 short, actionable multiple-choice options"
            }
        },
        "required": ["question", "options"]
    })
}
