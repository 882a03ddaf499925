use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the government question bank, kept lossless so responses
/// round-trip the upstream columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    /// Question prompt column.
    #[serde(rename = "title2", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// HTML fragment with the answer list and `«…»` license tokens.
    #[serde(
        rename = "description4",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description_html: Option<String>,

    /// Every other upstream column, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A quiz-ready view derived from a [`RawRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub question_id: Value,
}
