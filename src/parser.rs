//! Extraction of quiz structure from the HTML fragments embedded in each
//! record.
//!
//! The upstream dataset encodes answers as `<li><span …>text</span></li>`
//! items, marks the correct one with a span whose `id` starts with
//! `correctAnswer`, and tags license categories as `«B»`-style tokens.
//! Parsing is deliberately permissive: malformed fragments degrade to
//! defaults instead of failing the request.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::models::{ParsedQuestion, RawRecord};
use crate::names;

static CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("«([^»]*)»").unwrap());

static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<li><span[^>]*>(.*?)</span></li>").unwrap());

static CORRECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<span id="correctAnswer[^"]*"[^>]*>(.*?)</span>"#).unwrap());

/// All `«…»` license tokens in `html`, in order, duplicates preserved.
pub fn extract_categories(html: &str) -> Vec<String> {
    CATEGORY_RE
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

/// Derive a [`ParsedQuestion`] from a record.
///
/// Never fails: missing title, missing id, and unrecognized HTML all fall
/// back to defaults. `fallback_index` stands in for the question id when the
/// record carries none.
pub fn parse_question(record: &RawRecord, fallback_index: usize) -> ParsedQuestion {
    let html = record.description_html.as_deref().unwrap_or_default();

    let options: Vec<String> = OPTION_RE
        .captures_iter(html)
        .map(|c| unescape_entities(&c[1]))
        .collect();

    let correct_answer = CORRECT_RE
        .captures(html)
        .map(|c| unescape_entities(&c[1]))
        .or_else(|| options.first().cloned())
        .unwrap_or_default();

    let question = match record.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => names::UNTITLED_QUESTION.to_string(),
    };

    let question_id = record
        .id
        .clone()
        .unwrap_or_else(|| Value::from(fallback_index));

    ParsedQuestion {
        question,
        options,
        correct_answer,
        question_id,
    }
}

/// Unescape the handful of HTML entities that appear in the dataset.
fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
