//! Read operations over the cached question bank.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::cache::QuestionCache;
use crate::models::{ParsedQuestion, RawRecord};
use crate::names;
use crate::parser;
use crate::source::SourceError;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("question dataset is empty")]
    EmptyDataset,

    #[error("no questions found for license type {0}")]
    NoLicenseMatch(String),
}

/// Cloneable handle over the shared cache, exposing the four read patterns.
///
/// Every operation reads the cache (populating it on first use) and returns
/// a fresh derived sequence; the cached set itself is never mutated.
#[derive(Clone)]
pub struct QuestionService {
    cache: Arc<QuestionCache>,
}

impl QuestionService {
    pub fn new(cache: Arc<QuestionCache>) -> Self {
        Self { cache }
    }

    /// A uniformly shuffled sample of at most [`names::SAMPLE_LIMIT`] records.
    pub async fn sample(&self) -> Result<Vec<RawRecord>, QueryError> {
        let mut sampled = self.all_shuffled().await?;
        sampled.truncate(names::SAMPLE_LIMIT);
        Ok(sampled)
    }

    /// A uniformly shuffled copy of the entire record set.
    pub async fn all_shuffled(&self) -> Result<Vec<RawRecord>, QueryError> {
        let records = self.cache.get_all().await?;
        let mut shuffled: Vec<RawRecord> = records.as_ref().clone();
        shuffled.shuffle(&mut rand::thread_rng());
        Ok(shuffled)
    }

    /// One uniformly random record, parsed into quiz shape.
    pub async fn random_parsed(&self) -> Result<ParsedQuestion, QueryError> {
        let records = self.cache.get_all().await?;
        if records.is_empty() {
            return Err(QueryError::EmptyDataset);
        }

        let index = rand::thread_rng().gen_range(0..records.len());
        Ok(parser::parse_question(&records[index], index))
    }

    /// Records tagged with the given license category, in cache order,
    /// capped at [`names::LICENSE_MATCH_LIMIT`].
    pub async fn by_license(&self, license_type: &str) -> Result<Vec<RawRecord>, QueryError> {
        let records = self.cache.get_all().await?;

        let matches: Vec<RawRecord> = records
            .iter()
            .filter(|record| {
                let html = record.description_html.as_deref().unwrap_or_default();
                parser::extract_categories(html)
                    .iter()
                    .any(|category| category == license_type)
            })
            .take(names::LICENSE_MATCH_LIMIT)
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(QueryError::NoLicenseMatch(license_type.to_string()));
        }

        tracing::debug!(
            "found {} questions for license type {license_type}",
            matches.len()
        );
        Ok(matches)
    }
}
