//! Fuzzy search engine backed by the skim matching algorithm.
//!
//! # Matching Algorithm
//!
//! 1. **Tokenization**: split the query on whitespace, lowercase each token
//! 2. **Field matching**: score each token against name, email, location and
//!    cell, keeping the best field score
//! 3. **Conjunction**: a record matches only if every token matches some field
//! 4. **Ranking**: matching records are ordered by total score, highest first;
//!    equal scores keep corpus order

use crate::domain::error::Result;
use crate::domain::ConnectionRecord;
use crate::search::engine::SearchEngine;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Fuzzy multi-field search over connection records.
#[derive(Default)]
pub struct FuzzySearch {
    matcher: SkimMatcherV2,
}

impl FuzzySearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores `record` against every token; `None` if any token misses.
    fn score(&self, record: &ConnectionRecord, tokens: &[String]) -> Option<i64> {
        let fields = [
            record.name.to_lowercase(),
            record.email.to_lowercase(),
            record.location.to_lowercase(),
            record.cell.to_lowercase(),
        ];

        tokens.iter().try_fold(0i64, |total, token| {
            fields
                .iter()
                .filter_map(|field| self.matcher.fuzzy_match(field, token))
                .max()
                .map(|best| total + best)
        })
    }
}

impl std::fmt::Debug for FuzzySearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzySearch").finish_non_exhaustive()
    }
}

impl SearchEngine for FuzzySearch {
    fn search(&mut self, query: &str, corpus: &[ConnectionRecord]) -> Result<Vec<ConnectionRecord>> {
        let _span = tracing::debug_span!("fuzzy_search",
            query_len = query.len(),
            corpus_len = corpus.len()
        )
        .entered();

        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

        if tokens.is_empty() {
            return Ok(corpus.to_vec());
        }

        let mut scored: Vec<(i64, &ConnectionRecord)> = corpus
            .iter()
            .filter_map(|record| self.score(record, &tokens).map(|score| (score, record)))
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));

        tracing::debug!(match_count = scored.len(), "fuzzy search finished");

        Ok(scored.into_iter().map(|(_, record)| record.clone()).collect())
    }
}
