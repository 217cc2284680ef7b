//! Vocabulary-driven signal extraction

use crate::config::Vocabulary;
use crate::error::CoreError;
use regex::Regex;

/// Counts vocabulary hits in normalized (lowercased) task text
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    technical_terms: Vec<String>,
    uncertainty_markers: Vec<String>,
    cross_file: Option<Regex>,
}

impl SignalExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, CoreError> {
        let cross_file_phrases = normalize(&vocabulary.cross_file_phrases);
        let cross_file = if cross_file_phrases.is_empty() {
            None
        } else {
            let alternation = cross_file_phrases
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&alternation)?)
        };

        Ok(Self {
            technical_terms: normalize(&vocabulary.technical_terms),
            uncertainty_markers: normalize(&vocabulary.uncertainty_markers),
            cross_file,
        })
    }

    /// Number of distinct technical terms contained anywhere in `text`
    pub fn technical_count(&self, text: &str) -> usize {
        count_contained(&self.technical_terms, text)
    }

    /// Number of distinct uncertainty markers contained anywhere in `text`
    pub fn uncertainty_count(&self, text: &str) -> usize {
        count_contained(&self.uncertainty_markers, text)
    }

    /// Total non-overlapping occurrences of cross-file phrases
    pub fn cross_file_deps(&self, text: &str) -> usize {
        self.cross_file
            .as_ref()
            .map(|re| re.find_iter(text).count())
            .unwrap_or(0)
    }
}

// Substring containment: "api" also matches inside "rapid"
fn count_contained(entries: &[String], text: &str) -> usize {
    entries.iter().filter(|e| text.contains(e.as_str())).count()
}

fn normalize(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
