//! Author affiliation matching
//!
//! An author qualifies when any of their affiliation texts contains one of the
//! filter keywords, compared case-insensitively. The scan stops at the first
//! matching affiliation of each author.

use crate::pubmed::models::{ArticleRecord, AuthorRecord, OutputRow};

/// Keywords used when no custom list is given
pub const DEFAULT_KEYWORDS: [&str; 2] = ["pharmaceutical", "biotech"];

/// Case-insensitive substring filter over author affiliations
///
/// # Example
///
/// ```
/// use pubmed_affil::AffiliationFilter;
///
/// let filter = AffiliationFilter::default();
/// assert!(filter.matches("Acme PharmaceuticalCo, Basel"));
/// assert!(filter.matches("biotech solutions ltd"));
/// assert!(!filter.matches("Department of Physics"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationFilter {
    /// Lower-cased, non-empty keywords
    keywords: Vec<String>,
}

impl AffiliationFilter {
    /// Build a filter from arbitrary keywords
    ///
    /// Keywords are trimmed and lower-cased; blank entries are dropped. An
    /// empty keyword list matches nothing.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether a single affiliation text contains any keyword
    pub fn matches(&self, affiliation: &str) -> bool {
        let lowered = affiliation.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// Whether any of the author's affiliations matches
    ///
    /// Affiliations without text are skipped, and nothing after the first
    /// match is looked at.
    pub fn qualifies(&self, author: &AuthorRecord) -> bool {
        author
            .affiliations
            .iter()
            .flatten()
            .any(|affiliation| self.matches(affiliation))
    }

    /// Full names of the qualifying authors, in author-list order
    pub fn qualifying_authors(&self, article: &ArticleRecord) -> Vec<String> {
        article
            .authors
            .iter()
            .filter(|author| self.qualifies(author))
            .map(AuthorRecord::full_name)
            .collect()
    }

    /// Report row for `article`, or `None` when no author qualifies
    pub fn to_row(&self, article: &ArticleRecord) -> Option<OutputRow> {
        let authors = self.qualifying_authors(article);
        if authors.is_empty() {
            return None;
        }

        Some(OutputRow {
            pmid: article.pmid.clone(),
            title: article.title.clone(),
            publication_date: article.publication_date(),
            authors: authors.join(", "),
        })
    }
}

impl Default for AffiliationFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}
