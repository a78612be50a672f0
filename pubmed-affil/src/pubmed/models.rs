use serde::{Deserialize, Serialize};

/// Placeholder used when a date or name cannot be assembled from its parts
pub const UNKNOWN: &str = "Unknown";

/// Join two optional parts with `sep`, or fall back to [`UNKNOWN`] if either is missing
fn join_or_unknown(first: Option<&str>, second: Option<&str>, sep: &str) -> String {
    match (first, second) {
        (Some(first), Some(second)) => format!("{first}{sep}{second}"),
        _ => UNKNOWN.to_string(),
    }
}

/// One author as listed in a PubMed record
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AuthorRecord {
    /// Given name(s) (`ForeName`)
    pub fore_name: Option<String>,
    /// Family name (`LastName`)
    pub last_name: Option<String>,
    /// Affiliation texts in document order; an empty `<Affiliation/>` is kept as `None`
    pub affiliations: Vec<Option<String>>,
}

impl AuthorRecord {
    /// "ForeName LastName", or `"Unknown"` if either part is missing
    pub fn full_name(&self) -> String {
        join_or_unknown(self.fore_name.as_deref(), self.last_name.as_deref(), " ")
    }
}

/// A PubMed article reduced to the fields the affiliation report needs
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: String,
    /// `PubDate/Year`
    pub pub_year: Option<String>,
    /// `PubDate/Month`
    pub pub_month: Option<String>,
    /// Authors in document order
    pub authors: Vec<AuthorRecord>,
}

impl ArticleRecord {
    /// "Year-Month", or `"Unknown"` if either part is missing
    pub fn publication_date(&self) -> String {
        join_or_unknown(self.pub_year.as_deref(), self.pub_month.as_deref(), "-")
    }
}

/// One line of the affiliation report
///
/// Only built for articles with at least one qualifying author. The serde
/// names double as the CSV header.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputRow {
    #[serde(rename = "PubmedID")]
    pub pmid: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Qualifying author names joined with ", "
    #[serde(rename = "Authors with Pharma/Biotech Affiliations")]
    pub authors: String,
}
