//! PubMed EFetch XML parsing and row extraction
//!
//! The parser works in two steps:
//!
//! - [`parse_article_records`] turns the raw `PubmedArticleSet` document into
//!   [`ArticleRecord`]s, keeping missing optional fields as `None`.
//! - [`extract_rows`] runs an [`AffiliationFilter`] over those records and
//!   keeps one [`OutputRow`] per article with at least one qualifying author.
//!
//! Both are pure functions over an in-memory document; nothing is cached.

mod deserializers;
mod preprocessing;
mod xml_types;

use quick_xml::de::from_str;
use tracing::{debug, instrument};

use crate::affiliation::AffiliationFilter;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::{ArticleRecord, OutputRow};
use preprocessing::strip_inline_html_tags;
use xml_types::PubmedArticleSet;

/// Parse every `PubmedArticle` in an EFetch XML response
///
/// # Errors
///
/// Returns [`PubMedError::XmlParseError`] if the document is not well-formed,
/// or if any article lacks its `PMID` or `ArticleTitle`. A single such
/// article fails the whole document.
///
/// # Example
///
/// ```
/// use pubmed_affil::pubmed::parser::parse_article_records;
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID Version="1">12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let records = parse_article_records(xml)?;
/// assert_eq!(records[0].pmid, "12345678");
/// assert_eq!(records[0].publication_date(), "Unknown");
/// # Ok::<(), pubmed_affil::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_article_records(xml: &str) -> Result<Vec<ArticleRecord>> {
    let cleaned_xml = strip_inline_html_tags(xml);

    let article_set: PubmedArticleSet =
        from_str(&cleaned_xml).map_err(|e| PubMedError::XmlParseError {
            message: format!("Failed to deserialize EFetch XML: {e}"),
        })?;

    let records: Vec<ArticleRecord> = article_set
        .articles
        .into_iter()
        .map(ArticleRecord::from)
        .collect();

    debug!(articles = records.len(), "Parsed article records");
    Ok(records)
}

/// Parse an EFetch XML response and keep the articles with qualifying authors
///
/// Output order follows the order of `PubmedArticle` elements in `xml`.
///
/// # Errors
///
/// Same as [`parse_article_records`]; malformed XML is never swallowed.
#[instrument(skip(xml, filter), fields(xml_size = xml.len()))]
pub fn extract_rows(xml: &str, filter: &AffiliationFilter) -> Result<Vec<OutputRow>> {
    let records = parse_article_records(xml)?;
    let total = records.len();

    let rows: Vec<OutputRow> = records
        .iter()
        .filter_map(|record| filter.to_row(record))
        .collect();

    debug!(
        articles = total,
        rows = rows.len(),
        "Filtered articles by author affiliation"
    );
    Ok(rows)
}
