//! Search → fetch → extract, one stage at a time
//!
//! [`run_pipeline`] drives any [`LiteratureSource`]: the real
//! [`PubMedClient`](crate::PubMedClient) in production, a stub in tests. Each
//! stage's failure is reported as its own [`PipelineError`] variant and stops
//! the run before anything is emitted.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::affiliation::AffiliationFilter;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::OutputRow;
use crate::pubmed::parser::extract_rows;

/// The two upstream calls the pipeline depends on
#[async_trait]
pub trait LiteratureSource: Send + Sync {
    /// Identifiers matching `query`, in upstream order
    async fn search_ids(&self, query: &str) -> Result<Vec<String>>;

    /// Raw EFetch XML for `pmids`
    async fn fetch_details(&self, pmids: &[String]) -> Result<String>;
}

/// Which stage stopped the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("search failed: {0}")]
    Search(#[source] PubMedError),

    #[error("fetching article details failed: {0}")]
    Fetch(#[source] PubMedError),

    #[error("processing article details failed: {0}")]
    Extract(#[source] PubMedError),
}

impl PipelineError {
    /// The underlying fetch/parse error
    pub fn inner(&self) -> &PubMedError {
        match self {
            PipelineError::Search(e) | PipelineError::Fetch(e) | PipelineError::Extract(e) => e,
        }
    }
}

/// Result of a pipeline run that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The search matched nothing; details were never fetched
    NoIdsFound,
    /// Details were fetched and filtered
    Completed {
        /// Number of identifiers the search returned
        searched: usize,
        /// Articles with at least one qualifying author, in upstream order
        rows: Vec<OutputRow>,
    },
}

impl PipelineOutcome {
    /// Rows produced by the run; empty for [`PipelineOutcome::NoIdsFound`]
    pub fn rows(&self) -> &[OutputRow] {
        match self {
            PipelineOutcome::NoIdsFound => &[],
            PipelineOutcome::Completed { rows, .. } => rows,
        }
    }

    pub fn into_rows(self) -> Vec<OutputRow> {
        match self {
            PipelineOutcome::NoIdsFound => Vec::new(),
            PipelineOutcome::Completed { rows, .. } => rows,
        }
    }
}

/// Run search, detail fetch and extraction for `query`
///
/// # Example
///
/// ```no_run
/// use pubmed_affil::{AffiliationFilter, PipelineOutcome, PubMedClient, run_pipeline};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PubMedClient::new()?;
///     match run_pipeline(&client, "car-t therapy", &AffiliationFilter::default()).await? {
///         PipelineOutcome::NoIdsFound => println!("No IDs found for the query."),
///         PipelineOutcome::Completed { rows, .. } => {
///             for row in rows {
///                 println!("{}: {}", row.pmid, row.authors);
///             }
///         }
///     }
///     Ok(())
/// }
/// ```
#[instrument(skip(source, filter), fields(query = %query))]
pub async fn run_pipeline<S>(
    source: &S,
    query: &str,
    filter: &AffiliationFilter,
) -> std::result::Result<PipelineOutcome, PipelineError>
where
    S: LiteratureSource + ?Sized,
{
    let pmids = source
        .search_ids(query)
        .await
        .map_err(PipelineError::Search)?;

    if pmids.is_empty() {
        warn!("Search returned no identifiers");
        return Ok(PipelineOutcome::NoIdsFound);
    }

    let xml = source
        .fetch_details(&pmids)
        .await
        .map_err(PipelineError::Fetch)?;

    let rows = extract_rows(&xml, filter).map_err(PipelineError::Extract)?;

    info!(
        searched = pmids.len(),
        matched = rows.len(),
        "Pipeline completed"
    );
    Ok(PipelineOutcome::Completed {
        searched: pmids.len(),
        rows,
    })
}
