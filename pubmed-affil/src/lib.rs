//! # PubMed Affiliation Finder
//!
//! Searches PubMed for a term, fetches the matching records and keeps the
//! articles that have at least one author affiliated with a pharmaceutical or
//! biotech organisation.
//!
//! ## Features
//!
//! - **Fetcher**: ESearch for up to 20 PMIDs, then one batch EFetch for their XML
//! - **Extractor**: tolerant record parsing; missing dates and names become `"Unknown"`
//! - **Affiliation filter**: case-insensitive keyword match, `pharmaceutical`/`biotech` by default
//! - **Export**: CSV with a fixed header
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_affil::{AffiliationFilter, ClientConfig, PubMedClient, run_pipeline};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_api_key("your_api_key_here");
//!     let client = PubMedClient::with_config(config)?;
//!
//!     let outcome = run_pipeline(&client, "antibody drug conjugate", &AffiliationFilter::default()).await?;
//!     for row in outcome.rows() {
//!         println!("{} | {} | {} | {}", row.pmid, row.title, row.publication_date, row.authors);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Extracting from XML you already have
//!
//! ```
//! use pubmed_affil::{AffiliationFilter, extract_rows};
//!
//! let xml = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
//!   <PMID>1</PMID>
//!   <Article>
//!     <ArticleTitle>T</ArticleTitle>
//!     <AuthorList><Author>
//!       <LastName>Lee</LastName><ForeName>Ann</ForeName>
//!       <AffiliationInfo><Affiliation>Acme Biotech</Affiliation></AffiliationInfo>
//!     </Author></AuthorList>
//!   </Article>
//! </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
//!
//! let rows = extract_rows(xml, &AffiliationFilter::default())?;
//! assert_eq!(rows[0].authors, "Ann Lee");
//! # Ok::<(), pubmed_affil::PubMedError>(())
//! ```

pub mod affiliation;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod pubmed;

// Re-export main types for convenience
pub use affiliation::{AffiliationFilter, DEFAULT_KEYWORDS};
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pipeline::{LiteratureSource, PipelineError, PipelineOutcome, run_pipeline};
pub use pubmed::{
    ArticleRecord, AuthorRecord, OutputRow, PubMedClient, UNKNOWN, extract_rows,
    parse_article_records,
};
