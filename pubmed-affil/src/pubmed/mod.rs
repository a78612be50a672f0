//! PubMed E-utilities access and record extraction
//!
//! - [`client`] - the fetcher: ESearch for identifiers, EFetch for article XML
//! - [`parser`] - EFetch XML into [`ArticleRecord`]s and report rows
//! - [`models`] - article, author and row types, plus the `"Unknown"` sentinel policy

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use models::{ArticleRecord, AuthorRecord, OutputRow, UNKNOWN};
pub use parser::{extract_rows, parse_article_records};
