use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use pubmed_affil::export::save_csv;
use pubmed_affil::{
    AffiliationFilter, DEFAULT_KEYWORDS, OutputRow, PipelineError, PipelineOutcome, run_pipeline,
};
use tracing::{debug, error, info};

use super::{create_pubmed_client, mask_secret};

#[derive(Args, Debug)]
pub struct Find {
    /// Search query for fetching papers
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Save results as CSV to this file; prints to the console when omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory that relative --file paths are resolved against (default: current directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Affiliation keyword to match (repeatable; default: pharmaceutical, biotech)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,
}

impl Find {
    pub async fn execute_with_config(
        &self,
        api_key: Option<&str>,
        email: Option<&str>,
        tool: &str,
        debug_mode: bool,
    ) -> Result<()> {
        if debug_mode {
            debug!(
                query = %self.query,
                api_key = %api_key.map(mask_secret).unwrap_or_else(|| "<none>".to_string()),
                "Debug mode enabled"
            );
        }

        let client = create_pubmed_client(api_key, email, tool)?;
        let filter = self.filter();
        debug!(keywords = ?filter.keywords(), "Affiliation filter ready");

        let outcome = match run_pipeline(&client, &self.query, &filter).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = failure_message(&e);
                error!(error = %e.inner(), "{message}");
                return Err(e).context(message);
            }
        };

        match outcome {
            PipelineOutcome::NoIdsFound => {
                info!("{NO_IDS_MESSAGE}");
                Ok(())
            }
            PipelineOutcome::Completed { searched, rows } => {
                info!(
                    searched,
                    matched = rows.len(),
                    "Found {} articles with pharma/biotech-affiliated authors",
                    rows.len()
                );
                let base_dir = match &self.output_dir {
                    Some(dir) => dir.clone(),
                    None => std::env::current_dir()
                        .context("Failed to determine current directory")?,
                };
                emit_rows(&rows, self.file.as_deref(), &base_dir)
            }
        }
    }

    fn filter(&self) -> AffiliationFilter {
        if self.keywords.is_empty() {
            AffiliationFilter::new(DEFAULT_KEYWORDS)
        } else {
            AffiliationFilter::new(&self.keywords)
        }
    }
}

/// User-facing message for a pipeline failure
///
/// A failed search reads the same as a search without hits; any later
/// failure is a fetch/processing failure.
fn failure_message(err: &PipelineError) -> &'static str {
    match err {
        PipelineError::Search(_) => NO_IDS_MESSAGE,
        PipelineError::Fetch(_) | PipelineError::Extract(_) => "Failed to fetch or process data.",
    }
}

const NO_IDS_MESSAGE: &str = "No IDs found for the query.";

/// Write rows to a CSV file under `base_dir`, or one JSON object per line to stdout
pub fn emit_rows(rows: &[OutputRow], file: Option<&Path>, base_dir: &Path) -> Result<()> {
    match file {
        Some(filename) => {
            let path = save_csv(rows, base_dir, filename)
                .with_context(|| format!("Failed to write {}", filename.display()))?;
            info!(path = %path.display(), "Data saved to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            for row in rows {
                writeln!(stdout, "{}", serde_json::to_string(row)?)?;
            }
        }
    }
    Ok(())
}
