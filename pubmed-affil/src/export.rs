//! Flat-file export of report rows
//!
//! Rows are written as CSV with a header line, even when there are no rows.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::pubmed::models::OutputRow;

/// CSV header, in column order; matches the serde names on [`OutputRow`]
pub const CSV_COLUMNS: [&str; 4] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Authors with Pharma/Biotech Affiliations",
];

/// Write `rows` as CSV (header first) to any writer
///
/// # Example
///
/// ```
/// use pubmed_affil::OutputRow;
/// use pubmed_affil::export::write_csv;
///
/// let rows = vec![OutputRow {
///     pmid: "123".into(),
///     title: "A, B and C".into(),
///     publication_date: "2024-May".into(),
///     authors: "Ann Lee".into(),
/// }];
///
/// let mut out = Vec::new();
/// write_csv(&rows, &mut out)?;
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("PubmedID,Title,Publication Date,"));
/// assert!(text.contains("123,\"A, B and C\",2024-May,Ann Lee"));
/// # Ok::<(), pubmed_affil::PubMedError>(())
/// ```
pub fn write_csv<W: Write>(rows: &[OutputRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Resolve `filename` against `base_dir`; absolute filenames are kept as given
pub fn resolve_output_path(base_dir: &Path, filename: &Path) -> PathBuf {
    base_dir.join(filename)
}

/// Write `rows` to `base_dir/filename` and return the full path
///
/// Missing parent directories are created.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn save_csv(rows: &[OutputRow], base_dir: &Path, filename: &Path) -> Result<PathBuf> {
    let full_path = resolve_output_path(base_dir, filename);

    if let Some(parent) = full_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    debug!(path = %full_path.display(), "Writing CSV");
    let file = File::create(&full_path)?;
    write_csv(rows, file)?;

    info!(path = %full_path.display(), "Data successfully saved");
    Ok(full_path)
}
