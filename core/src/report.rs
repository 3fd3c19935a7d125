use crate::index::InvertedIndex;
use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Summary statistics derived from a finalized index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSnapshot {
    pub documents_indexed: usize,
    pub unique_terms: usize,
    /// Size of the report before the size line itself was appended.
    pub report_size_bytes: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Count documents that produced no postings (e.g. missing or empty
    /// content) in "Documents indexed". Off by default: the count is then
    /// derived purely from posting lists, so empty documents are invisible.
    pub count_empty_documents: bool,
}

/// Write the analytics report in two passes: the counts first, then a size
/// line reflecting the bytes on disk before the size line was added.
///
/// `processed_documents` is the driver's count of documents submitted to the
/// index; it is only consulted under `count_empty_documents`. Any open,
/// write, or metadata failure is fatal and propagates.
pub fn write_report(
    index: &InvertedIndex,
    path: &Path,
    processed_documents: usize,
    opts: ReportOptions,
) -> Result<AnalyticsSnapshot> {
    let documents_indexed = if opts.count_empty_documents {
        processed_documents
    } else {
        index.documents_indexed()
    };
    let unique_terms = index.unique_terms();

    {
        let mut file = File::create(path)
            .with_context(|| format!("creating report at {}", path.display()))?;
        write!(file, "Documents indexed: {documents_indexed}\nUnique tokens: {unique_terms}\n")?;
        file.flush()?;
    }

    let report_size_bytes = fs::metadata(path)?.len();
    let size_kb = report_size_bytes as f64 / 1024.0;

    let mut file = OpenOptions::new().append(true).open(path)?;
    write!(file, "\nSize: {size_kb:.2} KB\n")?;

    tracing::info!(
        documents_indexed,
        unique_terms,
        report_size_bytes,
        path = %path.display(),
        "report written"
    );

    Ok(AnalyticsSnapshot {
        documents_indexed,
        unique_terms,
        report_size_bytes,
    })
}
