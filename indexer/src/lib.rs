use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tagdex_core::normalize::stem;
use tagdex_core::{extract, weigh_terms, AnalyticsSnapshot, InvertedIndex, ReportOptions};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    /// Embedded markup. A missing field is a valid empty document.
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CorpusStats {
    /// Documents submitted to the index, including empty ones.
    pub processed: usize,
    /// Files skipped because they could not be decoded.
    pub skipped: usize,
    /// Documents whose markup parsed with recoverable errors.
    pub degraded: usize,
}

/// Extract, stem, and aggregate one document's markup, then submit it to the
/// index. Returns whether extraction was degraded by malformed markup.
pub fn index_document(doc_id: &str, content: &str, index: &mut InvertedIndex) -> bool {
    let extraction = extract(content);
    let degraded = extraction.is_degraded();
    let tokens: Vec<(String, f32)> = extraction
        .into_tokens()
        .into_iter()
        .map(|(word, importance)| (stem(&word), importance))
        .collect();
    index.add_document(doc_id, &weigh_terms(&tokens));
    degraded
}

/// Walk `root` recursively and index every `.json` file, one `add_document`
/// call per file in walk order. Undecodable files are logged and skipped;
/// the walk itself never fails the run.
pub fn index_corpus(root: &Path, index: &mut InvertedIndex) -> CorpusStats {
    let mut stats = CorpusStats::default();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let doc_id = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let doc = match load_document(path) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping undecodable document");
                stats.skipped += 1;
                continue;
            }
        };
        let content = doc.content.unwrap_or_default();
        if index_document(&doc_id, &content, index) {
            tracing::debug!(doc_id = %doc_id, "markup extraction degraded");
            stats.degraded += 1;
        }
        stats.processed += 1;
    }
    stats
}

fn load_document(path: &Path) -> Result<InputDoc> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let doc = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(doc)
}

/// Full run: index the corpus under `input`, then write the analytics report
/// to `output`. Only the report write is fatal.
pub fn run(input: &Path, output: &Path, opts: ReportOptions) -> Result<AnalyticsSnapshot> {
    let mut index = InvertedIndex::new();
    let stats = index_corpus(input, &mut index);
    tracing::info!(
        processed = stats.processed,
        skipped = stats.skipped,
        degraded = stats.degraded,
        unique_terms = index.unique_terms(),
        "corpus ingested"
    );
    tagdex_core::write_report(&index, output, stats.processed, opts)
}
