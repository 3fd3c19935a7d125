use std::fs;
use std::path::Path;
use tagdex_core::normalize::stem;
use tagdex_core::{InvertedIndex, ReportOptions};
use tagdex_indexer::{index_corpus, run};
use tempfile::tempdir;

fn write_doc(dir: &Path, name: &str, json: &str) {
    fs::write(dir.join(name), json).unwrap();
}

#[test]
fn two_document_corpus_produces_spec_report() {
    let corpus = tempdir().unwrap();
    write_doc(corpus.path(), "a.json", r#"{"content": "<title>Cats</title>"}"#);
    write_doc(corpus.path(), "b.json", r#"{"content": "<p>cats cats</p>"}"#);

    let out = tempdir().unwrap();
    let report_path = out.path().join("report.txt");
    let snapshot = run(corpus.path(), &report_path, ReportOptions::default()).unwrap();

    assert_eq!(snapshot.documents_indexed, 2);
    assert_eq!(snapshot.unique_terms, 1);

    let text = fs::read_to_string(&report_path).unwrap();
    assert!(text.starts_with("Documents indexed: 2\nUnique tokens: 1\n"));
    assert!(text.contains("\n\nSize: "));
}

#[test]
fn postings_carry_weighted_frequencies() {
    let corpus = tempdir().unwrap();
    write_doc(corpus.path(), "a.json", r#"{"content": "<title>Cats</title>"}"#);
    write_doc(corpus.path(), "b.json", r#"{"content": "<p>cats cats</p>"}"#);

    let mut index = InvertedIndex::new();
    let stats = index_corpus(corpus.path(), &mut index);
    assert_eq!(stats.processed, 2);
    assert_eq!(stats.skipped, 0);

    let postings = &index.postings[&stem("cats")];
    assert_eq!(postings.len(), 2);
    for posting in postings {
        match posting.doc_id.as_str() {
            "a.json" => assert_eq!(posting.tf, 3.0),
            "b.json" => assert_eq!(posting.tf, 2.0),
            other => panic!("unexpected doc_id {other}"),
        }
    }
}

#[test]
fn undecodable_documents_are_skipped_and_the_run_continues() {
    let corpus = tempdir().unwrap();
    write_doc(corpus.path(), "bad.json", "{not json at all");
    write_doc(corpus.path(), "good.json", r#"{"content": "<p>kept</p>"}"#);

    let mut index = InvertedIndex::new();
    let stats = index_corpus(corpus.path(), &mut index);
    assert_eq!(stats.processed, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(index.documents_indexed(), 1);
}

#[test]
fn missing_content_field_is_an_empty_document() {
    let corpus = tempdir().unwrap();
    write_doc(corpus.path(), "bare.json", r#"{"title": "no content here"}"#);
    write_doc(corpus.path(), "full.json", r#"{"content": "<p>words</p>"}"#);

    let mut index = InvertedIndex::new();
    let stats = index_corpus(corpus.path(), &mut index);
    assert_eq!(stats.processed, 2);
    assert_eq!(stats.skipped, 0);
    // The bare document contributed no postings, so it is invisible to the
    // posting-derived count.
    assert_eq!(index.documents_indexed(), 1);
}

#[test]
fn non_json_files_are_ignored() {
    let corpus = tempdir().unwrap();
    write_doc(corpus.path(), "note.txt", "<p>never read</p>");
    write_doc(corpus.path(), "doc.json", r#"{"content": "<p>read</p>"}"#);

    let mut index = InvertedIndex::new();
    let stats = index_corpus(corpus.path(), &mut index);
    assert_eq!(stats.processed, 1);
}

#[test]
fn nested_directories_are_walked() {
    let corpus = tempdir().unwrap();
    let sub = corpus.path().join("nested/deeper");
    fs::create_dir_all(&sub).unwrap();
    write_doc(&sub, "deep.json", r#"{"content": "<p>found</p>"}"#);

    let mut index = InvertedIndex::new();
    let stats = index_corpus(corpus.path(), &mut index);
    assert_eq!(stats.processed, 1);
    assert_eq!(index.documents_indexed(), 1);
}

#[test]
fn indexing_the_same_corpus_twice_doubles_everything() {
    let corpus = tempdir().unwrap();
    write_doc(corpus.path(), "a.json", r#"{"content": "<p>cats</p>"}"#);

    let mut index = InvertedIndex::new();
    index_corpus(corpus.path(), &mut index);
    index_corpus(corpus.path(), &mut index);

    assert_eq!(index.postings[&stem("cats")].len(), 2);
}

#[test]
fn count_empty_reports_processed_files_instead() {
    let corpus = tempdir().unwrap();
    write_doc(corpus.path(), "bare.json", r#"{}"#);
    write_doc(corpus.path(), "full.json", r#"{"content": "<p>words</p>"}"#);

    let out = tempdir().unwrap();
    let opts = ReportOptions { count_empty_documents: true };
    let snapshot = run(corpus.path(), &out.path().join("report.txt"), opts).unwrap();
    assert_eq!(snapshot.documents_indexed, 2);
}
