use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};

lazy_static! {
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// Reduce a lowercase word to its stem. Pure and deterministic.
pub fn stem(word: &str) -> String {
    STEMMER.stem(word).to_string()
}
