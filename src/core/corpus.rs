//! Typed loading of the embedded corpus documents.
//!
//! Each agent declares a `Deserialize` struct mirroring its TOML document and
//! implements [`CorpusTable`] to reject empty pools. Loading happens once per
//! agent construction; the resulting tables are never mutated.

use crate::core::assets;
use crate::core::error::GithubError;
use serde::de::DeserializeOwned;

/// A deserialized corpus document that can check its own invariants.
pub trait CorpusTable: DeserializeOwned {
    /// Embedded document name (see `assets::list_corpora`).
    const NAME: &'static str;

    fn validate(&self) -> Result<(), GithubError>;
}

/// Parses and validates one embedded corpus document.
pub fn load<T: CorpusTable>() -> Result<T, GithubError> {
    let raw = assets::get_embedded_corpus(T::NAME)
        .ok_or_else(|| GithubError::NotFound(format!("corpus '{}'", T::NAME)))?;
    let table = parse::<T>(raw)?;
    tracing::debug!(corpus = T::NAME, "corpus loaded");
    Ok(table)
}

/// Parses and validates a corpus document from text.
pub fn parse<T: CorpusTable>(raw: &str) -> Result<T, GithubError> {
    let table: T = toml::from_str(raw)
        .map_err(|e| GithubError::CorpusError(format!("{}: {}", T::NAME, e)))?;
    table.validate()?;
    Ok(table)
}

/// Fails when a pool that feeds `pick_uniform` is empty.
pub fn require_pool<T>(corpus: &str, pool: &str, items: &[T]) -> Result<(), GithubError> {
    if items.is_empty() {
        return Err(GithubError::CorpusError(format!(
            "{}: pool '{}' must not be empty",
            corpus, pool
        )));
    }
    Ok(())
}
