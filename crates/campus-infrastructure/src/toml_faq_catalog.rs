//! TOML-backed FAQ catalog.
//!
//! The catalog format is a TOML document with `[[faq]]` tables. A default
//! catalog is embedded in the binary; an external file can be loaded
//! through the same parser.

use std::fs;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use campus_core::error::Result;
use campus_core::faq::FaqEntry;

const DEFAULT_CATALOG_TOML: &str = include_str!("default_faq.toml");

/// The embedded default entries, parsed once.
static DEFAULT_FAQ_ENTRIES: Lazy<Vec<FaqEntry>> = Lazy::new(|| {
    let root: CatalogRoot =
        toml::from_str(DEFAULT_CATALOG_TOML).expect("embedded FAQ catalog is valid TOML");
    root.entries
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogRoot {
    #[serde(rename = "faq", default)]
    entries: Vec<FaqEntry>,
}

/// Read-only FAQ catalog source.
///
/// Entries are static for the life of the page; the catalog is read once
/// at startup and never written by the portal itself. `save_all` exists
/// for authoring external catalogs.
pub struct TomlFaqCatalog {
    path: Option<PathBuf>,
}

impl TomlFaqCatalog {
    /// Catalog backed by the embedded default document.
    pub fn embedded() -> Self {
        Self { path: None }
    }

    /// Catalog backed by an external TOML file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Loads all entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the external file is missing or not valid
    /// catalog TOML. The embedded default cannot fail after build.
    pub fn load(&self) -> Result<Vec<FaqEntry>> {
        match &self.path {
            None => Ok(DEFAULT_FAQ_ENTRIES.clone()),
            Some(path) => {
                let content = fs::read_to_string(path)?;
                let root: CatalogRoot = toml::from_str(&content)?;
                tracing::debug!(
                    entries = root.entries.len(),
                    path = %path.display(),
                    "loaded FAQ catalog"
                );
                Ok(root.entries)
            }
        }
    }

    /// Writes `entries` to the backing file (authoring helper).
    ///
    /// # Errors
    ///
    /// Returns an error for the embedded catalog (read-only) or when the
    /// file cannot be written.
    pub fn save_all(&self, entries: &[FaqEntry]) -> Result<()> {
        let Some(path) = &self.path else {
            return Err(campus_core::CampusError::catalog(
                "embedded catalog is read-only",
            ));
        };
        let root = CatalogRoot {
            entries: entries.to_vec(),
        };
        let content = toml::to_string_pretty(&root)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_is_non_empty() {
        let entries = TomlFaqCatalog::embedded().load().unwrap();
        assert!(!entries.is_empty());
    }

    #[test]
    fn test_embedded_entries_have_categories() {
        let entries = TomlFaqCatalog::embedded().load().unwrap();
        assert!(entries.iter().all(|e| !e.category.is_empty()));
        assert!(entries.iter().any(|e| e.category == "academics"));
    }
}
