//! Shoe catalog loaded from a JSON file at startup.
//!
//! The file holds an array of shoe records in the catalog format described on
//! [`sole_core::Shoe`]. Records are validated while parsing (slugs must be
//! URL-safe) and slugs must be unique across the file.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use sole_core::Shoe;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate slug in catalog: {0}")]
    DuplicateSlug(String),
}

/// Listing order for the shoe grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent release first.
    #[default]
    Newest,
    /// Cheapest effective price first.
    Price,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Price => "price",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price" => Ok(Self::Price),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// In-memory shoe catalog, cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    shoes: Arc<Vec<Shoe>>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid array of
    /// shoe records, or repeats a slug.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json(&content)?;
        tracing::info!(count = catalog.len(), path = %path.display(), "Loaded shoe catalog");
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or repeats a slug.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let shoes: Vec<Shoe> = serde_json::from_str(json)?;
        Self::from_shoes(shoes)
    }

    /// Build a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateSlug`] if two records share a slug.
    pub fn from_shoes(shoes: Vec<Shoe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(shoes.len());
        for shoe in &shoes {
            if !seen.insert(shoe.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(shoe.slug.to_string()));
            }
        }

        Ok(Self {
            shoes: Arc::new(shoes),
        })
    }

    /// All shoes in file order.
    #[must_use]
    pub fn all(&self) -> &[Shoe] {
        &self.shoes
    }

    /// Look up a shoe by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|shoe| shoe.slug.as_str() == slug)
    }

    /// Shoes in listing order. Ties keep file order.
    #[must_use]
    pub fn sorted(&self, order: SortOrder) -> Vec<&Shoe> {
        let mut shoes: Vec<&Shoe> = self.shoes.iter().collect();
        match order {
            SortOrder::Newest => shoes.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
            SortOrder::Price => shoes.sort_by_key(|shoe| shoe.effective_price()),
        }
        shoes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }
}
