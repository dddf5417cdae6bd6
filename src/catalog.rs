//! Catalogs of selectable options supplied to a section at construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable option: a display title plus its year.
///
/// The title doubles as the comparison key for selection lookups. Titles are
/// not guaranteed unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    pub year: i32,
}

#[derive(Debug)]
pub enum CatalogError {
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "Catalog must contain at least one item"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// A fixed, ordered, non-empty list of selectable options.
///
/// Immutable after construction; sections share nothing but read access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty item list up front.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Find the first item whose title matches.
    pub fn find(&self, title: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.title == title)
    }

    /// Iterate the display titles in catalog order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.title.as_str())
    }
}
