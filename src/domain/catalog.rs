use crate::domain::fixture;
use crate::domain::model::{Listing, ListingId};
use crate::utils::error::{AutomartError, Result};
use crate::utils::validation::Validate;
use std::collections::HashMap;
use std::path::Path;

/// The immutable, ordered sequence of listings the storefront sells.
/// Read-only after construction; every listing id is unique.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    index: HashMap<ListingId, usize>,
}

impl Catalog {
    /// Build a catalog, validating each listing and rejecting duplicate ids.
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        let mut index = HashMap::with_capacity(listings.len());
        for (position, listing) in listings.iter().enumerate() {
            listing.validate()?;
            if index.insert(listing.id.clone(), position).is_some() {
                return Err(AutomartError::CatalogError {
                    message: format!("duplicate listing id: {}", listing.id),
                });
            }
        }

        tracing::debug!("catalog constructed with {} listings", listings.len());
        Ok(Catalog { listings, index })
    }

    /// The built-in demo catalog.
    pub fn sample() -> Self {
        Catalog::new(fixture::sample_listings()).expect("built-in sample catalog is valid")
    }

    /// Parse a catalog from a JSON array of listings.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_str(content)?;
        Catalog::new(listings)
    }

    /// Load a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AutomartError::IoError)?;
        Catalog::from_json_str(&content)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.index.get(id).map(|&position| &self.listings[position])
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Distinct brands present in the catalog, sorted alphabetically.
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = self.listings.iter().map(|l| l.brand.clone()).collect();
        brands.sort();
        brands.dedup();
        brands
    }
}
