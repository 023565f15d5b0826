use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Opaque unique identifier of a catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        ListingId(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FromStr for FuelType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Petrol" => Ok(FuelType::Petrol),
            "Diesel" => Ok(FuelType::Diesel),
            "Hybrid" => Ok(FuelType::Hybrid),
            "Electric" => Ok(FuelType::Electric),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
}

impl FromStr for Transmission {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Automatic" => Ok(Transmission::Automatic),
            "Manual" => Ok(Transmission::Manual),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Transmission::Automatic => "Automatic",
            Transmission::Manual => "Manual",
        };
        write!(f, "{}", label)
    }
}

/// One catalog record describing a vehicle for sale. Immutable once the
/// catalog is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub brand: String,
    pub year: i32,
    /// NGN amount in major units.
    pub price: u64,
    pub mileage_km: u64,
    pub fuel: FuelType,
    pub transmission: Transmission,
    pub image: String,
    pub description: String,
}

impl Validate for Listing {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("listing.id", &self.id.0)?;
        validation::validate_non_empty_string("listing.name", &self.name)?;
        validation::validate_non_empty_string("listing.brand", &self.brand)?;
        validation::validate_url("listing.image", &self.image)?;

        let max_year = chrono::Utc::now().year() + 1;
        validation::validate_range("listing.year", self.year, 1900, max_year)?;

        Ok(())
    }
}

/// The result ordering requested by one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Relevance,
    PriceAscending,
    PriceDescending,
    Newest,
    Alphabetical,
}

/// The combined search/filter/sort intent driving one query. Rebuilt per
/// user interaction; `Default` places no restriction on the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub query: String,
    pub brands: BTreeSet<String>,
    pub fuel: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub sort: SortKey,
}

impl FilterSpec {
    /// Whether a listing satisfies every constraint of this spec. All
    /// constraints are conjunctive and each is independently optional; an
    /// unset bound never excludes a listing.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_query(listing)
            && self.matches_brand(listing)
            && self.matches_fuel(listing)
            && self.matches_transmission(listing)
            && self.matches_price(listing)
            && self.matches_year(listing)
    }

    /// Case-folded substring containment over name, brand, and description.
    pub fn matches_query(&self, listing: &Listing) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        let folded = query.to_lowercase();
        listing.name.to_lowercase().contains(&folded)
            || listing.brand.to_lowercase().contains(&folded)
            || listing.description.to_lowercase().contains(&folded)
    }

    pub fn matches_brand(&self, listing: &Listing) -> bool {
        self.brands.is_empty() || self.brands.contains(&listing.brand)
    }

    pub fn matches_fuel(&self, listing: &Listing) -> bool {
        self.fuel.map_or(true, |fuel| listing.fuel == fuel)
    }

    pub fn matches_transmission(&self, listing: &Listing) -> bool {
        self.transmission
            .map_or(true, |transmission| listing.transmission == transmission)
    }

    pub fn matches_price(&self, listing: &Listing) -> bool {
        self.price_min.map_or(true, |min| listing.price >= min)
            && self.price_max.map_or(true, |max| listing.price <= max)
    }

    pub fn matches_year(&self, listing: &Listing) -> bool {
        self.year_min.map_or(true, |min| listing.year >= min)
            && self.year_max.map_or(true, |max| listing.year <= max)
    }
}

/// A cart line: a weak reference to a listing plus a quantity of at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub listing_id: ListingId,
    pub quantity: u32,
}

/// An ordered sequence of cart entries, at most one per listing id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn empty() -> Self {
        Cart::default()
    }

    /// Build a cart from raw entries, e.g. a restored snapshot. Duplicate
    /// listing ids keep the first occurrence and quantities below 1 are
    /// coerced to 1, so the invariants hold for any input.
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let mut cart = Cart::empty();
        for entry in entries {
            if cart.quantity_of(&entry.listing_id).is_none() {
                cart.entries.push(CartEntry {
                    listing_id: entry.listing_id,
                    quantity: entry.quantity.max(1),
                });
            }
        }
        cart
    }

    pub(crate) fn from_entries_unchecked(entries: Vec<CartEntry>) -> Self {
        Cart { entries }
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn quantity_of(&self, listing_id: &ListingId) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| &entry.listing_id == listing_id)
            .map(|entry| entry.quantity)
    }
}

/// Derived cart totals; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub item_count: u64,
    pub subtotal: u64,
}
