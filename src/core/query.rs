//! The client-side query engine: filter the catalog against a spec, then
//! order the survivors.

use crate::domain::catalog::Catalog;
use crate::domain::model::{FilterSpec, Listing, SortKey};

/// Derive the visible result set for one spec. Pure: no side effects, and
/// deterministic for identical catalog + spec.
///
/// Filtering is conjunctive across the spec's constraints; sorting is stable,
/// so listings that compare equal keep their catalog order. `Relevance` is a
/// literal pass-through of the catalog order.
pub fn search<'a>(catalog: &'a Catalog, spec: &FilterSpec) -> Vec<&'a Listing> {
    let mut results: Vec<&Listing> = catalog
        .listings()
        .iter()
        .filter(|listing| spec.matches(listing))
        .collect();

    match spec.sort {
        SortKey::Relevance => {}
        SortKey::PriceAscending => results.sort_by_key(|listing| listing.price),
        SortKey::PriceDescending => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Newest => results.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Alphabetical => {
            results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }

    tracing::debug!(
        query = %spec.query,
        sort = ?spec.sort,
        "search matched {} of {} listings",
        results.len(),
        catalog.len()
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FuelType, ListingId, Transmission};

    fn catalog() -> Catalog {
        let make = |id: &str, name: &str, brand: &str, year: i32, price: u64, fuel: FuelType| {
            Listing {
                id: ListingId::from(id),
                name: name.to_string(),
                brand: brand.to_string(),
                year,
                price,
                mileage_km: 10_000,
                fuel,
                transmission: Transmission::Automatic,
                image: "https://example.com/car.jpg".to_string(),
                description: format!("{} in good condition", name),
            }
        };

        Catalog::new(vec![
            make("a", "Delta Sedan", "Delta", 2020, 3_000, FuelType::Petrol),
            make("b", "alpha hatch", "Alpha", 2022, 1_000, FuelType::Electric),
            make("c", "Beta Wagon", "Beta", 2019, 2_000, FuelType::Diesel),
            make("d", "Gamma Coupe", "Gamma", 2022, 1_000, FuelType::Petrol),
        ])
        .unwrap()
    }

    fn ids(results: &[&Listing]) -> Vec<String> {
        results.iter().map(|l| l.id.0.clone()).collect()
    }

    #[test]
    fn test_relevance_preserves_catalog_order() {
        let catalog = catalog();
        let results = search(&catalog, &FilterSpec::default());
        assert_eq!(ids(&results), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_price_ascending_is_stable_on_ties() {
        let catalog = catalog();
        let spec = FilterSpec {
            sort: SortKey::PriceAscending,
            ..FilterSpec::default()
        };
        // b and d share a price; b comes first in the catalog.
        assert_eq!(ids(&search(&catalog, &spec)), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_price_descending() {
        let catalog = catalog();
        let spec = FilterSpec {
            sort: SortKey::PriceDescending,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&search(&catalog, &spec)), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_newest_is_stable_on_ties() {
        let catalog = catalog();
        let spec = FilterSpec {
            sort: SortKey::Newest,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&search(&catalog, &spec)), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        let catalog = catalog();
        let spec = FilterSpec {
            sort: SortKey::Alphabetical,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&search(&catalog, &spec)), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let catalog = catalog();
        let spec = FilterSpec {
            fuel: Some(FuelType::Petrol),
            price_max: Some(1_000),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&search(&catalog, &spec)), vec!["d"]);
    }

    #[test]
    fn test_brand_set_is_a_union() {
        let catalog = catalog();
        let mut spec = FilterSpec::default();
        spec.brands.insert("Alpha".to_string());
        spec.brands.insert("Beta".to_string());
        assert_eq!(ids(&search(&catalog, &spec)), vec!["b", "c"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = catalog();
        let spec = FilterSpec {
            query: "zeppelin".to_string(),
            ..FilterSpec::default()
        };
        assert!(search(&catalog, &spec).is_empty());
    }
}
