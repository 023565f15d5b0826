//! The built-in demo catalog. Same vehicles, prices, and copy as the
//! production data set.

use crate::domain::model::{FuelType, Listing, ListingId, Transmission};

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    brand: &str,
    year: i32,
    price: u64,
    mileage_km: u64,
    fuel: FuelType,
    transmission: Transmission,
    image: &str,
    description: &str,
) -> Listing {
    Listing {
        id: ListingId::from(id),
        name: name.to_string(),
        brand: brand.to_string(),
        year,
        price,
        mileage_km,
        fuel,
        transmission,
        image: image.to_string(),
        description: description.to_string(),
    }
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "Toyota Corolla LE",
            "Toyota",
            2021,
            14_500_000,
            32_000,
            FuelType::Petrol,
            Transmission::Automatic,
            "https://images.unsplash.com/photo-1619767886558-efdc259cde1a?q=80&w=1600&auto=format&fit=crop",
            "Reliable compact sedan with excellent fuel economy, reverse camera, Apple CarPlay/Android Auto, and full service history.",
        ),
        listing(
            "2",
            "Honda Civic Sport",
            "Honda",
            2022,
            18_200_000,
            24_000,
            FuelType::Petrol,
            Transmission::Automatic,
            "https://images.unsplash.com/photo-1606660951803-2c81f00f1e9f?q=80&w=1600&auto=format&fit=crop",
            "Sport trim with responsive handling, lane assist, adaptive cruise control, and premium sound.",
        ),
        listing(
            "3",
            "Mercedes-Benz C300",
            "Mercedes",
            2020,
            36_500_000,
            41_000,
            FuelType::Petrol,
            Transmission::Automatic,
            "https://images.unsplash.com/photo-1511919884226-fd3cad34687c?q=80&w=1600&auto=format&fit=crop",
            "Luxury interior with panoramic roof, Burmester audio, ambient lighting, and advanced safety suite.",
        ),
        listing(
            "4",
            "BMW 3 Series 330i",
            "BMW",
            2019,
            29_500_000,
            55_000,
            FuelType::Petrol,
            Transmission::Automatic,
            "https://images.unsplash.com/photo-1619767886558-efdc259cde1a?q=80&w=1600&auto=format&fit=crop",
            "Driver-focused sedan with dynamic handling, digital cockpit, and connected services.",
        ),
        listing(
            "5",
            "Tesla Model 3 Long Range",
            "Tesla",
            2023,
            52_000_000,
            12_000,
            FuelType::Electric,
            Transmission::Automatic,
            "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?q=80&w=1600&auto=format&fit=crop",
            "All-electric sedan with Autopilot, excellent range, over-the-air updates, and minimalist interior.",
        ),
        listing(
            "6",
            "Toyota Camry XSE",
            "Toyota",
            2021,
            23_500_000,
            38_000,
            FuelType::Hybrid,
            Transmission::Automatic,
            "https://images.unsplash.com/photo-1549921296-3c9b1d2f0a4b?q=80&w=1600&auto=format&fit=crop",
            "Hybrid efficiency with sporty styling, safety sense suite, and leather interior.",
        ),
        listing(
            "7",
            "Ford Ranger XLT 4x4",
            "Ford",
            2018,
            18_500_000,
            76_000,
            FuelType::Diesel,
            Transmission::Manual,
            "https://images.unsplash.com/photo-1525609004556-c46c7d6cf023?q=80&w=1600&auto=format&fit=crop",
            "Rugged pickup with 4x4 capability, bed liner, and towing package, ideal for Nigerian roads.",
        ),
        listing(
            "8",
            "Lexus RX 350",
            "Lexus",
            2020,
            42_000_000,
            30_000,
            FuelType::Petrol,
            Transmission::Automatic,
            "https://images.unsplash.com/photo-1614730321146-b6fa6a46bcb4?q=80&w=1600&auto=format&fit=crop",
            "Premium SUV with quiet cabin, comfortable ride, and advanced driver assistance features.",
        ),
    ]
}
