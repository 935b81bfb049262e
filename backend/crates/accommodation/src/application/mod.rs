//! Application Layer - Use Cases

pub mod config;
pub mod get_accommodation;
pub mod search_accommodations;

pub use config::AccommodationConfig;
pub use get_accommodation::GetAccommodationUseCase;
pub use search_accommodations::{AccommodationPage, CityPage, SearchAccommodationsUseCase};
