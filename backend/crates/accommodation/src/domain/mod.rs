//! Domain Layer
//!
//! This layer contains:
//! - Listing payloads as the upstream shapes them (Accommodation, AccommodationDetail, ReviewSummary)
//! - Value objects (CitySlug, AccommodationCode)
//! - Gateway trait (interface to the listing service)

pub mod entities;
pub mod gateway;
pub mod value_objects;
