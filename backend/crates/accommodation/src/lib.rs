//! Accommodation Backend Module
//!
//! Read-only proxy over the third-party listing service.
//!
//! Clean Architecture structure:
//! - `domain/` - listing value objects, city slug, gateway port
//! - `application/` - Use cases (search, city search, detail, review summary)
//! - `infra/` - HTTP gateway over `platform::client::UpstreamClient`
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Failure Model
//! - The gateway never fails: upstream errors are logged and degrade to an
//!   empty list or `None`
//! - Only a missing detail is surfaced to clients (`404`)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccommodationConfig;
pub use domain::entities::{Accommodation, AccommodationDetail, ReviewSummary, Sentiment};
pub use domain::gateway::AccommodationGateway;
pub use domain::value_objects::{AccommodationCode, CitySlug};
pub use error::{AccommodationError, AccommodationResult};
pub use infra::http::HttpAccommodationGateway;
pub use presentation::router::{accommodation_router, accommodation_router_generic};
