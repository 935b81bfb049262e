//! Gateway Traits
//!
//! Interface to the listing service. Implementation is in infrastructure layer.

use kernel::pagination::PageRequest;

use crate::domain::entities::{Accommodation, AccommodationDetail, ReviewSummary};
use crate::domain::value_objects::{AccommodationCode, CitySlug};

/// Listing service port
///
/// Calls never fail: implementations log upstream problems and return an
/// empty list or `None`.
#[trait_variant::make(AccommodationGateway: Send)]
pub trait LocalAccommodationGateway {
    /// One page of the nationwide listing
    async fn search(&self, page: PageRequest) -> Vec<Accommodation>;

    /// One page of listings in a city
    async fn search_by_city(&self, city: &CitySlug, page: PageRequest) -> Vec<Accommodation>;

    /// Full detail of one listing
    async fn get_detail(&self, code: AccommodationCode) -> Option<AccommodationDetail>;

    /// Review digest of one listing
    async fn get_review_summary(&self, code: AccommodationCode) -> Option<ReviewSummary>;
}
