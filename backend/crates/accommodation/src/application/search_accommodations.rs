//! Search Accommodations Use Case

use kernel::pagination::PageRequest;
use serde::Serialize;
use std::sync::Arc;

use crate::application::config::AccommodationConfig;
use crate::domain::entities::Accommodation;
use crate::domain::gateway::AccommodationGateway;
use crate::domain::value_objects::CitySlug;
use crate::error::AccommodationResult;

/// One page of listings
///
/// The upstream reports no total, so `has_more` is inferred from a full page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationPage {
    pub items: Vec<Accommodation>,
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
}

impl AccommodationPage {
    fn new(items: Vec<Accommodation>, request: PageRequest) -> Self {
        let has_more = items.len() == request.page_size() as usize;
        Self {
            items,
            page: request.page(),
            page_size: request.page_size(),
            has_more,
        }
    }
}

/// One page of listings in a city
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPage {
    pub city: String,
    /// Localized city name from the first listing, else the title-cased slug
    pub display_name: String,
    #[serde(flatten)]
    pub page: AccommodationPage,
}

pub struct SearchAccommodationsUseCase<G>
where
    G: AccommodationGateway,
{
    gateway: Arc<G>,
    config: Arc<AccommodationConfig>,
}

impl<G> SearchAccommodationsUseCase<G>
where
    G: AccommodationGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<AccommodationConfig>) -> Self {
        Self { gateway, config }
    }

    /// Nationwide list page (`?page=N`, garbage -> 1)
    pub async fn list_page(&self, raw_page: Option<&str>) -> AccommodationPage {
        let request = PageRequest::from_query(raw_page, self.config.list_page_size);
        let items = self.gateway.search(request).await;

        tracing::debug!(
            page = request.page(),
            returned = items.len(),
            "Listed accommodations"
        );

        AccommodationPage::new(items, request)
    }

    /// City list page
    pub async fn city_page(
        &self,
        city_name: &str,
        raw_page: Option<&str>,
    ) -> AccommodationResult<CityPage> {
        let city = CitySlug::from_name(city_name)?;
        let request = PageRequest::from_query(raw_page, self.config.city_page_size);
        let items = self.gateway.search_by_city(&city, request).await;

        let display_name = items
            .first()
            .map(|item| item.location.city.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| city.display_name());

        tracing::debug!(
            city = %city,
            page = request.page(),
            returned = items.len(),
            "Listed city accommodations"
        );

        Ok(CityPage {
            city: city.as_str().to_string(),
            display_name,
            page: AccommodationPage::new(items, request),
        })
    }
}
