//! HTTP Gateway Implementation
//!
//! Talks to the listing service through one `UpstreamClient` per header
//! profile. Every failure is logged here and degrades to empty / `None`.

use kernel::pagination::PageRequest;
use platform::client::{UpstreamClient, UpstreamError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::config::AccommodationConfig;
use crate::domain::entities::{Accommodation, AccommodationDetail, ReviewSummary};
use crate::domain::gateway::AccommodationGateway;
use crate::domain::value_objects::{AccommodationCode, CitySlug};
use crate::error::AccommodationResult;

const SEARCH_PATH: &str = "/api/taraaz/v2/search/merchandising/legacy-plp";
const SEARCH_QUERY: &str = "allowEmptyCity=true&hasUnitRoom=true&guarantees=false";

#[derive(Debug, Serialize)]
struct SearchBody {
    #[serde(rename = "page-size")]
    page_size: u32,
    #[serde(rename = "page-number")]
    page_number: u32,
}

impl From<PageRequest> for SearchBody {
    fn from(page: PageRequest) -> Self {
        Self {
            page_size: page.page_size(),
            page_number: page.page(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    result: Option<SearchResult>,
}

/// Items stay raw so one malformed listing cannot sink the whole page
#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    items: Option<Vec<Value>>,
}

impl SearchEnvelope {
    fn into_listings(self, operation: &'static str) -> Vec<Accommodation> {
        let items = self.result.and_then(|r| r.items).unwrap_or_default();
        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    tracing::warn!(operation, index, error = %e, "Skipping undecodable listing");
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    result: Option<DetailResult>,
}

#[derive(Debug, Deserialize)]
struct DetailResult {
    #[serde(default)]
    item: Option<AccommodationDetail>,
}

/// Listing service gateway over HTTP
#[derive(Debug, Clone)]
pub struct HttpAccommodationGateway {
    search: UpstreamClient,
    city_search: UpstreamClient,
    detail: UpstreamClient,
    review: UpstreamClient,
    review_model: String,
}

impl HttpAccommodationGateway {
    pub fn new(config: &AccommodationConfig) -> AccommodationResult<Self> {
        Ok(Self {
            search: UpstreamClient::new(config.search.clone())?,
            city_search: UpstreamClient::new(config.city_search.clone())?,
            detail: UpstreamClient::new(config.detail.clone())?,
            review: UpstreamClient::new(config.review.clone())?,
            review_model: config.review_model.clone(),
        })
    }
}

/// Log an upstream failure: `warn` for a non-2xx answer, `error` otherwise
fn log_failure(operation: &'static str, err: &UpstreamError) {
    if err.is_status() {
        tracing::warn!(operation, error = %err, "Listing service rejected request");
    } else {
        tracing::error!(operation, error = %err, "Listing service call failed");
    }
}

impl AccommodationGateway for HttpAccommodationGateway {
    async fn search(&self, page: PageRequest) -> Vec<Accommodation> {
        let path = format!("{SEARCH_PATH}/all-apartment?platform=mobile&{SEARCH_QUERY}");

        match self
            .search
            .post_json::<_, SearchEnvelope>(&path, &SearchBody::from(page))
            .await
        {
            Ok(envelope) => envelope.into_listings("search"),
            Err(e) => {
                log_failure("search", &e);
                Vec::new()
            }
        }
    }

    async fn search_by_city(&self, city: &CitySlug, page: PageRequest) -> Vec<Accommodation> {
        let path = format!("{SEARCH_PATH}/city-{city}?platform=desktop&{SEARCH_QUERY}");

        match self
            .city_search
            .post_json::<_, SearchEnvelope>(&path, &SearchBody::from(page))
            .await
        {
            Ok(envelope) => envelope.into_listings("search_by_city"),
            Err(e) => {
                log_failure("search_by_city", &e);
                Vec::new()
            }
        }
    }

    async fn get_detail(&self, code: AccommodationCode) -> Option<AccommodationDetail> {
        let path = format!("/api/v1/accommodations/{code}?reversePeriods=true&withPanoramic=true");

        match self.detail.get_json::<DetailEnvelope>(&path).await {
            Ok(envelope) => envelope.result.and_then(|r| r.item),
            Err(e) => {
                log_failure("get_detail", &e);
                None
            }
        }
    }

    async fn get_review_summary(&self, code: AccommodationCode) -> Option<ReviewSummary> {
        let path = format!("/summarize/{code}?model={}", self.review_model);

        match self.review.get_json::<ReviewSummary>(&path).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                log_failure("get_review_summary", &e);
                None
            }
        }
    }
}
