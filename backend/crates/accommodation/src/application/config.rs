//! Application Configuration
//!
//! Upstream endpoints and page sizes for the listing proxy. The static
//! header sets mirror what the listing service's own web client sends and
//! may need refreshing when the upstream changes.

use platform::client::UpstreamConfig;

const GATEWAY_BASE: &str = "https://gw.jabama.com";
const REVIEW_BASE: &str = "https://jabama-comments-api.liara.run";
const REVIEW_MODEL: &str = "gpt-4.1-nano";

const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,fa-IR;q=0.8,fa;q=0.7";
const ORIGIN: &str = "https://www.jabama.com";
const REFERER: &str = "https://www.jabama.com/";
const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 18_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.5 Mobile/15E148 Safari/604.1";
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";
const AB_CHANNEL: &str =
    "GuestWebDesktop,React1.0.0,OS X,10.15.7,undefined,2b21dde0-5a15-4950-9927-8e2fa735e66d";

const SEARCH_UNIFY: &str = "9160260b-04d2-4fdb-96df-5ff8eea4431a";
const SEARCH_EXPERIMENTS: &str = "c8da7b6fcde197c7-CANCELLATION_RESELL,CANCELLATION_RESELL:TREATMENT,MOBILE_PDP_GOFTINO,MOBILE_PDP_GOFTINO:TREATMENT,INSTANT_RESERVATION_HINT,INSTANT_RESERVATION_HINT:TREATMENT,SNAPPPAY_BNPL_EXPERIMENT:ALL_OPEN,NEW_PAYMENT_FUNNEL,NEW_PAYMENT_FUNNEL:TREATMENT,VAT_WITH_SERVICE,VAT_WITH_SERVICE:,NEW_CITY_SEARCH,NEW_CITY_SEARCH:,NEW_PLP_SEARCH,NEW_PLP_SEARCH:,NEW_PLP_SEARCH_ALL-VILLAS2,NEW_PLP_SEARCH_ALL-VILLAS2:,METRIC_VARIANCE:B,T50,T50:,force_login,force_login:TREATMENT,PAYMENT_TYPE_FEE:TREATMENT,HS_AI_AGENT,HS_AI_AGENT:TREATMENT,APP_USER_LOCATION,APP_USER_LOCATION:TREATMENT,ADS_SEARCH_V2,ADS_SEARCH_V2:,SERVICE_FEE_5_35,SERVICE_FEE_5_35:,SEARCH_OPTIMIZATION,SEARCH_OPTIMIZATION:MULTIMETRIC";

const CITY_UNIFY: &str = "43e6fcdf-afea-4d98-a2d6-ef4778ae7755";
const CITY_EXPERIMENTS: &str = "3561fe0f9978a8c1-CANCELLATION_RESELL,CANCELLATION_RESELL:TREATMENT,MOBILE_PDP_GOFTINO,MOBILE_PDP_GOFTINO:TREATMENT,INSTANT_RESERVATION_HINT,INSTANT_RESERVATION_HINT:TREATMENT,SNAPPPAY_BNPL_EXPERIMENT:ALL_OPEN,NEW_CITY_SEARCH_CITY-KASHAN,NEW_CITY_SEARCH_CITY-KASHAN:,NEW_CITY_SEARCH_CITY-BUSHIRE,NEW_CITY_SEARCH_CITY-BUSHIRE:,NEW_CITY_SEARCH_CITY-QESHM,NEW_CITY_SEARCH_CITY-QESHM:,NEW_CITY_SEARCH_CITY-BANDAR_ANZALI,NEW_CITY_SEARCH_CITY-BANDAR_ANZALI:,NEW_PAYMENT_FUNNEL,NEW_PAYMENT_FUNNEL:TREATMENT,NEW_CITY_SEARCH_CITY-MASHHAD,NEW_CITY_SEARCH_CITY-MASHHAD:,NEW_CITY_SEARCH_CITY-RASHT,NEW_CITY_SEARCH_CITY-RASHT:,VAT_WITH_SERVICE,VAT_WITH_SERVICE:,NEW_CITY_SEARCH,NEW_CITY_SEARCH:,NEW_PLP_SEARCH,NEW_PLP_SEARCH:,NEW_PLP_SEARCH_ALL-VILLAS2,NEW_PLP_SEARCH_ALL-VILLAS2:,METRIC_VARIANCE:B,T50,T50:,force_login,force_login:TREATMENT,PAYMENT_TYPE_FEE:TREATMENT,NEW_PLP_MAP,NEW_PLP_MAP:TREATMENT,HS_AI_AGENT,HS_AI_AGENT:TREATMENT,APP_USER_LOCATION,APP_USER_LOCATION:TREATMENT,ADS_SEARCH_V2,ADS_SEARCH_V2:,SERVICE_FEE_5_35,SERVICE_FEE_5_35:,SEARCH_OPTIMIZATION,SEARCH_OPTIMIZATION:MULTIMETRIC";

/// Accommodation application configuration
#[derive(Debug, Clone)]
pub struct AccommodationConfig {
    /// Nationwide search (mobile web client profile)
    pub search: UpstreamConfig,
    /// City search (desktop web client profile)
    pub city_search: UpstreamConfig,
    /// Listing detail
    pub detail: UpstreamConfig,
    /// Review digest service
    pub review: UpstreamConfig,
    /// Model name passed to the review digest service
    pub review_model: String,
    /// Page size of the accommodation list
    pub list_page_size: u32,
    /// Page size of a city page
    pub city_page_size: u32,
}

fn browser_headers(user_agent: &str) -> UpstreamConfig {
    UpstreamConfig::new(GATEWAY_BASE)
        .with_header("Accept", "*/*")
        .with_header("Accept-Language", ACCEPT_LANGUAGE)
        .with_header("Content-Type", "application/json")
        .with_header("Origin", ORIGIN)
        .with_header("Referer", REFERER)
        .with_header("User-Agent", user_agent)
}

impl Default for AccommodationConfig {
    fn default() -> Self {
        let search = browser_headers(MOBILE_USER_AGENT)
            .with_header("X-Server-Side", "false")
            .with_header("X-Web", "true")
            .with_header("X-unify", SEARCH_UNIFY)
            .with_header("ab-channel", AB_CHANNEL)
            .with_header("x-user-experiments", SEARCH_EXPERIMENTS);

        let city_search = browser_headers(DESKTOP_USER_AGENT)
            .with_header("X-Server-Side", "false")
            .with_header("X-Web", "true")
            .with_header("X-unify", CITY_UNIFY)
            .with_header("ab-channel", AB_CHANNEL)
            .with_header("x-user-experiments", CITY_EXPERIMENTS);

        Self {
            search,
            city_search,
            detail: browser_headers(MOBILE_USER_AGENT),
            review: UpstreamConfig::new(REVIEW_BASE).with_header("Accept", "application/json"),
            review_model: REVIEW_MODEL.to_string(),
            list_page_size: 20,
            city_page_size: 15,
        }
    }
}

impl AccommodationConfig {
    /// Point search, city search and detail at another gateway host
    pub fn with_gateway_base(mut self, base_url: &str) -> Self {
        self.search = self.search.with_base_url(base_url);
        self.city_search = self.city_search.with_base_url(base_url);
        self.detail = self.detail.with_base_url(base_url);
        self
    }

    pub fn with_review_base(mut self, base_url: &str) -> Self {
        self.review = self.review.with_base_url(base_url);
        self
    }

    pub fn with_review_model(mut self, model: impl Into<String>) -> Self {
        self.review_model = model.into();
        self
    }
}
