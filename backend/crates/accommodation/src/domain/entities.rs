//! Domain Entities
//!
//! Listing payloads exactly as the upstream service shapes them. They are
//! passed through to clients, so field names follow the upstream JSON
//! (mostly camelCase, a few snake_case keys). Every field tolerates absence,
//! top-level fields also tolerate `null`, and keys this crate does not model
//! are carried in `extra` and written back out unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `null` decodes like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Shared pieces
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub city: String,
    pub province: String,
    pub city_en: String,
    pub province_en: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccommodationMetrics {
    pub area_size: i64,
    pub bathrooms_count: i64,
    pub bedrooms_count: i64,
    pub building_size: i64,
    pub iranian_toilets_count: i64,
    pub toilets_count: i64,
}

/// Guest capacity: base guests plus extra beds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestCapacity {
    pub base: i64,
    pub extra: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateReview {
    pub score: f64,
    pub count: i64,
}

// ============================================================================
// Search result card
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccommodationPrice {
    pub main_price: i64,
    pub per_night: i64,
    pub discount_percent: f64,
    pub discounted_price: i64,
    pub capacity: GuestCapacity,
    pub is_guarantee: bool,
    pub is_default_date: bool,
    pub text: String,
    pub vat_price: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Badge {
    pub name: String,
    pub icon: String,
}

/// One listing in a search result page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Accommodation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub name_en: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub listing_type: String,
    #[serde(rename = "place_id", deserialize_with = "null_as_default")]
    pub place_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(rename = "room_id", deserialize_with = "null_as_default")]
    pub room_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(deserialize_with = "null_as_default")]
    pub accommodation_metrics: AccommodationMetrics,
    #[serde(rename = "min_price", deserialize_with = "null_as_default")]
    pub min_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub price: AccommodationPrice,
    #[serde(rename = "rate_review", deserialize_with = "null_as_default")]
    pub rate_review: RateReview,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: GuestCapacity,
    #[serde(deserialize_with = "null_as_default")]
    pub badges: Vec<Badge>,
    #[serde(deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,
    /// Upstream keys not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Detail
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Beds {
    pub twin: i64,
    pub single: i64,
    pub double: i64,
    pub mattress: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailCapacity {
    pub beds: Beds,
    pub guests: GuestCapacity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraPeoplePrice {
    pub base: i64,
    pub weekend: i64,
    pub holiday: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailPrice {
    pub base: i64,
    pub weekend: i64,
    pub holiday: i64,
    pub extra_people: ExtraPeoplePrice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceImage {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icon {
    pub url: String,
}

/// Bilingual label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedName {
    pub en: String,
    pub fa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amenity {
    pub id: String,
    pub icon: Icon,
    pub title: LocalizedName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Province {
    pub name: LocalizedName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    pub name: LocalizedName,
    pub province: Province,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Area {
    pub city: City,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceOfResidence {
    pub area: Area,
    pub location: Coordinates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailBadge {
    pub name: String,
    pub title: String,
    pub icon: String,
    pub data: Vec<String>,
    pub helper: Option<String>,
}

/// `data` is opaque upstream payload; nothing here depends on its shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailBadges {
    pub main: Vec<DetailBadge>,
    pub secondary: Vec<DetailBadge>,
    pub data: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraDescription {
    pub title: String,
    pub sub_title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyStage {
    pub title: String,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancellationPolicyDetails {
    pub title: String,
    pub before_check_in: PolicyStage,
    pub until_check_in: PolicyStage,
    pub after_check_in: PolicyStage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NearbyItem {
    pub key: String,
    pub value: String,
    pub accessible_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearbyCenters {
    pub title: String,
    pub items: Vec<NearbyItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostProfileItem {
    pub icon: String,
    pub text: String,
    pub sub_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostProfile {
    pub items: Vec<HostProfileItem>,
}

/// Full listing detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccommodationDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alibaba_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub check_in: String,
    #[serde(deserialize_with = "null_as_default")]
    pub check_out: String,
    #[serde(deserialize_with = "null_as_default")]
    pub min_night: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reservation_type: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: DetailCapacity,
    #[serde(deserialize_with = "null_as_default")]
    pub price: DetailPrice,
    #[serde(deserialize_with = "null_as_default")]
    pub place_images: Vec<PlaceImage>,
    #[serde(deserialize_with = "null_as_default")]
    pub amenities: Vec<Amenity>,
    #[serde(deserialize_with = "null_as_default")]
    pub accommodation_metrics: AccommodationMetrics,
    #[serde(deserialize_with = "null_as_default")]
    pub place_of_residence: PlaceOfResidence,
    #[serde(deserialize_with = "null_as_default")]
    pub rate_and_review: RateReview,
    #[serde(deserialize_with = "null_as_default")]
    pub badges: DetailBadges,
    #[serde(deserialize_with = "null_as_default")]
    pub extra_description: Vec<ExtraDescription>,
    #[serde(deserialize_with = "null_as_default")]
    pub cancellation_policy_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cancellation_policy_details: CancellationPolicyDetails,
    #[serde(rename = "nearbyCentersV2", deserialize_with = "null_as_default")]
    pub nearby_centers: Vec<NearbyCenters>,
    #[serde(deserialize_with = "null_as_default")]
    pub host_profile: HostProfile,
    /// Upstream keys not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Review summary
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Machine-generated digest of guest reviews
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewSummary {
    pub overall_sentiment: Sentiment,
    pub recommendation: bool,
    pub strengths: Vec<String>,
    pub summary: String,
    pub weaknesses: Vec<String>,
}
