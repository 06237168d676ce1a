//! Common types used throughout the client
//!
//! Response shapes shared by several resources, plus type aliases. Every
//! struct tolerates missing fields: the API omits keys freely depending on
//! permissions and `expand` settings.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Open-ended JSON value for fields without a guaranteed schema
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// ISO 3166 alpha-2 country code
pub type CountryCode = String;

/// ISO 4217 currency code
pub type CurrencyCode = String;

/// Decode `null` the same as a missing key: the field's default.
///
/// The API sends `null` for unset scalars (`venue_id` of an online event,
/// blank address lines, absent social links).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Pagination
// ============================================================================

/// Page information attached to every list response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total number of objects across all pages
    pub object_count: u32,
    /// Current page, starting at 1
    pub page_number: u32,
    /// Objects per page
    pub page_size: u32,
    /// Number of pages
    pub page_count: u32,
    /// Whether another page follows this one
    pub has_more_items: bool,
}

// ============================================================================
// Basic Formats
// ============================================================================

/// HTML field with a stripped plain-text companion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultipartText {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub html: String,
}

/// Olson timezone name plus the UTC and local renderings of one instant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatetimeTz {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub utc: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub local: String,
}

/// Monetary amount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub currency: CurrencyCode,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub value: f64,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub display: String,
}

/// Postal address in the API's common format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub address_1: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub address_2: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub city: String,
    /// ISO 3166-2 region code
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub postal_code: String,
    /// ISO 3166-1 country code
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub country: CountryCode,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub latitude: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub longitude: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub localized_address_display: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub localized_area_display: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub localized_multi_line_address_display: Vec<JsonValue>,
}

/// Image reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub url: String,
}

// ============================================================================
// System Formats
// ============================================================================

/// IANA timezone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timezone {
    pub id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub label: String,
}

/// ISO 3166 country
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub code: CountryCode,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub label: String,
}

/// ISO 3166 region within a country
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub country_code: CountryCode,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub label: String,
}
