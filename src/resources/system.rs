//! System reference data: timezones, regions, countries

use crate::context::Context;
use crate::error::Result;
use crate::http::Client;
use crate::types::{Country, Pagination, Region, Timezone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Timezones {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub timezones: Vec<Timezone>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Regions {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub regions: Vec<Region>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Countries {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub countries: Vec<Country>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
}

impl Client {
    /// Paginated list of timezones
    pub async fn list_timezones(&self, ctx: &Context) -> Result<Timezones> {
        self.get_json(ctx, "/system/timezones/").await
    }

    /// Single-page list of regions
    pub async fn list_regions(&self, ctx: &Context) -> Result<Regions> {
        self.get_json(ctx, "/system/regions/").await
    }

    /// Single-page list of countries
    pub async fn list_countries(&self, ctx: &Context) -> Result<Countries> {
        self.get_json(ctx, "/system/countries/").await
    }
}
