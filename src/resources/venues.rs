//! Venues

use super::events::Event;
use crate::context::Context;
use crate::error::Result;
use crate::http::{ApiRequest, Client};
use crate::types::{Address, Pagination};
use serde::{Deserialize, Serialize};

/// A location where an event happens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub address: Address,
    pub age_restriction: Option<String>,
    pub capacity: Option<u32>,
}

/// Fields of a venue create call
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVenueRequest {
    #[serde(rename = "venue.name")]
    pub name: String,
    /// Leave empty to use the default organizer
    #[serde(rename = "venue.organizer_id")]
    pub organizer_id: String,
    #[serde(rename = "venue.address.address_1")]
    pub address_1: String,
    #[serde(rename = "venue.address.address_2")]
    pub address_2: String,
    #[serde(rename = "venue.address.city")]
    pub city: String,
    #[serde(rename = "venue.address.region")]
    pub region: String,
    #[serde(rename = "venue.address.postal_code")]
    pub postal_code: String,
    #[serde(rename = "venue.address.country")]
    pub country: String,
    #[serde(rename = "venue.address.latitude")]
    pub latitude: f64,
    #[serde(rename = "venue.address.longitude")]
    pub longitude: f64,
    #[serde(rename = "venue.age_restriction")]
    pub age_restriction: String,
    #[serde(rename = "venue.capacity")]
    pub capacity: u32,
}

impl ApiRequest for CreateVenueRequest {
    const REQUIRED: &'static [&'static str] = &["venue.name"];
}

/// Fields of a venue update call; same shape as create, nothing required
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateVenueRequest {
    #[serde(rename = "venue.name")]
    pub name: String,
    #[serde(rename = "venue.organizer_id")]
    pub organizer_id: String,
    #[serde(rename = "venue.address.address_1")]
    pub address_1: String,
    #[serde(rename = "venue.address.address_2")]
    pub address_2: String,
    #[serde(rename = "venue.address.city")]
    pub city: String,
    #[serde(rename = "venue.address.region")]
    pub region: String,
    #[serde(rename = "venue.address.postal_code")]
    pub postal_code: String,
    #[serde(rename = "venue.address.country")]
    pub country: String,
    #[serde(rename = "venue.address.latitude")]
    pub latitude: f64,
    #[serde(rename = "venue.address.longitude")]
    pub longitude: f64,
    #[serde(rename = "venue.age_restriction")]
    pub age_restriction: String,
    #[serde(rename = "venue.capacity")]
    pub capacity: u32,
}

impl ApiRequest for UpdateVenueRequest {}

/// Filters for the events held at a venue
#[derive(Debug, Clone, Default, Serialize)]
pub struct VenueEventsRequest {
    pub status: String,
    pub order_by: String,
    #[serde(rename = "start_date.range_start")]
    pub start_date_range_start: String,
    #[serde(rename = "start_date.range_end")]
    pub start_date_range_end: String,
    pub only_public: bool,
}

impl ApiRequest for VenueEventsRequest {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueEventsResult {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub events: Vec<Event>,
}

impl Client {
    /// Get a venue by ID
    pub async fn get_venue(&self, ctx: &Context, id: &str) -> Result<Venue> {
        self.get_json(ctx, &format!("/venues/{id}/")).await
    }

    /// Create a venue with its address
    pub async fn create_venue(&self, ctx: &Context, req: &CreateVenueRequest) -> Result<Venue> {
        self.post_json_with(ctx, "/venues/", req).await
    }

    /// Update a venue and return it
    pub async fn update_venue(
        &self,
        ctx: &Context,
        id: &str,
        req: &UpdateVenueRequest,
    ) -> Result<Venue> {
        self.post_json_with(ctx, &format!("/venues/{id}/"), req).await
    }

    /// Events held at a venue
    pub async fn list_venue_events(
        &self,
        ctx: &Context,
        id: &str,
        req: &VenueEventsRequest,
    ) -> Result<VenueEventsResult> {
        self.get_json_with(ctx, &format!("/venues/{id}/events/"), req).await
    }
}
