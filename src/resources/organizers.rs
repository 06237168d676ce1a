//! Organizers

use super::events::Event;
use crate::context::Context;
use crate::error::Result;
use crate::http::{ApiRequest, Client};
use crate::types::{MultipartText, Pagination};
use serde::{Deserialize, Serialize};

/// Display owner of events, with name and contact details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organizer {
    pub id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub description: MultipartText,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub long_description: MultipartText,
    /// Organizer page on Eventbrite
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub twitter: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub facebook: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub instagram: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOrganizerRequest {
    #[serde(rename = "organizer.name")]
    pub name: String,
    #[serde(rename = "organizer.description.html")]
    pub description: String,
    #[serde(rename = "organizer.long_description.html")]
    pub long_description: String,
    #[serde(rename = "organizer.logo.id")]
    pub logo_id: String,
    #[serde(rename = "organizer.website")]
    pub website: String,
    #[serde(rename = "organizer.twitter")]
    pub twitter: String,
    /// Facebook URL ID
    #[serde(rename = "organizer.facebook")]
    pub facebook: String,
    /// Instagram numeric ID
    #[serde(rename = "organizer.instagram")]
    pub instagram: String,
}

impl ApiRequest for CreateOrganizerRequest {
    const REQUIRED: &'static [&'static str] = &["organizer.name"];
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrganizerRequest {
    #[serde(rename = "organizer.name")]
    pub name: String,
    #[serde(rename = "organizer.description.html")]
    pub description: String,
    #[serde(rename = "organizer.long_description.html")]
    pub long_description: String,
    #[serde(rename = "organizer.logo.id")]
    pub logo_id: String,
    #[serde(rename = "organizer.website")]
    pub website: String,
    #[serde(rename = "organizer.twitter")]
    pub twitter: String,
    #[serde(rename = "organizer.facebook")]
    pub facebook: String,
    #[serde(rename = "organizer.instagram")]
    pub instagram: String,
}

impl ApiRequest for UpdateOrganizerRequest {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizerEventsRequest {
    /// Comma separated: all, draft, live, canceled, started, ended
    pub status: String,
    /// start_asc, start_desc, created_asc or created_desc
    pub order_by: String,
    #[serde(rename = "start_date.range_start")]
    pub start_date_range_start: String,
    #[serde(rename = "start_date.range_end")]
    pub start_date_range_end: String,
    pub only_public: bool,
}

impl ApiRequest for OrganizerEventsRequest {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizerEventsResult {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub events: Vec<Event>,
}

impl Client {
    pub async fn create_organizer(
        &self,
        ctx: &Context,
        req: &CreateOrganizerRequest,
    ) -> Result<Organizer> {
        self.post_json_with(ctx, "/organizers/", req).await
    }

    pub async fn get_organizer(&self, ctx: &Context, id: &str) -> Result<Organizer> {
        self.get_json(ctx, &format!("/organizers/{id}")).await
    }

    pub async fn update_organizer(
        &self,
        ctx: &Context,
        id: &str,
        req: &UpdateOrganizerRequest,
    ) -> Result<Organizer> {
        self.post_json_with(ctx, &format!("/organizers/{id}"), req).await
    }

    /// Events run by an organizer
    pub async fn list_organizer_events(
        &self,
        ctx: &Context,
        id: &str,
        req: &OrganizerEventsRequest,
    ) -> Result<OrganizerEventsResult> {
        self.get_json_with(ctx, &format!("/organizers/{id}/events/"), req)
            .await
    }
}
