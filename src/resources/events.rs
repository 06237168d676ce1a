//! Events, their display settings and ticket classes

use super::categories::{Category, SubCategory};
use super::formats::Format;
use super::organizers::Organizer;
use super::venues::Venue;
use crate::context::Context;
use crate::error::Result;
use crate::http::{ApiRequest, Client};
use crate::types::{Currency, DatetimeTz, Image, JsonValue, MultipartText, Pagination};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Response shapes
// ============================================================================

/// Anything from a small birthday party to a stadium concert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub name: MultipartText,
    /// Contents of the event page, may be long and heavily formatted
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub description: MultipartText,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub start: DatetimeTz,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub end: DatetimeTz,
    pub created: Option<DateTime<Utc>>,
    pub changed: Option<DateTime<Utc>>,
    /// One of canceled, live, started, ended, completed
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub currency: String,
    /// Held online only, no venue
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub online_event: bool,
    pub venue: Option<Venue>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub venue_id: String,
    pub organizer: Option<Organizer>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub organizer_id: String,
    pub format: Option<Format>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub format_id: String,
    pub category: Option<Category>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub category_id: String,
    pub subcategory: Option<SubCategory>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub subcategory_id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub logo_id: String,
    pub logo: Option<Image>,
    pub refund_policy: JsonValue,
    /// e.g. `{"count": 3}`
    pub bookmark_info: JsonValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSearchResult {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub events: Vec<Event>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub top_match_events: Vec<Event>,
}

/// What the public event listing shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_start_date: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_end_date: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_start_end_time: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_timezone: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_map: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_remaining: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_organizer_facebook: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_organizer_twitter: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_facebook_friends_going: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub show_attendee_list: bool,
}

/// One type of ticket sold for an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketClass {
    pub id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub description: String,
    /// Paid tickets only
    pub cost: Option<Currency>,
    pub fee: Option<Currency>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub donation: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub free: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub minimum_quantity: u32,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub maximum_quantity: u32,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub event_id: String,

    // Only shown to the event owner
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub quantity_total: u32,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub quantity_sold: u32,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub hidden: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub sales_start: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub sales_end: String,
    /// Ticket class whose sell-out starts sales of this one
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub sales_start_after: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub include_fee: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub split_fee: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub hide_description: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub auto_hide: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub auto_hide_before: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub auto_hide_after: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketClassesResult {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub ticket_classes: Vec<TicketClass>,
}

// ============================================================================
// Request descriptors
// ============================================================================

/// Public event search
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventSearchRequest {
    /// Keywords
    #[serde(rename = "q")]
    pub query: String,
    /// "date", "distance" or "best"; prefix with "-" to reverse
    pub sort_by: String,
    #[serde(rename = "location.address")]
    pub location_address: String,
    /// Integer followed by "mi" or "km"
    #[serde(rename = "location.within")]
    pub location_within: String,
    #[serde(rename = "location.latitude")]
    pub location_latitude: String,
    #[serde(rename = "location.longitude")]
    pub location_longitude: String,
    #[serde(rename = "location.viewport.northeast.latitude")]
    pub viewport_northeast_latitude: String,
    #[serde(rename = "location.viewport.northeast.longitude")]
    pub viewport_northeast_longitude: String,
    #[serde(rename = "location.viewport.southwest.latitude")]
    pub viewport_southwest_latitude: String,
    #[serde(rename = "location.viewport.southwest.longitude")]
    pub viewport_southwest_longitude: String,
    #[serde(rename = "organizer.id")]
    pub organizer_id: String,
    #[serde(rename = "user.id")]
    pub user_id: String,
    pub tracking_code: String,
    /// Comma separated category IDs
    pub categories: String,
    pub subcategories: String,
    pub formats: String,
    /// "free" or "paid"
    pub price: String,
    #[serde(rename = "start_date.range_start")]
    pub start_date_range_start: String,
    #[serde(rename = "start_date.range_end")]
    pub start_date_range_end: String,
    /// "this_week", "next_week", "this_weekend", "next_month", "this_month", "tomorrow" or "today"
    #[serde(rename = "start_date.keyword")]
    pub start_date_keyword: String,
    #[serde(rename = "date_modified.range_start")]
    pub date_modified_range_start: String,
    #[serde(rename = "date_modified.range_end")]
    pub date_modified_range_end: String,
    #[serde(rename = "date_modified.keyword")]
    pub date_modified_keyword: String,
    pub search_type: String,
    // Booleans have no query rendering and are never sent
    pub include_all_series_instances: bool,
    pub include_unavailable_events: bool,
    pub include_adult_events: bool,
    pub incorporate_user_affinities: bool,
    pub high_affinity_categories: String,
}

impl ApiRequest for EventSearchRequest {}

/// New event
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventCreateRequest {
    /// Cannot be empty or whitespace
    #[serde(rename = "event.name.html")]
    pub name_html: String,
    #[serde(rename = "event.description.html")]
    pub description_html: String,
    #[serde(rename = "event.organizer_id")]
    pub organizer_id: String,
    #[serde(rename = "event.start.utc")]
    pub start_utc: Option<DateTime<Utc>>,
    /// Olson name
    #[serde(rename = "event.start.timezone")]
    pub start_timezone: String,
    #[serde(rename = "event.end.utc")]
    pub end_utc: Option<DateTime<Utc>>,
    #[serde(rename = "event.end.timezone")]
    pub end_timezone: String,
    #[serde(rename = "event.hide_start_date")]
    pub hide_start_date: bool,
    #[serde(rename = "event.hide_end_date")]
    pub hide_end_date: bool,
    /// Three letter code
    #[serde(rename = "event.currency")]
    pub currency: String,
    /// Omit when `online_event` is set
    #[serde(rename = "event.venue_id")]
    pub venue_id: String,
    #[serde(rename = "event.online_event")]
    pub online_event: bool,
    #[serde(rename = "event.listed")]
    pub listed: bool,
    #[serde(rename = "event.logo_id")]
    pub logo_id: String,
    #[serde(rename = "event.category_id")]
    pub category_id: String,
    #[serde(rename = "event.subcategory_id")]
    pub subcategory_id: String,
    #[serde(rename = "event.format_id")]
    pub format_id: String,
    #[serde(rename = "event.shareable")]
    pub shareable: bool,
    #[serde(rename = "event.invite_only")]
    pub invite_only: bool,
    #[serde(rename = "event.password")]
    pub password: String,
    /// Sum of ticket capacities when zero
    #[serde(rename = "event.capacity")]
    pub capacity: u32,
    #[serde(rename = "event.show_remaining")]
    pub show_remaining: bool,
    #[serde(rename = "event.is_reserved_seating")]
    pub is_reserved_seating: bool,
    #[serde(rename = "event.source")]
    pub source: String,
}

impl ApiRequest for EventCreateRequest {
    const REQUIRED: &'static [&'static str] = &[
        "event.name.html",
        "event.start.utc",
        "event.start.timezone",
        "event.end.utc",
        "event.end.timezone",
        "event.currency",
    ];
}

/// Changes to an existing event
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventUpdateRequest {
    #[serde(rename = "event.name.html")]
    pub name_html: String,
    #[serde(rename = "event.description.html")]
    pub description_html: String,
    #[serde(rename = "event.organizer_id")]
    pub organizer_id: String,
    #[serde(rename = "event.start.utc")]
    pub start_utc: Option<DateTime<Utc>>,
    #[serde(rename = "event.start.timezone")]
    pub start_timezone: String,
    #[serde(rename = "event.end.utc")]
    pub end_utc: Option<DateTime<Utc>>,
    #[serde(rename = "event.end.timezone")]
    pub end_timezone: String,
    #[serde(rename = "event.hide_start_date")]
    pub hide_start_date: bool,
    #[serde(rename = "event.hide_end_date")]
    pub hide_end_date: bool,
    #[serde(rename = "event.currency")]
    pub currency: String,
    #[serde(rename = "event.venue_id")]
    pub venue_id: String,
    #[serde(rename = "event.online_event")]
    pub online_event: bool,
    #[serde(rename = "event.listed")]
    pub listed: bool,
    #[serde(rename = "event.logo_id")]
    pub logo_id: String,
    #[serde(rename = "event.category_id")]
    pub category_id: String,
    #[serde(rename = "event.subcategory_id")]
    pub subcategory_id: String,
    #[serde(rename = "event.format_id")]
    pub format_id: String,
    #[serde(rename = "event.shareable")]
    pub shareable: bool,
    #[serde(rename = "event.invite_only")]
    pub invite_only: bool,
    #[serde(rename = "event.password")]
    pub password: String,
    #[serde(rename = "event.capacity")]
    pub capacity: u32,
    #[serde(rename = "event.show_remaining")]
    pub show_remaining: bool,
    #[serde(rename = "event.is_reserved_seating")]
    pub is_reserved_seating: bool,
    #[serde(rename = "event.source")]
    pub source: String,
}

impl ApiRequest for EventUpdateRequest {
    const REQUIRED: &'static [&'static str] = &[
        "event.description.html",
        "event.organizer_id",
        "event.start.utc",
        "event.start.timezone",
        "event.end.utc",
        "event.end.timezone",
        "event.currency",
    ];
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct UpdateDisplaySettingsRequest {
    #[serde(rename = "display_settings.show_start_date")]
    pub show_start_date: bool,
    #[serde(rename = "display_settings.show_end_date")]
    pub show_end_date: bool,
    #[serde(rename = "display_settings.show_start_end_time")]
    pub show_start_end_time: bool,
    #[serde(rename = "display_settings.show_timezone")]
    pub show_timezone: bool,
    #[serde(rename = "display_settings.show_map")]
    pub show_map: bool,
    #[serde(rename = "display_settings.show_remaining")]
    pub show_remaining: bool,
    #[serde(rename = "display_settings.show_organizer_facebook")]
    pub show_organizer_facebook: bool,
    #[serde(rename = "display_settings.show_organizer_twitter")]
    pub show_organizer_twitter: bool,
    #[serde(rename = "display_settings.show_facebook_friends_going")]
    pub show_facebook_friends_going: bool,
    #[serde(rename = "display_settings.show_attendee_list")]
    pub show_attendee_list: bool,
}

impl ApiRequest for UpdateDisplaySettingsRequest {}

/// Ticket class listing filter
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketClassesRequest {
    /// "online" or "at_the_door"
    pub pos: String,
}

impl ApiRequest for TicketClassesRequest {}

/// New ticket class on an event
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTicketClassRequest {
    #[serde(rename = "ticket_class.name")]
    pub name: String,
    #[serde(rename = "ticket_class.description")]
    pub description: String,
    #[serde(rename = "ticket_class.quantity_total")]
    pub quantity_total: u32,
    /// Currency and minor units, e.g. "USD,4500" for $45
    #[serde(rename = "ticket_class.cost")]
    pub cost: String,
    #[serde(rename = "ticket_class.donation")]
    pub donation: bool,
    #[serde(rename = "ticket_class.free")]
    pub free: bool,
    #[serde(rename = "ticket_class.include_fee")]
    pub include_fee: bool,
    #[serde(rename = "ticket_class.split_fee")]
    pub split_fee: bool,
    #[serde(rename = "ticket_class.hide_description")]
    pub hide_description: bool,
    /// Any of "online" and "atd"
    #[serde(rename = "ticket_class.sales_channels")]
    pub sales_channels: Vec<String>,
    #[serde(rename = "ticket_class.sales_start")]
    pub sales_start: String,
    #[serde(rename = "ticket_class.sales_end")]
    pub sales_end: String,
    #[serde(rename = "ticket_class.sales_start_after")]
    pub sales_start_after: String,
    #[serde(rename = "ticket_class.minimum_quantity")]
    pub minimum_quantity: u32,
    #[serde(rename = "ticket_class.maximum_quantity")]
    pub maximum_quantity: u32,
    #[serde(rename = "ticket_class.hidden")]
    pub hidden: bool,
    #[serde(rename = "ticket_class.auto_hide")]
    pub auto_hide: bool,
    #[serde(rename = "ticket_class.auto_hide_before")]
    pub auto_hide_before: String,
    #[serde(rename = "ticket_class.auto_hide_after")]
    pub auto_hide_after: String,
    #[serde(rename = "ticket_class.order_confirmation_message")]
    pub order_confirmation_message: String,
}

impl ApiRequest for CreateTicketClassRequest {
    const REQUIRED: &'static [&'static str] = &["ticket_class.name"];
}

// ============================================================================
// Endpoints
// ============================================================================

impl Client {
    /// Search public events across the whole directory
    pub async fn search_events(
        &self,
        ctx: &Context,
        req: &EventSearchRequest,
    ) -> Result<EventSearchResult> {
        self.get_json_with(ctx, "/events/search/", req).await
    }

    pub async fn get_event(&self, ctx: &Context, id: &str) -> Result<Event> {
        self.get_json(ctx, &format!("/events/{id}")).await
    }

    /// Create an event; it starts as a draft
    pub async fn create_event(&self, ctx: &Context, req: &EventCreateRequest) -> Result<Event> {
        self.post_json_with(ctx, "/events/", req).await
    }

    pub async fn update_event(
        &self,
        ctx: &Context,
        id: &str,
        req: &EventUpdateRequest,
    ) -> Result<Event> {
        self.post_json_with(ctx, &format!("/events/{id}/"), req).await
    }

    /// Publish a draft event. The body reports `{"published": true}` on success.
    pub async fn publish_event(&self, ctx: &Context, id: &str) -> Result<JsonValue> {
        self.post_json(ctx, &format!("/events/{id}/publish")).await
    }

    pub async fn unpublish_event(&self, ctx: &Context, id: &str) -> Result<JsonValue> {
        self.post_json(ctx, &format!("/events/{id}/unpublish")).await
    }

    /// Cancel an event with no pending or completed orders
    pub async fn cancel_event(&self, ctx: &Context, id: &str) -> Result<JsonValue> {
        self.post_json(ctx, &format!("/events/{id}/cancel")).await
    }

    /// Delete an event with no pending or completed orders
    pub async fn delete_event(&self, ctx: &Context, id: &str) -> Result<JsonValue> {
        self.delete_json(ctx, &format!("/events/{id}")).await
    }

    pub async fn get_display_settings(&self, ctx: &Context, id: &str) -> Result<EventSettings> {
        self.get_json(ctx, &format!("/events/{id}/display_settings/")).await
    }

    pub async fn update_display_settings(
        &self,
        ctx: &Context,
        id: &str,
        req: &UpdateDisplaySettingsRequest,
    ) -> Result<EventSettings> {
        self.post_json_with(ctx, &format!("/events/{id}/display_settings/"), req)
            .await
    }

    pub async fn list_ticket_classes(
        &self,
        ctx: &Context,
        event_id: &str,
        req: &TicketClassesRequest,
    ) -> Result<TicketClassesResult> {
        self.get_json_with(ctx, &format!("/events/{event_id}/ticket_classes/"), req)
            .await
    }

    pub async fn create_ticket_class(
        &self,
        ctx: &Context,
        event_id: &str,
        req: &CreateTicketClassRequest,
    ) -> Result<TicketClass> {
        self.post_json_with(ctx, &format!("/events/{event_id}/ticket_classes/"), req)
            .await
    }

    pub async fn get_ticket_class(
        &self,
        ctx: &Context,
        event_id: &str,
        ticket_class_id: &str,
    ) -> Result<TicketClass> {
        self.get_json(
            ctx,
            &format!("/events/{event_id}/ticket_classes/{ticket_class_id}/"),
        )
        .await
    }

    /// Delete a ticket class; fails while other classes depend on it
    pub async fn delete_ticket_class(
        &self,
        ctx: &Context,
        event_id: &str,
        ticket_class_id: &str,
    ) -> Result<JsonValue> {
        self.delete_json(
            ctx,
            &format!("/events/{event_id}/ticket_classes/{ticket_class_id}/"),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_search_request_query() {
        let req = EventSearchRequest {
            query: "jazz".into(),
            location_within: "10km".into(),
            include_adult_events: true,
            ..Default::default()
        };

        let query = req.to_query().unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query["q"], "jazz");
        assert_eq!(query["location.within"], "10km");
    }

    #[test]
    fn test_create_request_requires_start() {
        let req = EventCreateRequest {
            name_html: "<p>Launch</p>".into(),
            ..Default::default()
        };
        match req.validate() {
            Err(Error::Validation { field }) => assert_eq!(field, "event.start.utc"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_request_complete() {
        let start = Utc.with_ymd_and_hms(2026, 5, 1, 18, 0, 0).unwrap();
        let req = EventCreateRequest {
            name_html: "<p>Launch</p>".into(),
            start_utc: Some(start),
            start_timezone: "Europe/Lisbon".into(),
            end_utc: Some(start + chrono::Duration::hours(3)),
            end_timezone: "Europe/Lisbon".into(),
            currency: "EUR".into(),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["event.start.utc"], "2026-05-01T18:00:00Z");
    }

    #[test]
    fn test_event_tolerates_sparse_payload() {
        let event: Event = serde_json::from_value(json!({
            "id": "123",
            "name": {"text": "Launch", "html": "<p>Launch</p>"},
            "created": "2026-01-10T09:30:00Z",
            "venue": null
        }))
        .unwrap();

        assert_eq!(event.id, "123");
        assert_eq!(event.name.text, "Launch");
        assert_eq!(
            event.created,
            Some(Utc.with_ymd_and_hms(2026, 1, 10, 9, 30, 0).unwrap())
        );
        assert!(event.venue.is_none());
        assert!(event.refund_policy.is_null());
    }

    #[test]
    fn test_online_event_with_null_ids() {
        let event: Event = serde_json::from_value(json!({
            "id": "1",
            "online_event": true,
            "venue_id": null,
            "logo_id": null,
            "format_id": null,
            "category_id": null,
            "subcategory_id": null,
            "organizer_id": null,
            "description": null,
            "logo": null
        }))
        .unwrap();

        assert!(event.online_event);
        assert_eq!(event.venue_id, "");
        assert_eq!(event.logo_id, "");
        assert_eq!(event.subcategory_id, "");
        assert_eq!(event.description, MultipartText::default());
        assert!(event.logo.is_none());
    }
}
