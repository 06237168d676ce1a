//! Endpoint bindings
//!
//! Each submodule holds the response shapes and request descriptors of one
//! API resource, plus the [`Client`](crate::Client) methods calling it.

mod categories;
mod events;
mod formats;
mod orders;
mod organizers;
mod system;
mod venues;
mod webhooks;

pub use categories::{CategoriesResult, Category, SubCategoriesResult, SubCategory};
pub use events::{
    CreateTicketClassRequest, Event, EventCreateRequest, EventSearchRequest, EventSearchResult,
    EventSettings, EventUpdateRequest, TicketClass, TicketClassesRequest, TicketClassesResult,
    UpdateDisplaySettingsRequest,
};
pub use formats::{Format, FormatsResult};
pub use orders::{
    Attendee, AttendeeAddresses, AttendeeAnswer, AttendeeBarcode, AttendeeProfile, Order,
    OrderCosts,
};
pub use organizers::{
    CreateOrganizerRequest, Organizer, OrganizerEventsRequest, OrganizerEventsResult,
    UpdateOrganizerRequest,
};
pub use system::{Countries, Regions, Timezones};
pub use venues::{
    CreateVenueRequest, UpdateVenueRequest, Venue, VenueEventsRequest, VenueEventsResult,
};
pub use webhooks::{CreateWebhookRequest, Webhook, WebhooksRequest, WebhooksResult};
