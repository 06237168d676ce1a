//! Orders and their attendees
//!
//! Orders are private: only the event owner and the buyer can read them.

use super::events::Event;
use crate::context::Context;
use crate::error::Result;
use crate::http::Client;
use crate::types::{Address, Currency, JsonValue};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One purchase of one or more ticket classes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: String,
    pub created: Option<DateTime<Utc>>,
    pub changed: Option<DateTime<Utc>>,
    /// Prefer this over first/last name
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub costs: OrderCosts,
    pub event: Option<Event>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub event_id: String,
    pub refund_requests: JsonValue,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub attendees: Vec<Attendee>,
    /// Seconds left to complete the order
    pub time_remaining: Option<u64>,
}

/// Cost breakdown of an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCosts {
    /// Total charged to the buyer
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub gross: Currency,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub eventbrite_fee: Currency,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub payment_fee: Currency,
    /// Passed on to the organizer
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub tax: Currency,
}

/// One person coming to an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attendee {
    pub id: String,
    pub created: Option<DateTime<Utc>>,
    pub changed: Option<DateTime<Utc>>,
    /// Name of the ticket class at registration time
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub ticket_class_name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub profile: AttendeeProfile,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub answers: Vec<AttendeeAnswer>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub barcodes: Vec<AttendeeBarcode>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub checked_in: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub cancelled: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub refunded: bool,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub event_id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub order_id: String,
    /// Set only for guests
    pub guestlist_id: Option<String>,
    pub invited_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendeeProfile {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub prefix: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub suffix: String,
    pub age: Option<u32>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub job_title: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub blog: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub cell_phone: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub addresses: AttendeeAddresses,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendeeAddresses {
    pub home: Option<Address>,
    pub ship: Option<Address>,
    pub work: Option<Address>,
}

/// Answer to a custom question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendeeAnswer {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub question_id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub question: String,
    /// multiple_choice or text
    #[serde(rename = "type", deserialize_with = "crate::types::null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendeeBarcode {
    /// Null when printable tickets are off
    pub barcode: Option<String>,
    /// unused, used or refunded
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub status: String,
    pub created: Option<DateTime<Utc>>,
    pub changed: Option<DateTime<Utc>>,
}

impl Client {
    pub async fn get_order(&self, ctx: &Context, id: &str) -> Result<Order> {
        self.get_json(ctx, &format!("/orders/{id}/")).await
    }
}
