//! Event formats
//!
//! A format is the type of presentation ("seminar", "workshop", "concert"),
//! independent of the category.

use crate::context::Context;
use crate::error::Result;
use crate::http::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Format {
    pub id: String,
    #[serde(rename = "format", deserialize_with = "crate::types::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub short_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatsResult {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub formats: Vec<Format>,
}

impl Client {
    /// List all formats
    pub async fn list_formats(&self, ctx: &Context) -> Result<FormatsResult> {
        self.get_json(ctx, "/formats").await
    }

    /// Get a format by ID
    pub async fn get_format(&self, ctx: &Context, id: &str) -> Result<Format> {
        self.get_json(ctx, &format!("/formats/{id}")).await
    }
}
