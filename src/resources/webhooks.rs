//! Webhooks

use crate::context::Context;
use crate::error::Result;
use crate::http::{ApiRequest, Client};
use crate::types::{JsonValue, Pagination};
use serde::{Deserialize, Serialize};

/// Subscription that posts to a URL when account activity happens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub endpoint_url: String,
    /// Comma separated actions that fire the webhook
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub actions: String,
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhooksRequest {
    pub organization_id: String,
}

impl ApiRequest for WebhooksRequest {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhooksResult {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub webhooks: Vec<Webhook>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWebhookRequest {
    pub endpoint_url: String,
    /// Defaults to order.placed, event.published and event.unpublished when empty
    pub actions: String,
    pub organization_id: String,
    /// Empty for all events
    pub event_id: String,
}

impl ApiRequest for CreateWebhookRequest {
    const REQUIRED: &'static [&'static str] = &["endpoint_url"];
}

impl Client {
    /// Webhooks of an organization
    pub async fn list_webhooks(
        &self,
        ctx: &Context,
        req: &WebhooksRequest,
    ) -> Result<WebhooksResult> {
        self.get_json_with(ctx, "/webhooks/", req).await
    }

    pub async fn get_webhook(&self, ctx: &Context, id: &str) -> Result<Webhook> {
        self.get_json(ctx, &format!("/webhooks/{id}/")).await
    }

    pub async fn create_webhook(
        &self,
        ctx: &Context,
        req: &CreateWebhookRequest,
    ) -> Result<Webhook> {
        self.post_json_with(ctx, "/webhooks/", req).await
    }

    /// Delete a webhook. The API answers with a small status object.
    pub async fn delete_webhook(&self, ctx: &Context, id: &str) -> Result<JsonValue> {
        self.delete_json(ctx, &format!("/webhooks/{id}/")).await
    }
}
