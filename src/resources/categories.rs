//! Categories and subcategories

use crate::context::Context;
use crate::error::Result;
use crate::http::Client;
use crate::types::Pagination;
use serde::{Deserialize, Serialize};

/// Top-level vertical an event falls into ("Music", "Endurance", ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub name_localized: String,
    /// Shorter name for sidebars and other small spaces
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub short_name: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub short_name_localized: String,
    /// Only populated on some endpoints
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub subcategories: Vec<SubCategory>,
}

/// More specific category sitting underneath a [`Category`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubCategory {
    pub id: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub name: String,
    pub parent_category: Option<Box<Category>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesResult {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubCategoriesResult {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub subcategories: Vec<SubCategory>,
}

impl Client {
    /// List categories, subcategories nested
    pub async fn list_categories(&self, ctx: &Context) -> Result<CategoriesResult> {
        self.get_json(ctx, "/categories").await
    }

    /// Get a category by ID
    pub async fn get_category(&self, ctx: &Context, id: &str) -> Result<Category> {
        self.get_json(ctx, &format!("/categories/{id}")).await
    }

    /// List subcategories
    pub async fn list_subcategories(&self, ctx: &Context) -> Result<SubCategoriesResult> {
        self.get_json(ctx, "/subcategories/").await
    }

    /// Get a subcategory by ID
    pub async fn get_subcategory(&self, ctx: &Context, id: &str) -> Result<SubCategory> {
        self.get_json(ctx, &format!("/subcategories/{id}")).await
    }
}
