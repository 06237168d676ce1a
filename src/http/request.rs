//! Request descriptors
//!
//! A descriptor is any `Serialize` value whose serde field names are the
//! external parameter names of one endpoint. GET descriptors are flattened to
//! a query string; POST descriptors are sent as the JSON body.

use crate::error::{Error, Result};
use crate::types::StringMap;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Flat query parameters, sorted by key
pub type Query = BTreeMap<String, String>;

/// Parameters of one API endpoint
pub trait ApiRequest: Serialize {
    /// External names of fields that must not be empty or zero
    const REQUIRED: &'static [&'static str] = &[];

    /// Reject the descriptor if a required field is empty, naming the first one
    fn validate(&self) -> Result<()> {
        if Self::REQUIRED.is_empty() {
            return Ok(());
        }
        let value = serde_json::to_value(self).map_err(Error::Encode)?;
        for field in Self::REQUIRED {
            if value.get(field).map_or(true, is_zero) {
                return Err(Error::required(*field));
            }
        }
        Ok(())
    }

    /// Flatten the descriptor into query parameters
    fn to_query(&self) -> Result<Query> {
        let value = serde_json::to_value(self).map_err(Error::Encode)?;
        Ok(match value {
            Value::Object(fields) => flatten_fields(&fields),
            _ => Query::new(),
        })
    }
}

impl ApiRequest for BTreeMap<String, String> {
    fn to_query(&self) -> Result<Query> {
        Ok(self.clone())
    }
}

impl ApiRequest for StringMap {
    fn to_query(&self) -> Result<Query> {
        Ok(self.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

fn flatten_fields(fields: &Map<String, Value>) -> Query {
    fields
        .iter()
        .filter_map(|(name, value)| {
            let rendered = render(value);
            (!rendered.is_empty()).then(|| (name.clone(), rendered))
        })
        .collect()
}

/// Render one top-level field. Only scalars have a query form; booleans,
/// nulls and nested values render empty and are dropped.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| format!("{f:.4}")).unwrap_or_default()
    }
}

fn is_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
