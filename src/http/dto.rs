//! Request payloads and their validation.
//!
//! Bodies arrive as loose JSON objects so that every violated rule can be reported at once,
//! then become the typed [`ProductCreate`] / [`ProductUpdate`]. Unknown fields (including
//! `id`) are ignored.

use super::error::{ApiError, INVALID_UUID_MESSAGE};
use crate::model::{ProductCreate, ProductId, ProductUpdate};
use crate::query::{ProductQuery, SortField, SortOrder};
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw listing parameters as they appear in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl ListParams {
    pub fn into_query(self) -> Result<ProductQuery, ApiError> {
        let mut errors = Vec::new();
        let sort_by = parse_enum::<SortField>(
            self.sort_by.as_deref(),
            "sortBy",
            "price, quantity",
            &mut errors,
        );
        let order =
            parse_enum::<SortOrder>(self.order.as_deref(), "order", "asc, desc", &mut errors);
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(ProductQuery::from_raw(
            self.search.as_deref(),
            sort_by,
            order,
            self.page.as_deref(),
            self.limit.as_deref(),
        ))
    }
}

fn parse_enum<'de, T: Deserialize<'de>>(
    raw: Option<&'de str>,
    field: &str,
    allowed: &str,
    errors: &mut Vec<String>,
) -> Option<T> {
    let raw = raw?;
    let deserializer: StrDeserializer<'de, ValueError> = raw.into_deserializer();
    match T::deserialize(deserializer) {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(format!("{field} must be one of the following values: {allowed}"));
            None
        }
    }
}

pub fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(INVALID_UUID_MESSAGE.to_string()))
}

/// Validates a create body; every field is required.
pub fn validate_create(body: Value) -> Result<ProductCreate, ApiError> {
    let fields = as_object(body)?;
    let mut errors = Vec::new();

    let name = required(text(&fields, "name", &mut errors), "name", &mut errors);
    let quantity = required(amount(&fields, "quantity", &mut errors), "quantity", &mut errors);
    let price = required(amount(&fields, "price", &mut errors), "price", &mut errors);
    let description = required(
        text(&fields, "description", &mut errors),
        "description",
        &mut errors,
    );
    let category = required(text(&fields, "category", &mut errors), "category", &mut errors);

    match (name, quantity, price, description, category) {
        (Some(name), Some(quantity), Some(price), Some(description), Some(category))
            if errors.is_empty() =>
        {
            Ok(ProductCreate {
                name,
                quantity,
                price,
                description,
                category,
            })
        }
        _ => Err(ApiError::Validation(errors)),
    }
}

/// Validates an update body; absent or `null` fields are left untouched.
pub fn validate_update(body: Value) -> Result<ProductUpdate, ApiError> {
    let fields = as_object(body)?;
    let mut errors = Vec::new();

    let update = ProductUpdate {
        name: text(&fields, "name", &mut errors),
        quantity: amount(&fields, "quantity", &mut errors),
        price: amount(&fields, "price", &mut errors),
        description: text(&fields, "description", &mut errors),
        category: text(&fields, "category", &mut errors),
    };

    if errors.is_empty() {
        Ok(update)
    } else {
        Err(ApiError::Validation(errors))
    }
}

fn as_object(body: Value) -> Result<Map<String, Value>, ApiError> {
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(ApiError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

/// `None` when absent or null.
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

/// Flags a missing required field unless it already failed another rule.
fn required<T>(value: Option<T>, key: &str, errors: &mut Vec<String>) -> Option<T> {
    if value.is_none() && !errors.iter().any(|e| e.starts_with(&format!("{key} "))) {
        errors.push(format!("{key} should not be empty"));
    }
    value
}

fn text(fields: &Map<String, Value>, key: &str, errors: &mut Vec<String>) -> Option<String> {
    match present(fields, key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::String(_) => {
            errors.push(format!("{key} should not be empty"));
            None
        }
        _ => {
            errors.push(format!("{key} must be a string"));
            None
        }
    }
}

fn amount(fields: &Map<String, Value>, key: &str, errors: &mut Vec<String>) -> Option<f64> {
    let value = present(fields, key)?;
    match value.as_f64() {
        Some(n) if n > 0.0 => Some(n),
        Some(_) => {
            errors.push(format!("{key} must be a positive number"));
            None
        }
        None => {
            errors.push(format!(
                "{key} must be a number conforming to the specified constraints"
            ));
            None
        }
    }
}
