//! Property pitch model and slide generation.
//!
//! A request body is parsed into a [`PropertyRequest`] through three checks
//! that short-circuit in order: the body must be a JSON object, every
//! required key must be present, and every value must be non-empty once
//! coerced to text and trimmed. A valid request is then rendered into the
//! three fixed slides by [`crate::templates::render_slides`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tera::Tera;

use crate::error::AppError;
use crate::templates::render_slides;

/// Keys every `/generate` payload must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 3] = ["propertyType", "location", "price"];

/// A validated property description with all fields trimmed.
///
/// Serializes as the `property_details` object of a generate response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRequest {
    #[serde(rename = "type")]
    pub property_type: String,
    pub location: String,
    /// Opaque text, never reformatted
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u8,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub property_details: PropertyRequest,
    pub slides: Vec<Slide>,
}

/// Success envelope: `{"success": true, "data": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateEnvelope {
    pub success: bool,
    pub data: GenerateResponse,
}

impl From<GenerateResponse> for GenerateEnvelope {
    fn from(data: GenerateResponse) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl PropertyRequest {
    /// Parse and validate a raw request body.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| AppError::InvalidJson(e.to_string()))?;

        match value {
            Value::Object(map) => Self::from_object(&map),
            other => Err(AppError::InvalidJson(format!(
                "expected an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Validate an already-parsed JSON object.
    pub fn from_object(map: &Map<String, Value>) -> Result<Self, AppError> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !map.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        // Every key is present past this point
        let [property_type, location, price] =
            REQUIRED_FIELDS.map(|name| coerce_to_text(&map[name]).trim().to_string());

        let request = Self {
            property_type,
            location,
            price,
        };

        if request.property_type.is_empty() || request.location.is_empty() || request.price.is_empty()
        {
            return Err(AppError::EmptyField);
        }

        Ok(request)
    }
}

/// Convert a JSON value to the text interpolated into slides.
///
/// Strings are used as-is, numbers keep the digits exactly as written in
/// the request, booleans use their JSON spelling and containers become
/// compact JSON. `null` becomes empty text, so a null field fails the
/// empty-field check.
pub fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Validate a request body and render its slides.
pub fn generate(tera: &Tera, body: &[u8]) -> Result<GenerateResponse, AppError> {
    let property = PropertyRequest::from_json(body)?;

    tracing::info!(
        property_type = %property.property_type,
        location = %property.location,
        "Generating slides"
    );

    let slides = render_slides(tera, &property)?;

    Ok(GenerateResponse {
        property_details: property,
        slides,
    })
}
