/// Recommendation parser
///
/// Turns raw provider output into validated recommendation lists. Generative
/// models routinely wrap their JSON in prose ("Sure! Here you go: {...}"),
/// so extraction tolerates leading and trailing commentary. Every provider's
/// payload ends up here; only the envelope unwrapping before this point is
/// provider-specific.
use serde_json::Value;

use crate::error::{ProviderError, ProviderResult};
use crate::models::{ContentType, Recommendation};

/// Extracts a recommendation list from raw model output text.
///
/// Takes the span from the first `{` to the last `}` and parses that
/// substring as JSON, then validates it through
/// [`parse_recommendation_value`].
pub fn parse_recommendation_text(raw: &str) -> ProviderResult<Vec<Recommendation>> {
    let span = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => {
            return Err(ProviderError::MalformedResponse(
                "response contains no JSON object".to_string(),
            ))
        }
    };

    let value: Value = serde_json::from_str(span).map_err(|e| {
        ProviderError::MalformedResponse(format!("failed to parse response JSON: {}", e))
    })?;

    parse_recommendation_value(&value)
}

/// Validates an already-parsed JSON value and coerces it into recommendations.
///
/// Accepts either an object with an array-valued `recommendations` field or
/// a bare array. An empty array is a failure, never an empty success.
pub fn parse_recommendation_value(value: &Value) -> ProviderResult<Vec<Recommendation>> {
    let items = match value.get("recommendations").and_then(Value::as_array) {
        Some(items) => items,
        None => value.as_array().ok_or_else(|| {
            ProviderError::MalformedResponse(
                "response has no recommendations array".to_string(),
            )
        })?,
    };

    if items.is_empty() {
        return Err(ProviderError::EmptyResult(
            "provider returned an empty recommendation list".to_string(),
        ));
    }

    let recommendations: Vec<Recommendation> = items.iter().filter_map(coerce_item).collect();

    if recommendations.is_empty() {
        return Err(ProviderError::EmptyResult(
            "no usable items in recommendation list".to_string(),
        ));
    }

    Ok(recommendations)
}

/// Coerces one raw item into the canonical shape.
///
/// Items without a non-empty title are dropped. Missing descriptions and
/// reasons default to empty strings; a missing or unrecognized type becomes
/// `Movie`.
fn coerce_item(item: &Value) -> Option<Recommendation> {
    let title = item.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }

    let content_type = item
        .get("type")
        .and_then(Value::as_str)
        .map(ContentType::from_label)
        .unwrap_or(ContentType::Movie);

    Some(Recommendation {
        title: title.to_string(),
        content_type,
        description: string_field(item, "description"),
        reason: string_field(item, "reason"),
    })
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
