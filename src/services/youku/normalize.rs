//! Envelope decoding
//!
//! Turns raw upstream bodies into typed results. Envelope problems are
//! errors; item problems are handled per field (see [`super::flex`]), and only
//! elements that are not objects or that carry no id are dropped.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::client::YoukuError;
use super::flex::Flex;
use super::types::{ApiErrorBody, Entity, Page};

fn parse_object(body: &str) -> Result<Map<String, Value>, YoukuError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| YoukuError::Parse(e.to_string()))?;

    let Value::Object(map) = root else {
        return Err(YoukuError::Parse("response is not a JSON object".to_string()));
    };

    if let Some(error) = map.get("error") {
        let body: ApiErrorBody = serde_json::from_value(error.clone()).unwrap_or_default();
        return Err(YoukuError::Api {
            code: body.code,
            description: if body.description.is_empty() {
                body.kind
            } else {
                body.description
            },
        });
    }

    Ok(map)
}

/// Upstream error object carried by `body`, if any
pub fn api_error(body: &str) -> Option<YoukuError> {
    match parse_object(body) {
        Err(e @ YoukuError::Api { .. }) => Some(e),
        _ => None,
    }
}

fn decode_item<T: Entity>(value: Value) -> Option<T> {
    if !value.is_object() {
        debug!(key = T::LIST_KEY, "dropping non-object list element");
        return None;
    }

    match serde_json::from_value::<T>(value) {
        Ok(item) if !item.id().is_empty() => Some(item),
        Ok(_) => {
            debug!(key = T::LIST_KEY, "dropping list element without id");
            None
        }
        Err(e) => {
            debug!(key = T::LIST_KEY, "dropping undecodable list element: {}", e);
            None
        }
    }
}

/// Decode a list envelope `{total, page, count, <T::LIST_KEY>: [...]}`
pub fn decode_list<T: Entity>(body: &str) -> Result<Page<T>, YoukuError> {
    let mut map = parse_object(body)?;

    let items = match map.remove(T::LIST_KEY) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(YoukuError::Parse(format!(
                "`{}` is not an array",
                T::LIST_KEY
            )))
        }
        None => {
            return Err(YoukuError::Parse(format!(
                "missing `{}` array",
                T::LIST_KEY
            )))
        }
    };

    let scalar = |key: &str| map.get(key).cloned().map(Flex::from).unwrap_or_default().as_i64();

    Ok(Page {
        total: scalar("total"),
        page: scalar("page"),
        count: scalar("count"),
        items: items.into_iter().filter_map(decode_item::<T>).collect(),
    })
}

/// Silent-degrade variant of [`decode_list`]: failures become an empty list
///
/// The flag reports whether the envelope decoded; callers that only render
/// results can ignore it.
pub fn decode_list_lossy<T: Entity>(body: &str) -> (Vec<T>, bool) {
    match decode_list::<T>(body) {
        Ok(page) => (page.items, true),
        Err(e) => {
            warn!(key = T::LIST_KEY, "discarding malformed envelope: {}", e);
            (Vec::new(), false)
        }
    }
}

/// Decode a bare entity object (detail lookups)
pub fn decode_detail<T: Entity>(body: &str) -> Result<T, YoukuError> {
    let map = parse_object(body)?;
    let item: T =
        serde_json::from_value(Value::Object(map)).map_err(|e| YoukuError::Parse(e.to_string()))?;

    if item.id().is_empty() {
        return Err(YoukuError::NotFound);
    }
    Ok(item)
}
