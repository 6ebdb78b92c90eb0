use marquee_model::Movie;
use serde_json::Value;

use super::resolver::ImageResolver;
use crate::error::{CatalogError, Result};

/// Resolves artwork for a JSON document holding one movie or an array of them.
///
/// The output keeps the input's shape and every key of each record; only
/// `imageUrl` and `backdropUrl` are written. Anything other than an object or
/// an array of objects is rejected.
pub fn resolve_document(resolver: &ImageResolver, input: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(input)?;
    match value {
        Value::Array(items) => {
            let resolved = items
                .into_iter()
                .map(|item| resolve_value(resolver, item))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(resolved))
        }
        object @ Value::Object(_) => resolve_value(resolver, object),
        other => Err(CatalogError::InvalidInput(format!(
            "expected a movie object or an array of movies, found {}",
            json_kind(&other)
        ))),
    }
}

fn resolve_value(resolver: &ImageResolver, value: Value) -> Result<Value> {
    let mut record = match value {
        Value::Object(record) => record,
        other => {
            return Err(CatalogError::InvalidInput(format!(
                "expected a movie object, found {}",
                json_kind(&other)
            )));
        }
    };

    let movie: Movie = serde_json::from_value(Value::Object(record.clone()))?;
    let resolved = resolver.resolve(movie);
    if let Some(url) = resolved.image_url {
        record.insert("imageUrl".to_string(), Value::String(url));
    }
    if let Some(url) = resolved.backdrop_url {
        record.insert("backdropUrl".to_string(), Value::String(url));
    }
    Ok(Value::Object(record))
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
