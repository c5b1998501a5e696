//! Query-string serialization of flat JSON objects.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{Result, StrkitError};
use crate::query::encode::{encode_component, normalize_value};
use crate::types::{ArrayFormat, ReturnType, StringifyOptions, Stringified};

/// Serialize `params` in the shape selected by `options.return_type`.
///
/// Entries are written in insertion order. Keys and values are
/// percent-encoded; arrays follow `options.array_format`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strkit::{stringify_params, Stringified, StringifyOptions};
///
/// let out = stringify_params(&json!({"a": 1, "b": [1, 2]}), &StringifyOptions::default())?;
/// assert_eq!(out, Stringified::String("a=1&b=1&b=2".to_string()));
/// # Ok::<(), strkit::StrkitError>(())
/// ```
///
/// # Errors
///
/// - [`StrkitError::InvalidParams`] if `params` is not a JSON object
/// - [`StrkitError::InvalidSeparator`] if string output is requested and the
///   separator is empty or contains `=`
pub fn stringify_params(params: &Value, options: &StringifyOptions) -> Result<Stringified> {
    match options.return_type {
        ReturnType::String => stringify_params_as_string(params, options).map(Stringified::String),
        ReturnType::PairList => stringify_params_as_pairs(params, options).map(Stringified::Pairs),
    }
}

/// Serialize `params` to a `key=value` string, ignoring `options.return_type`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strkit::{stringify_params_as_string, ArrayFormat, StringifyOptions};
///
/// let options = StringifyOptions::default().with_array_format(ArrayFormat::Comma);
/// assert_eq!(stringify_params_as_string(&json!({"a": [1, 2]}), &options)?, "a=1%2C2");
/// # Ok::<(), strkit::StrkitError>(())
/// ```
pub fn stringify_params_as_string(params: &Value, options: &StringifyOptions) -> Result<String> {
    let map = as_object(params)?;
    validate_separator(&options.separator)?;

    let pairs = collect_pairs(map, options);
    let out = pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(&options.separator);

    trace!(pairs = pairs.len(), len = out.len(), "stringified params");
    Ok(out)
}

/// Serialize `params` to encoded `(key, value)` pairs, ignoring
/// `options.return_type`. The separator is not used and not validated.
pub fn stringify_params_as_pairs(
    params: &Value,
    options: &StringifyOptions,
) -> Result<Vec<(String, String)>> {
    let map = as_object(params)?;
    let pairs = collect_pairs(map, options);
    trace!(pairs = pairs.len(), "stringified params to pairs");
    Ok(pairs)
}

fn as_object(params: &Value) -> Result<&Map<String, Value>> {
    match params {
        Value::Object(map) => Ok(map),
        other => {
            let kind = json_kind(other);
            debug!(kind, "params rejected, expected an object");
            Err(StrkitError::InvalidParams(kind.to_string()))
        }
    }
}

fn validate_separator(separator: &str) -> Result<()> {
    if separator.is_empty() || separator.contains('=') {
        debug!(separator, "invalid pair separator");
        return Err(StrkitError::InvalidSeparator(separator.to_string()));
    }
    Ok(())
}

fn collect_pairs(map: &Map<String, Value>, options: &StringifyOptions) -> Vec<(String, String)> {
    let serialize = options.serialize_objects;
    let mut pairs = Vec::with_capacity(map.len());

    for (raw_key, value) in map {
        let key = encode_component(raw_key);

        let Value::Array(items) = value else {
            pairs.push((key, encode_component(&normalize_value(value, serialize))));
            continue;
        };

        match options.array_format {
            ArrayFormat::Exclude => {}
            ArrayFormat::Comma => {
                let joined = items
                    .iter()
                    .map(|item| normalize_value(item, serialize))
                    .collect::<Vec<_>>()
                    .join(",");
                pairs.push((key, encode_component(&joined)));
            }
            ArrayFormat::Bracket => {
                let bracketed = format!("{key}[]");
                for item in items {
                    let value = normalize_value(item, serialize);
                    pairs.push((bracketed.clone(), encode_component(&value)));
                }
            }
            ArrayFormat::None => {
                for item in items {
                    pairs.push((key.clone(), encode_component(&normalize_value(item, serialize))));
                }
            }
        }
    }

    pairs
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_string(params: Value, options: StringifyOptions) -> String {
        stringify_params_as_string(&params, &options).unwrap()
    }

    #[test]
    fn test_scalars_in_insertion_order() {
        let out = as_string(
            json!({"z": "last?", "a": true, "m": null, "n": 3.25}),
            StringifyOptions::default(),
        );
        assert_eq!(out, "z=last%3F&a=true&m=&n=3.25");
    }

    #[test]
    fn test_array_formats() {
        let params = json!({"a": 1, "b": [1, "x y"]});
        let base = StringifyOptions::default();

        assert_eq!(as_string(params.clone(), base.clone()), "a=1&b=1&b=x%20y");
        assert_eq!(
            as_string(params.clone(), base.clone().with_array_format(ArrayFormat::Comma)),
            "a=1&b=1%2Cx%20y"
        );
        assert_eq!(
            as_string(params.clone(), base.clone().with_array_format(ArrayFormat::Bracket)),
            "a=1&b[]=1&b[]=x%20y"
        );
        assert_eq!(
            as_string(params, base.with_array_format(ArrayFormat::Exclude)),
            "a=1"
        );
    }

    #[test]
    fn test_empty_array() {
        let params = json!({"a": [], "b": 2});
        assert_eq!(as_string(params.clone(), StringifyOptions::default()), "b=2");
        assert_eq!(
            as_string(params, StringifyOptions::default().with_array_format(ArrayFormat::Comma)),
            "a=&b=2"
        );
    }

    #[test]
    fn test_objects() {
        let params = json!({"filter": {"k": "v"}, "list": [{"id": 1}]});

        assert_eq!(as_string(params.clone(), StringifyOptions::default()), "filter=&list=");
        assert_eq!(
            as_string(params, StringifyOptions::default().with_serialize_objects(true)),
            "filter=%7B%22k%22%3A%22v%22%7D&list=%7B%22id%22%3A1%7D"
        );
    }

    #[test]
    fn test_keys_encoded() {
        let out = as_string(json!({"a b": 1, "c=d": 2}), StringifyOptions::default());
        assert_eq!(out, "a%20b=1&c%3Dd=2");
    }

    #[test]
    fn test_custom_separator() {
        let options = StringifyOptions::default().with_separator(";");
        let out = as_string(json!({"a": 1, "b": 2}), options);
        assert_eq!(out, "a=1;b=2");
    }

    #[test]
    fn test_invalid_params() {
        for (value, kind) in [
            (json!(null), "null"),
            (json!([1, 2]), "array"),
            (json!("a=1"), "string"),
            (json!(5), "number"),
        ] {
            let err = stringify_params(&value, &StringifyOptions::default()).unwrap_err();
            assert_eq!(err, StrkitError::InvalidParams(kind.to_string()));
        }
    }

    #[test]
    fn test_invalid_separator() {
        for separator in ["", "=", "&="] {
            let options = StringifyOptions::default().with_separator(separator);
            let err = stringify_params(&json!({}), &options).unwrap_err();
            assert_eq!(err, StrkitError::InvalidSeparator(separator.to_string()));
        }
    }

    #[test]
    fn test_pair_list_skips_separator_check() {
        let options = StringifyOptions::default()
            .with_separator("=")
            .with_return_type(ReturnType::PairList);
        let out = stringify_params(&json!({"a": [1, 2]}), &options).unwrap();
        assert_eq!(
            out,
            Stringified::Pairs(vec![
                ("a".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string()),
            ])
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(as_string(json!({}), StringifyOptions::default()), "");
    }
}
