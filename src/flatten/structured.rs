//! Structured-mode flattening: walk the decoded mapping directly.
//!
//! KV v2 reads are unwrapped to their inner `data` object first. Each
//! top-level field becomes one `KEY=value` line in key order, quoted the
//! same way `.env` files quote values that contain special characters.
//! Nested lists and maps are written as compact JSON.

use std::fmt::Write;

use serde_json::Value;

use crate::vault::SecretData;

/// Flatten secret data into `.env`-style lines.
pub fn flatten(data: &SecretData) -> String {
    let mut out = String::new();
    for (key, value) in secret_fields(data) {
        let value = render_value(value);
        if needs_quoting(&value) {
            let escaped = value
                .replace('\\', "\\\\")
                .replace('"', "\\\"")
                .replace('\n', "\\n");
            let _ = writeln!(out, "{key}=\"{escaped}\"");
        } else {
            let _ = writeln!(out, "{key}={value}");
        }
    }
    out.trim_end_matches('\n').to_string()
}

/// The mapping holding the actual secret fields.
///
/// A KV v2 read nests them as `{"data": {...}, "metadata": {...}}`.
fn secret_fields(data: &SecretData) -> &SecretData {
    match (data.get("data"), data.contains_key("metadata")) {
        (Some(Value::Object(inner)), true) => inner,
        _ => data,
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        // Numbers, bools, lists and maps all use their compact JSON text.
        other => other.to_string(),
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value.contains(' ')
        || value.contains('#')
        || value.contains('"')
        || value.contains('\'')
        || value.contains('\n')
        || value.contains('$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> SecretData {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn flat_fields_in_key_order() {
        let out = flatten(&data(json!({"b": "2", "a": "1"})));
        assert_eq!(out, "a=1\nb=2");
    }

    #[test]
    fn unwraps_kv2_shape() {
        let out = flatten(&data(json!({
            "data": {"user": "admin"},
            "metadata": {"version": 4}
        })));
        assert_eq!(out, "user=admin");
    }

    #[test]
    fn data_key_without_metadata_is_a_regular_field() {
        let out = flatten(&data(json!({"data": "raw"})));
        assert_eq!(out, "data=raw");
    }

    #[test]
    fn scalars_and_nested_values() {
        let out = flatten(&data(json!({
            "port": 5432,
            "tls": false,
            "hosts": ["a", "b"],
            "nested": {"k": 1}
        })));
        let expected = r#"hosts="[\"a\",\"b\"]"
nested="{\"k\":1}"
port=5432
tls=false"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn null_becomes_empty_quoted_value() {
        assert_eq!(flatten(&data(json!({"opt": null}))), "opt=\"\"");
    }

    #[test]
    fn quotes_special_characters() {
        let out = flatten(&data(json!({"greeting": "hello world", "multi": "a\nb"})));
        assert_eq!(out, "greeting=\"hello world\"\nmulti=\"a\\nb\"");
    }

    #[test]
    fn empty_strings_and_maps_are_quoted() {
        let out = flatten(&data(json!({"e": "", "m": {"k": "v"}})));
        assert_eq!(out, r#"e=""
m="{\"k\":\"v\"}""#);
    }

    #[test]
    fn shell_sensitive_characters_are_quoted() {
        let out = flatten(&data(json!({"cost": "$5", "note": "a#b", "q": "it's", "plain": "x"})));
        assert_eq!(out, "cost=\"$5\"\nnote=\"a#b\"\nplain=x\nq=\"it's\"");
    }

    #[test]
    fn empty_mapping_yields_empty_text() {
        assert_eq!(flatten(&SecretData::new()), "");
    }
}
