use crate::json;
use anyhow::{Context, Result};
use toml::{Table, Value};

/// Pretty JSON for the whole tree, two-space indented.
pub fn render_tree(table: &Table) -> Result<String> {
    json::to_indented_string(&table_to_json(table)).context("failed to serialize config")
}

/// Shell-friendly rendering of a lookup result. A miss renders as the empty
/// string, containers as single-line JSON, scalars as bare text.
pub fn render_lookup(value: Option<&Value>) -> Result<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    let rendered = match value {
        Value::Table(_) | Value::Array(_) => json::to_spaced_string(&toml_value_to_json(value))
            .context("failed to serialize value")?,
        Value::Boolean(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Datetime(dt) => dt.to_string(),
    };
    Ok(rendered)
}

pub fn table_to_json(table: &Table) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = table
        .iter()
        .map(|(k, v)| (k.clone(), toml_value_to_json(v)))
        .collect();
    serde_json::Value::Object(map)
}

pub fn toml_value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Integer(i) => serde_json::json!(*i),
        Value::Float(f) => serde_json::json!(*f),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(toml_value_to_json).collect()),
        Value::Table(table) => table_to_json(table),
    }
}

// Shortest round-trip digits. Decimal exponents below -4 or from 16 up use
// `1e+16` / `1.5e-05` notation, integral values keep their `.0`, and the
// special values use lowercase names.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return (if f > 0.0 { "inf" } else { "-inf" }).to_string();
    }

    let scientific = format!("{f:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    } else if f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}
