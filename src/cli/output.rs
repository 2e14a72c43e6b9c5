//! Printing command results as text or JSON.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::config::{OutputConfig, OutputFormat};

/// Render any serializable result according to the output settings.
pub fn render<T: Serialize>(value: &T, output: &OutputConfig) -> Result<String> {
    let json = serde_json::to_value(value)?;
    Ok(match output.format {
        OutputFormat::Json if output.pretty => serde_json::to_string_pretty(&json)?,
        OutputFormat::Json => serde_json::to_string(&json)?,
        OutputFormat::Text => render_text(&json),
    })
}

/// Flatten a JSON value into `dotted.key: value` lines, skipping nulls.
fn render_text(value: &Value) -> String {
    let mut lines = Vec::new();
    flatten("", value, &mut lines);
    lines.join("\n")
}

fn flatten(prefix: &str, value: &Value, lines: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, lines);
            }
        }
        Value::Array(items) => {
            let joined = items.iter().map(scalar).collect::<Vec<_>>().join(",");
            lines.push(format!("{prefix}: {joined}"));
        }
        scalar_value if prefix.is_empty() => lines.push(scalar(scalar_value)),
        scalar_value => lines.push(format!("{prefix}: {}", scalar(scalar_value))),
    }
}

/// Strings print bare, everything else as JSON.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text() -> OutputConfig {
        OutputConfig::default()
    }

    #[test]
    fn test_text_flattens_and_skips_null() {
        let value = json!({
            "pathname": "/abc/s6",
            "season": { "tab": "overview", "source": "path" },
            "person": null,
            "seasons": [1, 6],
        });
        assert_eq!(
            render(&value, &text()).unwrap(),
            "pathname: /abc/s6\nseason.tab: overview\nseason.source: path\nseasons: 1,6"
        );
    }

    #[test]
    fn test_bare_string() {
        assert_eq!(render(&"/abc/cast", &text()).unwrap(), "/abc/cast");
    }

    #[test]
    fn test_json() {
        let output = OutputConfig {
            format: OutputFormat::Json,
            pretty: false,
        };
        assert_eq!(render(&json!({ "url": "/abc" }), &output).unwrap(), r#"{"url":"/abc"}"#);
    }
}
