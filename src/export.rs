use std::fs;

use serde_json::json;

use crate::TagresError;
use crate::ast::{Field, File, Numeric, Value};
use crate::parser;

fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Constructable {
            identifier,
            arguments,
        } => json!({
            "constructor": identifier,
            "arguments": arguments.iter().map(value_to_json).collect::<Vec<_>>(),
        }),
        Value::Dictionary(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, val)| (k.clone(), value_to_json(val)))
                .collect(),
        ),
        Value::Array(items) => {
            json!(items.iter().map(value_to_json).collect::<Vec<_>>())
        }
        Value::Bool(b) => json!(b),
        Value::String(s) => json!(s),
        Value::Numeric(Numeric::Integer(i)) => json!(i),
        Value::Numeric(Numeric::Float(f)) => json!(f),
    }
}

/// Fields export as an array of `{"name", "value"}` entries so duplicate
/// names and source order both survive.
fn fields_to_json(fields: &[Field]) -> serde_json::Value {
    serde_json::Value::Array(
        fields
            .iter()
            .map(|f| json!({ "name": f.name, "value": value_to_json(&f.value) }))
            .collect(),
    )
}

/// Export a parsed document to JSON.
///
/// Tags export in document order; integers and floats keep their split
/// representation (`1` stays `1`, `1.0` stays `1.0`).
pub fn to_json(file: &File) -> Result<String, TagresError> {
    let tags = file
        .tags
        .iter()
        .map(|tag| {
            json!({
                "identifier": tag.identifier,
                "fields": fields_to_json(&tag.fields),
                "assignments": fields_to_json(&tag.assignments),
            })
        })
        .collect::<Vec<_>>();

    serde_json::to_string_pretty(&json!({ "tags": tags })).map_err(|e| {
        TagresError::InternalError {
            message: format!("Failed to serialize document: {}", e),
            hint: None,
            code: Some(500),
        }
    })
}

/// Export a resource file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns an error if the file doesn't exist or contains invalid syntax.
pub fn export_file(path: &str) -> Result<String, TagresError> {
    let input = fs::read_to_string(path)
        .map_err(|e| TagresError::file_error(format!("Failed to read file: {}", e), path.into()))?;

    let file = parser::parse(&input)?;
    to_json(&file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_export_preserves_tag_order_and_duplicates() {
        let file = parse("[b x=1 x=2]\n[a]\n[b]").expect("Failed to parse document");

        let output = to_json(&file).expect("Failed to export document");
        let v: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

        assert_eq!(v["tags"][0]["identifier"], "b");
        assert_eq!(v["tags"][1]["identifier"], "a");
        assert_eq!(v["tags"][2]["identifier"], "b");

        let fields = v["tags"][0]["fields"].as_array().expect("fields array");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["name"], "x");
        assert_eq!(fields[0]["value"], 1);
        assert_eq!(fields[1]["value"], 2);
    }

    #[test]
    fn test_export_value_shapes() {
        let input = r#"
[scene]
pos=Vector2(1, 2.5)
meta={"k":true}
names=["a"]
"#;

        let file = parse(input).expect("Failed to parse document");
        let output = to_json(&file).expect("Failed to export document");
        let v: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

        let assignments = v["tags"][0]["assignments"].as_array().expect("assignments");

        assert_eq!(assignments[0]["value"]["constructor"], "Vector2");
        assert_eq!(assignments[0]["value"]["arguments"][0], 1);
        assert_eq!(assignments[0]["value"]["arguments"][1], 2.5);
        assert_eq!(assignments[1]["value"]["k"], true);
        assert_eq!(assignments[2]["value"][0], "a");
    }

    #[test]
    fn test_integers_stay_integers() {
        let file = parse("[a x=1 y=1.0]").expect("Failed to parse document");
        let output = to_json(&file).expect("Failed to export document");

        let v: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");
        let fields = v["tags"][0]["fields"].as_array().expect("fields");

        assert!(fields[0]["value"].is_i64());
        assert!(fields[1]["value"].is_f64());
    }
}
