use std::io::Write;

use indexmap::IndexMap;

use super::*;
use crate::Value;
use crate::ast::Numeric;

const SCENE: &str = r#"
[scene name="main" fps=60]
debug=true
gravity=9.8
layers=[1, 2, 3]
labels=["a", "b"]
meta={"author":"someone", "version":2}
[node.shape radius=4]
[node.shape radius=5]
"#;

#[test]
fn test_typed_getters() {
    let resource = Resource::from_str(SCENE).expect("Failed to parse resource");

    let name: String = resource.get("scene.name").expect("name");
    assert_eq!(name, "main");

    let fps: i64 = resource.get("scene.fps").expect("fps");
    assert_eq!(fps, 60);

    let fps: u16 = resource.get("scene.fps").expect("fps as u16");
    assert_eq!(fps, 60);

    // integers widen to floats on request
    let fps: f64 = resource.get("scene.fps").expect("fps as f64");
    assert_eq!(fps, 60.0);

    let debug: bool = resource.get("scene.debug").expect("debug");
    assert!(debug);

    let gravity: f64 = resource.get("scene.gravity").expect("gravity");
    assert_eq!(gravity, 9.8);

    let layers: Vec<i64> = resource.get("scene.layers").expect("layers");
    assert_eq!(layers, vec![1, 2, 3]);

    let labels: Vec<String> = resource.get("scene.labels").expect("labels");
    assert_eq!(labels, vec!["a".to_string(), "b".to_string()]);

    let meta: IndexMap<String, Value> = resource.get("scene.meta").expect("meta");
    assert_eq!(meta["author"], Value::String("someone".into()));
    assert_eq!(meta["version"], Value::Numeric(Numeric::Integer(2)));
}

#[test]
fn test_dotted_tag_identifiers_resolve() {
    let resource = Resource::from_str(SCENE).expect("Failed to parse resource");

    // the split point is found right-to-left; the repeated tag resolves to
    // its last occurrence
    let radius: i64 = resource.get("node.shape.radius").expect("radius");
    assert_eq!(radius, 5);
}

#[test]
fn test_get_optional_and_get_or() {
    let resource = Resource::from_str(SCENE).expect("Failed to parse resource");

    let missing: Option<i64> = resource.get_optional("scene.nothing").expect("optional");
    assert_eq!(missing, None);

    let present: Option<i64> = resource.get_optional("scene.fps").expect("optional");
    assert_eq!(present, Some(60));

    assert_eq!(resource.get_or("scene.fps", 30i64), 60);
    assert_eq!(resource.get_or("scene.nothing", 30i64), 30);

    assert!(resource.has("scene.debug"));
    assert!(!resource.has("scene.nothing"));
}

#[test]
fn test_tag_navigation() {
    let resource = Resource::from_str(SCENE).expect("Failed to parse resource");

    assert!(resource.has_tag("scene"));
    assert!(!resource.has_tag("missing"));
    assert_eq!(
        resource.tag_identifiers(),
        vec!["scene", "node.shape", "node.shape"]
    );

    let tag = resource.tag("scene").expect("scene tag");
    assert_eq!(tag.fields.len(), 2);
    assert_eq!(tag.assignments.len(), 5);
}

#[test]
fn test_conversion_error_reports_the_assignment_line() {
    let resource = Resource::from_str(SCENE).expect("Failed to parse resource");

    let result: Result<String, _> = resource.get("scene.debug");
    match result {
        Err(TagresError::TypeError { message, line, .. }) => {
            assert!(message.contains("Expected string"));
            assert_eq!(line, 3);
        }
        other => panic!("Expected TypeError, got {:?}", other),
    }
}

#[test]
fn test_get_optional_conversion_error_reports_the_assignment_line() {
    let resource = Resource::from_str(SCENE).expect("Failed to parse resource");

    // a present-but-mistyped field reports the same position as get()
    let result: Result<Option<String>, _> = resource.get_optional("scene.debug");
    match result {
        Err(TagresError::TypeError { line, .. }) => assert_eq!(line, 3),
        other => panic!("Expected TypeError, got {:?}", other),
    }
}

#[test]
fn test_integer_getter_rejects_floats() {
    let resource = Resource::from_str(SCENE).expect("Failed to parse resource");

    let result: Result<i64, _> = resource.get("scene.gravity");
    assert!(matches!(result, Err(TagresError::TypeError { .. })));
}

#[test]
fn test_range_checked_conversions() {
    let resource = Resource::from_str("[a v=-1 w=70000]").expect("Failed to parse resource");

    assert!(matches!(
        resource.get::<u16>("a.v"),
        Err(TagresError::TypeError { code: Some(403), .. })
    ));
    assert!(matches!(
        resource.get::<u16>("a.w"),
        Err(TagresError::TypeError { code: Some(403), .. })
    ));
    assert_eq!(resource.get::<i32>("a.w").expect("w as i32"), 70000);
}

#[test]
fn test_from_file() {
    let mut tmp = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(tmp, "{}", SCENE).expect("Failed to write temp file");

    let resource = Resource::from_file(tmp.path()).expect("Failed to load resource");
    assert_eq!(resource.tags().len(), 3);
}

#[test]
fn test_from_file_missing_path() {
    let result = Resource::from_file("/definitely/not/here.tres");
    assert!(matches!(result, Err(TagresError::FileError { .. })));
}

#[test]
fn test_parse_errors_propagate() {
    assert!(matches!(
        Resource::from_str("[broken"),
        Err(TagresError::SyntaxError { .. })
    ));
}
