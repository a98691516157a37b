//! Field-level shape checks run on the raw JSON body.
//!
//! Typed deserialization stops at the first bad field. Checking presence and
//! JSON type against a declared field list first lets the API report every
//! shape problem in one response, alongside the `validator` constraints.

use serde_json::{Map, Value};

/// JSON type a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Array whose elements are all strings.
    StringList,
    Number,
    Boolean,
    /// Nested object, contents not checked.
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire (camelCase) name.
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Declared fields of a request payload.
pub trait BodySchema {
    const FIELDS: &'static [FieldSpec];
}

/// Checks every declared field of `body` and returns one `(field, message)`
/// pair per problem, in declaration order.
///
/// Offending values are replaced in place with a well-typed placeholder
/// (optional fields are removed), so the body can still be deserialized and
/// run through the remaining constraints. Callers should drop constraint
/// errors for fields already reported here.
pub fn check_shape(body: &mut Map<String, Value>, fields: &[FieldSpec]) -> Vec<(String, String)> {
    let mut problems = Vec::new();

    for field in fields {
        let message = match body.get(field.name) {
            None | Some(Value::Null) if field.required => {
                Some(format!("{} is required", field.name))
            }
            None | Some(Value::Null) => {
                body.remove(field.name);
                continue;
            }
            Some(value) => type_problem(field, value),
        };
        let Some(message) = message else {
            continue;
        };

        if field.required {
            body.insert(field.name.to_string(), placeholder(field.kind));
        } else {
            body.remove(field.name);
        }
        problems.push((field.name.to_string(), message));
    }

    problems
}

fn type_problem(field: &FieldSpec, value: &Value) -> Option<String> {
    let name = field.name;
    match field.kind {
        FieldKind::String if !value.is_string() => Some(format!("{} must be a string", name)),
        FieldKind::StringList => match value.as_array() {
            None => Some(format!("{} must be an array", name)),
            Some(items) if !items.iter().all(Value::is_string) => {
                Some(format!("each value in {} must be a string", name))
            }
            Some(_) => None,
        },
        FieldKind::Number if !value.is_number() => Some(format!(
            "{} must be a number conforming to the specified constraints",
            name
        )),
        FieldKind::Boolean if !value.is_boolean() => {
            Some(format!("{} must be a boolean value", name))
        }
        FieldKind::Object if !value.is_object() => Some(format!("{} must be an object", name)),
        _ => None,
    }
}

fn placeholder(kind: FieldKind) -> Value {
    match kind {
        FieldKind::String => Value::String(String::new()),
        FieldKind::StringList => Value::Array(Vec::new()),
        FieldKind::Number => Value::from(0),
        FieldKind::Boolean => Value::Bool(false),
        FieldKind::Object => Value::Object(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("availableScopes", FieldKind::StringList),
        FieldSpec::optional("defaultTaxRate", FieldKind::Number),
        FieldSpec::optional("fiscalization", FieldKind::Object),
    ];

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_well_formed_body_untouched() {
        let mut body = object(json!({"name": "Front desk", "availableScopes": ["a"]}));
        let before = body.clone();
        assert!(check_shape(&mut body, FIELDS).is_empty());
        assert_eq!(body, before);
    }

    #[test]
    fn test_every_missing_field_reported() {
        let mut body = Map::new();
        assert_eq!(
            check_shape(&mut body, FIELDS),
            vec![
                ("name".to_string(), "name is required".to_string()),
                (
                    "availableScopes".to_string(),
                    "availableScopes is required".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_type_errors_reported_and_replaced() {
        let mut body = object(json!({
            "name": 42,
            "availableScopes": ["ok", 7],
            "defaultTaxRate": "high",
        }));
        let problems = check_shape(&mut body, FIELDS);

        assert_eq!(
            problems,
            vec![
                ("name".to_string(), "name must be a string".to_string()),
                (
                    "availableScopes".to_string(),
                    "each value in availableScopes must be a string".to_string()
                ),
                (
                    "defaultTaxRate".to_string(),
                    "defaultTaxRate must be a number conforming to the specified constraints"
                        .to_string()
                ),
            ]
        );
        assert_eq!(body.get("name"), Some(&json!("")));
        assert_eq!(body.get("availableScopes"), Some(&json!([])));
        assert!(body.get("defaultTaxRate").is_none());
    }

    #[test]
    fn test_optional_null_treated_as_absent() {
        let mut body = object(json!({
            "name": "x",
            "availableScopes": [],
            "fiscalization": null,
        }));
        assert!(check_shape(&mut body, FIELDS).is_empty());
        assert!(!body.contains_key("fiscalization"));
    }

    #[test]
    fn test_object_kind() {
        let mut body = object(json!({
            "name": "x",
            "availableScopes": [],
            "fiscalization": "on",
        }));
        assert_eq!(
            check_shape(&mut body, FIELDS),
            vec![(
                "fiscalization".to_string(),
                "fiscalization must be an object".to_string()
            )]
        );
    }
}
