use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use bookwell_core::{Failure, MessageEntry, validation_violations};
use bookwell_models::{BodySchema, check_shape, is_object_id};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

/// JSON body that has been shape-checked, deserialized and validated before
/// the handler sees it. Every rejection is a 400 [`Failure`].
///
/// Missing fields, wrong JSON types and `validator` constraints are collected
/// into a single validation failure listing every offending field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + BodySchema,
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_failure)?;

        let Value::Object(mut body) = body else {
            return Err(Failure::bad_request("Invalid request body"));
        };

        let mut violations: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, message) in check_shape(&mut body, T::FIELDS) {
            violations.entry(field).or_default().push(message);
        }

        let value = serde_json::from_value::<T>(Value::Object(body))
            .map_err(|err| deserialize_failure(&err.to_string()))?;

        if let Err(errors) = value.validate() {
            for (field, messages) in validation_violations(&errors) {
                // Shape problems win over constraints on the same field.
                violations.entry(field).or_insert(messages);
            }
        }

        if !violations.is_empty() {
            return Err(Failure::from_violations(violations.into_iter().collect()));
        }

        Ok(ValidatedJson(value))
    }
}

fn rejection_failure(rejection: JsonRejection) -> Failure {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return Failure::bad_request("Missing 'Content-Type: application/json' header");
    }

    Failure::bad_request("Invalid request body")
}

/// Serde errors left after shape checking, for fields a schema does not list.
fn deserialize_failure(error_msg: &str) -> Failure {
    if let Some(field) = missing_field(error_msg) {
        return Failure::validation(vec![MessageEntry::Violation {
            constraints: vec![format!("{} is required", field)],
            field,
        }]);
    }

    if error_msg.contains("invalid type") {
        return Failure::bad_request("Invalid field type in request");
    }

    Failure::bad_request("Invalid request body")
}

/// Single path parameter that must be a 24-character hex object id.
///
/// Runs before body extraction, so a bad identifier is reported even when
/// the body is also invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdPath(pub String);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Failure::bad_request(rejection.body_text()))?;

        if !is_object_id(&id) {
            return Err(Failure::bad_request(format!(
                "Cast to ObjectId failed for value \"{}\" (type string) at path \"_id\"",
                id
            )));
        }

        Ok(ObjectIdPath(id))
    }
}

fn missing_field(error_msg: &str) -> Option<String> {
    error_msg
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
        .map(str::to_string)
}
