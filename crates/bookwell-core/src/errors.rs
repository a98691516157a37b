//! Failure taxonomy for the request pipeline.
//!
//! Every failure raised by a handler, guard, extractor or middleware is
//! classified once, where it is raised, into one of the [`Failure`] variants.
//! The error filter then matches on the variant instead of probing the shape
//! of the error at render time.
//!
//! # Example
//!
//! ```ignore
//! use bookwell_core::errors::Failure;
//!
//! async fn handler() -> Result<Json<Appointment>, Failure> {
//!     let appointment = load().await?; // any error becomes Failure::Generic
//!     if appointment.cancelled {
//!         return Err(Failure::conflict("Appointment was cancelled"));
//!     }
//!     Ok(Json(appointment))
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use validator::ValidationErrors;

/// Name that marks a generic failure as a validation problem.
pub const VALIDATION_ERROR_NAME: &str = "ValidationError";

/// A failure surfaced anywhere in the request pipeline.
#[derive(Debug)]
pub enum Failure {
    /// Typed HTTP failure with an explicit status and body.
    Http(HttpFailure),
    /// Storage-layer unique index violation.
    DuplicateKey(DuplicateKeyFailure),
    /// Storage-layer schema validation with a per-field error map.
    SchemaValidation(SchemaValidationFailure),
    /// Any other storage-layer error.
    Storage(StorageFailure),
    /// Runtime error without HTTP semantics.
    Generic(GenericFailure),
    /// A value that is not an error at all, e.g. a panic payload.
    Unknown(UnknownFailure),
}

#[derive(Debug, Clone)]
pub struct HttpFailure {
    pub status: StatusCode,
    pub body: HttpBody,
}

#[derive(Debug, Clone)]
pub enum HttpBody {
    Text(String),
    Structured(StructuredBody),
}

/// Structured HTTP body, mirroring `{ message, error, details }`.
#[derive(Debug, Clone, Default)]
pub struct StructuredBody {
    pub message: Option<BodyMessage>,
    pub error: Option<String>,
    pub details: Option<Value>,
}

#[derive(Debug, Clone)]
pub enum BodyMessage {
    Text(String),
    /// One entry per violated field or constraint.
    List(Vec<MessageEntry>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageEntry {
    Text(String),
    Violation {
        field: String,
        constraints: Vec<String>,
    },
    Other(Value),
}

#[derive(Debug, Clone, Default)]
pub struct DuplicateKeyFailure {
    pub key_pattern: Option<Map<String, Value>>,
    pub key_value: Option<Map<String, Value>>,
}

impl DuplicateKeyFailure {
    /// First field of the key pattern in index order, or `"field"` when the
    /// pattern is unknown. Relies on `serde_json`'s `preserve_order`.
    pub fn field(&self) -> &str {
        self.key_pattern
            .as_ref()
            .and_then(|pattern| pattern.keys().next())
            .map(String::as_str)
            .unwrap_or("field")
    }

    pub fn value(&self) -> Option<&Value> {
        self.key_value
            .as_ref()
            .and_then(|values| values.get(self.field()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemaValidationFailure {
    /// `(field, message)` pairs in the order the storage layer reported them.
    pub errors: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct StorageFailure {
    pub name: String,
    pub message: String,
}

#[derive(Debug)]
pub struct GenericFailure {
    pub name: Option<String>,
    pub source: anyhow::Error,
}

impl GenericFailure {
    pub fn is_validation(&self) -> bool {
        self.name.as_deref() == Some(VALIDATION_ERROR_NAME)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnknownFailure {
    /// Best-effort description of the payload, for logs only.
    pub description: Option<String>,
}

impl Failure {
    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Http(HttpFailure {
            status,
            body: HttpBody::Text(message.into()),
        })
    }

    pub fn http_structured(status: StatusCode, body: StructuredBody) -> Self {
        Self::Http(HttpFailure {
            status,
            body: HttpBody::Structured(body),
        })
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::http(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::http(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::http(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::http(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::http(StatusCode::CONFLICT, message)
    }

    /// Multi-field validation failure (400) carrying one entry per problem.
    pub fn validation(entries: Vec<MessageEntry>) -> Self {
        Self::http_structured(
            StatusCode::BAD_REQUEST,
            StructuredBody {
                message: Some(BodyMessage::List(entries)),
                error: None,
                details: None,
            },
        )
    }

    /// Converts `validator` output into a validation failure.
    ///
    /// Fields are reported in camelCase, sorted by name, each with every
    /// constraint message that failed for it.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        Self::from_violations(validation_violations(errors))
    }

    /// Validation failure from `(field, constraint messages)` pairs, sorted
    /// by field name.
    pub fn from_violations(mut violations: Vec<(String, Vec<String>)>) -> Self {
        violations.sort_by(|a, b| a.0.cmp(&b.0));

        Self::validation(
            violations
                .into_iter()
                .map(|(field, constraints)| MessageEntry::Violation { field, constraints })
                .collect(),
        )
    }

    /// Duplicate key violation built from the storage layer's `keyPattern`
    /// and `keyValue` documents. Non-object values are ignored.
    pub fn duplicate_key(key_pattern: Option<Value>, key_value: Option<Value>) -> Self {
        let as_map = |value: Option<Value>| match value {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        };
        Self::DuplicateKey(DuplicateKeyFailure {
            key_pattern: as_map(key_pattern),
            key_value: as_map(key_value),
        })
    }

    pub fn schema_validation<I, F, M>(errors: I) -> Self
    where
        I: IntoIterator<Item = (F, M)>,
        F: Into<String>,
        M: Into<String>,
    {
        Self::SchemaValidation(SchemaValidationFailure {
            errors: errors
                .into_iter()
                .map(|(field, message)| (field.into(), message.into()))
                .collect(),
        })
    }

    pub fn storage(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage(StorageFailure {
            name: name.into(),
            message: message.into(),
        })
    }

    pub fn generic<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Generic(GenericFailure {
            name: None,
            source: err.into(),
        })
    }

    /// Generic failure with an explicit error name, e.g. `"ValidationError"`.
    pub fn named<E>(name: impl Into<String>, err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Generic(GenericFailure {
            name: Some(name.into()),
            source: err.into(),
        })
    }

    pub fn unknown(description: Option<String>) -> Self {
        Self::Unknown(UnknownFailure { description })
    }

    /// HTTP status for this failure. First match wins:
    /// explicit status, duplicate key, storage error, validation, 500.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Http(failure) => failure.status,
            Self::DuplicateKey(_) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::BAD_REQUEST,
            Self::SchemaValidation(_) => StatusCode::BAD_REQUEST,
            Self::Generic(failure) if failure.is_validation() => StatusCode::BAD_REQUEST,
            Self::Generic(_) | Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Diagnostic trace, `None` for values that are not errors.
    pub fn stack(&self) -> Option<String> {
        match self {
            Self::Unknown(_) => None,
            Self::Generic(failure) => Some(format!("{:?}", failure.source)),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(failure) => match &failure.body {
                HttpBody::Text(message) => {
                    write!(f, "HttpFailure({}): {}", failure.status.as_u16(), message)
                }
                HttpBody::Structured(body) => match &body.message {
                    Some(BodyMessage::Text(message)) => {
                        write!(f, "HttpFailure({}): {}", failure.status.as_u16(), message)
                    }
                    Some(BodyMessage::List(entries)) => write!(
                        f,
                        "HttpFailure({}): {} validation problem(s)",
                        failure.status.as_u16(),
                        entries.len()
                    ),
                    None => write!(f, "HttpFailure({})", failure.status.as_u16()),
                },
            },
            Self::DuplicateKey(failure) => {
                write!(f, "DuplicateKeyFailure: duplicate value for {}", failure.field())
            }
            Self::SchemaValidation(failure) => write!(
                f,
                "SchemaValidationFailure: {} invalid field(s)",
                failure.errors.len()
            ),
            Self::Storage(failure) => write!(f, "{}: {}", failure.name, failure.message),
            Self::Generic(failure) => match &failure.name {
                Some(name) => write!(f, "{}: {}", name, failure.source),
                None => write!(f, "{}", failure.source),
            },
            Self::Unknown(failure) => write!(
                f,
                "UnknownFailure: {}",
                failure.description.as_deref().unwrap_or("opaque value")
            ),
        }
    }
}

/// Placeholder response carrying the failure in its extensions.
///
/// The error filter middleware removes the extension and renders the
/// normalized body; without the filter the client sees only the status.
impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let mut response = self.status().into_response();
        response.extensions_mut().insert(Arc::new(self));
        response
    }
}

impl<E> From<E> for Failure
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Failure::generic(err)
    }
}

/// `claim_token` -> `claimToken`. Already camelCased input is unchanged.
/// Flattens `validator` output into `(camelCase field, messages)` pairs.
/// Constraints without a message fall back to `"<field> is invalid"`.
pub fn validation_violations(errors: &ValidationErrors) -> Vec<(String, Vec<String>)> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let field = to_camel_case(&field.to_string());
            let constraints = field_errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            (field, constraints)
        })
        .collect()
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
