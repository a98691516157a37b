//! Error normalization.
//!
//! [`ErrorFilter`] turns any [`Failure`] into the public [`ErrorResponse`]
//! contract and logs it once. It is pure apart from logging and the clock,
//! so the HTTP middleware only has to collect the [`RequestContext`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::errors::{BodyMessage, Failure, HttpBody, MessageEntry};
use crate::messages::{
    DUPLICATE_ENTRY_ERROR, INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE,
    VALIDATION_ERROR, VALIDATION_FAILED_MESSAGE, error_name, friendly_message,
};
use crate::response::{ErrorResponse, FailureLogContext, RequestContext};

/// Error name, message and optional details resolved for a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBody {
    pub error: String,
    pub message: String,
    pub details: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorFilter {
    expose_stack: bool,
}

impl ErrorFilter {
    /// `expose_stack` should be false in production-like environments.
    pub fn new(expose_stack: bool) -> Self {
        Self { expose_stack }
    }

    pub fn exposes_stack(&self) -> bool {
        self.expose_stack
    }

    /// Builds the normalized body and logs the failure.
    pub fn normalize(&self, failure: &Failure, context: &RequestContext) -> ErrorResponse {
        let status = failure.status();
        let body = resolve_body(failure, status);

        log_failure(failure, &FailureLogContext::new(context, status.as_u16()));

        ErrorResponse {
            success: false,
            error: body.error,
            message: body.message,
            status_code: status.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: context.path.clone(),
            method: context.method.clone(),
            request_id: context.request_id.clone(),
            details: body.details,
            stack: if self.expose_stack {
                failure.stack()
            } else {
                None
            },
        }
    }

    pub fn render(&self, failure: &Failure, context: &RequestContext) -> Response {
        let status = failure.status();
        (status, Json(self.normalize(failure, context))).into_response()
    }
}

/// Resolves the error name, message and details. First match wins.
pub fn resolve_body(failure: &Failure, status: StatusCode) -> ResolvedBody {
    match failure {
        Failure::Http(http) => match &http.body {
            HttpBody::Text(message) => ResolvedBody {
                error: error_name(status).to_string(),
                message: friendly_message(message, status),
                details: None,
            },
            HttpBody::Structured(body) => match &body.message {
                Some(BodyMessage::List(entries)) => ResolvedBody {
                    error: body
                        .error
                        .clone()
                        .unwrap_or_else(|| VALIDATION_ERROR.to_string()),
                    message: VALIDATION_FAILED_MESSAGE.to_string(),
                    details: Some(Value::Array(entries.iter().map(entry_detail).collect())),
                },
                message => {
                    let raw = match message {
                        Some(BodyMessage::Text(text)) => text.as_str(),
                        _ => error_name(status),
                    };
                    ResolvedBody {
                        error: body
                            .error
                            .clone()
                            .unwrap_or_else(|| error_name(status).to_string()),
                        message: friendly_message(raw, status),
                        details: body.details.clone(),
                    }
                }
            },
        },
        Failure::DuplicateKey(duplicate) => {
            let field = duplicate.field();
            let mut details = json!({ "field": field });
            if let Some(value) = duplicate.value() {
                details["value"] = value.clone();
            }
            ResolvedBody {
                error: DUPLICATE_ENTRY_ERROR.to_string(),
                message: format!("A record with this {} already exists.", field),
                details: Some(details),
            }
        }
        Failure::SchemaValidation(schema) => ResolvedBody {
            error: VALIDATION_ERROR.to_string(),
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            details: Some(Value::Array(
                schema
                    .errors
                    .iter()
                    .map(|(field, message)| json!({ "field": field, "message": message }))
                    .collect(),
            )),
        },
        Failure::Storage(storage) => ResolvedBody {
            error: storage.name.clone(),
            message: friendly_message(&storage.message, status),
            details: None,
        },
        Failure::Generic(generic) => ResolvedBody {
            error: generic
                .name
                .clone()
                .unwrap_or_else(|| error_name(status).to_string()),
            message: friendly_message(&generic.source.to_string(), status),
            details: None,
        },
        Failure::Unknown(_) => ResolvedBody {
            error: INTERNAL_SERVER_ERROR.to_string(),
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            details: None,
        },
    }
}

fn entry_detail(entry: &MessageEntry) -> Value {
    match entry {
        MessageEntry::Text(message) => json!({ "message": message }),
        MessageEntry::Violation { field, constraints } => {
            json!({ "field": field, "errors": constraints })
        }
        MessageEntry::Other(value) => value.clone(),
    }
}

fn log_failure(failure: &Failure, context: &FailureLogContext) {
    let request_id = context.request_id.as_deref().unwrap_or("-");
    let user_agent = context.user_agent.as_deref().unwrap_or("-");

    if context.status >= 500 {
        let stack = failure.stack();
        error!(
            request_id = %request_id,
            method = %context.method,
            url = %context.url,
            user_id = %context.user_id,
            status = context.status,
            user_agent = %user_agent,
            stack = stack.as_deref().unwrap_or("-"),
            "{}",
            failure
        );
    } else {
        warn!(
            request_id = %request_id,
            method = %context.method,
            url = %context.url,
            user_id = %context.user_id,
            status = context.status,
            user_agent = %user_agent,
            "{}",
            failure
        );
    }
}
