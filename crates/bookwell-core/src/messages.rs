//! User-facing message translation.
//!
//! Raw technical messages never reach clients directly. [`friendly_message`]
//! maps them to curated sentences, falling back to per-status wording and
//! only passing short, stack-free messages through verbatim.

use axum::http::StatusCode;

pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed. Please check your input.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";
pub const VALIDATION_ERROR: &str = "Validation Error";
pub const DUPLICATE_ENTRY_ERROR: &str = "Duplicate Entry";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
const SESSION_INVALID: &str = "Your session is invalid. Please log in again.";
const CSRF_REJECTED: &str =
    "Your form session has expired. Please refresh the page and try again.";
const RESOURCE_NOT_FOUND: &str = "The requested resource was not found.";
const SERVER_PROBLEM: &str = "Something went wrong on our end. Please try again later.";
const INVALID_IDENTIFIER: &str = "The provided identifier is invalid.";

/// Known technical phrases. Order matters for the substring pass.
const KNOWN_MESSAGES: &[(&str, &str)] = &[
    ("jwt expired", SESSION_EXPIRED),
    ("TokenExpiredError", SESSION_EXPIRED),
    ("jwt malformed", SESSION_INVALID),
    ("invalid signature", SESSION_INVALID),
    ("invalid token", SESSION_INVALID),
    ("No auth token", "Please log in to continue."),
    ("invalid csrf token", CSRF_REJECTED),
    ("csrf token mismatch", CSRF_REJECTED),
    ("Not Found", RESOURCE_NOT_FOUND),
    ("Internal server error", SERVER_PROBLEM),
    ("Cast to ObjectId failed", INVALID_IDENTIFIER),
    ("Invalid ObjectId", INVALID_IDENTIFIER),
];

/// Longest raw message (exclusive) that may be shown verbatim.
const MAX_PASSTHROUGH_CHARS: usize = 100;

/// Translates a raw message into something safe to show a user.
///
/// Lookup order: exact dictionary match, case-insensitive substring match
/// (first key wins), per-status sentence, verbatim pass-through for short
/// messages without an `Error:` marker, generic fallback.
pub fn friendly_message(raw: &str, status: StatusCode) -> String {
    if let Some((_, friendly)) = KNOWN_MESSAGES.iter().find(|(known, _)| *known == raw) {
        return (*friendly).to_string();
    }

    let lowered = raw.to_lowercase();
    if let Some((_, friendly)) = KNOWN_MESSAGES
        .iter()
        .find(|(known, _)| lowered.contains(&known.to_lowercase()))
    {
        return (*friendly).to_string();
    }

    if let Some(sentence) = status_message(status) {
        return sentence.to_string();
    }

    if raw.chars().count() < MAX_PASSTHROUGH_CHARS && !raw.contains("Error:") {
        return raw.to_string();
    }

    UNEXPECTED_ERROR_MESSAGE.to_string()
}

/// Canned sentence for the statuses clients commonly see.
pub fn status_message(status: StatusCode) -> Option<&'static str> {
    let sentence = match status.as_u16() {
        400 => "The request could not be processed. Please check your input and try again.",
        401 => "Please log in to continue.",
        403 => "You do not have permission to perform this action.",
        404 => RESOURCE_NOT_FOUND,
        409 => "This action conflicts with existing data. Please refresh and try again.",
        422 => "The provided data is invalid. Please review and try again.",
        429 => "Too many requests. Please slow down and try again shortly.",
        500 => SERVER_PROBLEM,
        503 => "The service is temporarily unavailable. Please try again later.",
        504 => "The server took too long to respond. Please try again.",
        _ => return None,
    };
    Some(sentence)
}

/// Error name for a status when the failure does not carry one.
pub fn error_name(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => INTERNAL_SERVER_ERROR,
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Error",
    }
}
