use std::env;

/// Correlation identifier handling.
///
/// By default every request gets a freshly generated identifier, even when
/// the client sent one. Setting `TRUST_INCOMING_REQUEST_ID=true` reuses a
/// well-formed client value instead (useful behind a tracing proxy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RequestIdConfig {
    pub trust_incoming: bool,
}

impl RequestIdConfig {
    pub fn from_env() -> Self {
        Self {
            trust_incoming: env::var("TRUST_INCOMING_REQUEST_ID")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
