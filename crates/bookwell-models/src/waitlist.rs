//! Waitlist claim payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::validate_object_id;
use crate::schema::{BodySchema, FieldKind, FieldSpec};

/// Body of `POST /api/waitlist/{entry_id}/claim`.
///
/// The claim token comes from the notification a client received when a
/// slot opened up; `clientId` lets staff claim on a client's behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClaimWaitlistDto {
    #[validate(length(
        min = 32,
        max = 256,
        message = "claimToken must be between 32 and 256 characters"
    ))]
    pub claim_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(
        function = "validate_object_id",
        message = "clientId must be a mongodb id"
    ))]
    pub client_id: Option<String>,
}

impl BodySchema for ClaimWaitlistDto {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("claimToken", FieldKind::String),
        FieldSpec::optional("clientId", FieldKind::String),
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistClaimedResponse {
    pub message: String,
    pub entry_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}
