//! Role update payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{BodySchema, FieldKind, FieldSpec};

/// Body of `PATCH /api/roles/{role_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleDto {
    /// Display name of the role. Required and must be non-empty: an empty
    /// string is rejected rather than clearing the name.
    #[validate(length(min = 1, message = "name should not be empty"))]
    pub name: String,
    /// Scopes holders of this role may be granted, e.g. `appointments:write`.
    #[validate(length(min = 1, message = "availableScopes should not be empty"))]
    pub available_scopes: Vec<String>,
}

impl BodySchema for UpdateRoleDto {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("availableScopes", FieldKind::StringList),
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdatedResponse {
    pub id: String,
    pub name: String,
    pub available_scopes: Vec<String>,
    pub updated_by: String,
}
