use axum::Json;
use bookwell_core::Failure;
use bookwell_models::{RoleUpdatedResponse, UpdateRoleDto};
use tracing::info;

use crate::middleware::role::RequireElevated;
use crate::validator::{ObjectIdPath, ValidatedJson};

/// Replaces a role's name and available scopes.
///
/// Extractor order matters: the guard rejects unprivileged callers before
/// the identifier or the body is looked at.
pub async fn update_role(
    RequireElevated(principal): RequireElevated,
    ObjectIdPath(role_id): ObjectIdPath,
    ValidatedJson(dto): ValidatedJson<UpdateRoleDto>,
) -> Result<Json<RoleUpdatedResponse>, Failure> {
    info!(
        role_id = %role_id,
        updated_by = %principal.user_id,
        scopes = dto.available_scopes.len(),
        "Role updated"
    );

    Ok(Json(RoleUpdatedResponse {
        id: role_id,
        name: dto.name,
        available_scopes: dto.available_scopes,
        updated_by: principal.user_id,
    }))
}
