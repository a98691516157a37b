use axum::Json;
use bookwell_core::Failure;
use bookwell_models::{ClaimWaitlistDto, WaitlistClaimedResponse};
use tracing::info;

use crate::validator::{ObjectIdPath, ValidatedJson};

/// Claims an open waitlist slot. Public: the claim token is the credential.
pub async fn claim_waitlist_entry(
    ObjectIdPath(entry_id): ObjectIdPath,
    ValidatedJson(dto): ValidatedJson<ClaimWaitlistDto>,
) -> Result<Json<WaitlistClaimedResponse>, Failure> {
    info!(entry_id = %entry_id, on_behalf = dto.client_id.is_some(), "Waitlist slot claimed");

    Ok(Json(WaitlistClaimedResponse {
        message: "Waitlist slot claimed".to_string(),
        entry_id,
        client_id: dto.client_id,
    }))
}
