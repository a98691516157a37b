use axum::{Router, routing::patch};

use crate::state::AppState;

use super::controller::update_pos_settings;

pub fn init_pos_settings_router() -> Router<AppState> {
    Router::new().route("/settings", patch(update_pos_settings))
}
