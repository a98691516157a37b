use axum::{Router, routing::patch};

use crate::state::AppState;

use super::controller::update_role;

pub fn init_roles_router() -> Router<AppState> {
    Router::new().route("/{role_id}", patch(update_role))
}
