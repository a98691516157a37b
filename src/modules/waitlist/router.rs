use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::claim_waitlist_entry;

pub fn init_waitlist_router() -> Router<AppState> {
    Router::new().route("/{entry_id}/claim", post(claim_waitlist_entry))
}
