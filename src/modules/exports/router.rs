use axum::{Router, routing::get};

use crate::modules::exports::controller::{get_export, save_export};
use crate::state::AppState;

pub fn init_exports_router() -> Router<AppState> {
    Router::new().route("/{format}", get(get_export).post(save_export))
}
