use axum::{Router, routing::get};

use crate::modules::roster::controller::{clear_roster, get_roster, get_selection, set_selection};
use crate::state::AppState;

pub fn init_roster_router() -> Router<AppState> {
    Router::new().route("/", get(get_roster).delete(clear_roster))
}

pub fn init_selection_router() -> Router<AppState> {
    Router::new().route("/", get(get_selection).put(set_selection))
}
