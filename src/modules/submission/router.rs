use axum::{Router, routing::post};

use crate::modules::submission::controller::submit_roster;
use crate::state::AppState;

pub fn init_submission_router() -> Router<AppState> {
    Router::new().route("/", post(submit_roster))
}
