use axum::{
    Router,
    routing::{post, put},
};

use crate::modules::students::controller::{create_student, delete_student, update_student};
use crate::state::AppState;

pub fn init_group_students_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student))
        .route("/{username}", put(update_student).delete(delete_student))
}
