use axum::{
    Router,
    routing::{post, put},
};

use crate::modules::groups::controller::{create_group, delete_group, get_groups, rename_group};
use crate::state::AppState;

pub fn init_groups_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_group).get(get_groups))
        .route("/{name}", put(rename_group).delete(delete_group))
}
