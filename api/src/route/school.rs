use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::school::{
    register_location, register_school, show_location_list, show_school_list,
};

pub fn build_school_routers() -> Router<AppRegistry> {
    let school_routers = Router::new()
        .route("/", post(register_school))
        .route("/", get(show_school_list))
        .route("/:school_id/locations", post(register_location))
        .route("/:school_id/locations", get(show_location_list));

    Router::new().nest("/schools", school_routers)
}
