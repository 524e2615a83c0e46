use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::hostel::{
    delete_hostel, register_hostel, show_agent_hostel_list, show_hostel, show_hostel_list,
    update_hostel,
};

pub fn build_hostel_routers() -> Router<AppRegistry> {
    let hostel_routers = Router::new()
        .route("/", post(register_hostel))
        .route("/", get(show_hostel_list))
        .route("/:hostel_id", get(show_hostel))
        .route("/:hostel_id", put(update_hostel))
        .route("/:hostel_id", delete(delete_hostel));

    Router::new()
        .nest("/hostels", hostel_routers)
        .route("/agent/hostels", get(show_agent_hostel_list))
}
