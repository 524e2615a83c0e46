use super::{
    admin::build_admin_routers, auth::build_auth_routers, booking::build_booking_routers,
    health::build_health_check_routers, hostel::build_hostel_routers,
    school::build_school_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_school_routers())
        .merge(build_hostel_routers())
        .merge(build_booking_routers())
        .merge(build_admin_routers());
    Router::new().nest("/api/v1", router)
}
