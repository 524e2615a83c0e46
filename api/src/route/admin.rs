use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::admin::{show_pending_agents, verify_agent};

pub fn build_admin_routers() -> Router<AppRegistry> {
    let admin_routers = Router::new()
        .route("/pending-agents", get(show_pending_agents))
        .route("/verify-agent/:agent_id", post(verify_agent));

    Router::new().nest("/admin", admin_routers)
}
