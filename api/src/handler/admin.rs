use crate::{
    extractor::AuthorizedUser,
    model::user::{UserResponse, UsersResponse},
};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::{id::UserId, permission::authorize, role::Role};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_pending_agents(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    authorize(&user.user, &[Role::Admin], None)?;

    registry
        .user_repository()
        .find_pending_agents()
        .await
        .map(|agents| {
            Json(UsersResponse {
                items: agents.into_iter().map(UserResponse::from).collect(),
            })
        })
}

pub async fn verify_agent(
    user: AuthorizedUser,
    Path(agent_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    authorize(&user.user, &[Role::Admin], None)?;

    registry
        .user_repository()
        .verify_agent(agent_id)
        .await
        .map(|agent| Json(agent.into()))
}
