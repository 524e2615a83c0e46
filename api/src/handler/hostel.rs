use crate::{
    extractor::AuthorizedUser,
    model::hostel::{
        CreateHostelRequest, HostelListQuery, HostelResponse, HostelsResponse,
        UpdateHostelRequest, UpdateHostelRequestWithId,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    hostel::event::DeleteHostel,
    id::HostelId,
    permission::{authorize, authorize_verified_agent},
    role::Role,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_hostel(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateHostelRequest>,
) -> AppResult<(StatusCode, Json<HostelResponse>)> {
    authorize_verified_agent(&user.user)?;
    req.validate(&())?;

    let hostel_id = registry
        .hostel_repository()
        .create(req.into(), user.id())
        .await?;

    let hostel = registry
        .hostel_repository()
        .find_by_id(hostel_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("hostel not found".into()))?;

    Ok((StatusCode::CREATED, Json(hostel.into())))
}

// Public search over available hostels.
pub async fn show_hostel_list(
    Query(query): Query<HostelListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HostelsResponse>> {
    query.validate(&())?;

    registry
        .hostel_repository()
        .find_available(query.into())
        .await
        .map(HostelsResponse::from)
        .map(Json)
}

pub async fn show_hostel(
    Path(hostel_id): Path<HostelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HostelResponse>> {
    registry
        .hostel_repository()
        .find_by_id(hostel_id)
        .await
        .and_then(|hostel| match hostel {
            Some(hostel) => Ok(Json(hostel.into())),
            None => Err(AppError::EntityNotFound("hostel not found".into())),
        })
}

// The agent's own listings, unavailable ones included.
pub async fn show_agent_hostel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HostelsResponse>> {
    authorize(&user.user, &[Role::Agent], None)?;

    registry
        .hostel_repository()
        .find_by_agent(user.id())
        .await
        .map(HostelsResponse::from)
        .map(Json)
}

pub async fn update_hostel(
    user: AuthorizedUser,
    Path(hostel_id): Path<HostelId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateHostelRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let hostel = registry
        .hostel_repository()
        .find_by_id(hostel_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("hostel not found".into()))?;
    authorize(
        &user.user,
        &[Role::Agent, Role::Admin],
        Some(hostel.agent.agent_id),
    )?;

    let update = UpdateHostelRequestWithId::new(hostel_id, req);
    registry
        .hostel_repository()
        .update(update.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_hostel(
    user: AuthorizedUser,
    Path(hostel_id): Path<HostelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let hostel = registry
        .hostel_repository()
        .find_by_id(hostel_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("hostel not found".into()))?;
    authorize(
        &user.user,
        &[Role::Agent, Role::Admin],
        Some(hostel.agent.agent_id),
    )?;

    registry
        .hostel_repository()
        .delete(DeleteHostel { hostel_id })
        .await
        .map(|_| StatusCode::OK)
}
