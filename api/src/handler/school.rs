use crate::{
    extractor::AuthorizedUser,
    model::school::{
        CreateLocationRequest, CreateSchoolRequest, LocationResponse, LocationsResponse,
        SchoolResponse, SchoolsResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::SchoolId, permission::authorize, role::Role};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_school(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSchoolRequest>,
) -> AppResult<(StatusCode, Json<SchoolResponse>)> {
    authorize(&user.user, &[Role::Admin], None)?;
    req.validate(&())?;

    registry
        .school_repository()
        .create(req.into())
        .await
        .map(|school| (StatusCode::CREATED, Json(school.into())))
}

// Public; students browse schools before they have an account.
pub async fn show_school_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SchoolsResponse>> {
    registry
        .school_repository()
        .find_all()
        .await
        .map(|schools| {
            Json(SchoolsResponse {
                items: schools.into_iter().map(SchoolResponse::from).collect(),
            })
        })
}

pub async fn register_location(
    user: AuthorizedUser,
    Path(school_id): Path<SchoolId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateLocationRequest>,
) -> AppResult<(StatusCode, Json<LocationResponse>)> {
    authorize(&user.user, &[Role::Admin], None)?;
    req.validate(&())?;

    registry
        .location_repository()
        .create(req.into_event(school_id))
        .await
        .map(|location| (StatusCode::CREATED, Json(location.into())))
}

pub async fn show_location_list(
    Path(school_id): Path<SchoolId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<LocationsResponse>> {
    registry
        .location_repository()
        .find_by_school(school_id)
        .await
        .map(|locations| {
            Json(LocationsResponse {
                items: locations.into_iter().map(LocationResponse::from).collect(),
            })
        })
}
