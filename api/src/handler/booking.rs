use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingListQuery, BookingResponse, BookingsResponse, CreateBookingRequest,
        UpdateBookingRequest,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::event::{UpdateBookingDetails, UpdateBookingStatus},
    id::BookingId,
    permission::{authorize, authorize_booking_update, authorize_status_change},
    role::Role,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    authorize(&user.user, &[Role::Student], None)?;
    req.validate(&())?;

    let booking_id = registry
        .booking_repository()
        .create(req.into_event(user.id()))
        .await?;

    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))?;

    // The agent notification must not fail the booking.
    if let Err(e) = registry.booking_notifier().booking_requested(&booking).await {
        tracing::warn!(
            booking_id = %booking.booking_id,
            error = %e,
            "failed to notify agent of new booking"
        );
    }

    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn show_booking_list(
    user: AuthorizedUser,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_all(query.into_filter_for(&user.user))
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))?;
    authorize_booking_update(&user.user, booking.student.student_id, booking.hostel.agent_id)?;

    Ok(Json(booking.into()))
}

pub async fn update_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    req.validate(&())?;

    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))?;
    authorize_booking_update(&user.user, booking.student.student_id, booking.hostel.agent_id)?;

    if let Some(next) = req.status {
        if !booking.status.can_transition_to(next) {
            return Err(AppError::IllegalStatusTransition {
                from: booking.status.to_string(),
                to: next.to_string(),
            });
        }
        authorize_status_change(&user.user, next)?;

        registry
            .booking_repository()
            .update_status(UpdateBookingStatus {
                booking_id,
                current: booking.status,
                next,
            })
            .await?;
    }

    if req.has_detail_changes() {
        registry
            .booking_repository()
            .update_details(UpdateBookingDetails {
                booking_id,
                preferred_date: req.preferred_date,
                preferred_time: req.preferred_time,
                message: req.message,
            })
            .await?;
    }

    let updated = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))?;

    Ok(Json(updated.into()))
}
