use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        booking::{
            event::{BookingListFilter, CreateBooking, UpdateBookingDetails, UpdateBookingStatus},
            Booking, BookingStatus,
        },
        id::BookingId,
    },
    repository::booking::BookingRepository,
};
use shared::error::{AppError, AppResult};
use sqlx::QueryBuilder;

const BOOKING_SELECT: &str = r#"
    SELECT b.booking_id, b.student_id, u.first_name AS student_name,
           u.email AS student_email, b.hostel_id, h.title AS hostel_title,
           h.agent_id, b.preferred_date, b.preferred_time, b.message,
           b.status, b.created_at
    FROM bookings AS b
    INNER JOIN users AS u ON b.student_id = u.user_id
    INNER JOIN hostels AS h ON b.hostel_id = h.hostel_id
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        self.set_transaction_serializable(&mut tx).await?;

        // The hostel must exist and still be open for inspection requests.
        // Checked inside the transaction so a concurrent availability flip
        // cannot slip a booking past it.
        let availability: Option<bool> =
            sqlx::query_scalar("SELECT availability FROM hostels WHERE hostel_id = $1")
                .bind(event.hostel_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        match availability {
            None => {
                return Err(AppError::EntityNotFound(format!(
                    "hostel {} not found",
                    event.hostel_id
                )))
            }
            Some(false) => {
                return Err(AppError::UnprocessableEntity(format!(
                    "hostel {} is not available for booking",
                    event.hostel_id
                )))
            }
            Some(true) => {}
        }

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, student_id, hostel_id, preferred_date,
                preferred_time, message, status)
                VALUES ($1, $2, $3, $4, $5, $6, 'pending')
            "#,
        )
        .bind(booking_id)
        .bind(event.student_id)
        .bind(event.hostel_id)
        .bind(event.preferred_date)
        .bind(&event.preferred_time)
        .bind(&event.message)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "{BOOKING_SELECT} WHERE b.booking_id = $1"
        ))
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_all(&self, filter: BookingListFilter) -> AppResult<Vec<Booking>> {
        let mut builder = QueryBuilder::new(BOOKING_SELECT);
        builder.push(" WHERE TRUE");

        if let Some(student_id) = filter.student_id {
            builder.push(" AND b.student_id = ");
            builder.push_bind(student_id);
        }
        if let Some(agent_id) = filter.agent_id {
            builder.push(" AND h.agent_id = ");
            builder.push_bind(agent_id);
        }
        if let Some(status) = filter.status {
            builder.push(" AND b.status = ");
            builder.push_bind(status.to_string());
        }
        builder.push(" ORDER BY b.created_at DESC");

        let rows: Vec<BookingRow> = builder
            .build_query_as()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()> {
        // Guarded on the status the caller saw. Zero rows affected means a
        // concurrent transition got there first (or the booking vanished);
        // either way the caller's view is stale.
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $3, updated_at = NOW()
                WHERE booking_id = $1 AND status = $2
            "#,
        )
        .bind(event.booking_id)
        .bind(event.current.to_string())
        .bind(event.next.to_string())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::UnprocessableEntity(format!(
                "booking {} is no longer in status {}",
                event.booking_id, event.current
            )));
        }

        Ok(())
    }

    async fn update_details(&self, event: UpdateBookingDetails) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET preferred_date = COALESCE($2, preferred_date),
                    preferred_time = COALESCE($3, preferred_time),
                    message = COALESCE($4, message),
                    updated_at = NOW()
                WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(event.preferred_date)
        .bind(&event.preferred_time)
        .bind(&event.message)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "booking {} not found",
                event.booking_id
            )));
        }

        Ok(())
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{
        hostel::HostelRepositoryImpl, location::LocationRepositoryImpl,
        school::SchoolRepositoryImpl, user::UserRepositoryImpl,
    };
    use kernel::{
        model::{
            hostel::{
                event::{CreateHostel, UpdateHostel},
                PriceType, RoomType,
            },
            id::{HostelId, UserId},
            location::CreateLocation,
            role::Role,
            school::CreateSchool,
            user::event::CreateUser,
        },
        repository::{
            hostel::HostelRepository, location::LocationRepository, school::SchoolRepository,
            user::UserRepository,
        },
    };

    struct Seeded {
        student_id: UserId,
        agent_id: UserId,
        hostel_id: HostelId,
    }

    async fn seed(pool: &sqlx::PgPool) -> anyhow::Result<Seeded> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let schools = SchoolRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let locations = LocationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let hostels = HostelRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let student = users
            .create(CreateUser {
                email: format!("student-{}@example.com", UserId::new()),
                password: "student-password".into(),
                first_name: "Bola".into(),
                last_name: None,
                role: Role::Student,
                school_id: None,
            })
            .await?;
        let agent = users
            .create(CreateUser {
                email: format!("agent-{}@example.com", UserId::new()),
                password: "agent-password".into(),
                first_name: "Ade".into(),
                last_name: None,
                role: Role::Agent,
                school_id: None,
            })
            .await?;
        let school = schools
            .create(CreateSchool::new(
                "University of Lagos".into(),
                "Lagos".into(),
                "Lagos".into(),
            ))
            .await?;
        let location = locations
            .create(CreateLocation::new(
                school.school_id,
                "Akoka".into(),
                None,
                None,
            ))
            .await?;
        let hostel_id = hostels
            .create(
                CreateHostel {
                    location_id: location.location_id,
                    title: "Sunrise Lodge".into(),
                    description: None,
                    price: 150_000,
                    price_type: PriceType::Semester,
                    room_type: RoomType::Single,
                    images: vec![],
                    amenities: vec![],
                    availability: true,
                },
                agent.user_id,
            )
            .await?;

        Ok(Seeded {
            student_id: student.user_id,
            agent_id: agent.user_id,
            hostel_id,
        })
    }

    fn create_booking_event(seeded: &Seeded) -> CreateBooking {
        CreateBooking::new(
            seeded.hostel_id,
            seeded.student_id,
            None,
            Some("10:00".into()),
            Some("Can I see the room on Friday?".into()),
        )
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_booking_starts_pending(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seeded = seed(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo.create(create_booking_event(&seeded)).await?;
        let booking = repo.find_by_id(booking_id).await?.unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.student.student_id, seeded.student_id);
        assert_eq!(booking.hostel.agent_id, seeded.agent_id);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_unavailable_hostel_rejects_bookings(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let seeded = seed(&pool).await?;
        let hostels = HostelRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        hostels
            .update(UpdateHostel {
                hostel_id: seeded.hostel_id,
                title: None,
                description: None,
                price: None,
                price_type: None,
                room_type: None,
                images: None,
                amenities: None,
                availability: Some(false),
            })
            .await?;

        let res = repo.create(create_booking_event(&seeded)).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_status_update_detects_stale_expectations(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let seeded = seed(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo.create(create_booking_event(&seeded)).await?;

        repo.update_status(UpdateBookingStatus {
            booking_id,
            current: BookingStatus::Pending,
            next: BookingStatus::Confirmed,
        })
        .await?;

        // A second writer still believing the booking is pending loses.
        let res = repo
            .update_status(UpdateBookingStatus {
                booking_id,
                current: BookingStatus::Pending,
                next: BookingStatus::Cancelled,
            })
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        let booking = repo.find_by_id(booking_id).await?.unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_listing_scopes_by_student_agent_and_status(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let seeded = seed(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo.create(create_booking_event(&seeded)).await?;
        repo.update_status(UpdateBookingStatus {
            booking_id,
            current: BookingStatus::Pending,
            next: BookingStatus::Cancelled,
        })
        .await?;
        repo.create(create_booking_event(&seeded)).await?;

        let by_student = repo
            .find_all(BookingListFilter {
                student_id: Some(seeded.student_id),
                ..Default::default()
            })
            .await?;
        assert_eq!(by_student.len(), 2);

        let by_agent_pending = repo
            .find_all(BookingListFilter {
                agent_id: Some(seeded.agent_id),
                status: Some(BookingStatus::Pending),
                ..Default::default()
            })
            .await?;
        assert_eq!(by_agent_pending.len(), 1);

        let stranger = repo
            .find_all(BookingListFilter {
                student_id: Some(UserId::new()),
                ..Default::default()
            })
            .await?;
        assert!(stranger.is_empty());
        Ok(())
    }
}
