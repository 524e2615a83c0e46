use crate::database::{model::hostel::HostelRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        hostel::{
            event::{CreateHostel, DeleteHostel, HostelListFilter, UpdateHostel},
            Hostel,
        },
        id::{HostelId, UserId},
    },
    repository::hostel::HostelRepository,
};
use shared::error::{AppError, AppResult};
use sqlx::QueryBuilder;

const HOSTEL_SELECT: &str = r#"
    SELECT h.hostel_id, h.location_id, h.agent_id, u.first_name AS agent_name,
           h.title, h.description, h.price, h.price_type, h.room_type,
           h.images, h.amenities, h.availability
    FROM hostels AS h
    INNER JOIN users AS u ON h.agent_id = u.user_id
"#;

#[derive(new)]
pub struct HostelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HostelRepository for HostelRepositoryImpl {
    async fn create(&self, event: CreateHostel, agent_id: UserId) -> AppResult<HostelId> {
        let hostel_id = HostelId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO hostels
                (hostel_id, agent_id, location_id, title, description, price,
                price_type, room_type, images, amenities, availability)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(hostel_id)
        .bind(agent_id)
        .bind(event.location_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.price)
        .bind(event.price_type.to_string())
        .bind(event.room_type.to_string())
        .bind(&event.images)
        .bind(&event.amenities)
        .bind(event.availability)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No hostel record has been created".into(),
            ));
        }

        Ok(hostel_id)
    }

    async fn find_available(&self, filter: HostelListFilter) -> AppResult<Vec<Hostel>> {
        let mut builder = QueryBuilder::new(HOSTEL_SELECT);
        builder.push(" INNER JOIN locations AS l ON h.location_id = l.location_id");
        builder.push(" WHERE h.availability = TRUE");

        if let Some(school_id) = filter.school_id {
            builder.push(" AND l.school_id = ");
            builder.push_bind(school_id);
        }
        if let Some(location_id) = filter.location_id {
            builder.push(" AND h.location_id = ");
            builder.push_bind(location_id);
        }
        // Inclusive bounds; the price filter is a range, not an equality
        // match.
        if let Some(price_min) = filter.price_min {
            builder.push(" AND h.price >= ");
            builder.push_bind(price_min);
        }
        if let Some(price_max) = filter.price_max {
            builder.push(" AND h.price <= ");
            builder.push_bind(price_max);
        }
        if let Some(room_type) = filter.room_type {
            builder.push(" AND h.room_type = ");
            builder.push_bind(room_type.to_string());
        }
        if let Some(amenities) = filter.amenities {
            if !amenities.is_empty() {
                builder.push(" AND h.amenities @> ");
                builder.push_bind(amenities);
            }
        }
        builder.push(" ORDER BY h.created_at DESC");

        let rows: Vec<HostelRow> = builder
            .build_query_as()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Hostel::try_from).collect()
    }

    async fn find_by_id(&self, hostel_id: HostelId) -> AppResult<Option<Hostel>> {
        let row = sqlx::query_as::<_, HostelRow>(&format!(
            "{HOSTEL_SELECT} WHERE h.hostel_id = $1"
        ))
        .bind(hostel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Hostel::try_from).transpose()
    }

    async fn find_by_agent(&self, agent_id: UserId) -> AppResult<Vec<Hostel>> {
        let rows = sqlx::query_as::<_, HostelRow>(&format!(
            "{HOSTEL_SELECT} WHERE h.agent_id = $1 ORDER BY h.created_at DESC"
        ))
        .bind(agent_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Hostel::try_from).collect()
    }

    async fn update(&self, event: UpdateHostel) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE hostels
                SET title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    price = COALESCE($4, price),
                    price_type = COALESCE($5, price_type),
                    room_type = COALESCE($6, room_type),
                    images = COALESCE($7, images),
                    amenities = COALESCE($8, amenities),
                    availability = COALESCE($9, availability),
                    updated_at = NOW()
                WHERE hostel_id = $1
            "#,
        )
        .bind(event.hostel_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.price)
        .bind(event.price_type.map(|v| v.to_string()))
        .bind(event.room_type.map(|v| v.to_string()))
        .bind(&event.images)
        .bind(&event.amenities)
        .bind(event.availability)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "hostel {} not found",
                event.hostel_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteHostel) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM hostels WHERE hostel_id = $1")
            .bind(event.hostel_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "hostel {} not found",
                event.hostel_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{
        location::LocationRepositoryImpl, school::SchoolRepositoryImpl, user::UserRepositoryImpl,
    };
    use kernel::{
        model::{
            hostel::{PriceType, RoomType},
            id::LocationId,
            location::CreateLocation,
            role::Role,
            school::CreateSchool,
            user::event::CreateUser,
        },
        repository::{
            location::LocationRepository, school::SchoolRepository, user::UserRepository,
        },
    };
    use std::collections::HashSet;

    async fn seed_agent_and_location(pool: &sqlx::PgPool) -> anyhow::Result<(UserId, LocationId)> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let schools = SchoolRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let locations = LocationRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let agent = users
            .create(CreateUser {
                email: format!("{}@example.com", UserId::new()),
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
        Ok((agent.user_id, location.location_id))
    }

    fn create_hostel_event(location_id: LocationId, price: i32, available: bool) -> CreateHostel {
        CreateHostel {
            location_id,
            title: "Sunrise Lodge".into(),
            description: Some("A quiet lodge near the gate".into()),
            price,
            price_type: PriceType::Semester,
            room_type: RoomType::SelfContain,
            images: vec![],
            amenities: vec!["wifi".into(), "generator".into()],
            availability: available,
        }
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_amenities_survive_the_round_trip(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (agent_id, location_id) = seed_agent_and_location(&pool).await?;
        let repo = HostelRepositoryImpl::new(ConnectionPool::new(pool));

        let hostel_id = repo
            .create(create_hostel_event(location_id, 150_000, true), agent_id)
            .await?;

        let hostel = repo.find_by_id(hostel_id).await?.unwrap();
        let got: HashSet<_> = hostel.amenities.iter().cloned().collect();
        let want: HashSet<_> = ["wifi".to_string(), "generator".to_string()]
            .into_iter()
            .collect();
        assert_eq!(got, want);
        assert_eq!(hostel.agent.agent_id, agent_id);
        assert_eq!(hostel.room_type, RoomType::SelfContain);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_unavailable_hostels_never_appear_in_the_listing(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let (agent_id, location_id) = seed_agent_and_location(&pool).await?;
        let repo = HostelRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(create_hostel_event(location_id, 150_000, true), agent_id)
            .await?;
        repo.create(create_hostel_event(location_id, 90_000, false), agent_id)
            .await?;

        let listed = repo.find_available(HostelListFilter::default()).await?;
        assert_eq!(listed.len(), 1);
        assert!(listed.iter().all(|h| h.availability));

        // The agent still sees both.
        let own = repo.find_by_agent(agent_id).await?;
        assert_eq!(own.len(), 2);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_price_filter_is_an_inclusive_range(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (agent_id, location_id) = seed_agent_and_location(&pool).await?;
        let repo = HostelRepositoryImpl::new(ConnectionPool::new(pool));

        for price in [80_000, 120_000, 200_000] {
            repo.create(create_hostel_event(location_id, price, true), agent_id)
                .await?;
        }

        let filter = HostelListFilter {
            price_min: Some(80_000),
            price_max: Some(120_000),
            ..Default::default()
        };
        let listed = repo.find_available(filter).await?;
        let prices: HashSet<_> = listed.iter().map(|h| h.price).collect();
        assert_eq!(prices, HashSet::from([80_000, 120_000]));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_amenities_filter_requires_all_requested(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let (agent_id, location_id) = seed_agent_and_location(&pool).await?;
        let repo = HostelRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(create_hostel_event(location_id, 100_000, true), agent_id)
            .await?;
        let mut bare = create_hostel_event(location_id, 100_000, true);
        bare.amenities = vec!["wifi".into()];
        repo.create(bare, agent_id).await?;

        let filter = HostelListFilter {
            amenities: Some(vec!["wifi".into(), "generator".into()]),
            ..Default::default()
        };
        let listed = repo.find_available(filter).await?;
        assert_eq!(listed.len(), 1);
        Ok(())
    }
}
