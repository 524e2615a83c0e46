use crate::database::{model::school::LocationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::{LocationId, SchoolId},
        location::{CreateLocation, Location},
    },
    repository::location::LocationRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct LocationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl LocationRepository for LocationRepositoryImpl {
    async fn create(&self, event: CreateLocation) -> AppResult<Location> {
        let location_id = LocationId::new();
        sqlx::query(
            r#"
                INSERT INTO locations (location_id, school_id, name, latitude, longitude)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(location_id)
        .bind(event.school_id)
        .bind(&event.name)
        .bind(event.latitude)
        .bind(event.longitude)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Location {
            location_id,
            school_id: event.school_id,
            name: event.name,
            latitude: event.latitude,
            longitude: event.longitude,
        })
    }

    async fn find_by_school(&self, school_id: SchoolId) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
                SELECT location_id, school_id, name, latitude, longitude
                FROM locations
                WHERE school_id = $1
                ORDER BY name ASC
            "#,
        )
        .bind(school_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Location::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::school::SchoolRepositoryImpl;
    use kernel::{model::school::CreateSchool, repository::school::SchoolRepository};

    #[sqlx::test(migrations = "../migrations")]
    async fn test_locations_are_scoped_to_their_school(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let schools = SchoolRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = LocationRepositoryImpl::new(ConnectionPool::new(pool));

        let unilag = schools
            .create(CreateSchool::new(
                "University of Lagos".into(),
                "Lagos".into(),
                "Lagos".into(),
            ))
            .await?;
        let ui = schools
            .create(CreateSchool::new(
                "University of Ibadan".into(),
                "Ibadan".into(),
                "Oyo".into(),
            ))
            .await?;

        repo.create(CreateLocation::new(
            unilag.school_id,
            "Akoka".into(),
            Some(6.5158),
            Some(3.3898),
        ))
        .await?;
        repo.create(CreateLocation::new(ui.school_id, "Agbowo".into(), None, None))
            .await?;

        let locations = repo.find_by_school(unilag.school_id).await?;
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].name, "Akoka");
        Ok(())
    }
}
