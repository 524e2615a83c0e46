use crate::database::{model::school::SchoolRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::SchoolId,
        school::{CreateSchool, School},
    },
    repository::school::SchoolRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct SchoolRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SchoolRepository for SchoolRepositoryImpl {
    async fn create(&self, event: CreateSchool) -> AppResult<School> {
        let school_id = SchoolId::new();
        sqlx::query("INSERT INTO schools (school_id, name, city, state) VALUES ($1, $2, $3, $4)")
            .bind(school_id)
            .bind(&event.name)
            .bind(&event.city)
            .bind(&event.state)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(School {
            school_id,
            name: event.name,
            city: event.city,
            state: event.state,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<School>> {
        let rows = sqlx::query_as::<_, SchoolRow>(
            "SELECT school_id, name, city, state FROM schools ORDER BY name ASC",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(School::from).collect())
    }
}
