use crate::model::school::{CreateSchool, School};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait SchoolRepository: Send + Sync {
    async fn create(&self, event: CreateSchool) -> AppResult<School>;
    async fn find_all(&self) -> AppResult<Vec<School>>;
}
