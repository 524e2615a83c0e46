use crate::model::{
    id::SchoolId,
    location::{CreateLocation, Location},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, event: CreateLocation) -> AppResult<Location>;
    async fn find_by_school(&self, school_id: SchoolId) -> AppResult<Vec<Location>>;
}
