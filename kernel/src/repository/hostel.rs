use crate::model::{
    hostel::{
        event::{CreateHostel, DeleteHostel, HostelListFilter, UpdateHostel},
        Hostel,
    },
    id::{HostelId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HostelRepository: Send + Sync {
    async fn create(&self, event: CreateHostel, agent_id: UserId) -> AppResult<HostelId>;
    // The public listing: only hostels with availability = true, narrowed by
    // the filter.
    async fn find_available(&self, filter: HostelListFilter) -> AppResult<Vec<Hostel>>;
    async fn find_by_id(&self, hostel_id: HostelId) -> AppResult<Option<Hostel>>;
    // An agent's own listings, including unavailable ones.
    async fn find_by_agent(&self, agent_id: UserId) -> AppResult<Vec<Hostel>>;
    async fn update(&self, event: UpdateHostel) -> AppResult<()>;
    async fn delete(&self, event: DeleteHostel) -> AppResult<()>;
}
