use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateUserPassword},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>>;
    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()>;
    // Agents awaiting admin verification.
    async fn find_pending_agents(&self) -> AppResult<Vec<User>>;
    // Idempotent; verifying an already-verified agent is not an error.
    async fn verify_agent(&self, agent_id: UserId) -> AppResult<User>;
}
