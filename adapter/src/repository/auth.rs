use crate::{
    database::ConnectionPool,
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        auth::{event::CreateToken, AccessToken},
        id::UserId,
    },
    repository::auth::AuthRepository,
};
use shared::error::{AppError, AppResult};
use std::{str::FromStr, sync::Arc};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv.get(&key).await.map(|x| x.map(UserId::from))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let user_item = sqlx::query_as::<_, UserItem>(
            "SELECT user_id, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // Unknown email and wrong password leave through the same door.
        let Some(user_item) = user_item else {
            return Err(AppError::UnauthenticatedError);
        };

        let valid = bcrypt::verify(password, &user_item.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }
        Ok(user_item.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let key = AuthorizationKey(event.access_token.clone());
        let value = AuthorizedUserId(event.user_id);
        self.kv.set_ex(&key, &value, self.ttl).await?;
        Ok(AccessToken(event.access_token))
    }

    async fn delete_token(&self, access_token: &AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = access_token.into();
        self.kv.delete(&key).await
    }
}

#[derive(sqlx::FromRow)]
struct UserItem {
    user_id: UserId,
    password_hash: String,
}

struct AuthorizationKey(String);

pub struct AuthorizedUserId(UserId);

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.clone())
    }
}

impl From<AuthorizedUserId> for UserId {
    fn from(value: AuthorizedUserId) -> Self {
        value.0
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("auth:{}", self.0)
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.raw().simple().to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(UserId::from_str(&value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::{
        model::{role::Role, user::event::CreateUser},
        repository::user::UserRepository,
    };
    use shared::config::RedisConfig;

    // The client connects lazily, so a repo that never touches the token
    // store can be built without a running Redis.
    fn auth_repo(pool: sqlx::PgPool) -> AuthRepositoryImpl {
        let kv = Arc::new(
            RedisClient::new(&RedisConfig {
                host: "localhost".into(),
                port: 6379,
            })
            .unwrap(),
        );
        AuthRepositoryImpl::new(ConnectionPool::new(pool), kv, 60)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_login_failures_are_indistinguishable(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = auth_repo(pool);

        let created = users
            .create(CreateUser {
                email: "student@example.com".into(),
                password: "correct-horse-battery".into(),
                first_name: "Bola".into(),
                last_name: None,
                role: Role::Student,
                school_id: None,
            })
            .await?;

        let verified = repo
            .verify_user("student@example.com", "correct-horse-battery")
            .await?;
        assert_eq!(verified, created.user_id);

        // Wrong password and unknown email must fail through the same
        // variant so callers cannot probe which addresses exist.
        let wrong_password = repo
            .verify_user("student@example.com", "not-the-password")
            .await;
        assert!(matches!(wrong_password, Err(AppError::UnauthenticatedError)));

        let unknown_email = repo
            .verify_user("nobody@example.com", "correct-horse-battery")
            .await;
        assert!(matches!(unknown_email, Err(AppError::UnauthenticatedError)));
        Ok(())
    }
}
