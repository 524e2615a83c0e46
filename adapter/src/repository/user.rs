use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        user::{
            event::{CreateUser, UpdateUserPassword},
            User,
        },
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        // Work factor 12, slow on purpose.
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let res = sqlx::query(
            r#"
                INSERT INTO users
                (user_id, email, password_hash, first_name, last_name, role,
                verified_status, school_id)
                VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7)
            "#,
        )
        .bind(user_id)
        .bind(&event.email)
        .bind(password_hash)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(event.role.as_ref())
        .bind(event.school_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateEntity(format!(
                    "user with email {} already exists",
                    event.email
                ))
            }
            e => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        Ok(User {
            user_id,
            email: event.email,
            first_name: event.first_name,
            last_name: event.last_name,
            role: event.role,
            verified_status: false,
            school_id: event.school_id,
        })
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, email, first_name, last_name, role,
                       verified_status, school_id
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let original_password_hash: String =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE user_id = $1")
                .bind(event.user_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        let valid = bcrypt::verify(&event.current_password, &original_password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        let new_password_hash = bcrypt::hash(&event.new_password, bcrypt::DEFAULT_COST)?;
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE user_id = $1")
            .bind(event.user_id)
            .bind(new_password_hash)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_pending_agents(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, email, first_name, last_name, role,
                       verified_status, school_id
                FROM users
                WHERE role = 'agent' AND verified_status = FALSE
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn verify_agent(&self, agent_id: UserId) -> AppResult<User> {
        // Setting TRUE again on an already-verified agent is a no-op update,
        // which keeps this idempotent.
        let res = sqlx::query(
            r#"
                UPDATE users
                SET verified_status = TRUE, updated_at = NOW()
                WHERE user_id = $1 AND role = 'agent'
            "#,
        )
        .bind(agent_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "agent {} not found",
                agent_id
            )));
        }

        self.find_current_user(agent_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("agent {} not found", agent_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::role::Role;

    fn create_user_event(email: &str, role: Role) -> CreateUser {
        CreateUser {
            email: email.into(),
            password: "hunter2hunter2".into(),
            first_name: "Test".into(),
            last_name: Some("User".into()),
            role,
            school_id: None,
        }
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_and_fetch_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(create_user_event("student@example.com", Role::Student))
            .await?;
        assert_eq!(created.role, Role::Student);
        assert!(!created.verified_status);

        let found = repo.find_current_user(created.user_id).await?;
        assert_eq!(found, Some(created));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_duplicate_email_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(create_user_event("dup@example.com", Role::Student))
            .await?;
        let res = repo
            .create(create_user_event("dup@example.com", Role::Agent))
            .await;
        assert!(matches!(res, Err(AppError::DuplicateEntity(_))));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_verify_agent_is_idempotent(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let agent = repo
            .create(create_user_event("agent@example.com", Role::Agent))
            .await?;
        assert_eq!(repo.find_pending_agents().await?.len(), 1);

        let verified = repo.verify_agent(agent.user_id).await?;
        assert!(verified.verified_status);

        // Second call: still verified, no error.
        let verified_again = repo.verify_agent(agent.user_id).await?;
        assert!(verified_again.verified_status);

        assert!(repo.find_pending_agents().await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_verify_agent_rejects_non_agents(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let student = repo
            .create(create_user_event("student2@example.com", Role::Student))
            .await?;
        let res = repo.verify_agent(student.user_id).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
