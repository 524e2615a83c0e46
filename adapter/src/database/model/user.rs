use kernel::model::{
    id::{SchoolId, UserId},
    role::Role,
    user::User,
};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub role: String,
    pub verified_status: bool,
    pub school_id: Option<SchoolId>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            email,
            first_name,
            last_name,
            role,
            verified_status,
            school_id,
        } = value;
        Ok(User {
            user_id,
            email,
            first_name,
            last_name,
            role: Role::from_str(&role)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            verified_status,
            school_id,
        })
    }
}
