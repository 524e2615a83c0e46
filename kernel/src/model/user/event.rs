use crate::model::{
    id::{SchoolId, UserId},
    role::Role,
};

pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub role: Role,
    pub school_id: Option<SchoolId>,
}

pub struct UpdateUserPassword {
    pub user_id: UserId,
    pub current_password: String,
    pub new_password: String,
}
