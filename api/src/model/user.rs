use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{SchoolId, UserId},
    role::Role,
    user::{
        event::{CreateUser, UpdateUserPassword},
        User,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Student,
    Agent,
    Admin,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Student => Self::Student,
            Role::Agent => Self::Agent,
            Role::Admin => Self::Admin,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Student => Self::Student,
            RoleName::Agent => Self::Agent,
            RoleName::Admin => Self::Admin,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub role: RoleName,
    pub verified_status: bool,
    pub school_id: Option<SchoolId>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            email,
            first_name,
            last_name,
            role,
            verified_status,
            school_id,
        } = value;
        Self {
            user_id,
            email,
            first_name,
            last_name,
            role: RoleName::from(role),
            verified_status,
            school_id,
        }
    }
}

fn default_role() -> RoleName {
    RoleName::Student
}

// Self-registration covers students and agents; the admin role is never
// assignable through this request.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(skip)]
    pub last_name: Option<String>,
    #[garde(custom(not_admin))]
    #[serde(default = "default_role")]
    pub role: RoleName,
    #[garde(skip)]
    pub school_id: Option<SchoolId>,
}

fn not_admin(role: &RoleName, _: &()) -> garde::Result {
    match role {
        RoleName::Admin => Err(garde::Error::new("admin accounts cannot self-register")),
        _ => Ok(()),
    }
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            email,
            password,
            first_name,
            last_name,
            role,
            school_id,
        } = value;
        Self {
            email,
            password,
            first_name,
            last_name,
            role: Role::from(role),
            school_id,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPasswordRequest {
    #[garde(length(min = 1))]
    current_password: String,
    #[garde(length(min = 8))]
    new_password: String,
}

#[derive(new)]
pub struct UpdateUserPasswordRequestWithUserId(UserId, UpdateUserPasswordRequest);

impl From<UpdateUserPasswordRequestWithUserId> for UpdateUserPassword {
    fn from(value: UpdateUserPasswordRequestWithUserId) -> Self {
        let UpdateUserPasswordRequestWithUserId(
            user_id,
            UpdateUserPasswordRequest {
                current_password,
                new_password,
            },
        ) = value;
        UpdateUserPassword {
            user_id,
            current_password,
            new_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_never_carries_a_password_field() {
        let user = User {
            user_id: UserId::new(),
            email: "student@example.com".into(),
            first_name: "Bola".into(),
            last_name: None,
            role: Role::Student,
            verified_status: false,
            school_id: None,
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert!(!keys.iter().any(|k| k.to_lowercase().contains("password")));
        assert!(keys.contains(&"verifiedStatus".to_string()));
    }

    #[test]
    fn registration_rejects_the_admin_role() {
        let req: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "email": "boss@example.com",
            "password": "longenough",
            "firstName": "Boss",
            "role": "admin",
        }))
        .unwrap();
        assert!(garde::Validate::validate(&req, &()).is_err());
    }

    #[test]
    fn registration_defaults_to_the_student_role() {
        let req: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "email": "new@example.com",
            "password": "longenough",
            "firstName": "New",
        }))
        .unwrap();
        assert!(matches!(req.role, RoleName::Student));
        assert!(garde::Validate::validate(&req, &()).is_ok());
    }
}
