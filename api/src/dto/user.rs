use serde::{Deserialize, Serialize};
use tm_core::domain::entities::Role;
use tm_core::errors::DomainResult;
use tm_core::services::{NewUser, UserUpdate};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "full_name must be between 1 and 255 characters"))]
    pub full_name: String,
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
    /// `SUPER_ADMIN`, `ADMIN` or `USER`; defaults to `USER`
    pub role: Option<String>,
}

impl CreateUserRequest {
    /// Fails with `INVALID_ROLE` for an unknown role name
    pub fn into_new_user(self) -> DomainResult<NewUser> {
        let role = match self.role {
            Some(role) => role.parse::<Role>()?,
            None => Role::User,
        };

        Ok(NewUser {
            full_name: self.full_name,
            email: self.email,
            password: self.password,
            role,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "full_name must be between 1 and 255 characters"))]
    pub full_name: Option<String>,
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: Option<String>,
    pub role: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_update(self) -> DomainResult<UserUpdate> {
        Ok(UserUpdate {
            full_name: self.full_name,
            email: self.email,
            password: self.password,
            role: self.role.map(|role| role.parse::<Role>()).transpose()?,
        })
    }
}
