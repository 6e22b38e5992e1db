use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validation_messages;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "ada@acme.io".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = LoginRequest {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        let errors = invalid.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec!["email must be an email", "password should not be empty"]
        );
    }
}
