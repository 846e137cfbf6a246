use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account as stored in Postgres. Never sent to the client —
/// `AuthUser` is the public projection.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

/// The authenticated user as seen by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_staff: bool,
}

impl From<User> for AuthUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            is_staff: u.is_staff,
        }
    }
}

/// Request body for creating an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Name must be at least 2 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Please enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
}

/// Request body for logging in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Please enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn auth_user_round_trips_through_json() {
        let user = AuthUser {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            is_staff: false,
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: AuthUser = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }

    #[cfg(feature = "validation")]
    mod validation {
        use super::super::*;
        use validator::Validate;

        #[test]
        fn register_rejects_short_password() {
            let req = RegisterRequest {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "short".to_string(),
            };
            let errors = req.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("password"));
        }

        #[test]
        fn register_rejects_bad_email() {
            let req = RegisterRequest {
                name: "Ada".to_string(),
                email: "not-an-email".to_string(),
                password: "hunter2hunter2".to_string(),
            };
            let errors = req.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("email"));
        }

        #[test]
        fn valid_register_passes() {
            let req = RegisterRequest {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            };
            assert!(req.validate().is_ok());
        }
    }
}
