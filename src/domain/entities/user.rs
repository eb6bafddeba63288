use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl User {
    pub fn new(id: i64, name: String, email: String, age: i32) -> Self {
        Self {
            id,
            name,
            email,
            age,
        }
    }

    /// Emails are unique regardless of case
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

// DTOs for API requests

/// Missing fields fall back to defaults so the service reports them as
/// validation failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_matches_ignores_case() {
        let user = User::new(1, "John Doe".to_string(), "John@Example.com".to_string(), 30);
        assert!(user.email_matches("john@example.com"));
        assert!(user.email_matches("JOHN@EXAMPLE.COM"));
        assert!(!user.email_matches("jane@example.com"));
    }

    #[test]
    fn test_user_json_shape() {
        let user = User::new(3, "Ada".to_string(), "ada@example.com".to_string(), 36);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Ada", "email": "ada@example.com", "age": 36})
        );
    }

    #[test]
    fn test_create_request_missing_fields_default() {
        let request: CreateUserRequest = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(request.name, "");
        assert_eq!(request.email, "a@b.c");
        assert_eq!(request.age, 0);
    }
}
