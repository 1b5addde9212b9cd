use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Soft-moderation switch; inactive comments stay stored but unlisted.
    pub active: bool,
}

/// Comment submission payload. Carries no post reference: the target post
/// comes from the detail path the form was submitted on, never from the
/// payload itself.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateCommentDto {
    #[validate(length(
        min = 1,
        max = 80,
        message = "Name must be between 1 and 80 characters"
    ))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Comment body is required"))]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_comment_passes() {
        let dto = CreateCommentDto {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            body: "Nice post!".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let dto = CreateCommentDto {
            name: "John Doe".to_string(),
            email: "not-an-email".to_string(),
            body: "Nice post!".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_empty_body_rejected() {
        let dto = CreateCommentDto {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            body: String::new(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_payload_post_id_is_ignored() {
        // A smuggled post reference must not survive deserialization.
        let dto: CreateCommentDto = serde_json::from_str(
            r#"{"name":"John","email":"john@example.com","body":"hi","post_id":"0194e1f7-c369-7c31-9440-45654eabb899"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        assert!(serde_json::to_value(&dto)
            .unwrap()
            .get("post_id")
            .is_none());
    }
}
