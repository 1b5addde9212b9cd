use serde::{Deserialize, Serialize};
use validator::Validate;

/// Share-a-post-by-email payload.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct SharePostDto {
    #[validate(length(
        min = 1,
        max = 25,
        message = "Name must be between 1 and 25 characters"
    ))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(email(message = "Invalid recipient address"))]
    pub to: String,
    pub comments: Option<String>,
}
