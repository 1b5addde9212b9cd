use crate::Result;

use super::sendmail::send_email;

/// Recommend a post to another reader by email. One transport call, no
/// retry; the caller treats a successful hand-off as sent.
pub async fn send_share_email(
    to: &str,
    name: &str,
    email: &str,
    post_title: &str,
    post_url: &str,
    comments: Option<&str>,
) -> Result<()> {
    let subject = share_subject(name, email, post_title);
    let body = share_body(post_title, post_url, name, comments);

    send_email(to, &subject, &body).await
}

fn share_subject(name: &str, email: &str, post_title: &str) -> String {
    format!("{} ({}) recommends you reading \"{}\"", name, email, post_title)
}

fn share_body(post_title: &str, post_url: &str, name: &str, comments: Option<&str>) -> String {
    format!(
        "Read \"{}\" at {}\n\n{}'s comments: {}",
        post_title,
        post_url,
        name,
        comments.unwrap_or("")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_embeds_sender_and_title() {
        assert_eq!(
            share_subject("John", "john@example.com", "First post"),
            "John (john@example.com) recommends you reading \"First post\""
        );
    }

    #[test]
    fn test_body_embeds_url_and_comments() {
        let body = share_body(
            "First post",
            "http://localhost:8080/api/posts/2025/3/1/first-post",
            "John",
            Some("worth a read"),
        );
        assert_eq!(
            body,
            "Read \"First post\" at http://localhost:8080/api/posts/2025/3/1/first-post\n\nJohn's comments: worth a read"
        );
    }

    #[test]
    fn test_body_with_no_comments() {
        let body = share_body("First post", "http://x", "John", None);
        assert!(body.ends_with("John's comments: "));
    }
}
