use std::sync::Arc;

use axum::{http::header, response::IntoResponse, Extension};

use crate::{models::posts::Post, AppState, Result};

const CHANGEFREQ: &str = "weekly";
const PRIORITY: &str = "0.9";

pub async fn sitemap_xml(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let posts = app_state.posts_service.all_published().await?;
    let xml = build_sitemap(&posts, &app_state.config.base_url);

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

fn build_sitemap(posts: &[Post], base_url: &str) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for post in posts {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", post.absolute_url(base_url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            post.updated_at.format("%Y-%m-%d")
        ));
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", CHANGEFREQ));
        xml.push_str(&format!("    <priority>{}</priority>\n", PRIORITY));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::posts::PostStatus;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn fixture_post(slug: &str) -> Post {
        let publish = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        Post {
            id: Uuid::nil(),
            title: "First post".to_string(),
            slug: slug.to_string(),
            author_id: Uuid::nil(),
            body: "body".to_string(),
            publish,
            created_at: publish,
            updated_at: Utc.with_ymd_and_hms(2025, 4, 2, 8, 30, 0).unwrap(),
            status: PostStatus::Published,
        }
    }

    #[test]
    fn test_entry_carries_loc_lastmod_changefreq_priority() {
        let xml = build_sitemap(&[fixture_post("first-post")], "http://localhost:8080");

        assert!(xml.contains("<loc>http://localhost:8080/api/posts/2025/3/1/first-post</loc>"));
        assert!(xml.contains("<lastmod>2025-04-02</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.9</priority>"));
    }

    #[test]
    fn test_empty_set_renders_empty_urlset() {
        let xml = build_sitemap(&[], "http://localhost:8080");
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(!xml.contains("<url>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_one_entry_per_post() {
        let posts = vec![fixture_post("one"), fixture_post("two")];
        let xml = build_sitemap(&posts, "http://localhost:8080");
        assert_eq!(xml.matches("<url>").count(), 2);
    }
}
