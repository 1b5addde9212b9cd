use anyhow::Result;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running server and seeded database"]
async fn quick_dev() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:8080")?;

    hc.do_get("/api/posts").await?.print().await?;

    hc.do_get("/api/posts?page=2").await?.print().await?;

    // Non-numeric and oversized tokens are normalized, never an error.
    hc.do_get("/api/posts?page=abc").await?.print().await?;
    hc.do_get("/api/posts?page=99").await?.print().await?;

    hc.do_get("/api/posts/2025/3/1/first-post")
        .await?
        .print()
        .await?;

    hc.do_post(
        "/api/posts/2025/3/1/first-post",
        json!({
          "name": "John Doe",
          "email": "john@example.com",
          "body": "Great post!",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_post(
        "/api/posts/share/0194e1f7-c369-7c31-9440-45654eabb899",
        json!({
          "name": "John",
          "email": "john@example.com",
          "to": "jane@example.com",
          "comments": "worth a read",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_get("/api/widgets/total-posts").await?.print().await?;
    hc.do_get("/api/widgets/latest-posts?count=3")
        .await?
        .print()
        .await?;
    hc.do_get("/api/widgets/most-commented-posts")
        .await?
        .print()
        .await?;

    hc.do_get("/sitemap.xml").await?.print().await?;

    Ok(())
}
