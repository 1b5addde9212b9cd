use serde::Deserialize;

/// Listing query. The page token is kept raw; normalization happens in
/// the pagination layer.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WidgetQuery {
    pub count: Option<i64>,
}
