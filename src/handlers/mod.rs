pub mod posts;
pub mod sitemap;
pub mod widgets;
