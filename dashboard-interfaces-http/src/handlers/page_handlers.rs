use axum::response::Html;

/// The dashboard page is a single embedded document; everything it renders
/// comes from the JSON endpoints.
const INDEX_HTML: &str = include_str!("../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
