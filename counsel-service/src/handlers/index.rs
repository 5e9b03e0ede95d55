use axum::response::Html;

/// UI shell for the tap-based survey. The survey itself runs client-side
/// against the two API endpoints.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
