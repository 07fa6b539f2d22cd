use axum::extract::State;
use axum::response::Html;

use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static informational landing page.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        r#"<html>
<head><title>APC InRow Exporter (Version {version})</title></head>
<body>
<h1>APC InRow Exporter</h1>
<p><a href="{path}">Metrics</a></p>
</body>
</html>"#,
        version = VERSION,
        path = state.config.metrics_path,
    ))
}
