// src/templates/layout.rs
use super::html_escape;

/// `head_extra` is inserted verbatim into `<head>`; callers escape what they put there.
pub fn render_page_with_head(title: &str, content: &str, head_extra: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - Signup Portal</title>
    <link rel="stylesheet" href="/static/css/main.css">
    {}
</head>
<body>
    <main class="main">
        {}
    </main>
</body>
</html>"#,
        html_escape(title),
        head_extra,
        content
    )
}
