use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Joalda Fashion</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link href="https://fonts.googleapis.com/css2?family=Raleway:wght@300;400;600&display=swap" rel="stylesheet">
    <link href="https://fonts.googleapis.com/icon?family=Material+Icons" rel="stylesheet">
    <style>
      body {
        margin: 0;
        font-family: 'Raleway', 'Garamond', serif;
      }
    </style>
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

/// UI shell, served at `/` and for every path nothing else claims.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
