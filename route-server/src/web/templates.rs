//! Askama templates for the web frontend.

use askama::Template;

/// Home page with the search form.
///
/// Results are fetched by `static/app.js` from `POST /search` and rendered
/// client-side.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;
