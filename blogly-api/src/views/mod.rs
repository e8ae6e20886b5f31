/// HTML views
///
/// Pages are assembled from small string builders; every value that came
/// from the database or a form goes through [`escape`] before it is
/// written into markup.
///
/// - `people`: person list, detail and forms
/// - `posts`: post detail and forms
/// - `tags`: tag list, detail and forms

pub mod people;
pub mod posts;
pub mod tags;

use crate::error::ValidationErrorDetail;
use axum::{http::StatusCode, response::Html};
use std::fmt::Write;

/// Escapes text for use in element content and quoted attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a page body in the shared document shell
pub(crate) fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} - Blogly</title>
</head>
<body>
  <nav><a href="/">People</a> | <a href="/tags">Tags</a></nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    ))
}

/// `<form method="POST">` wrapping a single submit button
pub(crate) fn post_button(action: &str, label: &str) -> String {
    format!(
        r#"<form method="POST" action="{}" class="inline"><button type="submit">{}</button></form>"#,
        escape(action),
        escape(label)
    )
}

/// Labelled text input
pub(crate) fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<p><label for="{name}">{label}</label> <input type="text" id="{name}" name="{name}" value="{value}"></p>"#,
        name = escape(name),
        label = escape(label),
        value = escape(value),
    )
}

pub fn error_page(status: StatusCode, message: &str, details: &[ValidationErrorDetail]) -> Html<String> {
    let heading = status.canonical_reason().unwrap_or("Error");

    let mut body = format!("<h1>{}</h1>\n<p>{}</p>\n", escape(heading), escape(message));
    if !details.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for detail in details {
            let _ = writeln!(
                body,
                "<li><strong>{}</strong>: {}</li>",
                escape(&detail.field),
                escape(&detail.message)
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/\">Back to people</a></p>\n");

    layout(heading, &body)
}
