use super::{escape, layout, post_button, text_input};
use axum::response::Html;
use blogly_shared::models::{post::Post, tag::Tag};
use std::fmt::Write;

pub fn list(tags: &[Tag]) -> Html<String> {
    let mut body = String::from("<h1>Tags</h1>\n<ul>\n");
    for tag in tags {
        let _ = writeln!(
            body,
            r#"<li><a href="/tags/{}">{}</a></li>"#,
            tag.id,
            escape(&tag.name)
        );
    }
    body.push_str("</ul>\n<p><a href=\"/tags/new\">Add tag</a></p>\n");

    layout("Tags", &body)
}

pub fn detail(tag: &Tag, posts: &[Post]) -> Html<String> {
    let mut body = format!("<h1>{}</h1>\n<ul>\n", escape(&tag.name));
    for post in posts {
        let _ = writeln!(
            body,
            r#"<li><a href="/posts/{}">{}</a></li>"#,
            post.id,
            escape(&post.title)
        );
    }
    let _ = writeln!(
        body,
        "</ul>\n<p><a href=\"/tags/{}/edit\">Edit</a> {}</p>",
        tag.id,
        post_button(&format!("/tags/{}/delete", tag.id), "Delete"),
    );

    layout(&tag.name, &body)
}

pub fn new_form() -> Html<String> {
    let body = format!(
        "<h2>Create a tag</h2>\n<form method=\"POST\" action=\"/tags/new\">\n{}\n<a href=\"/tags\">Cancel</a> <button type=\"submit\">Add</button>\n</form>\n",
        text_input("name", "Name", ""),
    );

    layout("Create tag", &body)
}

pub fn edit_form(tag: &Tag) -> Html<String> {
    let body = format!(
        "<h2>Edit a tag</h2>\n<form method=\"POST\" action=\"/tags/{id}/edit\">\n{input}\n<a href=\"/tags\">Cancel</a> <button type=\"submit\">Save</button>\n</form>\n",
        id = tag.id,
        input = text_input("name", "Name", &tag.name),
    );

    layout(&format!("Edit {}", tag.name), &body)
}
