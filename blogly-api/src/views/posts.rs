use super::{escape, layout, post_button, text_input};
use axum::response::Html;
use blogly_shared::models::{person::Person, post::Post, tag::Tag};
use std::fmt::Write;

const CREATED_AT_FORMAT: &str = "%a %b %-d %Y, %-I:%M %p";

pub fn detail(post: &Post, author: &Person, tags: &[Tag]) -> Html<String> {
    let mut body = format!(
        "<h1>{title}</h1>\n<p>{content}</p>\n<p><i>By <a href=\"/{author_id}\">{author}</a> on {created}</i></p>\n",
        title = escape(&post.title),
        content = escape(&post.content),
        author_id = author.id,
        author = escape(&author.full_name()),
        created = post.created_at.format(CREATED_AT_FORMAT),
    );

    if !tags.is_empty() {
        body.push_str("<p>Tags:");
        for tag in tags {
            let _ = write!(body, r#" <a href="/tags/{}">{}</a>"#, tag.id, escape(&tag.name));
        }
        body.push_str("</p>\n");
    }

    let _ = writeln!(
        body,
        "<p><a href=\"/{}\">Cancel</a> <a href=\"/posts/{}/edit\">Edit</a> {}</p>",
        author.id,
        post.id,
        post_button(&format!("/posts/{}/delete", post.id), "Delete"),
    );

    layout(&post.title, &body)
}

pub fn new_form(author: &Person, tags: &[Tag]) -> Html<String> {
    let body = format!(
        "<h2>Add post for {author}</h2>\n<form method=\"POST\" action=\"/{id}/posts/new\">\n{title}\n{content}\n{tags}<a href=\"/{id}\">Cancel</a> <button type=\"submit\">Add</button>\n</form>\n",
        author = escape(&author.full_name()),
        id = author.id,
        title = text_input("title", "Title", ""),
        content = content_input(""),
        tags = tag_checkboxes(tags, &[]),
    );

    layout("Add post", &body)
}

pub fn edit_form(post: &Post, tags: &[Tag], selected: &[Tag]) -> Html<String> {
    let body = format!(
        "<h2>Edit post</h2>\n<form method=\"POST\" action=\"/posts/{id}/edit\">\n{title}\n{content}\n{tags}<a href=\"/posts/{id}\">Cancel</a> <button type=\"submit\">Save</button>\n</form>\n",
        id = post.id,
        title = text_input("title", "Title", &post.title),
        content = content_input(&post.content),
        tags = tag_checkboxes(tags, selected),
    );

    layout(&format!("Edit {}", post.title), &body)
}

fn content_input(value: &str) -> String {
    format!(
        r#"<p><label for="content">Post content</label> <textarea id="content" name="content">{}</textarea></p>"#,
        escape(value)
    )
}

fn tag_checkboxes(tags: &[Tag], selected: &[Tag]) -> String {
    let mut out = String::new();
    for tag in tags {
        let checked = if selected.iter().any(|s| s.id == tag.id) {
            " checked"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            r#"<p><input type="checkbox" id="tag_{id}" name="tags" value="{name}"{checked}> <label for="tag_{id}">{name}</label></p>"#,
            id = tag.id,
            name = escape(&tag.name),
            checked = checked,
        );
    }
    out
}
