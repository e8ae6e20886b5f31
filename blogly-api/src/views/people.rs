use super::{escape, layout, post_button, text_input};
use axum::response::Html;
use blogly_shared::models::{person::Person, post::Post};
use std::fmt::Write;

pub fn list(people: &[Person]) -> Html<String> {
    let mut body = String::from("<h1>People</h1>\n<ul>\n");
    for person in people {
        let _ = writeln!(
            body,
            r#"<li><a href="/{}">{}</a></li>"#,
            person.id,
            escape(&person.full_name())
        );
    }
    body.push_str("</ul>\n<p><a href=\"/new\">Add person</a></p>\n");

    layout("People", &body)
}

pub fn detail(person: &Person, posts: &[Post]) -> Html<String> {
    let mut body = format!(
        "<h1>{name}</h1>\n<img src=\"{image}\" alt=\"{name}\">\n<p><a href=\"/{id}/edit\">Edit</a> {delete}</p>\n",
        name = escape(&person.full_name()),
        image = escape(&person.image_url),
        id = person.id,
        delete = post_button(&format!("/{}/delete", person.id), "Delete"),
    );

    body.push_str("<h2>Posts</h2>\n<ul>\n");
    for post in posts {
        let _ = writeln!(
            body,
            r#"<li><a href="/posts/{}">{}</a></li>"#,
            post.id,
            escape(&post.title)
        );
    }
    let _ = write!(
        body,
        "</ul>\n<p><a href=\"/{}/posts/new\">Add post</a></p>\n",
        person.id
    );

    layout(&person.full_name(), &body)
}

pub fn new_form() -> Html<String> {
    let body = format!(
        "<h2>Add a new person</h2>\n<form method=\"POST\" action=\"/new\">\n{}\n{}\n{}\n<button type=\"submit\">Add</button>\n</form>\n",
        text_input("first_name", "First name", ""),
        text_input("last_name", "Last name", ""),
        text_input("image", "Image URL", ""),
    );

    layout("Add person", &body)
}

pub fn edit_form(person: &Person) -> Html<String> {
    let body = format!(
        "<h2>Edit a person</h2>\n<form method=\"POST\" action=\"/{id}/edit\">\n{}\n{}\n{}\n<a href=\"/{id}\">Cancel</a> <button type=\"submit\">Save</button>\n</form>\n",
        text_input("first_name", "First name", &person.first_name),
        text_input("last_name", "Last name", &person.last_name),
        text_input("image", "Image URL", &person.image_url),
        id = person.id,
    );

    layout(&format!("Edit {}", person.full_name()), &body)
}
