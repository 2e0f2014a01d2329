//! Hand-built HTML pages. Deliberately template-free: user content is
//! interpolated through `esc` only, so nothing a visitor stores can
//! reach any kind of template evaluation.

use crate::data::DocumentInfo;

pub(super) fn index(
    username: &str,
    flash: Option<&str>,
    documents: &[DocumentInfo],
) -> String {
    let mut rows = String::new();
    for document in documents {
        rows.push_str(&format!(
            concat!(
                "<li><a href=\"{view}\">{name}</a> ",
                "<a href=\"{edit}\">edit</a> ",
                "<form class=\"inline\" method=\"post\" action=\"{delete}\">",
                "<button type=\"submit\">delete</button>",
                "</form></li>\n",
            ),
            name = esc(&document.name),
            view = document.view_url(),
            edit = document.edit_url(),
            delete = document.delete_url(),
        ));
    }
    let body = format!(
        concat!(
            "{flash}",
            "<p>Signed in as {username}.</p>\n",
            "<ul>\n{rows}</ul>\n",
            "<p><a href=\"/new\">New Document</a></p>\n",
            "<form method=\"post\" action=\"/users/logout\">",
            "<button type=\"submit\">Sign Out</button>",
            "</form>\n",
        ),
        flash = flash_block(flash),
        username = esc(username),
        rows = rows,
    );
    layout("Documents", &body)
}

pub(super) fn welcome(flash: Option<&str>) -> String {
    let body = format!(
        concat!(
            "{flash}",
            "<p><a href=\"/users/login\">Sign In</a> to manage documents.</p>\n",
        ),
        flash = flash_block(flash),
    );
    layout("Welcome", &body)
}

pub(super) fn edit_document(name: &str, content: &str) -> String {
    let body = format!(
        concat!(
            "<h1>Edit {name}</h1>\n",
            "<form method=\"post\" action=\"/{name}/edit\">\n",
            "<textarea name=\"content\" rows=\"20\" cols=\"80\">{content}</textarea>\n",
            "<p><button type=\"submit\">Save Changes</button></p>\n",
            "</form>\n",
        ),
        name = esc(name),
        content = esc(content),
    );
    layout("Edit Document", &body)
}

pub(super) fn new_document(error: Option<&str>, name_value: &str) -> String {
    let body = format!(
        concat!(
            "{error}",
            "<h1>Add a new document</h1>\n",
            "<form method=\"post\" action=\"/new\">\n",
            "<label>Name: <input type=\"text\" name=\"name\" value=\"{name}\"></label>\n",
            "<p><button type=\"submit\">Create</button></p>\n",
            "</form>\n",
        ),
        error = error_block(error),
        name = esc(name_value),
    );
    layout("New Document", &body)
}

pub(super) fn login(error: Option<&str>, username_value: &str) -> String {
    let body = format!(
        concat!(
            "{error}",
            "<h1>Sign In</h1>\n",
            "<form method=\"post\" action=\"/users/login\">\n",
            "<label>Username: <input type=\"text\" name=\"username\" value=\"{username}\"></label>\n",
            "<label>Password: <input type=\"password\" name=\"password\"></label>\n",
            "<p><button type=\"submit\">Sign In</button></p>\n",
            "</form>\n",
        ),
        error = error_block(error),
        username = esc(username_value),
    );
    layout("Sign In", &body)
}

pub(super) fn server_error() -> String {
    layout("Error", "<p>Something went wrong on our side.</p>\n")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html><head><meta charset=\"utf-8\">",
            "<title>{title} - flatcms</title></head>\n",
            "<body>\n{body}</body></html>\n",
        ),
        title = esc(title),
        body = body,
    )
}

fn flash_block(flash: Option<&str>) -> String {
    match flash {
        Some(message) => format!("<p class=\"flash\">{}</p>\n", esc(message)),
        None => String::new(),
    }
}

fn error_block(error: Option<&str>) -> String {
    match error {
        Some(message) => format!("<p class=\"error\">{}</p>\n", esc(message)),
        None => String::new(),
    }
}

fn esc(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
