//! Server-side HTML rendering. Handlers stay thin; every page is built here
//! from small Bootstrap-flavored helpers and returned as a plain `String`.

pub mod auth;
pub mod details;
pub mod forms;
pub mod lists;

use crate::db::models::EntityKind;
use std::fmt::Write;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"{BOOTSTRAP_CSS}\">\n\
         </head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Labeled `<input>` inside the usual `mb-3` wrapper.
pub fn input_field(kind: &str, label: &str, name: &str, value: &str, placeholder: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<div class=\"mb-3\"><label class=\"form-label\">{}</label>\
         <input type=\"{kind}\" class=\"form-control\" name=\"{name}\"",
        escape(label)
    );
    if !value.is_empty() {
        let _ = write!(html, " value=\"{}\"", escape(value));
    }
    if !placeholder.is_empty() {
        let _ = write!(html, " placeholder=\"{}\"", escape(placeholder));
    }
    html.push_str("></div>");
    html
}

pub fn textarea_field(label: &str, name: &str, value: &str) -> String {
    format!(
        "<div class=\"mb-3\"><label class=\"form-label\">{}</label>\
         <textarea class=\"form-control\" name=\"{name}\" rows=\"3\">{}</textarea></div>",
        escape(label),
        escape(value)
    )
}

pub fn file_field(label: &str, name: &str) -> String {
    format!(
        "<div class=\"mb-3\"><label class=\"form-label\">{}</label>\
         <input type=\"file\" class=\"form-control\" name=\"{name}\"></div>",
        escape(label)
    )
}

pub fn submit_button(caption: &str) -> String {
    format!(
        "<button type=\"submit\" class=\"btn btn-primary mt-3\">{}</button>",
        escape(caption)
    )
}

/// Entity chooser page: one card per browsable kind.
pub fn select_entity_page() -> String {
    let mut cards = String::new();
    for kind in [
        EntityKind::City,
        EntityKind::Unit,
        EntityKind::Building,
        EntityKind::District,
    ] {
        let _ = write!(
            cards,
            "<div class=\"col\"><div class=\"card h-100 text-center\">\
             <img class=\"card-img-top mx-auto d-block\" src=\"/static/{kind}.png\" \
             alt=\"{title} Image\" style=\"width: 40%; height: auto;\">\
             <div class=\"card-body\"><h5 class=\"card-title\">{title}</h5>\
             <a href=\"/entities/{kind}\" class=\"btn btn-primary mt-2\">View {title}</a>\
             </div></div></div>",
            kind = kind.as_str(),
            title = kind.title(),
        );
    }

    let body = format!(
        "<div class=\"container mt-5\">\
         <h1 class=\"mb-4 text-center\">Choose an Entity</h1>\
         <div class=\"row row-cols-1 row-cols-md-2 g-4\">{cards}</div>\
         </div>"
    );
    layout("Select Entity", &body)
}
