//! Server-rendered HTML pages.

use crate::models::item::{Item, MAX_TEXT_LEN};
use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attributes.
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

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:36rem;margin:2rem auto;padding:0 1rem}\
ul.items{list-style:none;padding:0}\
ul.items li{display:flex;gap:.5rem;align-items:baseline;padding:.25rem 0}\
li.done .text{text-decoration:line-through;color:#777}\
.meta{font-size:.8rem;color:#666}\
.flashes{background:#fff7d6;padding:.5rem 1.5rem;border-radius:4px}\
form.inline{display:inline}";

fn layout(title: &str, flashes: &[String], body: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
        escape(title),
        STYLE
    );

    if !flashes.is_empty() {
        html.push_str("<ul class=\"flashes\">\n");
        for msg in flashes {
            let _ = writeln!(html, "<li>{}</li>", escape(msg));
        }
        html.push_str("</ul>\n");
    }

    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

pub fn login_page(flashes: &[String]) -> String {
    let body = "<h1>Shopping list</h1>\n\
        <form method=\"post\" action=\"/login\">\n\
        <label for=\"name\">Your name</label>\n\
        <input id=\"name\" name=\"name\" autofocus required>\n\
        <button type=\"submit\">Log in</button>\n\
        </form>\n";
    layout("Log in", flashes, body)
}

pub fn list_page(username: &str, items: &[Item], flashes: &[String]) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        "<h1>Shopping list</h1>\n\
         <p>Logged in as <strong>{}</strong> &middot; <a href=\"/logout\">Log out</a></p>\n\
         <form method=\"post\" action=\"/items/add\">\n\
         <input name=\"text\" maxlength=\"{}\" placeholder=\"Add an item\" autofocus>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
        escape(username),
        MAX_TEXT_LEN
    );

    if items.is_empty() {
        body.push_str("<p class=\"empty\">Nothing on the list.</p>\n");
    } else {
        body.push_str("<ul class=\"items\">\n");
        for item in items {
            render_item(&mut body, item);
        }
        body.push_str("</ul>\n");
    }

    if items.iter().any(|i| i.done) {
        body.push_str(
            "<form method=\"post\" action=\"/items/clear_done\">\n\
             <button type=\"submit\">Clear completed</button>\n\
             </form>\n",
        );
    }

    layout("Shopping list", flashes, &body)
}

fn render_item(out: &mut String, item: &Item) {
    let (class, button) = if item.done {
        ("done", "Undo")
    } else {
        ("open", "Done")
    };

    let _ = write!(
        out,
        "<li class=\"{class}\">\
         <form class=\"inline\" method=\"post\" action=\"/items/{id}/toggle\">\
         <button type=\"submit\">{button}</button></form>\
         <span class=\"text\">{text}</span>\
         <span class=\"meta\">added by {added_by} at {created}",
        id = item.id,
        text = escape(&item.text),
        added_by = escape(&item.added_by),
        created = item.created_at_str(),
    );

    if let (Some(by), Some(at)) = (&item.done_by, item.done_at_str()) {
        let _ = write!(out, "; done by {} at {}", escape(by), at);
    }

    out.push_str("</span></li>\n");
}

pub fn error_page(status: u16, reason: &str) -> String {
    let body = format!(
        "<h1>{status} {}</h1>\n<p><a href=\"/list\">Back to the list</a></p>\n",
        escape(reason)
    );
    layout(reason, &[], &body)
}
