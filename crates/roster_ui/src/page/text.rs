//! Plain-text projection of the page for terminals and logs.

use std::fmt::Write as _;

use super::{controls::FeedbackMessage, element::Element, SelectControl};

pub fn render_list(list: &Element) -> String {
    let mut out = String::new();
    for child in &list.children {
        write_element(child, 0, &mut out);
    }
    out
}

fn write_element(element: &Element, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    if element.has_class("participants-header") {
        let title = element
            .find("participants-title")
            .and_then(|title| title.text.as_deref())
            .unwrap_or_default();
        let count = element
            .find("participant-count")
            .and_then(|count| count.text.as_deref())
            .unwrap_or_default();
        let _ = writeln!(out, "{indent}{title} ({count})");
        return;
    }

    match element.tag {
        "li" => {
            let _ = writeln!(out, "{indent}- {}", list_item_text(element));
        }
        "h4" => {
            let _ = writeln!(out, "{indent}== {} ==", element.text_content());
        }
        "ul" => {
            for child in &element.children {
                write_element(child, depth + 1, out);
            }
        }
        _ => {
            if let Some(text) = element.text.as_deref() {
                let _ = writeln!(out, "{indent}{text}");
            }
            for child in &element.children {
                write_element(child, depth, out);
            }
        }
    }
}

fn list_item_text(item: &Element) -> String {
    match (item.find("avatar-badge"), item.find("participant-name")) {
        (Some(avatar), Some(name)) => format!(
            "[{}] {}",
            avatar.text.as_deref().unwrap_or_default(),
            name.text.as_deref().unwrap_or_default()
        ),
        _ => item.text_content(),
    }
}

pub fn render_select(select: &SelectControl) -> String {
    let labels: Vec<&str> = select.choices().map(|option| option.label.as_str()).collect();
    labels.join(", ")
}

/// `None` while the message area is hidden.
pub fn render_feedback(message: &FeedbackMessage) -> Option<String> {
    message
        .visible
        .then(|| format!("[{}] {}", message.kind.css_class(), message.text))
}
