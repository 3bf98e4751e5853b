//! HTML shown in a facility's info window.

use crate::location::EmergencyLocation;

/// Name heading, then address and contact lines when present.
pub fn info_window_html(location: &EmergencyLocation) -> String {
    let mut html = String::from(r#"<div class="fg-info-window">"#);
    html.push_str(&format!("<h3>{}</h3>", escape_html(location.name)));
    if let Some(address) = location.address {
        html.push_str(&format!(
            r#"<p class="fg-info-address">{}</p>"#,
            escape_html(address)
        ));
    }
    if let Some(contact) = location.contact {
        html.push_str(&format!(
            r#"<p class="fg-info-contact">{}</p>"#,
            escape_html(contact)
        ));
    }
    html.push_str("</div>");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
