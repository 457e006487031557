//! Project-specific utilities live here.

/// Formats a shared log target prefix for project logs.
pub fn log_prefix(module: &str) -> String {
    format!("project::{module}")
}

/// Escape text for use inside an HTML element or a double-quoted attribute.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
