use serde::{Deserialize, Serialize};

/// Team colours resolved by the caller (e.g. from an emblem/colour lookup)
/// and injected into the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// CSS class applied to every marker dot
    pub class_name: String,
    /// Dot fill colour
    pub primary: String,
    /// Dot border colour
    pub secondary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("team-default", "#1f2937", "#ffffff")
    }
}

impl Theme {
    pub fn new(
        class_name: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            class_name: css_safe_class(&class_name.into()),
            primary: css_safe_color(&primary.into()),
            secondary: css_safe_color(&secondary.into()),
        }
    }
}

fn css_safe_class(raw: &str) -> String {
    let mut sanitized = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-') {
            sanitized.push(ch);
        } else {
            sanitized.push('-');
        }
    }
    if sanitized.is_empty() {
        sanitized.push_str("team-default");
    }
    sanitized
}

/// Accepts hex colours and plain colour keywords; anything else becomes
/// `currentColor` so a bad lookup never breaks the style attribute.
fn css_safe_color(raw: &str) -> String {
    let raw = raw.trim();
    let is_hex = raw.len() > 1
        && raw.len() <= 9
        && raw.starts_with('#')
        && raw[1..].chars().all(|c| c.is_ascii_hexdigit());
    let is_keyword = !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphabetic());

    if is_hex || is_keyword {
        raw.to_string()
    } else {
        "currentColor".to_string()
    }
}
