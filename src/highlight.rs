//! HTML-safe escaping and single-character error highlighting.

const FOCUS_OPEN: &str = "<span class=\"bg-red-500/35 rounded-sm\">";
const FOCUS_CLOSE: &str = "</span>";

/// Escape the five HTML-significant characters. Ampersand first.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

/// Escaped markup for `text` with exactly one character highlighted.
///
/// Without a position the escaped text is returned verbatim, or a single
/// non-breaking space when empty; callers never receive an empty renderable
/// region. With a position, it is clamped into `[0, max(0, len-1)]` and the
/// character there (or a placeholder space at end-of-text) is wrapped in the
/// highlight marker.
pub fn build_error_highlight(text: &str, position: Option<usize>) -> String {
    let Some(position) = position else {
        let safe = escape_html(text);
        return if safe.is_empty() { "&nbsp;".to_string() } else { safe };
    };

    let chars: Vec<char> = text.chars().collect();
    let pos = position.min(chars.len().saturating_sub(1));

    let before: String = chars[..pos.min(chars.len())].iter().collect();
    let focus = chars.get(pos).copied().unwrap_or(' ');
    let after: String = chars.get(pos + 1..).map(|rest| rest.iter().collect()).unwrap_or_default();

    format!(
        "{}{}{}{}{}",
        escape_html(&before),
        FOCUS_OPEN,
        escape_html(&focus.to_string()),
        FOCUS_CLOSE,
        escape_html(&after),
    )
}
