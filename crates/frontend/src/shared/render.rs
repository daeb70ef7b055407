//! Pure markup helpers for the few places that still build raw HTML fragments
//! (map overlays and other `inner_html` sinks).
//!
//! Anything that originates from user input must go through `escape_html`
//! before interpolation; fixed enumeration labels may skip it.

/// Maps the five HTML-sensitive characters to their entity equivalents.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Placeholder row shown instead of an empty table body.
pub fn placeholder_row(columns: usize, text: &str) -> String {
    format!(
        "<tr><td colspan=\"{columns}\" class=\"text-center\">{}</td></tr>",
        escape_html(text)
    )
}

/// Builds table-body markup from a list. Empty input produces exactly one
/// "no data" placeholder row; the row builder owns escaping of its fields.
pub fn table_rows_html<T>(items: &[T], columns: usize, row: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return placeholder_row(columns, "데이터가 없습니다.");
    }
    items.iter().map(row).collect()
}

/// `<li>` list of name/quantity pairs for the map overlay card.
pub fn item_lines_html(lines: &[(String, u32)]) -> String {
    if lines.is_empty() {
        return "<li class=\"overlay-item\">품목 없음</li>".to_string();
    }
    lines
        .iter()
        .map(|(name, quantity)| {
            format!(
                "<li class=\"overlay-item\">{}<span class=\"overlay-item__count\">{quantity}</span></li>",
                escape_html(name)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_sensitive_characters() {
        let escaped = escape_html(r#"<img src=x onerror='alert("&")'>"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        // every remaining & must be part of an entity
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#39;")
            );
        }
    }

    #[test]
    fn escape_is_identity_on_safe_text() {
        assert_eq!(escape_html("청소년수련관 201호"), "청소년수련관 201호");
    }

    #[test]
    fn empty_list_renders_single_placeholder_row() {
        let html = table_rows_html(&Vec::<i64>::new(), 4, |_| unreachable!());
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("데이터가 없습니다."));
        assert!(html.contains("colspan=\"4\""));
    }

    #[test]
    fn rows_are_deterministic() {
        let items = vec![1, 2];
        let render = |v: &i64| format!("<tr><td>{v}</td></tr>");
        assert_eq!(
            table_rows_html(&items, 1, render),
            table_rows_html(&items, 1, render)
        );
        assert_eq!(table_rows_html(&items, 1, render).matches("<tr>").count(), 2);
    }

    #[test]
    fn overlay_items_escape_names() {
        let html = item_lines_html(&[("침대<틀>".to_string(), 2)]);
        assert!(html.contains("침대&lt;틀&gt;"));
        assert!(html.contains("2"));
    }

    #[test]
    fn overlay_without_items_shows_placeholder() {
        assert!(item_lines_html(&[]).contains("품목 없음"));
    }
}
