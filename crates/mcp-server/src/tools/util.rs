/// First `max_chars` characters of `text`, with `...` when cut
pub(super) fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Bullet list, or `- None` when empty
pub(super) fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "- None\n".to_string();
    }
    items.iter().map(|item| format!("- {item}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_cuts_on_char_boundaries() {
        assert_eq!(preview("héllo", 2), "hé...");
        assert_eq!(preview("short", 200), "short");
        assert_eq!(preview("exact", 5), "exact");
    }

    #[test]
    fn bullet_list_marks_empty() {
        assert_eq!(bullet_list(&[]), "- None\n");
        assert_eq!(
            bullet_list(&["a.gd".to_string(), "b.gd".to_string()]),
            "- a.gd\n- b.gd\n"
        );
    }
}
