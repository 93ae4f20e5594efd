use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Fit `s` into `max_width` columns, marking a cut with "..."
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let Some(budget) = max_width.checked_sub(ELLIPSIS.len()).filter(|b| *b > 0) else {
        return s.chars().take(max_width).collect();
    };

    let mut used = 0;
    let kept: String = s
        .chars()
        .take_while(|c| {
            used += UnicodeWidthChar::width(*c).unwrap_or(0);
            used <= budget
        })
        .collect();
    kept + ELLIPSIS
}
