// Display formatters shared by the TUI components

use unicode_width::UnicodeWidthStr;

/// Format a number compactly with K/M suffixes (axis labels)
///
/// # Examples
/// ```ignore
/// assert_eq!(format_compact_number(954_356.0), "954K");
/// assert_eq!(format_compact_number(1_500_000.0), "1.5M");
/// assert_eq!(format_compact_number(42.0), "42");
/// ```
pub fn format_compact_number(n: f64) -> String {
    let abs = n.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.0}K", (n / 1_000.0).trunc())
    } else {
        format!("{:.0}", n)
    }
}

/// Mask a secret for display, one bullet per character
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}

/// Pad `text` with spaces to `width` terminal columns
pub fn pad_to(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}

/// Terminal rows `text` occupies when wrapped at `width` columns
pub fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    text.width().div_ceil(width).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_numbers() {
        assert_eq!(format_compact_number(954_356.0), "954K");
        assert_eq!(format_compact_number(1_500_000.0), "1.5M");
        assert_eq!(format_compact_number(42.4), "42");
        assert_eq!(format_compact_number(-2_500.0), "-2K");
    }

    #[test]
    fn masking_hides_every_character() {
        assert_eq!(mask("sk-abc"), "••••••");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn padding_respects_display_width() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        assert_eq!(pad_to("abcdef", 4), "abcdef");
        assert_eq!(pad_to("日本", 5), "日本 ");
    }

    #[test]
    fn wrapping_counts_rows() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("0123456789", 10), 1);
        assert_eq!(wrapped_rows("0123456789a", 10), 2);
    }
}
