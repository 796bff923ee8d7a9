//! Escaping for the active display surface.

use std::borrow::Cow;

use wopr_core::enums::DisplaySurface;

/// Characters with syntactic meaning on a markup surface.
const MARKUP_SPECIAL: [char; 3] = ['[', ']', '\\'];

/// Append `ch` to `out`, escaped for `surface`.
pub fn push_escaped(surface: DisplaySurface, ch: char, out: &mut String) {
    if surface == DisplaySurface::Markup && MARKUP_SPECIAL.contains(&ch) {
        out.push('\\');
    }
    out.push(ch);
}

/// Escape a whole string for `surface`. Borrows when nothing changes.
pub fn escape_text(surface: DisplaySurface, text: &str) -> Cow<'_, str> {
    if surface == DisplaySurface::Plain || !text.contains(MARKUP_SPECIAL) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        push_escaped(surface, ch, &mut out);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_untouched() {
        let text = "[MOSCOW] \\ ok";
        assert!(matches!(
            escape_text(DisplaySurface::Plain, text),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_markup_escapes_brackets_and_backslash() {
        let escaped = escape_text(DisplaySurface::Markup, "[a]\\b");
        assert_eq!(escaped, "\\[a\\]\\\\b");
    }

    #[test]
    fn test_markup_borrows_clean_text() {
        assert!(matches!(
            escape_text(DisplaySurface::Markup, "NO SPECIALS"),
            Cow::Borrowed(_)
        ));
    }
}
