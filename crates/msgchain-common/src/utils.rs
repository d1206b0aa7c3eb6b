//! Message-context key helpers and small string utilities.

/// Separator placed between a message context and its key, as in GNU gettext.
pub const CONTEXT_GLUE: &str = "\u{4}";

/// Builds the lookup key for a message with a disambiguating context.
pub fn glue_context(context: &str, key: &str, glue: &str) -> String {
    let mut glued = String::with_capacity(context.len() + glue.len() + key.len());
    glued.push_str(context);
    glued.push_str(glue);
    glued.push_str(key);
    glued
}

/// Splits a glued key back into its context and key.
///
/// Keys without the glue have no context.
pub fn split_context<'a>(glued: &'a str, glue: &str) -> (Option<&'a str>, &'a str) {
    if glue.is_empty() {
        return (None, glued);
    }
    match glued.split_once(glue) {
        Some((context, key)) => (Some(context), key),
        None => (None, glued),
    }
}

/// Truncates a string to at most `max_chars` characters, appending an
/// ellipsis when anything was cut. Safe on multi-byte input.
pub fn truncate_for_log(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glue_context() {
        assert_eq!(glue_context("menu", "File", CONTEXT_GLUE), "menu\u{4}File");
        assert_eq!(glue_context("", "File", CONTEXT_GLUE), "\u{4}File");
    }

    #[test]
    fn test_split_context() {
        assert_eq!(
            split_context("menu\u{4}File", CONTEXT_GLUE),
            (Some("menu"), "File")
        );
        assert_eq!(split_context("File", CONTEXT_GLUE), (None, "File"));
        assert_eq!(split_context("a|b", ""), (None, "a|b"));
    }

    #[test]
    fn test_truncate_for_log() {
        let input = "This is a very long string that should be truncated";
        assert_eq!(truncate_for_log(input, 20), "This is a very lo...");
        assert_eq!(truncate_for_log("Short", 20), "Short");
        assert_eq!(truncate_for_log("Dateienübersicht", 8), "Datei...");
    }
}
