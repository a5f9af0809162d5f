use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]").unwrap());
static NON_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z ]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Cleans up a handwritten recipe name, e.g. `"meatball_-_spaghetti"` becomes
/// `"Meatball Spaghetti"`. Returns `None` when nothing usable is left.
pub fn normalize_name(raw: &str) -> Option<String> {
    let spaced = SEPARATORS.replace_all(raw, " ");
    let letters = NON_LETTERS.replace_all(&spaced, "");
    let collapsed = WHITESPACE.replace_all(&letters, " ");
    let trimmed = collapsed.trim();

    if trimmed.is_empty() {
        return None;
    }

    Some(
        trimmed
            .split(' ')
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
