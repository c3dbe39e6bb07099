//! Identifier-safe names for interpolated expressions.
//!
//! A slug names the `%{...}` placeholder that replaces an expression in the
//! extracted string, and the keyword argument passed to `I18n.t`.

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());
static GROUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)|\[[^\]]*\]").unwrap());
static NON_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());
static UNDERSCORE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%\{[^}]*\}").unwrap());

/// Maximum number of words kept by [`suggest_key`].
const SUGGESTED_KEY_WORDS: usize = 4;

/// Returns true if `expression` is a plain Ruby identifier.
pub fn is_identifier(expression: &str) -> bool {
    IDENTIFIER_REGEX.is_match(expression)
}

/// Derive a placeholder name from an (already trimmed) expression.
///
/// Plain identifiers are returned verbatim so natural variable names survive.
/// Anything else has its `(...)` and `[...]` groups dropped, every character
/// outside `[A-Za-z0-9_]` turned into `_`, underscore runs collapsed, edges
/// trimmed and the result lowercased.
///
/// The result may be empty for input such as `"()"`; callers pick a
/// positional fallback in that case.
///
/// ```
/// use lexi::core::slug::slugify;
///
/// assert_eq!(slugify("userName"), "userName");
/// assert_eq!(slugify("Foo.method(:attribute)"), "foo_method");
/// assert_eq!(slugify("foo == :bar ? 'lorem' : 'ipsum'"), "foo_bar_lorem_ipsum");
/// ```
pub fn slugify(expression: &str) -> String {
    if is_identifier(expression) {
        return expression.to_string();
    }

    let without_groups = GROUP_REGEX.replace_all(expression, "");
    let underscored = NON_WORD_REGEX.replace_all(&without_groups, "_");
    let collapsed = UNDERSCORE_RUN_REGEX.replace_all(&underscored, "_");
    collapsed.trim_matches('_').to_lowercase()
}

/// Suggest a key suffix for an extracted string.
///
/// Placeholders are dropped and the first few words of the remaining text are
/// slugged, e.g. `"Welcome back, %{name}!"` becomes `welcome_back`. Falls back
/// to `text` when nothing usable is left.
pub fn suggest_key(value: &str) -> String {
    let without_placeholders = PLACEHOLDER_REGEX.replace_all(value, " ");
    let underscored = NON_WORD_REGEX.replace_all(&without_placeholders, "_");
    let words: Vec<&str> = underscored
        .split('_')
        .filter(|word| !word.is_empty())
        .take(SUGGESTED_KEY_WORDS)
        .collect();

    if words.is_empty() {
        "text".to_string()
    } else {
        words.join("_").to_lowercase()
    }
}
