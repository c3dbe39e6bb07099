use super::extract::PlaceholderMap;

/// Build the `I18n.t` call for `key`.
///
/// Each placeholder becomes a keyword argument in map order. Expressions
/// containing a `.` are passed through (`slug: Foo.bar(:x)`), as are those
/// whose slug was renamed by the map (`name_2: name`, `arg2: []`). Anything
/// else is assumed to be a local named like the slug (`slug: slug`).
///
/// ```
/// use lexi::core::{call::build_call, extract::PlaceholderMap};
///
/// let map: PlaceholderMap = [("name", "name"), ("foo_bar", "Foo.bar")].into_iter().collect();
/// assert_eq!(build_call("users.show.title", &PlaceholderMap::new()), "I18n.t('users.show.title')");
/// assert_eq!(
///     build_call("users.show.title", &map),
///     "I18n.t('users.show.title', name: name, foo_bar: Foo.bar)"
/// );
/// ```
pub fn build_call(key: &str, placeholders: &PlaceholderMap) -> String {
    if placeholders.is_empty() {
        return format!("I18n.t('{}')", key);
    }

    let arguments: Vec<String> = placeholders
        .iter()
        .map(|(slug, expression)| {
            if expression.contains('.') || placeholders.is_renamed(slug) {
                format!("{}: {}", slug, expression)
            } else {
                format!("{}: {}", slug, slug)
            }
        })
        .collect();

    format!("I18n.t('{}', {})", key, arguments.join(", "))
}

/// Wrap a call so it renders in ERB markup.
pub fn wrap_erb_output(call: &str) -> String {
    format!("<%= {} %>", call)
}
