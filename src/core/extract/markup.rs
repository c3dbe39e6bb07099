use std::sync::LazyLock;

use super::{Grammar, RegexMatcher, Rule};

/// `<% ... %>` or `<%= ... %>`, inner text without `%`.
const ERB_TAG_PATTERN: &str = r"<%=?\s*([^%]+?)\s*%>";

pub(super) static MARKUP_GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        "markup",
        Box::new(RegexMatcher::new(ERB_TAG_PATTERN).unwrap()),
        &[Rule::BarePath, Rule::ClassCall, Rule::Expression],
    )
});
