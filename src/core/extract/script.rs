use std::sync::LazyLock;

use super::{Grammar, RegexMatcher, Rule};

/// `#{ ... }` with no nested braces.
const INTERPOLATION_PATTERN: &str = r"#\{([^}]+)\}";

pub(super) static SCRIPT_GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        "script",
        Box::new(RegexMatcher::new(INTERPOLATION_PATTERN).unwrap()),
        &[Rule::ClassCall, Rule::Expression],
    )
});
