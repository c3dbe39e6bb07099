//! Interpolation extraction.
//!
//! Turns a selected span such as `Hello #{user.name}` into the placeholder
//! text `Hello %{user_name}` plus the ordered map of placeholders needed to
//! build the `I18n.t` call.
//!
//! Both supported grammars are shallow pattern matches, not parsers: nested or
//! unbalanced delimiters and delimiters inside string literals are not handled.
//! Each grammar is a [`Matcher`] that finds the embedded regions, followed by a
//! prioritized list of [`Rule`]s tried on every captured expression.
//!
//! - `script`: Ruby string interpolation, `#{ ... }`
//! - `markup`: ERB tags, `<% ... %>` and `<%= ... %>`

mod markup;
mod placeholders;
mod script;

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

use super::slug::{is_identifier, slugify};

pub use placeholders::{Placeholder, PlaceholderMap};

static CLASS_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]\w*(?:::[A-Z]\w*)*)\.([A-Za-z_]\w*[?!]?)\(([^)]*)\)$").unwrap()
});
static BARE_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]\w*(?:\.[A-Za-z_]\w*)*$").unwrap());

/// An embedded region found by a [`Matcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture<'t> {
    /// Byte range of the whole region, delimiters included.
    pub span: Range<usize>,
    /// Trimmed expression between the delimiters.
    pub expression: &'t str,
}

/// Finds embedded-expression regions in a text span.
///
/// Captures are returned left to right and never overlap.
pub trait Matcher: Send + Sync {
    fn scan<'t>(&self, text: &'t str) -> Vec<Capture<'t>>;
}

/// Matcher driven by a regex whose first group is the inner expression.
pub struct RegexMatcher {
    pattern: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Matcher for RegexMatcher {
    fn scan<'t>(&self, text: &'t str) -> Vec<Capture<'t>> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let inner = caps.get(1)?;
                Some(Capture {
                    span: whole.range(),
                    expression: inner.as_str().trim(),
                })
            })
            .collect()
    }
}

/// How a captured expression becomes a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `name` or `record.attribute`, kept as-is.
    BarePath,
    /// `Class::Path.method(args)`, slugged from the class path and method.
    ClassCall,
    /// Anything else, slugged by [`slugify`].
    Expression,
}

impl Rule {
    pub fn apply(self, expression: &str) -> Option<Placeholder> {
        match self {
            Rule::BarePath => {
                if !BARE_PATH_REGEX.is_match(expression) {
                    return None;
                }
                // A dotted path is not a valid placeholder or keyword name.
                let slug = if is_identifier(expression) {
                    expression.to_string()
                } else {
                    slugify(expression)
                };
                Some(Placeholder::new(slug, expression))
            }
            Rule::ClassCall => {
                let caps = CLASS_CALL_REGEX.captures(expression)?;
                let class_path = &caps[1];
                let method = &caps[2];
                let args = caps[3].trim();

                let slug = format!("{}_{}", class_path.replace("::", "_").to_lowercase(), method);
                let call = format!("{}.{}({})", class_path, method, args);
                Some(Placeholder::new(slug, call))
            }
            Rule::Expression => Some(Placeholder::new(slugify(expression), expression)),
        }
    }
}

/// A matcher plus the rules applied, in order, to each capture.
pub struct Grammar {
    name: &'static str,
    matcher: Box<dyn Matcher>,
    rules: &'static [Rule],
}

impl Grammar {
    pub fn new(name: &'static str, matcher: Box<dyn Matcher>, rules: &'static [Rule]) -> Self {
        Self {
            name,
            matcher,
            rules,
        }
    }

    /// Ruby string interpolation grammar.
    pub fn script() -> &'static Grammar {
        &script::SCRIPT_GRAMMAR
    }

    /// ERB tag grammar.
    pub fn markup() -> &'static Grammar {
        &markup::MARKUP_GRAMMAR
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// First matching rule wins; a bare expression is the last resort.
    fn resolve(&self, expression: &str) -> Placeholder {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(expression))
            .unwrap_or_else(|| Placeholder::new(slugify(expression), expression))
    }
}

/// Result of running a grammar over a text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Input text with every captured region replaced by `%{slug}`.
    pub text: String,
    pub placeholders: PlaceholderMap,
}

/// Replace every embedded region of `text` with a `%{slug}` placeholder.
///
/// The map is deduplicating but substitution is not: a repeated expression
/// yields one map entry and is replaced at every occurrence.
pub fn extract(text: &str, grammar: &Grammar) -> Extraction {
    let mut placeholders = PlaceholderMap::new();
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for capture in grammar.matcher.scan(text) {
        output.push_str(&text[cursor..capture.span.start]);
        let slug = placeholders.insert(grammar.resolve(capture.expression));
        output.push_str("%{");
        output.push_str(&slug);
        output.push('}');
        cursor = capture.span.end;
    }
    output.push_str(&text[cursor..]);

    Extraction {
        text: output,
        placeholders,
    }
}
