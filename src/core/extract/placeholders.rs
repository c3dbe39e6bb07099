/// A placeholder candidate produced by a grammar rule for one captured expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Preferred placeholder name. May be empty for pathological expressions.
    pub slug: String,
    /// Expression passed as the `I18n.t` argument value.
    pub expression: String,
}

impl Placeholder {
    pub fn new(slug: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            expression: expression.into(),
        }
    }
}

/// Ordered `slug -> expression` mapping for a single extraction.
///
/// Entries keep first-occurrence order. An expression seen twice reuses its
/// slug. A different expression whose slug is already taken gets the next free
/// numeric suffix (`name_2`, `name_3`, ...), so no entry is ever overwritten.
/// Such entries, and positional `argN` ones, are marked as renamed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    slug: String,
    expression: String,
    renamed: bool,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate and return the slug to use in the text.
    pub fn insert(&mut self, candidate: Placeholder) -> String {
        if let Some(slug) = self.slug_for(&candidate.expression) {
            return slug.to_string();
        }

        let base = if candidate.slug.is_empty() {
            format!("arg{}", self.entries.len() + 1)
        } else {
            candidate.slug.clone()
        };

        let mut slug = base.clone();
        let mut suffix = 2;
        while self.get(&slug).is_some() {
            slug = format!("{}_{}", base, suffix);
            suffix += 1;
        }

        self.entries.push(Entry {
            renamed: slug != candidate.slug,
            slug: slug.clone(),
            expression: candidate.expression,
        });
        slug
    }

    /// Expression registered under `slug`.
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.entry(slug).map(|entry| entry.expression.as_str())
    }

    /// Whether `slug` is not the name its rule proposed.
    pub fn is_renamed(&self, slug: &str) -> bool {
        self.entry(slug).is_some_and(|entry| entry.renamed)
    }

    fn entry(&self, slug: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.slug == slug)
    }

    /// Slug already assigned to `expression`, if any.
    pub fn slug_for(&self, expression: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.expression == expression)
            .map(|entry| entry.slug.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.slug.as_str(), entry.expression.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>, E: Into<String>> FromIterator<(S, E)> for PlaceholderMap {
    fn from_iter<I: IntoIterator<Item = (S, E)>>(iter: I) -> Self {
        let mut map = PlaceholderMap::new();
        for (slug, expression) in iter {
            map.insert(Placeholder::new(slug, expression));
        }
        map
    }
}
