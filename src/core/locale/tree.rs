use serde::Serialize;
use serde_yml::{Mapping, Value};

/// Action taken on a key by a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    Added,
    Updated,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
        }
    }
}

/// A parsed locale document.
///
/// String leaves and mappings are what lookups care about. Everything else
/// (sequences, numbers, booleans, nulls, tagged values) is carried as
/// [`LocaleTree::Opaque`] so rewriting a file keeps it intact.
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleTree {
    Leaf(String),
    Node(LocaleNode),
    Opaque(Value),
}

/// Ordered mapping level of a [`LocaleTree`]. Keys keep document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleNode {
    children: Vec<(String, LocaleTree)>,
}

impl LocaleTree {
    /// Parse YAML text. An empty document is an empty mapping.
    pub fn parse(text: &str) -> Result<Self, serde_yml::Error> {
        let value: Value = serde_yml::from_str(text)?;
        Ok(match value {
            Value::Null => LocaleTree::Node(LocaleNode::default()),
            other => LocaleTree::from_value(other),
        })
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => LocaleTree::Leaf(s),
            Value::Mapping(mapping) => LocaleTree::Node(LocaleNode::from_mapping(mapping)),
            other => LocaleTree::Opaque(other),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            LocaleTree::Leaf(s) => Value::String(s.clone()),
            LocaleTree::Node(node) => Value::Mapping(node.to_mapping()),
            LocaleTree::Opaque(value) => value.clone(),
        }
    }

    /// Flatten string leaves into `(dotted.key, value)` pairs in document order.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut result = Vec::new();
        flatten_into(self, String::new(), &mut result);
        result
    }

    /// Look up a dotted path.
    pub fn get_path(&self, key: &str) -> Option<&LocaleTree> {
        key.split('.').try_fold(self, |current, part| match current {
            LocaleTree::Node(node) => node.get(part),
            _ => None,
        })
    }
}

impl LocaleNode {
    fn from_mapping(mapping: Mapping) -> Self {
        let children = mapping
            .into_iter()
            .filter_map(|(key, value)| {
                let key = match key {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    other => {
                        tracing::debug!("skipping non-scalar mapping key: {:?}", other);
                        return None;
                    }
                };
                Some((key, LocaleTree::from_value(value)))
            })
            .collect();
        Self { children }
    }

    fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        for (key, child) in &self.children {
            mapping.insert(Value::String(key.clone()), child.to_value());
        }
        mapping
    }

    pub fn get(&self, key: &str) -> Option<&LocaleTree> {
        self.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, child)| child)
    }

    /// Insert or replace `key`, keeping the position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, tree: LocaleTree) -> Option<LocaleTree> {
        let key = key.into();
        match self.children.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, tree)),
            None => {
                self.children.push((key, tree));
                None
            }
        }
    }

    /// Set the leaf at `path`, creating intermediate levels as needed.
    ///
    /// A non-mapping value standing where an intermediate level is needed is
    /// replaced by an empty mapping.
    pub fn set_path(&mut self, path: &[&str], value: impl Into<String>) -> KeyAction {
        let Some((first, rest)) = path.split_first() else {
            return KeyAction::Added;
        };

        if rest.is_empty() {
            return match self.insert(*first, LocaleTree::Leaf(value.into())) {
                Some(_) => KeyAction::Updated,
                None => KeyAction::Added,
            };
        }

        let child = self.child_mut(first);
        if !matches!(child, LocaleTree::Node(_)) {
            *child = LocaleTree::Node(LocaleNode::default());
        }
        match child {
            LocaleTree::Node(node) => node.set_path(rest, value),
            _ => KeyAction::Added,
        }
    }

    fn child_mut(&mut self, key: &str) -> &mut LocaleTree {
        let index = match self.children.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.children
                    .push((key.to_string(), LocaleTree::Node(LocaleNode::default())));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleTree)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serialize as a YAML document body.
    pub fn to_yaml(&self) -> Result<String, serde_yml::Error> {
        serde_yml::to_string(&Value::Mapping(self.to_mapping()))
    }
}

fn flatten_into(tree: &LocaleTree, prefix: String, result: &mut Vec<(String, String)>) {
    match tree {
        LocaleTree::Leaf(value) => {
            if !prefix.is_empty() {
                result.push((prefix, value.clone()));
            }
        }
        LocaleTree::Node(node) => {
            for (key, child) in node.iter() {
                let new_prefix = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(child, new_prefix, result);
            }
        }
        LocaleTree::Opaque(_) => {}
    }
}
