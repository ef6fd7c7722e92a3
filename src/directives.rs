// ABOUTME: Directive vocabulary and comment parsing for the slidemark library
// ABOUTME: Extracts `key: value` lines from HTML comments and coerces their values

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix marking a directive as scoped to the slide that declares it.
pub const SCOPE_PREFIX: char = '_';

static DIRECTIVE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(_?[A-Za-z]+)\s*:\s*(.+?)\s*$").expect("directive line pattern is valid")
});

static COMMENT_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--\s*(.*?)\s*-->").expect("comment pattern is valid"));

/// The directive names the renderer knows how to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DirectiveName {
    Paginate,
    Header,
    Footer,
    Class,
    BackgroundColor,
    BackgroundImage,
    BackgroundPosition,
    BackgroundRepeat,
    BackgroundSize,
    Color,
}

impl DirectiveName {
    pub const ALL: [DirectiveName; 10] = [
        DirectiveName::Paginate,
        DirectiveName::Header,
        DirectiveName::Footer,
        DirectiveName::Class,
        DirectiveName::BackgroundColor,
        DirectiveName::BackgroundImage,
        DirectiveName::BackgroundPosition,
        DirectiveName::BackgroundRepeat,
        DirectiveName::BackgroundSize,
        DirectiveName::Color,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveName::Paginate => "paginate",
            DirectiveName::Header => "header",
            DirectiveName::Footer => "footer",
            DirectiveName::Class => "class",
            DirectiveName::BackgroundColor => "backgroundColor",
            DirectiveName::BackgroundImage => "backgroundImage",
            DirectiveName::BackgroundPosition => "backgroundPosition",
            DirectiveName::BackgroundRepeat => "backgroundRepeat",
            DirectiveName::BackgroundSize => "backgroundSize",
            DirectiveName::Color => "color",
        }
    }
}

impl fmt::Display for DirectiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown directive name: {0}")]
pub struct UnknownDirective(pub String);

impl FromStr for DirectiveName {
    type Err = UnknownDirective;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DirectiveName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownDirective(s.to_string()))
    }
}

/// A directive name, either from the known vocabulary or preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DirectiveKind {
    Known(DirectiveName),
    Unknown(String),
}

impl From<&str> for DirectiveKind {
    fn from(name: &str) -> Self {
        name.parse::<DirectiveName>()
            .map(DirectiveKind::Known)
            .unwrap_or_else(|_| DirectiveKind::Unknown(name.to_string()))
    }
}

impl From<DirectiveName> for DirectiveKind {
    fn from(name: DirectiveName) -> Self {
        DirectiveKind::Known(name)
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveKind::Known(name) => f.write_str(name.as_str()),
            DirectiveKind::Unknown(name) => f.write_str(name),
        }
    }
}

/// Key of a directive entry: the name plus whether it is the scoped variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectiveKey {
    pub kind: DirectiveKind,
    pub scoped: bool,
}

impl DirectiveKey {
    pub fn regular(kind: impl Into<DirectiveKind>) -> Self {
        Self {
            kind: kind.into(),
            scoped: false,
        }
    }

    pub fn scoped(kind: impl Into<DirectiveKind>) -> Self {
        Self {
            kind: kind.into(),
            scoped: true,
        }
    }

    /// Parse a raw key as written in a comment, e.g. `_backgroundColor`.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(SCOPE_PREFIX) {
            Some(base) => Self::scoped(base),
            None => Self::regular(raw),
        }
    }
}

impl fmt::Display for DirectiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scoped {
            write!(f, "{}{}", SCOPE_PREFIX, self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// A coerced directive value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Bool(bool),
    Text(String),
}

impl DirectiveValue {
    /// Coerce raw comment text: strip one layer of matching quotes, else
    /// read an exact `true`/`false`, else keep the trimmed text.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some(inner) = strip_quotes(trimmed) {
            return DirectiveValue::Text(inner.to_string());
        }
        match trimmed {
            "true" => DirectiveValue::Bool(true),
            "false" => DirectiveValue::Bool(false),
            other => DirectiveValue::Text(other.to_string()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DirectiveValue::Bool(value) => Some(*value),
            DirectiveValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DirectiveValue::Text(value) => Some(value),
            DirectiveValue::Bool(_) => None,
        }
    }

    /// `false` and the empty string count as unset when rendering.
    pub fn is_truthy(&self) -> bool {
        match self {
            DirectiveValue::Bool(value) => *value,
            DirectiveValue::Text(value) => !value.is_empty(),
        }
    }
}

impl fmt::Display for DirectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveValue::Bool(value) => write!(f, "{}", value),
            DirectiveValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for DirectiveValue {
    fn from(value: bool) -> Self {
        DirectiveValue::Bool(value)
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        DirectiveValue::Text(value.to_string())
    }
}

impl From<String> for DirectiveValue {
    fn from(value: String) -> Self {
        DirectiveValue::Text(value)
    }
}

fn strip_quotes(value: &str) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    ['"', '\'']
        .into_iter()
        .find(|quote| value.starts_with(*quote) && value.ends_with(*quote))
        .map(|_| &value[1..value.len() - 1])
}

/// The directives in effect for one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    entries: BTreeMap<DirectiveKey, DirectiveValue>,
}

impl DirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn insert(&mut self, key: DirectiveKey, value: impl Into<DirectiveValue>) -> Option<DirectiveValue> {
        self.entries.insert(key, value.into())
    }

    /// Look up a directive by its raw name, e.g. `"_color"`.
    pub fn get(&self, raw: &str) -> Option<&DirectiveValue> {
        self.entries.get(&DirectiveKey::parse(raw))
    }

    pub fn get_key(&self, key: &DirectiveKey) -> Option<&DirectiveValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.get(raw).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DirectiveKey, &DirectiveValue)> {
        self.entries.iter()
    }

    /// Overwrite entries key by key, scoped or not.
    pub fn merge(&mut self, other: DirectiveSet) {
        self.entries.extend(other.entries);
    }

    /// Copy of this set with every scoped entry removed.
    pub fn without_scoped(&self) -> DirectiveSet {
        self.entries
            .iter()
            .filter(|(key, _)| !key.scoped)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// The value that applies to this slide: `_name` if present, else `name`.
    pub fn effective(&self, name: DirectiveName) -> Option<&DirectiveValue> {
        self.effective_kind(DirectiveKind::Known(name))
    }

    pub fn effective_by_name(&self, name: &str) -> Option<&DirectiveValue> {
        self.effective_kind(DirectiveKind::from(name))
    }

    fn effective_kind(&self, kind: DirectiveKind) -> Option<&DirectiveValue> {
        let scoped = DirectiveKey::scoped(kind);
        self.entries.get(&scoped).or_else(|| {
            self.entries.get(&DirectiveKey {
                kind: scoped.kind.clone(),
                scoped: false,
            })
        })
    }
}

impl FromIterator<(DirectiveKey, DirectiveValue)> for DirectiveSet {
    fn from_iter<I: IntoIterator<Item = (DirectiveKey, DirectiveValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DirectiveSet {
    type Item = (DirectiveKey, DirectiveValue);
    type IntoIter = std::collections::btree_map::IntoIter<DirectiveKey, DirectiveValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for DirectiveSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

/// Whether a raw HTML block is a comment that may carry directives.
pub fn is_comment(html: &str) -> bool {
    html.trim_start().starts_with("<!--")
}

/// Scan `key: value` lines, skipping anything that does not match.
pub fn scan_lines(body: &str) -> impl Iterator<Item = (&str, DirectiveValue)> + '_ {
    body.split('\n').filter_map(|line| {
        let captures = DIRECTIVE_LINE.captures(line)?;
        let key = captures.get(1)?.as_str();
        let value = captures.get(2)?.as_str();
        Some((key, DirectiveValue::coerce(value)))
    })
}

/// Extract the directives carried by the first `<!-- ... -->` in `html`.
/// Later lines overwrite earlier ones for the same key.
pub fn parse_comment(html: &str) -> DirectiveSet {
    let Some(body) = COMMENT_BODY.captures(html).and_then(|c| c.get(1)) else {
        return DirectiveSet::new();
    };

    scan_lines(body.as_str())
        .map(|(key, value)| (DirectiveKey::parse(key), value))
        .collect()
}
