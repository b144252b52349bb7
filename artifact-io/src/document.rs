//! Parsed configuration/artifact content with key-style and field-style access.
//!
//! A [`Document`] is an insertion-ordered string-keyed mapping of [`Node`]s.
//! Values can be reached three ways:
//!
//! - indexing: `doc["a"]["b"]`, `doc["stages"][0]` (panics on a missing key,
//!   an out-of-range index, or indexing into a scalar)
//! - checked field access: `doc.attr("a")?`, `doc.section("a")?.attr("b")?`,
//!   or a dotted path `doc.path("a.b")?`
//! - typed extraction: `doc.extract::<MyConfig>()?`
//!
//! No access style falls back to null on a missing key.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{FormatError, LookupError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, Node>);

/// One value inside a [`Document`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Null, boolean, number or string.
    Scalar(Value),
    Sequence(Vec<Node>),
    Mapping(Document),
}

impl Document {
    /// Key lookup that returns `None` on a missing key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    /// Field-style lookup; a missing key is an error.
    pub fn attr(&self, key: &str) -> Result<&Node, LookupError> {
        self.0.get(key).ok_or_else(|| LookupError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Nested mapping at `key`.
    pub fn section(&self, key: &str) -> Result<&Document, LookupError> {
        self.attr(key)?
            .as_document()
            .ok_or_else(|| LookupError::NotAMapping {
                key: key.to_string(),
            })
    }

    /// Follow a dotted path such as `model.params.alpha`.
    ///
    /// Segments that are plain integers index into sequences (`stages.0.name`).
    pub fn path(&self, dotted: &str) -> Result<&Node, LookupError> {
        let mut segments = dotted.split('.');
        let first = segments.next().unwrap_or_default();
        let mut current = self.attr(first)?;
        let mut walked = first.to_string();
        for segment in segments {
            let next = match current {
                Node::Mapping(doc) => doc.get(segment),
                Node::Sequence(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                Node::Scalar(_) => return Err(LookupError::NotAMapping { key: walked }),
            };
            walked.push('.');
            walked.push_str(segment);
            current = next.ok_or_else(|| LookupError::MissingKey {
                key: walked.clone(),
            })?;
        }
        Ok(current)
    }

    /// Deserialize the whole document into a typed view.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T, LookupError> {
        Ok(T::deserialize(self.to_value())?)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

impl Node {
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Node::Mapping(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Value::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Value::as_f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Value::as_bool)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Value::Null))
    }

    pub fn to_value(&self) -> Value {
        match self {
            Node::Scalar(value) => value.clone(),
            Node::Sequence(items) => Value::Array(items.iter().map(Node::to_value).collect()),
            Node::Mapping(doc) => doc.to_value(),
        }
    }

    fn as_scalar(&self) -> Option<&Value> {
        match self {
            Node::Scalar(value) => Some(value),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
    }
}

impl TryFrom<Value> for Document {
    type Error = Value;

    /// Succeeds only for JSON objects; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(other),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.to_value()
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Mapping(Document::from(map)),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            scalar => Node::Scalar(scalar),
        }
    }
}

impl PartialEq<Value> for Node {
    fn eq(&self, other: &Value) -> bool {
        self.to_value() == *other
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Document::from)
    }
}

/// # Panics
///
/// Panics if `key` is not present, like `HashMap` indexing. Use
/// [`Document::attr`] for a checked lookup.
impl Index<&str> for Document {
    type Output = Node;

    fn index(&self, key: &str) -> &Node {
        match self.0.get(key) {
            Some(node) => node,
            None => panic!("no key `{key}` in document"),
        }
    }
}

/// # Panics
///
/// Panics if the node is not a mapping or `key` is not present.
impl Index<&str> for Node {
    type Output = Node;

    fn index(&self, key: &str) -> &Node {
        match self {
            Node::Mapping(doc) => &doc[key],
            other => panic!("cannot look up key `{key}` in a {}", other.kind()),
        }
    }
}

/// # Panics
///
/// Panics if the node is not a sequence or `index` is out of range.
impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        match self {
            Node::Sequence(items) => match items.get(index) {
                Some(node) => node,
                None => panic!("index {index} out of range for sequence of {}", items.len()),
            },
            other => panic!("cannot index a {} by position", other.kind()),
        }
    }
}

/// Convert parsed YAML into the JSON value model [`Document`] is built from.
///
/// Scalar keys are stringified and tags are dropped. Non-finite floats and
/// sequence/mapping keys have no JSON form and are rejected.
pub(crate) fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, FormatError> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => Value::Number(yaml_number(&n)?),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Result<serde_json::Number, FormatError> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(|| FormatError::Unrepresentable(format!("non-finite number {n}")))
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, FormatError> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => Err(FormatError::Unrepresentable(
            "mapping key must be a scalar".to_string(),
        )),
    }
}
