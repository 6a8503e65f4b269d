//! List-valued content fields with tolerant upstream encoding.
//!
//! Upstream storage is inconsistent about list fields such as bullet points:
//! some rows hold a native JSON array, others a string that itself encodes a
//! list. [`RawBulletPoints`] keeps the two shapes apart until the assembly
//! boundary, where [`RawBulletPoints::into_list`] collapses them into one
//! ordered `Vec<String>`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A list field exactly as it arrived from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawBulletPoints {
    /// Native list.
    List(Vec<String>),
    /// A string holding a serialized list (JSON array or Postgres array literal).
    Encoded(String),
}

impl RawBulletPoints {
    /// Encodes a list as a JSON string, the way older rows were written.
    pub fn encode(items: &[String]) -> Self {
        // Serializing a slice of strings cannot fail.
        Self::Encoded(serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string()))
    }

    /// Interprets an arbitrary JSON column value.
    ///
    /// `null` means the field is absent. Arrays with non-string items and
    /// scalars other than strings are malformed and become an empty list.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(raw) => Some(Self::Encoded(raw)),
            Value::Array(_) => Some(Self::List(
                serde_json::from_value::<Vec<String>>(value).unwrap_or_default(),
            )),
            _ => Some(Self::List(Vec::new())),
        }
    }

    /// Resolves either representation into the canonical ordered list.
    ///
    /// Decode failures yield an empty list.
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::List(items) => items,
            Self::Encoded(raw) => decode(&raw),
        }
    }
}

fn decode(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(trimmed).unwrap_or_default();
    }

    if let Some(inner) = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        return decode_pg_array(inner).unwrap_or_default();
    }

    Vec::new()
}

/// Parses the body of a Postgres text array literal such as `a,"b, c"`.
fn decode_pg_array(inner: &str) -> Option<Vec<String>> {
    let mut items = Vec::new();
    if inner.trim().is_empty() {
        return Some(items);
    }

    let mut current = String::new();
    let mut quoted = false;
    let mut was_quoted = false;
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                was_quoted = true;
            }
            '\\' if quoted => current.push(chars.next()?),
            ',' if !quoted => {
                items.push(finish_item(&mut current, was_quoted));
                was_quoted = false;
            }
            _ => current.push(c),
        }
    }

    if quoted {
        return None;
    }
    items.push(finish_item(&mut current, was_quoted));

    Some(items)
}

fn finish_item(current: &mut String, was_quoted: bool) -> String {
    let item = std::mem::take(current);
    if was_quoted {
        item
    } else {
        item.trim().to_string()
    }
}
