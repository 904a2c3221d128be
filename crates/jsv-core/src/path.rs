//! # Document and Schema Paths
//!
//! Schema engines report locations as JSON Pointers (`/a/0/b`). A pointer
//! alone cannot tell an array index from an object key spelled with digits,
//! so [`parse_pointer`] walks the pointed-into value to type each segment.
//!
//! Two string encodings are produced from a segment list:
//!
//! | Encoding | Root | `a` → index 0 → `b` |
//! |----------|------|---------------------|
//! | [`data_path`] | `""` | `a.0.b` |
//! | [`json_path`] | `$` | `$.a[0].b` |

use serde_json::Value;

/// One step into a JSON value tree.
///
/// The derived ordering places every `Index` before every `Key`, so sorting
/// segment lists gives a total lexicographic path order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// Position in an array.
    Index(usize),
    /// Member name in an object.
    Key(String),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

/// Split a JSON Pointer into typed segments.
///
/// A segment is an [`PathSegment::Index`] when it addresses an element of an
/// array in `root`; once the walk leaves `root` (for example past a `$ref`
/// in a schema) the remaining segments are keys.
pub fn parse_pointer(pointer: &str, root: &Value) -> Vec<PathSegment> {
    if pointer.is_empty() {
        return Vec::new();
    }

    let mut node = Some(root);
    pointer
        .strip_prefix('/')
        .unwrap_or(pointer)
        .split('/')
        .map(|raw| {
            let token = raw.replace("~1", "/").replace("~0", "~");
            let segment = match (node, token.parse::<usize>()) {
                (Some(Value::Array(_)), Ok(index)) => PathSegment::Index(index),
                _ => PathSegment::Key(token),
            };
            node = node.and_then(|n| match (&segment, n) {
                (PathSegment::Index(i), Value::Array(items)) => items.get(*i),
                (PathSegment::Key(k), Value::Object(map)) => map.get(k),
                _ => None,
            });
            segment
        })
        .collect()
}

/// Join segments with `.`; the root is the empty string.
pub fn data_path(segments: &[PathSegment]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Render segments as a JSONPath: `$`, then `[i]` per index and `.key` per key.
pub fn json_path(segments: &[PathSegment]) -> String {
    let mut path = String::from("$");
    for segment in segments {
        match segment {
            PathSegment::Index(i) => {
                path.push('[');
                path.push_str(&i.to_string());
                path.push(']');
            }
            PathSegment::Key(k) => {
                path.push('.');
                path.push_str(k);
            }
        }
    }
    path
}
