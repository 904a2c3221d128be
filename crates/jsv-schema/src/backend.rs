//! # `jsonschema` Crate Engine
//!
//! [`SchemaEngine`] implementation over the `jsonschema` crate. Each
//! [`Draft`] has its own constructor, selected by an exhaustive match:
//! drafts 4, 6 and 7 map directly onto the crate's draft modules, and
//! draft 3 is translated by [`crate::draft3`] and then built as draft 4.
//!
//! ## Error Mapping
//!
//! The crate reports locations as JSON Pointers. Document pointers are typed
//! against the document; schema pointers against the compiled schema, with
//! local `$ref` hops followed to find the schema fragment that failed.
//!
//! ## External References
//!
//! Criteria must be self-contained. Every validator is built with
//! [`LocalOnlyRetriever`], which refuses all `file://`, `http(s)://` and
//! relative-URI lookups, so a `$ref` that leaves the criteria document fails
//! schema compilation and surfaces as [`EngineError::InvalidSchema`].

use std::borrow::Cow;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Retrieve, Uri, ValidationError, Validator};
use serde_json::Value;

use jsv_core::path::{parse_pointer, PathSegment};
use jsv_core::Draft;

use crate::draft3;
use crate::engine::{EngineError, RawViolation, SchemaEngine, ENGINE_LIBRARY};

/// Schema engine backed by the `jsonschema` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaEngine;

impl SchemaEngine for JsonSchemaEngine {
    fn library(&self) -> &'static str {
        ENGINE_LIBRARY
    }

    fn iter_errors(
        &self,
        draft: Draft,
        schema: &Value,
        document: &Value,
    ) -> Result<Vec<RawViolation>, EngineError> {
        let schema: Cow<'_, Value> = match draft {
            Draft::Draft3 => Cow::Owned(draft3::upgrade(schema)),
            Draft::Draft4 | Draft::Draft6 | Draft::Draft7 => Cow::Borrowed(schema),
        };

        let validator = build_validator(draft, &schema).map_err(|e| EngineError::InvalidSchema {
            draft,
            reason: e.to_string(),
        })?;

        Ok(validator
            .iter_errors(document)
            .map(|error| raw_violation(&schema, document, &error))
            .collect())
    }
}

fn build_validator(draft: Draft, schema: &Value) -> Result<Validator, ValidationError<'static>> {
    match draft {
        Draft::Draft3 => draft3_validator(schema),
        Draft::Draft4 => draft4_validator(schema),
        Draft::Draft6 => draft6_validator(schema),
        Draft::Draft7 => draft7_validator(schema),
    }
}

/// Retriever that resolves nothing.
///
/// Installed on every validator so the `jsonschema` crate never touches the
/// filesystem or the network on behalf of criteria.
struct LocalOnlyRetriever;

impl Retrieve for LocalOnlyRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        tracing::warn!(uri = uri.as_str(), "refused external schema reference");
        Err(format!(
            "external reference '{}' is not allowed; criteria must be self-contained",
            uri.as_str()
        )
        .into())
    }
}

fn build_for(draft: jsonschema::Draft, schema: &Value) -> Result<Validator, ValidationError<'static>> {
    jsonschema::options()
        .with_draft(draft)
        .with_retriever(LocalOnlyRetriever)
        .build(schema)
}

/// Expects a schema already passed through [`draft3::upgrade`].
fn draft3_validator(schema: &Value) -> Result<Validator, ValidationError<'static>> {
    build_for(jsonschema::Draft::Draft4, schema)
}

fn draft4_validator(schema: &Value) -> Result<Validator, ValidationError<'static>> {
    build_for(jsonschema::Draft::Draft4, schema)
}

fn draft6_validator(schema: &Value) -> Result<Validator, ValidationError<'static>> {
    build_for(jsonschema::Draft::Draft6, schema)
}

fn draft7_validator(schema: &Value) -> Result<Validator, ValidationError<'static>> {
    build_for(jsonschema::Draft::Draft7, schema)
}

fn raw_violation(schema: &Value, document: &Value, error: &ValidationError<'_>) -> RawViolation {
    let absolute_path = parse_pointer(&error.instance_path.to_string(), document);
    let relative_schema_path = parse_pointer(&error.schema_path.to_string(), schema);

    let (validator, fragment, validator_value) =
        if matches!(error.kind, ValidationErrorKind::FalseSchema) {
            // The failing "keyword" is the `false` schema itself.
            let fragment = resolve_schema(schema, &relative_schema_path)
                .cloned()
                .unwrap_or(Value::Bool(false));
            ("false".to_string(), fragment, Value::Bool(false))
        } else {
            match relative_schema_path.split_last() {
                Some((keyword, parent)) => {
                    let keyword = keyword.to_string();
                    let fragment = resolve_schema(schema, parent).cloned().unwrap_or(Value::Null);
                    let value = fragment.get(keyword.as_str()).cloned().unwrap_or(Value::Null);
                    (keyword, fragment, value)
                }
                None => (String::new(), schema.clone(), Value::Null),
            }
        };

    RawViolation {
        message: error.to_string(),
        absolute_path,
        relative_schema_path,
        schema: fragment,
        validator_value,
        validator,
        instance: error.instance.as_ref().clone(),
    }
}

/// Walk `segments` from the schema root, following local `$ref` hops.
fn resolve_schema<'s>(root: &'s Value, segments: &[PathSegment]) -> Option<&'s Value> {
    let mut node = root;
    for segment in segments {
        node = match segment {
            PathSegment::Key(key) if key == "$ref" && node.get("$ref").is_some_and(Value::is_string) => {
                follow_ref(root, node)?
            }
            PathSegment::Key(key) => match node {
                Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
                _ => node.get(key.as_str())?,
            },
            PathSegment::Index(i) => node.get(*i)?,
        };
    }
    Some(node)
}

/// Resolve a local `$ref`: a JSON Pointer fragment (`#/definitions/x`) or a
/// plain-name fragment (`#name`) declared by `$id`, `id` or `$anchor`.
fn follow_ref<'s>(root: &'s Value, node: &'s Value) -> Option<&'s Value> {
    let reference = node.get("$ref")?.as_str()?;
    let fragment = reference.strip_prefix('#')?;
    if fragment.is_empty() || fragment.starts_with('/') {
        root.pointer(fragment)
    } else {
        find_anchor(root, fragment)
    }
}

/// Keywords whose values are instance data, never subschemas.
const DATA_KEYWORDS: [&str; 4] = ["const", "default", "enum", "examples"];

fn find_anchor<'s>(node: &'s Value, name: &str) -> Option<&'s Value> {
    match node {
        Value::Object(map) => {
            let by_id = ["$id", "id"].iter().any(|key| {
                map.get(*key)
                    .and_then(Value::as_str)
                    .and_then(|id| id.strip_prefix('#'))
                    == Some(name)
            });
            let by_anchor = map.get("$anchor").and_then(Value::as_str) == Some(name);
            if by_id || by_anchor {
                return Some(node);
            }
            map.iter()
                .filter(|(key, _)| !DATA_KEYWORDS.contains(&key.as_str()))
                .find_map(|(_, child)| find_anchor(child, name))
        }
        Value::Array(items) => items.iter().find_map(|child| find_anchor(child, name)),
        _ => None,
    }
}
