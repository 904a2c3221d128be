//! # Draft 3 Keyword Translation
//!
//! The `jsonschema` crate implements drafts 4 and later only. Draft 3
//! criteria are therefore rewritten into equivalent draft 4 keywords and
//! evaluated by the draft 4 rule-set:
//!
//! | Draft 3 | Draft 4 |
//! |---------|---------|
//! | `properties.<p>.required: true` | `required: ["<p>"]` on the parent |
//! | `divisibleBy` | `multipleOf` |
//! | `extends` | `allOf` |
//! | `disallow` | `not` (over `anyOf` when several) |
//! | `type` union containing schemas | `anyOf` |
//! | `type: "any"` | no constraint |
//! | `dependencies.<p>: "<q>"` | `dependencies.<p>: ["<q>"]` |
//!
//! Schema paths in the resulting violations refer to the translated schema.

use serde_json::{Map, Value};

/// Rewrite a draft 3 schema into its draft 4 equivalent.
///
/// The root `$schema` declaration is dropped so the draft 4 rule-set is not
/// told to expect a draft 3 document.
pub fn upgrade(schema: &Value) -> Value {
    let mut upgraded = upgrade_schema(schema);
    if let Value::Object(map) = &mut upgraded {
        map.remove("$schema");
    }
    upgraded
}

fn upgrade_schema(schema: &Value) -> Value {
    let Value::Object(source) = schema else {
        return schema.clone();
    };

    let mut out = Map::new();
    let mut required: Vec<Value> = Vec::new();

    for (key, value) in source {
        match key.as_str() {
            // A boolean `required` belongs to the parent's `properties`.
            "required" if value.is_boolean() => {}
            "properties" => match value {
                Value::Object(props) => {
                    let mut upgraded = Map::new();
                    for (name, sub) in props {
                        if sub.get("required") == Some(&Value::Bool(true)) {
                            required.push(Value::String(name.clone()));
                        }
                        upgraded.insert(name.clone(), upgrade_schema(sub));
                    }
                    out.insert(key.clone(), Value::Object(upgraded));
                }
                other => {
                    out.insert(key.clone(), other.clone());
                }
            },
            "patternProperties" | "definitions" => {
                out.insert(key.clone(), map_members(value, upgrade_schema));
            }
            "additionalProperties" | "additionalItems" => {
                out.insert(key.clone(), upgrade_schema(value));
            }
            "items" => {
                let items = match value {
                    Value::Array(list) => Value::Array(list.iter().map(upgrade_schema).collect()),
                    other => upgrade_schema(other),
                };
                out.insert(key.clone(), items);
            }
            "dependencies" => {
                out.insert(key.clone(), map_members(value, upgrade_dependency));
            }
            "divisibleBy" => {
                out.insert("multipleOf".to_string(), value.clone());
            }
            "extends" => {
                let all_of = match value {
                    Value::Array(list) => list.iter().map(upgrade_schema).collect(),
                    other => vec![upgrade_schema(other)],
                };
                out.insert("allOf".to_string(), Value::Array(all_of));
            }
            "disallow" => {
                let not = match value {
                    Value::Array(list) => {
                        let mut any_of = Map::new();
                        any_of.insert(
                            "anyOf".to_string(),
                            Value::Array(list.iter().map(type_schema).collect()),
                        );
                        Value::Object(any_of)
                    }
                    other => type_schema(other),
                };
                out.insert("not".to_string(), not);
            }
            "type" => upgrade_type(value, &mut out),
            _ => {
                out.insert(key.clone(), value.clone());
            }
        }
    }

    if !required.is_empty() {
        match out.get_mut("required") {
            Some(Value::Array(existing)) => existing.extend(required),
            _ => {
                out.insert("required".to_string(), Value::Array(required));
            }
        }
    }

    Value::Object(out)
}

/// Apply `f` to every member of an object; other values pass through.
fn map_members(value: &Value, f: fn(&Value) -> Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .iter()
                .map(|(name, member)| (name.clone(), f(member)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn upgrade_dependency(value: &Value) -> Value {
    match value {
        Value::String(name) => Value::Array(vec![Value::String(name.clone())]),
        Value::Object(_) => upgrade_schema(value),
        other => other.clone(),
    }
}

/// Schema matching one element of a draft 3 type union.
fn type_schema(element: &Value) -> Value {
    match element {
        Value::String(name) if name == "any" => Value::Object(Map::new()),
        Value::String(_) => {
            let mut schema = Map::new();
            schema.insert("type".to_string(), element.clone());
            Value::Object(schema)
        }
        other => upgrade_schema(other),
    }
}

fn upgrade_type(value: &Value, out: &mut Map<String, Value>) {
    match value {
        Value::String(name) if name == "any" => {}
        Value::Array(union) if union.iter().any(|t| t == "any") => {}
        Value::Array(union) if union.iter().all(Value::is_string) => {
            out.insert("type".to_string(), value.clone());
        }
        Value::Array(union) => {
            out.insert(
                "anyOf".to_string(),
                Value::Array(union.iter().map(type_schema).collect()),
            );
        }
        other => {
            out.insert("type".to_string(), other.clone());
        }
    }
}
