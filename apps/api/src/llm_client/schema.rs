//! JSON schema generation for OpenAI strict structured output.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A type the model can be asked to return as strict structured output.
///
/// Implemented for any `JsonSchema + DeserializeOwned` type. The root type must
/// be a struct: strict mode only accepts an object at the top level.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// OpenAI strict mode requires:
    /// 1. `additionalProperties: false` on every object
    /// 2. every property listed in `required`, nullable ones included
    /// 3. no `$ref`, so definitions are inlined
    fn openai_schema() -> Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        inline_refs(&mut value);
        fix_object_schemas(&mut value);
        strip_numeric_formats(&mut value);

        if let Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Schema name sent alongside the schema. Must match `^[a-zA-Z0-9_-]+$`.
    fn format_name() -> String {
        <Self as JsonSchema>::schema_name()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

fn fix_object_schemas(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.get("type") == Some(&Value::String("object".to_string())) {
                map.insert("additionalProperties".to_string(), Value::Bool(false));

                if let Some(Value::Object(props)) = map.get("properties") {
                    let all_keys: Vec<Value> =
                        props.keys().map(|k| Value::String(k.clone())).collect();
                    map.insert("required".to_string(), Value::Array(all_keys));
                }
            }

            for (_, v) in map.iter_mut() {
                fix_object_schemas(v);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                fix_object_schemas(item);
            }
        }
        _ => {}
    }
}

fn inline_refs(value: &mut Value) {
    let definitions = match value {
        Value::Object(map) => map.get("definitions").cloned(),
        _ => None,
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

fn inline_refs_recursive(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(ref_path)) = map.get("$ref").cloned() {
                if let Some(type_name) = ref_path.strip_prefix("#/definitions/") {
                    if let Some(def) = definitions.get(type_name) {
                        let mut resolved = def.clone();
                        inline_refs_recursive(&mut resolved, definitions);
                        *value = resolved;
                        return;
                    }
                }
            }

            for (key, v) in map.iter_mut() {
                if key != "definitions" {
                    inline_refs_recursive(v, definitions);
                }
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}

/// schemars emits `format: "uint32"` and friends for integers; strict mode only
/// understands string formats.
fn strip_numeric_formats(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let is_string = match map.get("type") {
                Some(Value::String(t)) => t == "string",
                Some(Value::Array(types)) => types.iter().any(|t| t == "string"),
                _ => false,
            };
            if map.contains_key("type") && !is_string {
                map.remove("format");
            }
            for (_, v) in map.iter_mut() {
                strip_numeric_formats(v);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                strip_numeric_formats(item);
            }
        }
        _ => {}
    }
}
