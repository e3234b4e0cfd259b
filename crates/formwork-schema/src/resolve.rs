//! # Schema Resolution
//!
//! Per-field operations need the field map underneath any number of
//! derivation layers. [`resolve`] peels derived schemas until it reaches a
//! field map, or fails when it reaches anything else.
//!
//! Derived schemas own their inner schema, so the wrapping chain is finite
//! and acyclic by construction; resolution is a plain loop.

use crate::error::SchemaError;
use crate::object::FieldMapSchema;
use crate::schema::Schema;

/// Find the field-map schema underneath `schema`.
///
/// # Errors
///
/// Returns `SchemaError::NotFieldMap` if unwrapping ends at a schema that is
/// not a field map.
pub fn resolve(schema: &Schema) -> Result<&FieldMapSchema, SchemaError> {
    let mut current = schema;
    let mut depth = 0usize;
    loop {
        match current {
            Schema::Object(fields) => {
                tracing::trace!(depth, fields = fields.len(), "resolved field map");
                return Ok(fields);
            }
            Schema::Derived(derived) => {
                current = derived.inner();
                depth += 1;
            }
            Schema::Field(_) => {
                return Err(SchemaError::NotFieldMap {
                    found: current.kind(),
                    depth,
                });
            }
        }
    }
}

/// Number of derivation layers wrapping the innermost schema.
pub fn derivation_depth(schema: &Schema) -> usize {
    let mut current = schema;
    let mut depth = 0usize;
    while let Schema::Derived(derived) = current {
        current = derived.inner();
        depth += 1;
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldSchema;
    use serde_json::json;

    fn fields() -> FieldMapSchema {
        FieldMapSchema::new().field("name", FieldSchema::new(json!({"type": "string"})).unwrap())
    }

    #[test]
    fn field_map_resolves_to_itself() {
        let schema = Schema::from(fields());
        let resolved = resolve(&schema).unwrap();
        assert!(std::ptr::eq(
            resolved,
            match &schema {
                Schema::Object(f) => f,
                _ => unreachable!(),
            }
        ));
        assert_eq!(derivation_depth(&schema), 0);
    }

    #[test]
    fn derived_layers_are_unwrapped() {
        let schema = Schema::from(fields())
            .refine(|_| true, "a")
            .transform(|v| v)
            .refine(|_| true, "b");
        assert_eq!(derivation_depth(&schema), 3);
        let resolved = resolve(&schema).unwrap();
        assert_eq!(resolved.field_names().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn field_schema_does_not_resolve() {
        let schema = Schema::from(FieldSchema::new(json!({"type": "string"})).unwrap());
        let err = resolve(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::NotFieldMap { depth: 0, .. }));
    }

    #[test]
    fn wrapped_field_schema_does_not_resolve() {
        let schema = Schema::from(FieldSchema::new(json!({"type": "number"})).unwrap())
            .refine(|_| true, "x")
            .transform(|v| v);
        let err = resolve(&schema).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::NotFieldMap {
                found: "field schema",
                depth: 2
            }
        ));
    }
}
