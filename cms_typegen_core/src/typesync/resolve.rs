//! Field type resolution: one field in, one TypeScript type expression out.

use super::naming::pascal_case;
use crate::error::{Result, TypegenError};
use crate::schema::{Field, RelationKind};
use std::collections::HashSet;

/// Every foreign key is typed loosely; the CMS does not expose the key type of
/// the related collection here.
const FOREIGN_KEY_TYPE: &str = "string | number";

/// Resolves the TypeScript type of a single field.
///
/// Choices win over the storage type, and a relation replaces whatever the
/// first two steps produced.
pub fn resolve_field_type(field: &Field, use_intersection_types: bool) -> Result<String> {
    let mut resolved = match field.choices() {
        Some(choices) => choice_union(field, choices)?,
        None => primitive_type(field.field_type()).to_string(),
    };

    if let Some(relation) = &field.relation {
        let item_type = match relation.collection.as_deref() {
            Some(collection) if !collection.is_empty() => pascal_case(collection),
            _ => "any".to_string(),
        };
        let operator = if use_intersection_types { "&" } else { "|" };

        resolved = match relation.kind {
            RelationKind::Many => {
                format!("({FOREIGN_KEY_TYPE})[] {operator} ({item_type})[]")
            }
            RelationKind::One => format!("{FOREIGN_KEY_TYPE} {operator} {item_type}"),
        };
    }

    Ok(resolved)
}

/// Maps a storage type to its TypeScript primitive.
pub fn primitive_type(field_type: &str) -> &'static str {
    match field_type {
        "integer" | "bigInteger" | "float" | "decimal" => "number",
        "boolean" => "boolean",
        "json" | "csv" => "unknown",
        _ => "string",
    }
}

fn choice_union(field: &Field, choices: &[crate::schema::ChoiceEntry]) -> Result<String> {
    let mut seen = HashSet::new();
    let mut literals = Vec::with_capacity(choices.len());

    for choice in choices {
        let Some(value) = choice.value() else {
            let serialized = serde_json::to_string_pretty(field)?;
            tracing::error!(field = %field.name(), "Unhandled choices structure");
            return Err(TypegenError::UnhandledChoices { field: serialized });
        };

        if !seen.insert(value) {
            continue;
        }

        literals.push(match value {
            Some(text) => format!("\"{}\"", text.replace('\\', "\\\\")),
            None => "null".to_string(),
        });
    }

    Ok(literals.join(" | "))
}
