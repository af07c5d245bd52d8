//! Merges the raw record lists of a snapshot into [`Collections`].

use super::{
    Collection, Collections, Field, RawCollection, RawField, RawRelation, Relation, RelationKind,
};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

type FieldKey = (String, String);

/// Groups fields under their collections and attaches relation metadata.
///
/// Collections and fields come out sorted by name. Fields pointing at an
/// unknown collection are dropped with a warning, collections left without
/// fields are dropped, and relations whose fields cannot be found are skipped.
pub fn gather_collections(
    collections: &[RawCollection],
    fields: &[RawField],
    relations: &[RawRelation],
) -> Collections {
    debug!(
        collection_count = collections.len(),
        field_count = fields.len(),
        relation_count = relations.len(),
        "Gathering collections data"
    );

    let relation_index = index_relations(relations);

    let mut merged: Collections = collections
        .iter()
        .map(|c| {
            (
                c.collection.clone(),
                Collection {
                    collection: c.collection.clone(),
                    fields: Vec::new(),
                },
            )
        })
        .collect();

    let mut sorted_fields: Vec<&RawField> = fields.iter().collect();
    sorted_fields.sort_by(|a, b| a.field.cmp(&b.field));

    for raw in sorted_fields {
        let Some(collection) = merged.get_mut(&raw.collection) else {
            warn!(
                collection = %raw.collection,
                field = %raw.field,
                "{} not found",
                raw.collection
            );
            continue;
        };

        let key = (raw.collection.clone(), raw.field.clone());
        collection.fields.push(Field {
            raw: raw.clone(),
            relation: relation_index.get(&key).cloned(),
        });
    }

    merged.retain(|name, collection| {
        let keep = !collection.fields.is_empty();
        if !keep {
            trace!(collection = %name, "Dropping collection without fields");
        }
        keep
    });

    debug!(collection_count = merged.len(), "Collections gathered");
    merged
}

/// Maps `(collection, field)` to the relation that field takes part in.
///
/// The one side of a relation sees the many collection as a list, the many
/// side holds a single reference to the one collection. When several records
/// touch the same field the last one wins.
fn index_relations(relations: &[RawRelation]) -> HashMap<FieldKey, Relation> {
    let mut index = HashMap::new();

    for relation in relations {
        let Some(meta) = &relation.meta else {
            trace!("Skipping relation without meta");
            continue;
        };

        if let (Some(collection), Some(field)) = (&meta.one_collection, &meta.one_field) {
            index.insert(
                (collection.clone(), field.clone()),
                Relation {
                    kind: RelationKind::Many,
                    collection: meta.many_collection.clone(),
                },
            );
        }

        if let (Some(collection), Some(field)) = (&meta.many_collection, &meta.many_field) {
            index.insert(
                (collection.clone(), field.clone()),
                Relation {
                    kind: RelationKind::One,
                    collection: meta.one_collection.clone(),
                },
            );
        }
    }

    index
}
