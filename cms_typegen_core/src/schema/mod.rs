//! Schema records as delivered by the CMS, and the merged per-collection model
//! the generator works on.

pub mod collect;

pub use collect::gather_collections;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Raw records
// ============================================================================

/// A collection record. Only the name is relevant for type generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCollection {
    pub collection: String,
}

/// A field record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    pub field: String,
    pub collection: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<FieldSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FieldMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(default)]
    pub is_nullable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<FieldOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChoiceEntry>>,
}

/// One entry of a field's `choices` option.
///
/// Interfaces store choices either as bare values or as `{ text, value }`
/// objects. Anything else is kept as-is so the resolver can reject it with the
/// offending field attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceEntry {
    Bare(Option<String>),
    Labeled(LabeledChoice),
    Unsupported(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledChoice {
    // Present but null is a valid choice; a missing `value` is not.
    #[serde(deserialize_with = "Option::deserialize")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ChoiceEntry {
    /// The literal value of this choice; `Some(None)` is an explicit null.
    pub fn value(&self) -> Option<Option<&str>> {
        match self {
            ChoiceEntry::Bare(value) => Some(value.as_deref()),
            ChoiceEntry::Labeled(choice) => Some(choice.value.as_deref()),
            ChoiceEntry::Unsupported(_) => None,
        }
    }
}

/// A relation record. Relations without `meta` carry no field link and are
/// ignored by the collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRelation {
    #[serde(default)]
    pub meta: Option<RelationMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMeta {
    #[serde(default)]
    pub one_collection: Option<String>,
    #[serde(default)]
    pub one_field: Option<String>,
    #[serde(default)]
    pub many_collection: Option<String>,
    #[serde(default)]
    pub many_field: Option<String>,
}

/// The three record lists that make up one schema snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    #[serde(default)]
    pub collections: Vec<RawCollection>,
    #[serde(default)]
    pub fields: Vec<RawField>,
    #[serde(default)]
    pub relations: Vec<RawRelation>,
}

impl SchemaSnapshot {
    /// Parses a snapshot document, accepting both the bare form and the
    /// `{ "data": { ... } }` envelope returned by the HTTP API.
    ///
    /// A top-level `data` member always selects the envelope form, so an
    /// envelope with malformed records is an error rather than an empty
    /// snapshot.
    pub fn from_json(contents: &str) -> crate::Result<Self> {
        let mut document: serde_json::Value = serde_json::from_str(contents)?;
        let snapshot = match document.get_mut("data").map(serde_json::Value::take) {
            Some(data) => serde_json::from_value(data)?,
            None => serde_json::from_value(document)?,
        };
        Ok(snapshot)
    }
}

// ============================================================================
// Merged model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// The field holds a single foreign reference.
    One,
    /// The field is the collection side of a one-to-many link.
    Many,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "type")]
    pub kind: RelationKind,
    /// Collection on the other side of the link, if the record names one.
    pub collection: Option<String>,
}

/// A field after merging, with its relation resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(flatten)]
    pub raw: RawField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.raw.field
    }

    pub fn field_type(&self) -> &str {
        &self.raw.field_type
    }

    pub fn is_nullable(&self) -> bool {
        self.raw.schema.as_ref().is_some_and(|s| s.is_nullable)
    }

    pub fn interface(&self) -> Option<&str> {
        self.raw.meta.as_ref()?.interface.as_deref()
    }

    pub fn choices(&self) -> Option<&[ChoiceEntry]> {
        self.raw.meta.as_ref()?.options.as_ref()?.choices.as_deref()
    }

    /// Presentation interfaces render content in the editor but store no data.
    pub fn is_presentational(&self) -> bool {
        self.interface()
            .is_some_and(|interface| interface.starts_with("presentation-"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub collection: String,
    pub fields: Vec<Field>,
}

/// Collections keyed by name. Iteration order is the output order.
pub type Collections = BTreeMap<String, Collection>;
