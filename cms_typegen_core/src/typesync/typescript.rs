//! TypeScript declaration generation for a merged schema.
//!
//! Each collection becomes an `export type` with one member per stored field,
//! followed by a lookup type keyed by collection name:
//!
//! ```text
//! export type BlogPosts = {
//!   id: number;
//!   "cover-image"?: string;
//! };
//!
//! export type GeneratedDirectusTypes = {
//!   blog_posts: BlogPosts;
//! };
//! ```

use super::config::TypesyncConfig;
use super::naming::{member_name, pascal_case};
use super::resolve::resolve_field_type;
use crate::error::Result;
use crate::schema::Collections;

/// Main entry point for generating the TypeScript declarations.
pub fn generate_ts_type_string(collections: &Collections, config: &TypesyncConfig) -> Result<String> {
    tracing::info!(
        collection_count = collections.len(),
        use_intersection_types = config.use_intersection_types,
        "Generating TypeScript types"
    );

    let mut out = String::new();
    let mut lookup_entries = Vec::with_capacity(collections.len());

    for collection in collections.values() {
        let type_name = pascal_case(&collection.collection);
        lookup_entries.push(format!("  {}: {};", collection.collection, type_name));

        out.push_str(&format!("export type {} = {{\n", type_name));
        for field in &collection.fields {
            if field.is_presentational() {
                tracing::trace!(
                    collection = %collection.collection,
                    field = %field.name(),
                    "Skipping presentation field"
                );
                continue;
            }

            let field_type = resolve_field_type(field, config.use_intersection_types)?;
            out.push_str(&format!(
                "  {}{}: {};\n",
                member_name(field.name()),
                if field.is_nullable() { "?" } else { "" },
                field_type
            ));
        }
        out.push_str("};\n\n");
    }

    out.push_str(&format!(
        "export type {} = {{\n{}\n}};\n",
        config.lookup_type_name,
        lookup_entries.join("\n")
    ));

    tracing::info!(output_length = out.len(), "TypeScript generation complete");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        ChoiceEntry, FieldMeta, FieldOptions, FieldSchema, RawCollection, RawField, RawRelation,
        RelationMeta, gather_collections,
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn collection(name: &str) -> RawCollection {
        RawCollection {
            collection: name.to_string(),
        }
    }

    fn field(collection: &str, name: &str, field_type: &str, nullable: bool) -> RawField {
        RawField {
            field: name.to_string(),
            collection: collection.to_string(),
            field_type: field_type.to_string(),
            schema: Some(FieldSchema {
                is_nullable: nullable,
            }),
            meta: None,
        }
    }

    fn with_interface(mut field: RawField, interface: &str) -> RawField {
        field.meta.get_or_insert_with(FieldMeta::default).interface = Some(interface.to_string());
        field
    }

    fn with_choices(mut field: RawField, choices: &[&str]) -> RawField {
        field.meta.get_or_insert_with(FieldMeta::default).options = Some(FieldOptions {
            choices: Some(
                choices
                    .iter()
                    .map(|c| ChoiceEntry::Bare(Some(c.to_string())))
                    .collect(),
            ),
        });
        field
    }

    fn blog_schema() -> (Vec<RawCollection>, Vec<RawField>, Vec<RawRelation>) {
        let collections = vec![
            collection("blog_posts"),
            collection("authors"),
            collection("empty_collection"),
        ];
        let fields = vec![
            field("blog_posts", "title", "string", false),
            with_choices(
                field("blog_posts", "status", "string", false),
                &["draft", "published", "draft"],
            ),
            field("blog_posts", "id", "integer", false),
            field("blog_posts", "author", "uuid", true),
            field("blog_posts", "cover-image", "uuid", true),
            with_interface(
                field("blog_posts", "divider", "alias", false),
                "presentation-divider",
            ),
            field("authors", "id", "uuid", false),
            field("authors", "posts", "alias", false),
            field("authors", "settings", "json", true),
        ];
        let relations = vec![RawRelation {
            meta: Some(RelationMeta {
                one_collection: Some("authors".to_string()),
                one_field: Some("posts".to_string()),
                many_collection: Some("blog_posts".to_string()),
                many_field: Some("author".to_string()),
            }),
        }];
        (collections, fields, relations)
    }

    fn render(intersection: bool) -> String {
        let (collections, fields, relations) = blog_schema();
        let merged = gather_collections(&collections, &fields, &relations);
        let config = TypesyncConfig {
            use_intersection_types: intersection,
            ..TypesyncConfig::default()
        };
        generate_ts_type_string(&merged, &config).unwrap()
    }

    #[test]
    fn test_full_output() {
        let expected = r#"export type Authors = {
  id: string;
  posts: (string | number)[] | (BlogPosts)[];
  settings?: unknown;
};

export type BlogPosts = {
  author?: string | number | Authors;
  "cover-image"?: string;
  id: number;
  status: "draft" | "published";
  title: string;
};

export type GeneratedDirectusTypes = {
  authors: Authors;
  blog_posts: BlogPosts;
};
"#;
        assert_eq!(render(false), expected);
    }

    #[test]
    fn test_intersection_mode() {
        let output = render(true);
        assert!(output.contains("  posts: (string | number)[] & (BlogPosts)[];\n"));
        assert!(output.contains("  author?: string | number & Authors;\n"));
    }

    #[test]
    fn test_presentation_fields_are_skipped() {
        assert!(!render(false).contains("divider"));
    }

    #[test]
    fn test_empty_schema() {
        let output =
            generate_ts_type_string(&Collections::new(), &TypesyncConfig::default()).unwrap();
        assert_eq!(output, "export type GeneratedDirectusTypes = {\n\n};\n");
    }

    #[test]
    fn test_custom_lookup_type_name() {
        let merged = gather_collections(
            &[collection("pages")],
            &[field("pages", "slug", "string", false)],
            &[],
        );
        let config = TypesyncConfig {
            lookup_type_name: "Schema".to_string(),
            ..TypesyncConfig::default()
        };
        let output = generate_ts_type_string(&merged, &config).unwrap();
        assert!(output.ends_with("export type Schema = {\n  pages: Pages;\n};\n"));
    }

    #[test]
    fn test_collection_with_only_presentation_fields_is_emitted_empty() {
        let merged = gather_collections(
            &[collection("notices")],
            &[with_interface(
                field("notices", "banner", "alias", false),
                "presentation-notice",
            )],
            &[],
        );
        let output = generate_ts_type_string(&merged, &TypesyncConfig::default()).unwrap();
        assert!(output.starts_with("export type Notices = {\n};\n\n"));
    }

    #[test]
    fn test_invalid_choices_abort_generation() {
        let mut raw = field("pages", "layout", "string", false);
        raw.meta = Some(FieldMeta {
            interface: None,
            options: Some(FieldOptions {
                choices: Some(vec![ChoiceEntry::Unsupported(serde_json::json!(3))]),
            }),
        });
        let merged = gather_collections(&[collection("pages")], &[raw], &[]);
        assert!(generate_ts_type_string(&merged, &TypesyncConfig::default()).is_err());
    }

    fn collection_name_strategy() -> impl Strategy<Value = String> {
        "[a-z]{1,8}"
    }

    fn field_name_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z_]{0,8}"
    }

    proptest! {
        #[test]
        fn prop_output_is_independent_of_input_order(
            names in prop::collection::btree_set(collection_name_strategy(), 1..6),
            fields_per_collection in prop::collection::vec(
                prop::collection::btree_set(field_name_strategy(), 0..5),
                6,
            ),
            seed in any::<u64>(),
        ) {
            let collections: Vec<RawCollection> = names.iter().map(|n| collection(n)).collect();
            let fields: Vec<RawField> = names
                .iter()
                .zip(&fields_per_collection)
                .flat_map(|(c, fs)| {
                    fs.iter()
                        .enumerate()
                        .map(move |(i, f)| field(c, f, "integer", i % 2 == 0))
                })
                .collect();

            let mut shuffled_collections = collections.clone();
            let mut shuffled_fields = fields.clone();
            let rotate_by = (seed as usize) % shuffled_fields.len().max(1);
            shuffled_fields.rotate_left(rotate_by);
            shuffled_fields.reverse();
            shuffled_collections.reverse();

            let config = TypesyncConfig::default();
            let a = generate_ts_type_string(
                &gather_collections(&collections, &fields, &[]),
                &config,
            ).unwrap();
            let b = generate_ts_type_string(
                &gather_collections(&shuffled_collections, &shuffled_fields, &[]),
                &config,
            ).unwrap();
            let c = generate_ts_type_string(
                &gather_collections(&collections, &fields, &[]),
                &config,
            ).unwrap();

            prop_assert_eq!(&a, &b);
            prop_assert_eq!(&a, &c);

            for (name, fs) in names.iter().zip(&fields_per_collection) {
                let header = format!("export type {} = {{", pascal_case(name));
                prop_assert_eq!(a.contains(&header), !fs.is_empty());
            }
        }

        #[test]
        fn prop_nullable_fields_are_optional(nullable in any::<bool>()) {
            let merged = gather_collections(
                &[collection("items")],
                &[field("items", "value", "float", nullable)],
                &[],
            );
            let output = generate_ts_type_string(&merged, &TypesyncConfig::default()).unwrap();
            let member = if nullable { "  value?: number;\n" } else { "  value: number;\n" };
            prop_assert!(output.contains(member));
        }
    }
}
