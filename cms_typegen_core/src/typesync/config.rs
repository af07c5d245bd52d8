use serde::{Deserialize, Serialize};

pub const DEFAULT_LOOKUP_TYPE_NAME: &str = "GeneratedDirectusTypes";

/// One path or a list of paths, as accepted in `typesync.targets`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Targets {
    One(String),
    Many(Vec<String>),
}

impl Default for Targets {
    fn default() -> Self {
        Targets::Many(Vec::new())
    }
}

impl Targets {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Targets::One(path) if path.is_empty() => Vec::new(),
            Targets::One(path) => vec![path.clone()],
            Targets::Many(paths) => paths.iter().filter(|p| !p.is_empty()).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_vec().is_empty()
    }
}

/// Configuration for Typesync operations (TypeScript declaration generation)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypesyncConfig {
    /// Files the generated declarations are written to
    #[serde(default)]
    pub targets: Targets,
    /// Join foreign keys and related items with `&` instead of `|`
    #[serde(default)]
    pub use_intersection_types: bool,
    /// Name of the type mapping collection names to their generated types
    #[serde(default = "default_lookup_type_name")]
    pub lookup_type_name: String,
}

fn default_lookup_type_name() -> String {
    DEFAULT_LOOKUP_TYPE_NAME.to_string()
}

impl Default for TypesyncConfig {
    fn default() -> Self {
        Self {
            targets: Targets::default(),
            use_intersection_types: false,
            lookup_type_name: default_lookup_type_name(),
        }
    }
}
