// cms_typegen - TypeScript type generation from a CMS schema snapshot

pub mod config;
pub mod error;
pub mod hooks;
pub mod schema;
pub mod source;
pub mod sync;
// TypeSync - TypeScript type generation
pub mod typesync;

// Re-export commonly used items for convenience
pub use error::{Result, TypegenError};
pub use hooks::{HookRegistry, SchemaEvent};
pub use schema::{Collections, SchemaSnapshot, gather_collections};
pub use sync::{SyncReport, TypeSyncer};
pub use typesync::generate_ts_type_string;
