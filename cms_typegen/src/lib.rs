pub use cms_typegen_core::{config, error, hooks, schema, source, sync, typesync};
