pub mod config;
pub mod naming;
pub mod resolve;
pub mod typescript;

pub use config::{Targets, TypesyncConfig};
pub use naming::pascal_case;
pub use resolve::resolve_field_type;
pub use typescript::generate_ts_type_string;
