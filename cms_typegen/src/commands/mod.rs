//! Command handlers for the cms_typegen CLI.

pub mod generate;
pub mod info;
pub mod init;
pub mod validate;
pub mod watch;
