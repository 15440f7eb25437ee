//! Hook definitions and input typing.
//!
//! - [`builtin`]: well-known hook ids with default commands
//! - [`filetypes`]: file-type tags used by `types` filters

pub mod builtin;
pub mod filetypes;
