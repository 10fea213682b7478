//! Built-in framework mappings and the short folder names used to write them.

mod defaults;
pub mod format;
pub mod parse;
mod provider;

pub use format::short_folder_name;
pub use parse::{parse_folder, try_parse_folder};
pub use provider::DefaultMappingProvider;
