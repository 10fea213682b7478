//! # tfm-engine
//!
//! Target framework compatibility engine.
//! Answers whether a project can consume assets built for another framework
//! ([`CompatibilityProvider`]), lists everything a framework can reach
//! ([`FrameworkExpander`]), and picks the nearest compatible candidate
//! ([`FrameworkReducer`]). [`DefaultMappingProvider`] supplies the built-in
//! framework tables and short folder name parsing.

pub mod compat;
pub mod expander;
pub mod mappings;
pub mod reducer;

pub use compat::CompatibilityProvider;
pub use expander::{Expansion, FrameworkExpander};
pub use mappings::{parse_folder, short_folder_name, try_parse_folder, DefaultMappingProvider};
pub use reducer::FrameworkReducer;
