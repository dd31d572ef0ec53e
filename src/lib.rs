#![forbid(unsafe_code)]
//! README Forge - GitHub profile README generator
//!
//! A structured profile config, a command-driven state store, a pure
//! Markdown renderer, and an AI adapter for auto-populating fields. The
//! library is UI-free; the `readme-forge` binary is one thin front end.

pub mod ai;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod partial;
pub mod profile;
pub mod render;
pub mod store;

pub use ai::GeminiClient;
pub use error::{ForgeError, Result};
pub use partial::PartialProfile;
pub use profile::ProfileConfig;
pub use render::render;
pub use store::{apply, Command, ProfileStore};
