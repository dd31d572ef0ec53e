//! CLI command implementations.

mod generate;
mod init;
mod merge;
mod render;
mod reset;

pub use generate::{execute_generate, GenerateSubcommand};
pub use init::{execute_init, InitOptions};
pub use merge::{execute_export, execute_import, execute_merge};
pub use render::{execute_render, RenderOptions};
pub use reset::execute_reset;
