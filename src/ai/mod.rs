//! Generative AI integration: a thin HTTP client plus the operation
//! families that turn model responses into store commands.

mod client;
pub mod ops;

pub use client::{GeminiClient, API_KEY_ENV};
