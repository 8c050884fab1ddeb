//! Pig Latin translator - English to Pig Latin as a library, CLI and HTTP API
//!
//! ```
//! assert_eq!(piglatin::translate("I love apples").unwrap(), "Iyay ovelay applesyay");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod processors;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    config::TranslatorConfig,
    errors::{Result, TranslationError},
    models::{Segment, TranslationRequest, TranslationResult},
    translator::{segments, translate, translate_optional, translate_request, translate_word},
};

pub use processors::text::TextProcessor;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
