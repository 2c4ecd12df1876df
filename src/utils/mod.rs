//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_normalizer`] - Submitted URL normalization

pub mod code_generator;
pub mod url_normalizer;
