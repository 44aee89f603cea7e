//! Foundation types for scenario parsing.
//!
//! This module provides the vocabulary shared by every other layer:
//! - [`Keyword`] - Line-leading keywords of the diagram notation
//! - Arrow and separator markers, fence markers and parser limits
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;

pub use constants::Keyword;
