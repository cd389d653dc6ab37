//! Loading trees from YAML tree descriptions.

mod tree_document;

pub use tree_document::{TreeDocument, TreeLoadError};
