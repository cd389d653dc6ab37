//! Immutable filesystem-like trees and structural traversal over them.
//!
//! ```
//! use fstree::{filter, is_directory, map, mkdir, mkfile, reduce};
//!
//! let tree = mkdir("/", [mkdir("etc", [mkfile("hosts")]), mkfile("robots.txt")]);
//!
//! assert_eq!(reduce(|count, _| count + 1, &tree, 0), 4);
//! assert_eq!(
//!     filter(is_directory, &tree),
//!     Some(mkdir("/", [mkdir("etc", [])]))
//! );
//!
//! let upper = map(|node| node.with_name(node.name().to_uppercase()), &tree);
//! assert_eq!(upper.children().unwrap()[1].name(), "ROBOTS.TXT");
//! ```

pub mod loader;
pub mod node;
pub mod traversal;

pub use loader::{TreeDocument, TreeLoadError};
pub use node::{
    Directory, File, Meta, MetaValue, Node, get_children, get_meta, get_name, is_directory,
    is_file, meta_from, mkdir, mkfile,
};
pub use traversal::{PreOrder, filter, map, reduce};
