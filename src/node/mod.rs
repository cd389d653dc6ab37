//! Tree node model.
//!
//! A tree is a [`Node`]: either a [`File`] leaf or a [`Directory`] owning an
//! ordered sequence of child nodes. Nodes are immutable values; every
//! operation that "changes" a node builds a new one.

mod meta;
mod node;

pub use meta::{Meta, MetaValue, meta_from};
pub use node::{
    Directory, File, Node, get_children, get_meta, get_name, is_directory, is_file, mkdir, mkfile,
};
