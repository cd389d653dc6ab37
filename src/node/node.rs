use std::sync::Arc;

use derive_more::{From, IsVariant};
use serde::{Deserialize, Serialize};

use crate::node::Meta;

/// Leaf of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    #[serde(default)]
    pub meta: Meta,
}

/// Inner node of the tree, owning an ordered sequence of children.
///
/// Children sit behind an `Arc`, so cloning a directory is shallow and
/// unchanged subtrees are shared between a tree and the trees derived
/// from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    pub name: String,
    #[serde(default = "no_children")]
    pub children: Arc<[Node]>,
    #[serde(default)]
    pub meta: Meta,
}

fn no_children() -> Arc<[Node]> {
    Arc::from([])
}

/// A file or a directory.
///
/// Serializes with a `type` discriminator (`"file"` or `"directory"`)
/// next to the record fields. Files have no `children` field at all.
#[derive(Debug, Clone, PartialEq, From, IsVariant, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(File),
    Directory(Directory),
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: Meta::new(),
        }
    }
}

impl Directory {
    pub fn new(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            name: name.into(),
            children: children.into_iter().collect(),
            meta: Meta::new(),
        }
    }

    /// Returns a copy of this directory holding `children` instead of its own.
    pub fn with_children(&self, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            name: self.name.clone(),
            children: children.into_iter().collect(),
            meta: self.meta.clone(),
        }
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Directory(directory) => &directory.name,
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            Node::File(file) => &file.meta,
            Node::Directory(directory) => &directory.meta,
        }
    }

    /// Children of a directory, `None` for a file.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::File(_) => None,
            Node::Directory(directory) => Some(&directory.children),
        }
    }

    /// Returns a copy of this node with a different name.
    pub fn with_name(&self, name: impl Into<String>) -> Node {
        let name = name.into();
        match self {
            Node::File(file) => Node::File(File {
                name,
                meta: file.meta.clone(),
            }),
            Node::Directory(directory) => Node::Directory(Directory {
                name,
                children: Arc::clone(&directory.children),
                meta: directory.meta.clone(),
            }),
        }
    }

    /// Returns a copy of this node with `meta` replacing its metadata.
    pub fn with_meta(&self, meta: Meta) -> Node {
        match self {
            Node::File(file) => Node::File(File {
                name: file.name.clone(),
                meta,
            }),
            Node::Directory(directory) => Node::Directory(Directory {
                name: directory.name.clone(),
                children: Arc::clone(&directory.children),
                meta,
            }),
        }
    }
}

/// Makes a file node with empty metadata.
///
/// ```
/// use fstree::{mkfile, is_file};
///
/// let config = mkfile("config.json");
/// assert!(is_file(&config));
/// assert!(config.meta().is_empty());
/// ```
pub fn mkfile(name: impl Into<String>) -> Node {
    File::new(name).into()
}

/// Makes a directory node with empty metadata.
///
/// Pass `[]` for a directory without children. Children are taken as
/// given, so the caller decides the sibling order.
///
/// ```
/// use fstree::{mkdir, mkfile};
///
/// let etc = mkdir("etc", [mkfile("config"), mkfile("hosts")]);
/// assert_eq!(etc.children().map(<[_]>::len), Some(2));
/// ```
pub fn mkdir(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Node {
    Directory::new(name, children).into()
}

pub fn is_file(node: &Node) -> bool {
    node.is_file()
}

pub fn is_directory(node: &Node) -> bool {
    node.is_directory()
}

pub fn get_name(node: &Node) -> &str {
    node.name()
}

pub fn get_meta(node: &Node) -> &Meta {
    node.meta()
}

pub fn get_children(node: &Node) -> Option<&[Node]> {
    node.children()
}
