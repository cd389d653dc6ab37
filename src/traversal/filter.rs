use tracing::trace;

use crate::node::{Directory, Node};

/// Prunes the tree to the nodes accepted by `predicate`.
///
/// `predicate` is asked about a node before its children. A rejected node
/// yields `None` and takes its whole subtree with it. An accepted file is
/// returned unchanged; an accepted directory keeps its name and meta and
/// holds only its surviving children, which may leave it empty.
///
/// ```
/// use fstree::{filter, mkdir, mkfile};
///
/// let tree = mkdir("etc", [mkfile("CONFIG"), mkfile("hosts")]);
/// let lowercase = filter(|node| node.name() == node.name().to_lowercase(), &tree);
///
/// assert_eq!(lowercase, Some(mkdir("etc", [mkfile("hosts")])));
/// ```
pub fn filter<P>(mut predicate: P, node: &Node) -> Option<Node>
where
    P: FnMut(&Node) -> bool,
{
    filter_node(&mut predicate, node)
}

fn filter_node<P>(predicate: &mut P, node: &Node) -> Option<Node>
where
    P: FnMut(&Node) -> bool,
{
    if !predicate(node) {
        trace!("Excluding '{}' and its subtree", node.name());
        return None;
    }

    match node {
        Node::File(_) => Some(node.clone()),
        Node::Directory(directory) => {
            let children = directory
                .children
                .iter()
                .filter_map(|child| filter_node(predicate, child))
                .collect::<Vec<_>>();
            Some(Node::Directory(Directory::with_children(directory, children)))
        }
    }
}

impl Node {
    /// Method form of [`filter`].
    pub fn filter<P>(&self, predicate: P) -> Option<Node>
    where
        P: FnMut(&Node) -> bool,
    {
        filter(predicate, self)
    }
}
