use std::iter::FusedIterator;

use crate::node::Node;

/// Pre-order walk over a tree: every node is yielded before its
/// descendants, siblings in their stored order.
///
/// Keeps its own stack, so the depth of the tree does not grow the call
/// stack.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    pending: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self {
            pending: vec![root],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        if let Some(children) = node.children() {
            // Reversed so the first child is popped next
            self.pending.extend(children.iter().rev());
        }
        Some(node)
    }
}

impl FusedIterator for PreOrder<'_> {}

impl Node {
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }
}
