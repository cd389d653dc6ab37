use tracing::warn;

use crate::node::{Directory, Node};

/// Rebuilds `node` by applying `transform` to it and, when it is a
/// directory, to every descendant in pre-order.
///
/// Recursion follows the *original* node. For a directory, the children
/// returned by `transform` are discarded and replaced by the mapped
/// original children. A file is never recursed into, so a directory
/// produced from a file keeps whatever children `transform` gave it.
///
/// A directory that `transform` turns into a file still has its
/// descendants mapped, keeping the sequence of `transform` calls intact,
/// but the mapped children are dropped since a file cannot hold them.
///
/// ```
/// use fstree::{map, mkdir, mkfile};
///
/// let tree = mkdir("etc", [mkfile("config"), mkfile("hosts")]);
/// let upper = map(|node| node.with_name(node.name().to_uppercase()), &tree);
///
/// assert_eq!(upper, mkdir("ETC", [mkfile("CONFIG"), mkfile("HOSTS")]));
/// ```
pub fn map<F>(mut transform: F, node: &Node) -> Node
where
    F: FnMut(&Node) -> Node,
{
    map_node(&mut transform, node)
}

fn map_node<F>(transform: &mut F, node: &Node) -> Node
where
    F: FnMut(&Node) -> Node,
{
    let updated = transform(node);

    let Node::Directory(original) = node else {
        return updated;
    };

    let children = original
        .children
        .iter()
        .map(|child| map_node(transform, child))
        .collect::<Vec<_>>();

    match updated {
        Node::Directory(directory) => Node::Directory(Directory {
            children: children.into(),
            ..directory
        }),
        Node::File(file) => {
            warn!(
                "Transform turned directory '{}' into file '{}', dropping {} mapped children",
                original.name,
                file.name,
                children.len()
            );
            Node::File(file)
        }
    }
}

impl Node {
    /// Method form of [`map`].
    pub fn map<F>(&self, transform: F) -> Node
    where
        F: FnMut(&Node) -> Node,
    {
        map(transform, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{File, MetaValue, meta_from, mkdir, mkfile};

    fn uppercase(node: &Node) -> Node {
        node.with_name(node.name().to_uppercase())
    }

    #[test]
    fn uppercases_every_name_keeping_shape() {
        let tree = mkdir(
            "/",
            [
                mkdir(
                    "eTc",
                    [
                        mkdir("NgiNx", []),
                        mkdir("CONSUL", [mkfile("config.json")]),
                    ],
                ),
                mkfile("hOsts"),
            ],
        );

        let actual = map(uppercase, &tree);

        let expected = mkdir(
            "/",
            [
                mkdir(
                    "ETC",
                    [
                        mkdir("NGINX", []),
                        mkdir("CONSUL", [mkfile("CONFIG.JSON")]),
                    ],
                ),
                mkfile("HOSTS"),
            ],
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn input_tree_is_left_untouched() {
        let tree = mkdir("etc", [mkfile("hosts")]);
        let snapshot = tree.clone();

        let _ = tree.map(uppercase);

        assert_eq!(tree, snapshot);
    }

    #[test]
    fn transform_sees_nodes_in_pre_order() {
        let tree = mkdir("/", [mkdir("etc", [mkfile("hosts")]), mkfile("robots.txt")]);
        let mut seen = Vec::new();

        let _ = map(
            |node| {
                seen.push(node.name().to_string());
                node.clone()
            },
            &tree,
        );

        assert_eq!(seen, vec!["/", "etc", "hosts", "robots.txt"]);
    }

    #[test]
    fn transform_children_are_replaced_by_mapped_originals() {
        let tree = mkdir("etc", [mkfile("hosts")]);

        let actual = map(
            |node| match node {
                Node::Directory(directory) => directory.with_children([mkfile("injected")]).into(),
                Node::File(_) => node.clone(),
            },
            &tree,
        );

        assert_eq!(actual, mkdir("etc", [mkfile("hosts")]));
    }

    #[test]
    fn transform_can_rewrite_meta() {
        let tree = mkdir("etc", [mkfile("hosts")]);

        let actual = map(
            |node| node.with_meta(meta_from([("visited", true)])),
            &tree,
        );

        let visited = actual
            .pre_order()
            .all(|node| node.meta().get("visited") == Some(&MetaValue::Bool(true)));
        assert!(visited);
    }

    #[test]
    fn file_turned_into_directory_is_not_recursed_into() {
        let tree = mkdir("/", [mkfile("hosts")]);
        let mut calls = 0;

        let actual = map(
            |node| {
                calls += 1;
                match node {
                    Node::File(file) => mkdir(file.name.clone(), [mkfile("inside")]),
                    Node::Directory(_) => node.clone(),
                }
            },
            &tree,
        );

        assert_eq!(calls, 2);
        assert_eq!(actual, mkdir("/", [mkdir("hosts", [mkfile("inside")])]));
    }

    #[test]
    fn directory_turned_into_file_drops_children_after_visiting_them() {
        let tree = mkdir("/", [mkdir("etc", [mkfile("hosts")])]);
        let mut seen = Vec::new();

        let actual = map(
            |node| {
                seen.push(node.name().to_string());
                match node {
                    Node::Directory(directory) if directory.name == "etc" => {
                        File::new("etc").into()
                    }
                    _ => node.clone(),
                }
            },
            &tree,
        );

        assert_eq!(seen, vec!["/", "etc", "hosts"]);
        assert_eq!(actual, mkdir("/", [mkfile("etc")]));
    }
}
