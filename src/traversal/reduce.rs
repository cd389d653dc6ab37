use crate::node::Node;

/// Folds the tree in pre-order.
///
/// `combine` sees each node before its descendants, and the accumulator
/// is threaded through the children left to right.
///
/// ```
/// use fstree::{mkdir, mkfile, reduce};
///
/// let tree = mkdir("etc", [mkfile("config"), mkfile("hosts")]);
///
/// assert_eq!(reduce(|count, _| count + 1, &tree, 0), 3);
///
/// let names = reduce(
///     |mut names: Vec<String>, node| {
///         names.push(node.name().to_string());
///         names
///     },
///     &tree,
///     Vec::new(),
/// );
/// assert_eq!(names, ["etc", "config", "hosts"]);
/// ```
pub fn reduce<A, F>(combine: F, node: &Node, initial: A) -> A
where
    F: FnMut(A, &Node) -> A,
{
    node.pre_order().fold(initial, combine)
}

impl Node {
    /// Method form of [`reduce`].
    pub fn reduce<A, F>(&self, combine: F, initial: A) -> A
    where
        F: FnMut(A, &Node) -> A,
    {
        reduce(combine, self, initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{is_directory, is_file, mkdir, mkfile};
    use rstest::*;

    fn sample_tree() -> Node {
        mkdir(
            "/",
            [
                mkdir(
                    "etc",
                    [
                        mkdir("nginx", []),
                        mkdir("consul", [mkfile("config.json"), mkfile("data")]),
                    ],
                ),
                mkfile("hosts"),
            ],
        )
    }

    #[rstest]
    #[case(mkfile("config"), 1)]
    #[case(mkdir("etc", []), 1)]
    #[case(mkdir("etc", [mkfile("config"), mkfile("hosts")]), 3)]
    #[case(sample_tree(), 7)]
    fn counts_every_node(#[case] tree: Node, #[case] expected: usize) {
        assert_eq!(reduce(|count, _| count + 1, &tree, 0_usize), expected);
    }

    #[test]
    fn files_and_directories_add_up_to_all_nodes() {
        let tree = sample_tree();

        let files = reduce(|acc, node| if is_file(node) { acc + 1 } else { acc }, &tree, 0);
        let directories = tree.reduce(|acc, node| if is_directory(node) { acc + 1 } else { acc }, 0);

        assert_eq!(files, 3);
        assert_eq!(directories, 4);
        assert_eq!(files + directories, tree.reduce(|acc, _| acc + 1, 0));
    }

    #[test]
    fn accumulator_is_threaded_in_pre_order() {
        let tree = sample_tree();

        let path = reduce(
            |acc: String, node| format!("{acc}/{}", node.name()),
            &tree,
            String::new(),
        );

        assert_eq!(path, "///etc/nginx/consul/config.json/data/hosts");
    }

    #[test]
    fn initial_value_is_passed_to_root() {
        let seen_initial = reduce(
            |acc: Option<i32>, _| acc.map(|value| value + 1),
            &mkfile("config"),
            Some(41),
        );

        assert_eq!(seen_initial, Some(42));
    }
}
