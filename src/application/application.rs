use fstree::{Node, TreeDocument, TreeLoadError, filter, is_directory, is_file, map, reduce};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::application::render::{Outcome, RenderError, TreeSummary, render};
use crate::cli::Operation;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let document = TreeDocument::from_path(&app_config.tree_file)
            .await
            .context(TreeLoadSnafu)?;
        debug!("Loaded tree rooted at '{}'", document.root().name());

        let output = Self::process(document.into_root(), &app_config)?;
        println!("{output}");

        Ok(())
    }

    /// Applies the exclusions and the requested operation, returning the
    /// rendered output.
    fn process(root: Node, app_config: &RuntimeConfig) -> Result<String, ApplicationError> {
        let outcome = match Self::exclude(root, &app_config.exclude) {
            Some(root) => Self::apply(root, app_config.operation),
            None => {
                info!("Root was excluded, nothing left to process");
                Outcome::Empty
            }
        };

        render(&outcome, app_config.format, app_config.use_color).context(RenderSnafu)
    }

    fn exclude(root: Node, excluded: &[String]) -> Option<Node> {
        if excluded.is_empty() {
            return Some(root);
        }
        debug!("Excluding names: {:?}", excluded);
        filter(
            |node| !excluded.iter().any(|name| name == node.name()),
            &root,
        )
    }

    fn apply(root: Node, operation: Operation) -> Outcome {
        debug!("Running operation {:?}", operation);
        match operation {
            Operation::Show => Outcome::Tree(root),
            Operation::Count => Outcome::Summary(TreeSummary {
                nodes: reduce(|acc, _| acc + 1, &root, 0),
                files: reduce(|acc, node| acc + usize::from(is_file(node)), &root, 0),
                directories: reduce(|acc, node| acc + usize::from(is_directory(node)), &root, 0),
            }),
            Operation::Names => Outcome::Names(reduce(
                |mut names: Vec<String>, node| {
                    names.push(node.name().to_string());
                    names
                },
                &root,
                Vec::new(),
            )),
            Operation::Directories => match filter(is_directory, &root) {
                Some(directories) => Outcome::Tree(directories),
                None => Outcome::Empty,
            },
            Operation::Uppercase => {
                Outcome::Tree(map(|node| node.with_name(node.name().to_uppercase()), &root))
            }
            Operation::Lowercase => {
                Outcome::Tree(map(|node| node.with_name(node.name().to_lowercase()), &root))
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the tree"))]
    TreeLoadError { source: TreeLoadError },
    #[snafu(display("Critical failure encountered while rendering the result"))]
    RenderError { source: RenderError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use fstree::{mkdir, mkfile};
    use rstest::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn config(operation: Operation, exclude: &[&str], format: OutputFormat) -> RuntimeConfig {
        RuntimeConfig {
            tree_file: PathBuf::from("tree.yaml"),
            operation,
            exclude: exclude.iter().map(|name| name.to_string()).collect(),
            format,
            use_color: false,
        }
    }

    fn sample_tree() -> Node {
        mkdir(
            "/",
            [
                mkdir("eTc", [mkdir("NgiNx", []), mkdir("CONSUL", [mkfile("config.json")])]),
                mkfile("hOsts"),
            ],
        )
    }

    #[rstest]
    #[case(Operation::Count, "nodes: 6\nfiles: 2\ndirectories: 4")]
    #[case(Operation::Names, "/\neTc\nNgiNx\nCONSUL\nconfig.json\nhOsts")]
    #[case(
        Operation::Directories,
        "/\n└── eTc/\n    ├── NgiNx/\n    └── CONSUL/"
    )]
    #[case(
        Operation::Uppercase,
        "/\n├── ETC/\n│   ├── NGINX/\n│   └── CONSUL/\n│       └── CONFIG.JSON\n└── HOSTS"
    )]
    fn renders_each_operation(#[case] operation: Operation, #[case] expected: &str) {
        let output =
            Application::process(sample_tree(), &config(operation, &[], OutputFormat::Tree)).unwrap();

        assert_eq!(output, expected);
    }

    #[test]
    fn exclusions_run_before_the_operation() {
        let output = Application::process(
            sample_tree(),
            &config(Operation::Names, &["CONSUL", "hOsts"], OutputFormat::Tree),
        )
        .unwrap();

        assert_eq!(output, "/\neTc\nNgiNx");
    }

    #[test]
    fn excluding_the_root_leaves_nothing() {
        let output = Application::process(
            sample_tree(),
            &config(Operation::Show, &["/"], OutputFormat::Tree),
        )
        .unwrap();

        assert_eq!(output, "(empty tree)");
    }

    #[test]
    fn directories_of_a_single_file_is_empty() {
        let output = Application::process(
            mkfile("hosts"),
            &config(Operation::Directories, &[], OutputFormat::Json),
        )
        .unwrap();

        assert_eq!(output, "null");
    }

    #[test]
    fn count_renders_as_json() {
        let output = Application::process(
            sample_tree(),
            &config(Operation::Count, &[], OutputFormat::Json),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "nodes": 6, "files": 2, "directories": 4 })
        );
    }

    #[compio::test]
    async fn run_fails_on_missing_tree_file() {
        let mut app_config = config(Operation::Show, &[], OutputFormat::Tree);
        app_config.tree_file = PathBuf::from("/this/path/does/not/exist.yaml");

        let result = Application::run(app_config).await;

        assert!(matches!(result, Err(ApplicationError::TreeLoadError { .. })));
    }

    #[compio::test]
    async fn run_succeeds_on_valid_tree_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "name: etc\ntype: directory\nchildren: [{{ name: hosts, type: file }}]")
            .expect("Failed to write to temp file");
        let mut app_config = config(Operation::Count, &[], OutputFormat::Tree);
        app_config.tree_file = temp_file.path().to_path_buf();

        let result = Application::run(app_config).await;

        assert!(result.is_ok());
    }
}
