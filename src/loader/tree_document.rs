use std::{
    borrow::Cow,
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::node::{Directory, File, Meta, MetaValue, Node};

const NAME_KEY: &str = "name";
const TYPE_KEY: &str = "type";
const META_KEY: &str = "meta";
const CHILDREN_KEY: &str = "children";

/// A tree read from a YAML description.
///
/// ```yaml
/// name: /
/// type: directory
/// meta: { owner: root }
/// children:
///   - { name: hosts, type: file }
///   - name: etc
///     type: directory
/// ```
///
/// JSON documents are accepted too, as they are valid YAML.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeDocument {
    root: Node,
}

impl TreeDocument {
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, TreeLoadError> {
        let path = path.as_ref();
        debug!("Reading tree description: {}", path.display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.to_path_buf(),
        })?;
        debug!("Successfully read tree description: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(NotUtf8Snafu {
            file_path: path.to_path_buf(),
        })?;
        contents.as_str().try_into()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    fn parse_node(yaml: &Yaml, location: &str) -> Result<Node, TreeLoadError> {
        let node_data = yaml.as_mapping().context(NodeNotMapSnafu { location })?;

        let name = lookup(node_data, NAME_KEY)
            .and_then(|value| value.as_str())
            .context(MissingNameSnafu { location })?
            .to_string();
        let location = child_location(location, &name);

        let meta = match lookup(node_data, META_KEY) {
            None => Meta::new(),
            Some(value) => {
                let mapping = value.as_mapping().context(MetaNotMapSnafu {
                    location: location.clone(),
                })?;
                Self::parse_meta_mapping(mapping, &location)?
            }
        };

        let node_type = lookup(node_data, TYPE_KEY)
            .and_then(|value| value.as_str())
            .context(MissingTypeSnafu {
                location: location.clone(),
            })?;
        let children = lookup(node_data, CHILDREN_KEY);

        match node_type {
            "file" => {
                ensure!(children.is_none(), FileWithChildrenSnafu { location });
                Ok(File { name, meta }.into())
            }
            "directory" => {
                let children = match children {
                    None => Vec::new(),
                    Some(value) => value
                        .as_sequence()
                        .context(ChildrenNotSequenceSnafu {
                            location: location.clone(),
                        })?
                        .iter()
                        .map(|child| Self::parse_node(child, &location))
                        .collect::<Result<Vec<_>, _>>()?,
                };
                debug!("Parsed directory '{}' with {} children", location, children.len());
                Ok(Directory {
                    name,
                    children: children.into(),
                    meta,
                }
                .into())
            }
            other => UnknownNodeTypeSnafu {
                location,
                node_type: other,
            }
            .fail(),
        }
    }

    fn parse_meta_mapping(
        mapping: &LinkedHashMap<Yaml, Yaml>,
        location: &str,
    ) -> Result<BTreeMap<String, MetaValue>, TreeLoadError> {
        mapping
            .iter()
            .map(|(key, value)| {
                let key = match key {
                    Yaml::Value(Scalar::String(key)) => key.to_string(),
                    other => {
                        return MetaKeyNotStringSnafu {
                            location,
                            key: format!("{other:?}"),
                        }
                        .fail();
                    }
                };
                let value = Self::parse_meta_value(value, location, &key)?;
                Ok((key, value))
            })
            .collect()
    }

    fn parse_meta_value(
        yaml: &Yaml,
        location: &str,
        key: &str,
    ) -> Result<MetaValue, TreeLoadError> {
        match yaml {
            Yaml::Value(Scalar::Null) => Ok(MetaValue::Null),
            Yaml::Value(Scalar::Boolean(value)) => Ok(MetaValue::Bool(*value)),
            Yaml::Value(Scalar::Integer(value)) => Ok(MetaValue::Integer(*value)),
            Yaml::Value(Scalar::FloatingPoint(value)) => Ok(MetaValue::Float(value.into_inner())),
            Yaml::Value(Scalar::String(value)) => Ok(MetaValue::String(value.to_string())),
            Yaml::Sequence(items) => items
                .iter()
                .map(|item| Self::parse_meta_value(item, location, key))
                .collect::<Result<Vec<_>, _>>()
                .map(MetaValue::Array),
            Yaml::Mapping(mapping) => {
                Self::parse_meta_mapping(mapping, location).map(MetaValue::Map)
            }
            Yaml::Tagged(_, inner) => Self::parse_meta_value(inner, location, key),
            _ => UnsupportedMetaValueSnafu { location, key }.fail(),
        }
    }
}

impl TryFrom<&str> for TreeDocument {
    type Error = TreeLoadError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(EmptyDocumentSnafu)?;

        let root = Self::parse_node(document, "")?;
        Ok(TreeDocument { root })
    }
}

fn lookup<'a, 'input>(
    node_data: &'a LinkedHashMap<Yaml<'input>, Yaml<'input>>,
    key: &'static str,
) -> Option<&'a Yaml<'input>> {
    node_data
        .get(&Yaml::Value(Scalar::String(Cow::Borrowed(key))))
        .filter(|value| !matches!(value, Yaml::Value(Scalar::Null)))
}

/// Slash-joined names from the root down to `name`, used in error messages.
fn child_location(parent: &str, name: &str) -> String {
    match parent {
        "" => name.to_string(),
        "/" => format!("/{name}"),
        _ => format!("{parent}/{name}"),
    }
}

#[derive(Debug, Snafu)]
pub enum TreeLoadError {
    #[snafu(display("Failed to read the tree description: {}", file_path.display()))]
    ReadError {
        file_path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Tree description {} is not valid UTF-8", file_path.display()))]
    NotUtf8 {
        file_path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the tree description"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Tree description is empty"))]
    EmptyDocument,
    #[snafu(display("Node under '{}' should be a map", location))]
    NodeNotMap { location: String },
    #[snafu(display("Node under '{}' has no string 'name'", location))]
    MissingName { location: String },
    #[snafu(display("Node '{}' has no string 'type'", location))]
    MissingType { location: String },
    #[snafu(display(
        "Node '{}' has unknown type '{}', expected 'file' or 'directory'",
        location,
        node_type
    ))]
    UnknownNodeType { location: String, node_type: String },
    #[snafu(display("Meta of node '{}' should be a map", location))]
    MetaNotMap { location: String },
    #[snafu(display("Meta of node '{}' has non-string key {}", location, key))]
    MetaKeyNotString { location: String, key: String },
    #[snafu(display("Meta '{}' of node '{}' holds an unsupported value", key, location))]
    UnsupportedMetaValue { location: String, key: String },
    #[snafu(display("Children of directory '{}' should be a sequence", location))]
    ChildrenNotSequence { location: String },
    #[snafu(display("File '{}' cannot have children", location))]
    FileWithChildren { location: String },
}
