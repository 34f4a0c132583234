use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

// ============================================================================
// Element tree (input boundary)
// ============================================================================

/// Declared kind of a UI element, as tagged by the designer.
///
/// Any tag we do not recognize deserializes to `Unknown`, which the
/// classifier maps to `Capability::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Button,
    Toggle,
    Slider,
    Scrollbar,
    InputField,
    Dropdown,
    Text,
    Image,
    RawImage,
    ScrollRect,
    RectTransform,
    GameObject,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ElementKind {
    pub const ALL: [ElementKind; 13] = [
        ElementKind::Unknown,
        ElementKind::Button,
        ElementKind::Toggle,
        ElementKind::Slider,
        ElementKind::Scrollbar,
        ElementKind::InputField,
        ElementKind::Dropdown,
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::RawImage,
        ElementKind::ScrollRect,
        ElementKind::RectTransform,
        ElementKind::GameObject,
    ];
}

/// What a classified element contributes to the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    /// Excluded from generation.
    None,
    /// Field declaration plus attachment.
    FieldOnly,
    /// Field, attachment, event registration and a handler.
    Interactive,
}

/// A named, typed node of the element tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub name: String,

    #[serde(default)]
    pub kind: ElementKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }
}

/// One direct child as seen through an `ElementSource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildEntry<'a> {
    pub name: &'a str,
    pub kind: ElementKind,
}

/// Read-only view of a UI root supplied by the host.
///
/// Only direct children are enumerated; nested descendants are handled by
/// running the generator again on the sub-root.
pub trait ElementSource {
    fn root_name(&self) -> &str;
    fn direct_children(&self) -> Vec<ChildEntry<'_>>;
}

impl ElementSource for ElementNode {
    fn root_name(&self) -> &str {
        &self.name
    }

    fn direct_children(&self) -> Vec<ChildEntry<'_>> {
        self.children
            .iter()
            .map(|c| ChildEntry {
                name: &c.name,
                kind: c.kind,
            })
            .collect()
    }
}

// ============================================================================
// Element tree document
// ============================================================================

/// A document holding one or more UI roots, read from YAML or JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiDocument {
    #[serde(default)]
    pub roots: Vec<ElementNode>,
}

impl UiDocument {
    /// Load a document, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content).map_err(|e| {
                CodegenError::TreeParse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }),
            Some("json") => Self::from_json(&content).map_err(|e| CodegenError::TreeParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            _ => Err(CodegenError::UnsupportedTreeFormat(path.to_path_buf())),
        }
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Pick roots by name, in the order requested. An empty selection
    /// returns every root in document order.
    pub fn select(&self, names: &[String]) -> Result<Vec<&ElementNode>> {
        if names.is_empty() {
            return Ok(self.roots.iter().collect());
        }

        names
            .iter()
            .map(|name| {
                self.roots
                    .iter()
                    .find(|r| &r.name == name)
                    .ok_or_else(|| CodegenError::UnknownRoot(name.clone()))
            })
            .collect()
    }
}
