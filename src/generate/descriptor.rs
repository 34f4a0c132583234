use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::element::classifier::{classify, event_binding, field_type, EventBinding};
use crate::element::element_model::{Capability, ElementKind, ElementSource};
use crate::element::naming::NameConvention;

/// A classified, validated element of one UI root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub identifier: String,
    pub kind: ElementKind,
    pub capability: Capability,
    /// Position of the originating node among the root's direct children.
    pub source_index: usize,
}

impl ControlDescriptor {
    pub fn is_interactive(&self) -> bool {
        self.capability == Capability::Interactive
    }

    pub fn field_type(&self) -> &'static str {
        // Descriptors are never built for `Unknown`
        field_type(self.kind).unwrap_or("Component")
    }

    pub fn event(&self) -> Option<EventBinding> {
        event_binding(self.kind)
    }

    /// `On<Identifier><Suffix>`, or `None` for field-only controls.
    pub fn handler_name(&self) -> Option<String> {
        self.event()
            .map(|e| format!("On{}{}", self.identifier, e.handler_suffix))
    }
}

/// Recoverable problems found while collecting descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A later sibling reused an identifier; it was left out.
    DuplicateIdentifier {
        identifier: String,
        first_index: usize,
        duplicate_index: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateIdentifier {
                identifier,
                first_index,
                duplicate_index,
            } => write!(
                f,
                "duplicate identifier '{}' at child #{} (first defined at child #{}), skipped",
                identifier, duplicate_index, first_index
            ),
        }
    }
}

/// Ordered descriptors for one UI root, in direct-child order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlDescriptorSet {
    pub root_name: String,
    pub descriptors: Vec<ControlDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ControlDescriptorSet {
    /// Classify and validate every direct child of `source`.
    ///
    /// Children with `Capability::None` or an invalid name are skipped
    /// without error. Repeated identifiers keep the first occurrence.
    pub fn collect(source: &dyn ElementSource, naming: &NameConvention) -> Self {
        let root_name = source.root_name().to_string();
        let mut descriptors = Vec::new();
        let mut diagnostics = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, child) in source.direct_children().into_iter().enumerate() {
            let capability = classify(child.kind);
            if capability == Capability::None {
                debug!(root = %root_name, name = child.name, "skipping unclassified element");
                continue;
            }

            if !naming.is_valid_name(child.name) {
                debug!(
                    root = %root_name,
                    name = child.name,
                    "skipping element outside naming convention"
                );
                continue;
            }

            if let Some(&first_index) = seen.get(child.name) {
                let diagnostic = Diagnostic::DuplicateIdentifier {
                    identifier: child.name.to_string(),
                    first_index,
                    duplicate_index: index,
                };
                warn!(root = %root_name, "{}", diagnostic);
                diagnostics.push(diagnostic);
                continue;
            }

            seen.insert(child.name.to_string(), index);
            descriptors.push(ControlDescriptor {
                identifier: child.name.to_string(),
                kind: child.kind,
                capability,
                source_index: index,
            });
        }

        Self {
            root_name,
            descriptors,
            diagnostics,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlDescriptor> {
        self.descriptors.iter()
    }

    pub fn interactive(&self) -> impl Iterator<Item = &ControlDescriptor> {
        self.descriptors.iter().filter(|d| d.is_interactive())
    }

    pub fn handler_names(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .filter_map(|d| d.handler_name())
            .collect()
    }
}
