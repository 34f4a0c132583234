use crate::element::element_model::ElementKind;
use crate::emit::code_writer::CodeWriter;
use crate::generate::descriptor::{ControlDescriptor, ControlDescriptorSet};
use crate::generate::handler::HandlerDetector;
use crate::generate::snippets::{INIT_ROUTINE, class_header, write_handler_stub, write_preamble};

/// State of the logic artifact at the time the binding is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicState {
    Absent,
    Present { source: String },
}

impl LogicState {
    pub fn exists(&self) -> bool {
        matches!(self, LogicState::Present { .. })
    }
}

/// Rendered binding artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingArtifact {
    pub text: String,
    /// Handlers that received a placeholder body in this artifact.
    pub stubbed_handlers: Vec<String>,
}

/// Render the always-regenerated binding artifact.
///
/// Stubs are injected only when the logic artifact exists and does not
/// already define the handler. When it does not exist yet, the logic
/// scaffold carries the handlers instead.
pub fn render_binding(
    set: &ControlDescriptorSet,
    logic: &LogicState,
    detector: &dyn HandlerDetector,
) -> BindingArtifact {
    let mut w = CodeWriter::new();
    let stubbed = handlers_needing_stub(set, logic, detector);

    write_preamble(&mut w, true);

    w.block(&class_header(&set.root_name), |w| {
        for d in set.iter() {
            w.print_line([d.field_type(), " ", d.identifier.as_str(), ";"]);
        }
        if !set.is_empty() {
            w.blank_line();
        }

        w.block(&format!("void {}()", INIT_ROUTINE), |w| {
            if !set.is_empty() {
                w.line("var trans = this.transform;");
            }
            for d in set.iter() {
                write_attach(w, d);
            }

            if set.interactive().next().is_some() {
                w.blank_line();
            }
            for d in set.interactive() {
                write_registration(w, d);
            }
        });

        for d in stubbed.iter() {
            w.blank_line();
            write_handler_stub(w, d);
        }
    });

    BindingArtifact {
        text: w.into_string(),
        stubbed_handlers: stubbed.iter().filter_map(|d| d.handler_name()).collect(),
    }
}

fn handlers_needing_stub<'a>(
    set: &'a ControlDescriptorSet,
    logic: &LogicState,
    detector: &dyn HandlerDetector,
) -> Vec<&'a ControlDescriptor> {
    let LogicState::Present { source } = logic else {
        return Vec::new();
    };

    set.interactive()
        .filter(|d| {
            d.handler_name()
                .is_some_and(|h| !detector.handler_already_implemented(source, &h))
        })
        .collect()
}

fn write_attach(w: &mut CodeWriter, d: &ControlDescriptor) {
    let lookup = format!("trans.Find(\"{}\")", d.identifier);
    if d.kind == ElementKind::GameObject {
        w.print_line([d.identifier.as_str(), " = ", lookup.as_str(), ".gameObject;"]);
    } else {
        w.print_line([
            d.identifier.as_str(),
            " = ",
            lookup.as_str(),
            ".GetComponent<",
            d.field_type(),
            ">();",
        ]);
    }
}

fn write_registration(w: &mut CodeWriter, d: &ControlDescriptor) {
    if let (Some(event), Some(handler)) = (d.event(), d.handler_name()) {
        w.print_line([
            d.identifier.as_str(),
            ".",
            event.event_member,
            ".AddListener(",
            handler.as_str(),
            ");",
        ]);
    }
}
