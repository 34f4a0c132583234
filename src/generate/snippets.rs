use crate::emit::code_writer::CodeWriter;
use crate::generate::descriptor::ControlDescriptor;

pub const GENERATOR_TAG: &str = "// Generated by ui-codegen";
pub const DO_NOT_EDIT: &str = "// DO NOT EDIT!";

/// Name of the initialization routine the binding artifact defines.
pub const INIT_ROUTINE: &str = "InitUI";

pub fn write_preamble(w: &mut CodeWriter, generated: bool) {
    w.line(GENERATOR_TAG);
    if generated {
        w.line(DO_NOT_EDIT);
    }
    w.line("using UnityEngine;");
    w.line("using UnityEngine.UI;");
    w.blank_line();
}

pub fn class_header(root_name: &str) -> String {
    format!("public partial class {} : MonoBehaviour", root_name)
}

/// Empty handler method for an interactive descriptor. Prints nothing for
/// field-only descriptors.
pub fn write_handler_stub(w: &mut CodeWriter, descriptor: &ControlDescriptor) {
    let (Some(handler), Some(event)) = (descriptor.handler_name(), descriptor.event()) else {
        return;
    };

    let params = event
        .parameter
        .map(|(ty, name)| format!("{} {}", ty, name))
        .unwrap_or_default();

    w.block(&format!("void {}({})", handler, params), |_| {});
}
