use crate::emit::code_writer::CodeWriter;
use crate::generate::descriptor::ControlDescriptorSet;
use crate::generate::snippets::{INIT_ROUTINE, class_header, write_handler_stub, write_preamble};

/// Render the logic scaffold: an `Awake` hook calling the binding's
/// initialization routine, plus one handler stub per interactive control.
///
/// Once written, this file belongs to the user.
pub fn render_logic(set: &ControlDescriptorSet) -> String {
    let mut w = CodeWriter::new();

    write_preamble(&mut w, false);

    w.block(&class_header(&set.root_name), |w| {
        w.block("void Awake()", |w| {
            w.print_line([INIT_ROUTINE, "();"]);
        });

        for d in set.interactive() {
            w.blank_line();
            write_handler_stub(w, d);
        }
    });

    w.into_string()
}
