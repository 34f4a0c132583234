// ============================================================================
// Handler presence detection
// ============================================================================

/// Decides whether a handler method already exists in the logic artifact.
pub trait HandlerDetector {
    fn handler_already_implemented(&self, source: &str, handler: &str) -> bool;
}

/// Textual heuristic: the handler name at an identifier boundary, followed
/// by optional whitespace and `(`.
///
/// This does not parse C#. A commented-out method or a call site such as
/// `OnBtnCloseClick();` also counts as present.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextualHandlerDetector;

impl HandlerDetector for TextualHandlerDetector {
    fn handler_already_implemented(&self, source: &str, handler: &str) -> bool {
        if handler.is_empty() {
            return false;
        }

        source.match_indices(handler).any(|(start, _)| {
            let before_ok = source[..start]
                .chars()
                .next_back()
                .is_none_or(|c| !is_ident_char(c));

            let after = source[start + handler.len()..].trim_start();
            before_ok && after.starts_with('(')
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
