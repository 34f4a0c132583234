use crate::element::element_model::{Capability, ElementKind};

/// Event wiring for an interactive element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBinding {
    /// UnityEvent member on the component, e.g. `onClick`.
    pub event_member: &'static str,
    /// Appended to `On<Identifier>` to name the handler.
    pub handler_suffix: &'static str,
    /// Handler parameter as `(type, name)`, if the event carries a value.
    pub parameter: Option<(&'static str, &'static str)>,
}

pub fn classify(kind: ElementKind) -> Capability {
    if event_binding(kind).is_some() {
        return Capability::Interactive;
    }

    match field_type(kind) {
        Some(_) => Capability::FieldOnly,
        None => Capability::None,
    }
}

/// C# type of the generated field. `None` only for `Unknown`.
pub fn field_type(kind: ElementKind) -> Option<&'static str> {
    match kind {
        ElementKind::Unknown => None,
        ElementKind::Button => Some("Button"),
        ElementKind::Toggle => Some("Toggle"),
        ElementKind::Slider => Some("Slider"),
        ElementKind::Scrollbar => Some("Scrollbar"),
        ElementKind::InputField => Some("InputField"),
        ElementKind::Dropdown => Some("Dropdown"),
        ElementKind::Text => Some("Text"),
        ElementKind::Image => Some("Image"),
        ElementKind::RawImage => Some("RawImage"),
        ElementKind::ScrollRect => Some("ScrollRect"),
        ElementKind::RectTransform => Some("RectTransform"),
        ElementKind::GameObject => Some("GameObject"),
    }
}

pub fn event_binding(kind: ElementKind) -> Option<EventBinding> {
    let value_changed = |ty| EventBinding {
        event_member: "onValueChanged",
        handler_suffix: "ValueChanged",
        parameter: Some((ty, "value")),
    };

    match kind {
        ElementKind::Button => Some(EventBinding {
            event_member: "onClick",
            handler_suffix: "Click",
            parameter: None,
        }),
        ElementKind::Toggle => Some(value_changed("bool")),
        ElementKind::Slider | ElementKind::Scrollbar => Some(value_changed("float")),
        ElementKind::Dropdown => Some(value_changed("int")),
        ElementKind::InputField => Some(EventBinding {
            event_member: "onEndEdit",
            handler_suffix: "EndEdit",
            parameter: Some(("string", "value")),
        }),

        ElementKind::Unknown
        | ElementKind::Text
        | ElementKind::Image
        | ElementKind::RawImage
        | ElementKind::ScrollRect
        | ElementKind::RectTransform
        | ElementKind::GameObject => None,
    }
}
