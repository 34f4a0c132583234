/// Type-indicating prefixes accepted when no configuration overrides them.
pub const DEFAULT_PREFIXES: [&str; 13] = [
    "Btn", "Tgl", "Sld", "Scb", "Inp", "Dd", "Lbl", "Txt", "Img", "Raw", "Scr", "Rect", "Obj",
];

/// Naming convention that marks a node for code generation.
///
/// A name opts in by starting with a known prefix followed by an uppercase
/// letter or digit (`BtnClose`, `Lbl2`). Anything else is left alone, which
/// lets designers stage elements before wiring them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameConvention {
    prefixes: Vec<String>,
}

impl Default for NameConvention {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect())
    }
}

impl NameConvention {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        if !is_identifier(name) {
            return false;
        }

        self.prefixes.iter().any(|prefix| {
            !prefix.is_empty()
                && name
                    .strip_prefix(prefix.as_str())
                    .and_then(|rest| rest.chars().next())
                    .is_some_and(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
