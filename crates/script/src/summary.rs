use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Value of `extends` when a script never declares one.
pub const UNKNOWN_EXTENDS: &str = "Unknown";

/// A `var name: Type` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedVariable {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Structural summary of a single script.
///
/// Every list keeps source order. `functions` keeps duplicates, `annotations`
/// behaves as an insertion-ordered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSummary {
    pub extends: String,
    pub class_name: Option<String>,
    pub functions: Vec<String>,
    pub variables: Vec<String>,
    pub typed_variables: Vec<TypedVariable>,
    pub signals: Vec<String>,
    pub annotations: Vec<String>,
}

impl Default for ScriptSummary {
    fn default() -> Self {
        Self {
            extends: UNKNOWN_EXTENDS.to_string(),
            class_name: None,
            functions: Vec::new(),
            variables: Vec::new(),
            typed_variables: Vec::new(),
            signals: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

impl ScriptSummary {
    pub(crate) fn push_annotation(&mut self, token: &str) {
        if !self.annotations.iter().any(|existing| existing == token) {
            self.annotations.push(token.to_string());
        }
    }

    pub(crate) fn push_typed_variable(&mut self, name: &str, type_name: &str) {
        self.typed_variables.push(TypedVariable {
            name: name.to_string(),
            type_name: type_name.to_string(),
        });
        self.variables.push(name.to_string());
    }

    /// Whether the script declares a function with this exact name
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f == name)
    }

    /// Render as a bullet list, one field per line.
    ///
    /// Empty lists and a missing class name render as `None`.
    pub fn render(&self) -> String {
        let typed = self
            .typed_variables
            .iter()
            .map(|v| format!("{}: {}", v.name, v.type_name))
            .collect::<Vec<_>>();

        let mut out = String::new();
        let _ = writeln!(out, "- Extends: {}", self.extends);
        let _ = writeln!(
            out,
            "- Class Name: {}",
            self.class_name.as_deref().unwrap_or("None")
        );
        let _ = writeln!(out, "- Functions: {}", join_or_none(&self.functions));
        let _ = writeln!(out, "- Variables: {}", join_or_none(&self.variables));
        let _ = writeln!(out, "- Typed Variables: {}", join_or_none(&typed));
        let _ = writeln!(out, "- Annotations: {}", join_or_none(&self.annotations));
        let _ = writeln!(out, "- Signals: {}", join_or_none(&self.signals));
        out
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}
