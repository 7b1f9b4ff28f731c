use crate::summary::ScriptSummary;
use regex::Regex;
use std::sync::OnceLock;

/// Produces a [`ScriptSummary`] from script source text.
///
/// Implementations must be pure: identical input yields identical output.
pub trait ScriptAnalyzer {
    fn analyze(&self, source: &str) -> ScriptSummary;
}

/// Line-oriented analyzer driven by prefix and pattern rules.
///
/// Each trimmed line is classified on its own; there is no notion of
/// indentation blocks, strings, or comments spanning lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternAnalyzer;

/// Classification of a single trimmed line (annotations are handled apart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Extends(&'a str),
    ClassName(&'a str),
    Function(&'a str),
    TypedVariable { name: &'a str, type_name: &'a str },
    Variable(&'a str),
    Signal(&'a str),
    Other,
}

fn func_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^func\s+(\w+)\s*\(").expect("valid func regex"))
}

fn typed_var_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^var\s+(\w+)\s*:\s*([\w\[\]]+)").expect("valid typed var regex")
    })
}

fn var_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"var\s+(\w+)").expect("valid var regex"))
}

fn signal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^signal\s+(\w+)").expect("valid signal regex"))
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classify one already-trimmed line. First matching rule wins.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix("extends ") {
        return LineKind::Extends(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("class_name ") {
        return LineKind::ClassName(rest.trim());
    }
    if let Some(name) = capture(func_re(), line) {
        return LineKind::Function(name);
    }
    if let Some(caps) = typed_var_re().captures(line) {
        if let (Some(name), Some(type_name)) = (caps.get(1), caps.get(2)) {
            return LineKind::TypedVariable {
                name: name.as_str(),
                type_name: type_name.as_str(),
            };
        }
    }
    if line.starts_with("var ") || line.starts_with("@export var ") {
        if let Some(name) = capture(var_re(), line) {
            return LineKind::Variable(name);
        }
    }
    if let Some(name) = capture(signal_re(), line) {
        return LineKind::Signal(name);
    }
    LineKind::Other
}

/// First whitespace-delimited token of an `@` line.
fn annotation_token(line: &str) -> Option<&str> {
    if !line.starts_with('@') {
        return None;
    }
    line.split_whitespace().next()
}

impl ScriptAnalyzer for PatternAnalyzer {
    fn analyze(&self, source: &str) -> ScriptSummary {
        let mut summary = ScriptSummary::default();

        for raw in source.lines() {
            let line = raw.trim();
            if let Some(token) = annotation_token(line) {
                summary.push_annotation(token);
            }

            match classify_line(line) {
                LineKind::Extends(base) => summary.extends = base.to_string(),
                LineKind::ClassName(name) => summary.class_name = Some(name.to_string()),
                LineKind::Function(name) => summary.functions.push(name.to_string()),
                LineKind::TypedVariable { name, type_name } => {
                    summary.push_typed_variable(name, type_name)
                }
                LineKind::Variable(name) => summary.variables.push(name.to_string()),
                LineKind::Signal(name) => summary.signals.push(name.to_string()),
                LineKind::Other => {}
            }
        }

        summary
    }
}

/// Analyze with the default [`PatternAnalyzer`].
pub fn analyze(source: &str) -> ScriptSummary {
    PatternAnalyzer.analyze(source)
}
