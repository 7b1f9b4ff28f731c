use crate::error::{Result, ScriptError};
use regex::Regex;
use std::sync::OnceLock;

/// Where an inserted function landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// After the line containing the first occurrence of the marker
    AfterMarker,
    /// Appended at end of text
    EndOfFile,
}

/// What [`mutate`] did to the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Replaced,
    Inserted(Placement),
}

impl MutationOutcome {
    pub fn verb(self) -> &'static str {
        match self {
            MutationOutcome::Replaced => "Replaced",
            MutationOutcome::Inserted(_) => "Added",
        }
    }
}

/// Result of a successful mutation: the complete new text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub text: String,
    pub outcome: MutationOutcome,
}

fn any_func_decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^func\s+\w+").expect("valid func decl regex"))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Byte span `[start, end)` of the first top-level declaration of `name`.
///
/// The span runs to the next column-zero `func` or to end of text.
pub fn find_function_span(source: &str, name: &str) -> Result<Option<(usize, usize)>> {
    if !is_identifier(name) {
        return Err(ScriptError::invalid_function_name(name));
    }
    let decl = Regex::new(&format!(r"(?m)^func\s+{}\s*\(", regex::escape(name)))?;
    let Some(found) = decl.find(source) else {
        return Ok(None);
    };

    let start = found.start();
    // Skip the `f` of the current declaration so it cannot match itself.
    let end = any_func_decl_re()
        .find_at(source, start + 1)
        .map_or(source.len(), |next| next.start());
    Ok(Some((start, end)))
}

/// Replace the named function, or insert it when absent.
///
/// Replacement swaps the whole span for `body` plus a blank line. Insertion goes
/// after the line holding the first occurrence of `insert_after`, or at end of
/// text when no marker is given or it does not occur. The first match wins in
/// every search.
pub fn mutate(
    source: &str,
    function_name: &str,
    body: &str,
    insert_after: Option<&str>,
) -> Result<Mutation> {
    if body.trim().is_empty() {
        return Err(ScriptError::EmptyFunctionBody);
    }

    if let Some((start, end)) = find_function_span(source, function_name)? {
        log::debug!("replacing function {function_name} at bytes {start}..{end}");
        let mut text = String::with_capacity(source.len() + body.len() + 2);
        text.push_str(&source[..start]);
        text.push_str(body);
        text.push_str("\n\n");
        text.push_str(&source[end..]);
        return Ok(Mutation {
            text,
            outcome: MutationOutcome::Replaced,
        });
    }

    let marker_at = insert_after
        .filter(|marker| !marker.is_empty())
        .and_then(|marker| source.find(marker));

    let Some(marker_at) = marker_at else {
        log::debug!("appending function {function_name} at end of file");
        return Ok(Mutation {
            text: format!("{source}\n\n{body}"),
            outcome: MutationOutcome::Inserted(Placement::EndOfFile),
        });
    };

    log::debug!("inserting function {function_name} after marker at byte {marker_at}");
    let text = match source[marker_at..].find('\n') {
        Some(offset) => {
            let cut = marker_at + offset + 1;
            format!("{}\n{body}\n{}", &source[..cut], &source[cut..])
        }
        // Marker sits on the final, unterminated line.
        None => format!("{source}\n\n{body}\n"),
    };
    Ok(Mutation {
        text,
        outcome: MutationOutcome::Inserted(Placement::AfterMarker),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_only_function() {
        let source = "extends Node\nfunc foo():\n\tpass\n";
        let result = mutate(source, "foo", "func foo():\n\treturn 1\n", None).unwrap();

        assert_eq!(result.outcome, MutationOutcome::Replaced);
        assert_eq!(result.text, "extends Node\nfunc foo():\n\treturn 1\n\n\n");
        assert_eq!(result.text.matches("return 1").count(), 1);
        assert_eq!(result.text.matches("func foo(").count(), 1);
    }

    #[test]
    fn replacement_stops_at_next_declaration() {
        let source = "extends Node\n\nfunc a():\n\tpass\n\nfunc b():\n\treturn 2\n";
        let result = mutate(source, "a", "func a():\n\treturn 1", None).unwrap();
        assert_eq!(
            result.text,
            "extends Node\n\nfunc a():\n\treturn 1\n\nfunc b():\n\treturn 2\n"
        );
    }

    #[test]
    fn name_prefix_does_not_match_longer_function() {
        let source = "func foobar():\n\tpass\n";
        let result = mutate(source, "foo", "func foo():\n\tpass", None).unwrap();
        assert_eq!(result.outcome, MutationOutcome::Inserted(Placement::EndOfFile));
        assert!(result.text.starts_with(source));
    }

    #[test]
    fn indented_declaration_is_not_replaced() {
        let source = "class Inner:\n\tfunc foo():\n\t\tpass\n";
        let result = mutate(source, "foo", "func foo():\n\treturn 1", None).unwrap();
        assert_eq!(result.outcome, MutationOutcome::Inserted(Placement::EndOfFile));
    }

    #[test]
    fn first_declaration_wins_when_duplicated() {
        let source = "func foo():\n\treturn 1\nfunc foo():\n\treturn 2\n";
        let result = mutate(source, "foo", "func foo():\n\treturn 3", None).unwrap();
        assert_eq!(result.text, "func foo():\n\treturn 3\n\nfunc foo():\n\treturn 2\n");
    }

    #[test]
    fn inserts_after_marker_line() {
        let source = "extends Node\n# helpers below\nfunc a():\n\tpass\n";
        let result = mutate(source, "b", "func b():\n\tpass", Some("helpers")).unwrap();
        assert_eq!(
            result.outcome,
            MutationOutcome::Inserted(Placement::AfterMarker)
        );
        assert_eq!(
            result.text,
            "extends Node\n# helpers below\n\nfunc b():\n\tpass\nfunc a():\n\tpass\n"
        );
    }

    #[test]
    fn repeated_marker_inserts_after_first_line() {
        let source = "extends Node\n# TODO: input\nfunc a():\n\tpass\n# TODO: input\nfunc z():\n\tpass\n";
        let result = mutate(source, "b", "func b():\n\tpass", Some("# TODO: input")).unwrap();
        assert_eq!(
            result.text,
            "extends Node\n# TODO: input\n\nfunc b():\n\tpass\nfunc a():\n\tpass\n# TODO: input\nfunc z():\n\tpass\n"
        );
    }

    #[test]
    fn marker_on_unterminated_last_line() {
        let source = "extends Node\n# end";
        let result = mutate(source, "b", "func b():\n\tpass", Some("# end")).unwrap();
        assert_eq!(result.text, "extends Node\n# end\n\nfunc b():\n\tpass\n");
    }

    #[test]
    fn missing_marker_appends() {
        let source = "extends Node\n";
        let result = mutate(source, "b", "func b():\n\tpass", Some("nowhere")).unwrap();
        assert_eq!(result.outcome, MutationOutcome::Inserted(Placement::EndOfFile));
        assert_eq!(result.text, "extends Node\n\n\nfunc b():\n\tpass");
    }

    #[test]
    fn rejects_non_identifier_names() {
        for bad in ["", "1abc", "a b", "foo(", ".*"] {
            let err = mutate("", bad, "func x():\n\tpass", None).unwrap_err();
            assert!(matches!(err, ScriptError::InvalidFunctionName(_)), "{bad}");
        }
    }

    #[test]
    fn rejects_empty_body() {
        let err = mutate("extends Node\n", "foo", "  \n", None).unwrap_err();
        assert!(matches!(err, ScriptError::EmptyFunctionBody));
    }

    #[test]
    fn replaced_function_appears_once_in_analysis() {
        let source = "extends Node\n\nfunc _ready():\n\tpass\n\nfunc foo():\n\tpass\n\nfunc bar():\n\tpass\n";
        let result = mutate(source, "foo", "func foo(x):\n\treturn x", None).unwrap();
        let summary = analyze(&result.text);
        assert_eq!(summary.functions, vec!["_ready", "foo", "bar"]);
    }

    #[test]
    fn source_is_left_untouched() {
        let source = String::from("func foo():\n\tpass\n");
        let _ = mutate(&source, "foo", "func foo():\n\treturn 1", None).unwrap();
        assert_eq!(source, "func foo():\n\tpass\n");
    }
}
