//! Reader for Godot's text resource format (`.tscn`, `.tres`).
//!
//! Only the bracketed section headers are tokenized; property lines are kept
//! as raw `key = value` text plus any `ExtResource("id")` they mention.

use regex::Regex;
use std::sync::OnceLock;

/// A `[kind key=value ...]` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: String,
    pub attrs: Vec<(String, String)>,
    /// 1-based line number
    pub line: usize,
}

impl Section {
    /// Attribute value with surrounding quotes removed
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A header line that could not be split into `key=value` pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line: usize,
    pub text: String,
    pub reason: String,
}

/// `ExtResource("id")` occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtResourceRef {
    pub id: String,
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceText {
    pub sections: Vec<Section>,
    /// Count of `key = value` lines outside headers
    pub property_lines: usize,
    pub ext_refs: Vec<ExtResourceRef>,
    pub malformed: Vec<MalformedLine>,
}

impl ResourceText {
    pub fn sections_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections.iter().filter(move |s| s.kind == kind)
    }
}

fn ext_resource_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"ExtResource\(\s*"?([^")\s]+)"?\s*\)"#).expect("valid ExtResource regex")
    })
}

/// Lines opening with `[` and a letter are headers. `[1, 2]` inside a
/// multi-line array value is not.
fn is_header_line(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('[') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Whether a `"` is still open at the end of `line`, given the state at its
/// start. Backslash escapes inside a string follow [`read_quoted`].
fn string_open_after(line: &str, mut open: bool) -> bool {
    let mut escaped = false;
    for ch in line.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if open => escaped = true,
            '"' => open = !open,
            _ => {}
        }
    }
    open
}

pub fn parse_resource_text(text: &str) -> ResourceText {
    let mut parsed = ResourceText::default();
    // Multi-line string values are written with real newlines.
    let mut in_string = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        if in_string {
            in_string = string_open_after(raw, true);
            continue;
        }
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        for caps in ext_resource_re().captures_iter(line) {
            if let Some(id) = caps.get(1) {
                parsed.ext_refs.push(ExtResourceRef {
                    id: id.as_str().to_string(),
                    line: line_no,
                });
            }
        }

        if is_header_line(line) {
            match parse_header(line, line_no) {
                Ok(section) => parsed.sections.push(section),
                Err(reason) => parsed.malformed.push(MalformedLine {
                    line: line_no,
                    text: line.to_string(),
                    reason,
                }),
            }
        } else {
            if line.contains('=') {
                parsed.property_lines += 1;
            }
            in_string = string_open_after(line, false);
        }
    }

    parsed
}

/// Split `[kind a="x" b=y]` into a [`Section`].
pub fn parse_header(line: &str, line_no: usize) -> Result<Section, String> {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| "unterminated section header".to_string())?;

    let inner = inner.trim();
    let kind_end = inner.find(char::is_whitespace).unwrap_or(inner.len());
    let kind = &inner[..kind_end];
    if kind.is_empty() || !kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("invalid section kind {kind:?}"));
    }

    let attrs = parse_attrs(&inner[kind_end..])?;
    Ok(Section {
        kind: kind.to_string(),
        attrs,
        line: line_no,
    })
}

fn parse_attrs(input: &str) -> Result<Vec<(String, String)>, String> {
    let mut attrs = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let eq = rest
            .find('=')
            .ok_or_else(|| format!("expected key=value near {rest:?}"))?;
        let key = &rest[..eq];
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '/')
        {
            return Err(format!("invalid attribute key {key:?}"));
        }

        let after = &rest[eq + 1..];
        let (value, consumed) = if let Some(quoted) = after.strip_prefix('"') {
            let (value, len) = read_quoted(quoted)?;
            (value, len + 1)
        } else {
            let len = bare_value_len(after)?;
            if len == 0 {
                return Err(format!("missing value for {key:?}"));
            }
            (after[..len].to_string(), len)
        };

        attrs.push((key.to_string(), value));
        rest = after[consumed..].trim_start();
    }

    Ok(attrs)
}

/// Read up to the closing quote. Returns the unescaped value and the bytes
/// consumed including the closing quote.
fn read_quoted(input: &str) -> Result<(String, usize), String> {
    let mut value = String::new();
    let mut escaped = false;
    for (idx, ch) in input.char_indices() {
        if escaped {
            value.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => return Ok((value, idx + 1)),
            _ => value.push(ch),
        }
    }
    Err("unterminated quoted value".to_string())
}

/// Length of a bare value such as `3`, `ExtResource("1")` or `["a", "b"]`.
fn bare_value_len(input: &str) -> Result<usize, String> {
    let mut depth = 0usize;
    let mut in_quotes = false;
    for (idx, ch) in input.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '(' | '[' | '{' if !in_quotes => depth += 1,
            ')' | ']' | '}' if !in_quotes => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| format!("unbalanced {ch:?} in value"))?;
            }
            c if c.is_whitespace() && depth == 0 && !in_quotes => return Ok(idx),
            _ => {}
        }
    }
    if depth != 0 || in_quotes {
        return Err("unbalanced value".to_string());
    }
    Ok(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_quoted_and_bare_attrs() {
        let section =
            parse_header(r#"[ext_resource type="Script" path="res://p.gd" id=1]"#, 3).unwrap();
        assert_eq!(section.kind, "ext_resource");
        assert_eq!(section.attr("type"), Some("Script"));
        assert_eq!(section.attr("path"), Some("res://p.gd"));
        assert_eq!(section.attr("id"), Some("1"));
        assert_eq!(section.line, 3);
    }

    #[test]
    fn bare_values_may_contain_nested_spaces() {
        let section = parse_header(
            r#"[node name="E" type="Node2D" parent="." groups=["enemies", "mobs"]]"#,
            1,
        )
        .unwrap();
        assert_eq!(section.attr("groups"), Some(r#"["enemies", "mobs"]"#));
        assert_eq!(section.attr("parent"), Some("."));
    }

    #[test]
    fn escaped_quotes_are_unescaped() {
        let section = parse_header(r#"[node name="say \"hi\"" type="Label"]"#, 1).unwrap();
        assert_eq!(section.attr("name"), Some(r#"say "hi""#));
    }

    #[test]
    fn rejects_malformed_headers() {
        for bad in [
            r#"[node name="Player" type="Node2D""#,
            r#"[node name="Player type="Node2D"]"#,
            r#"[node name]"#,
            r#"[node ="x"]"#,
            r#"[node name=]"#,
            r#"[node script=ExtResource("1"]"#,
        ] {
            assert!(parse_header(bad, 1).is_err(), "{bad} should be malformed");
        }
    }

    #[test]
    fn collects_ext_resource_references() {
        let text = "[gd_scene load_steps=2 format=3]\n\n[node name=\"Root\" type=\"Node\"]\nscript = ExtResource(\"1_abc\")\ntexture = ExtResource( 2 )\n";
        let parsed = parse_resource_text(text);
        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.property_lines, 2);
        assert_eq!(
            parsed.ext_refs,
            vec![
                ExtResourceRef {
                    id: "1_abc".to_string(),
                    line: 4
                },
                ExtResourceRef {
                    id: "2".to_string(),
                    line: 5
                },
            ]
        );
    }

    #[test]
    fn array_rows_are_not_headers() {
        let parsed = parse_resource_text("[resource]\ndata = [\n[1, 2],\n[3, 4]\n]\n");
        assert!(parsed.malformed.is_empty());
        assert_eq!(parsed.sections.len(), 1);
    }

    #[test]
    fn multi_line_strings_hide_bracketed_text() {
        let text = "[gd_scene format=3]\n\n[node name=\"Intro\" type=\"RichTextLabel\"]\nbbcode_enabled = true\ntext = \"Welcome \\\"hero\\\"\n[center]Press start[/center]\n; ExtResource(\"7\")\"\n\n[node name=\"Next\" type=\"Label\" parent=\".\"]\n";
        let parsed = parse_resource_text(text);
        assert_eq!(parsed.malformed, Vec::new());
        assert_eq!(parsed.ext_refs, Vec::new());
        let lines: Vec<_> = parsed.sections.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![1, 3, 9]);
        assert_eq!(parsed.property_lines, 2);
    }

    #[test]
    fn odd_quotes_in_a_header_do_not_open_a_string() {
        let parsed = parse_resource_text(
            "[node name=\"A type=\"Node\"]\n[node name=\"B\" type=\"Node\"]\n",
        );
        assert_eq!(parsed.malformed.len(), 1);
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(parsed.sections[0].attr("name"), Some("B"));
    }
}
