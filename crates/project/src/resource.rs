use crate::sections::parse_resource_text;
use serde::Serialize;
use std::fmt::Write;

/// Extensions accepted by the resource tools
pub const RESOURCE_EXTENSIONS: &[&str] = &["tres", "res"];

/// Shape of a resource file, as reported by `read_resource`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ResourceSummary {
    Text {
        resource_type: Option<String>,
        ext_resources: usize,
        sub_resources: usize,
        properties: usize,
        malformed_lines: usize,
    },
    Binary {
        bytes: usize,
    },
}

impl ResourceSummary {
    /// Summarize raw file bytes; non-UTF-8 content is treated as binary
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self::from_text(text),
            Err(_) => Self::Binary { bytes: bytes.len() },
        }
    }

    pub fn from_text(text: &str) -> Self {
        let parsed = parse_resource_text(text);
        let resource_type = parsed
            .sections_of("gd_resource")
            .next()
            .and_then(|header| header.attr("type"))
            .map(str::to_string);
        Self::Text {
            resource_type,
            ext_resources: parsed.sections_of("ext_resource").count(),
            sub_resources: parsed.sections_of("sub_resource").count(),
            properties: parsed.property_lines,
            malformed_lines: parsed.malformed.len(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Text {
                resource_type,
                ext_resources,
                sub_resources,
                properties,
                malformed_lines,
            } => {
                let _ = writeln!(
                    out,
                    "- Type: {}",
                    resource_type.as_deref().unwrap_or("Unknown")
                );
                let _ = writeln!(out, "- External resources: {ext_resources}");
                let _ = writeln!(out, "- Sub-resources: {sub_resources}");
                let _ = writeln!(out, "- Properties: {properties}");
                if *malformed_lines > 0 {
                    let _ = writeln!(out, "- Malformed header lines: {malformed_lines}");
                }
            }
            Self::Binary { bytes } => {
                let _ = writeln!(out, "- Binary resource ({bytes} bytes)");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_text_resource() {
        let text = r#"[gd_resource type="Theme" load_steps=3 format=3]

[ext_resource type="FontFile" path="res://fonts/main.ttf" id="1"]

[sub_resource type="StyleBoxFlat" id="2"]
bg_color = Color(0.1, 0.1, 0.1, 1)

[resource]
default_font = ExtResource("1")
Panel/styles/panel = SubResource("2")
"#;
        let summary = ResourceSummary::from_text(text);
        assert_eq!(
            summary,
            ResourceSummary::Text {
                resource_type: Some("Theme".to_string()),
                ext_resources: 1,
                sub_resources: 1,
                properties: 3,
                malformed_lines: 0,
            }
        );
        assert!(summary.render().contains("- Type: Theme"));
    }

    #[test]
    fn invalid_utf8_is_binary() {
        let summary = ResourceSummary::from_bytes(&[0x52, 0x53, 0x52, 0x43, 0xff, 0xfe]);
        assert_eq!(summary, ResourceSummary::Binary { bytes: 6 });
    }
}
