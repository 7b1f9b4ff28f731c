use serde::Serialize;

/// File name of the project descriptor at the project root
pub const PROJECT_FILE: &str = "project.godot";

pub const UNKNOWN: &str = "Unknown";

/// The handful of `project.godot` fields the tools report.
///
/// Parsing is tolerant: unrecognized or malformed lines are ignored and
/// missing fields read as `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    pub name: String,
    pub version: String,
    pub features: Vec<String>,
}

impl Default for ProjectDescriptor {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            version: UNKNOWN.to_string(),
            features: Vec::new(),
        }
    }
}

fn unquote(value: &str) -> String {
    value.trim().replace('"', "")
}

/// Quoted entries of `PackedStringArray("4.4", "Forward Plus")`
fn parse_string_array(value: &str) -> Vec<String> {
    let Some(open) = value.find('(') else {
        return Vec::new();
    };
    let close = value.rfind(')').unwrap_or(value.len());
    if close <= open {
        return Vec::new();
    }
    value[open + 1..close]
        .split(',')
        .map(unquote)
        .filter(|item| !item.is_empty())
        .collect()
}

fn is_version_like(value: &str) -> bool {
    !value.is_empty()
        && value.chars().next().is_some_and(|c| c.is_ascii_digit())
        && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

impl ProjectDescriptor {
    pub fn parse(content: &str) -> Self {
        let mut descriptor = Self::default();
        for line in content.lines() {
            let line = line.trim_end_matches('\r');
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key {
                "config/name" => descriptor.name = unquote(value),
                "config/version" => descriptor.version = unquote(value),
                "config/features" => descriptor.features = parse_string_array(value),
                _ => {}
            }
        }
        descriptor
    }

    /// Engine version declared through `config/features`, e.g. `4.4`
    pub fn engine_version(&self) -> Option<&str> {
        self.features
            .iter()
            .map(String::as_str)
            .find(|feature| is_version_like(feature))
    }

    /// Whether the declared engine version matches `expected`.
    ///
    /// `4.4` matches `4.4` and `4.4.1`; `4` matches any `4.x`.
    pub fn engine_matches(&self, expected: &str) -> Option<bool> {
        let actual = self.engine_version()?;
        let expected = expected.trim();
        Some(
            actual == expected
                || actual
                    .strip_prefix(expected)
                    .is_some_and(|rest| rest.starts_with('.')),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = r#"; Engine configuration file.
config_version=5

[application]

config/name="Space Rocks"
config/version="1.2.0"
run/main_scene="res://scenes/main.tscn"
config/features=PackedStringArray("4.4", "Forward Plus")
config/icon="res://icon.svg"
"#;

    #[test]
    fn parses_known_keys() {
        let descriptor = ProjectDescriptor::parse(PROJECT);
        assert_eq!(descriptor.name, "Space Rocks");
        assert_eq!(descriptor.version, "1.2.0");
        assert_eq!(descriptor.features, vec!["4.4", "Forward Plus"]);
        assert_eq!(descriptor.engine_version(), Some("4.4"));
    }

    #[test]
    fn missing_keys_default_to_unknown() {
        let descriptor = ProjectDescriptor::parse("config_version=5\n[application]\n");
        assert_eq!(descriptor.name, "Unknown");
        assert_eq!(descriptor.version, "Unknown");
        assert_eq!(descriptor.engine_version(), None);
    }

    #[test]
    fn garbage_is_tolerated() {
        let descriptor = ProjectDescriptor::parse("\u{0}\u{1}====\nconfig/features=PackedStringArray(\n");
        assert_eq!(descriptor.name, "Unknown");
        assert!(descriptor.features.is_empty());
    }

    #[test]
    fn engine_version_matching() {
        let descriptor = ProjectDescriptor::parse(PROJECT);
        assert_eq!(descriptor.engine_matches("4.4"), Some(true));
        assert_eq!(descriptor.engine_matches("4"), Some(true));
        assert_eq!(descriptor.engine_matches("4.3"), Some(false));
        assert_eq!(descriptor.engine_matches("4.44"), Some(false));
        assert_eq!(ProjectDescriptor::default().engine_matches("4.4"), None);
    }
}
