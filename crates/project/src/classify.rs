use serde::Serialize;
use std::path::Path;

/// Display category of a project file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Script,
    Scene,
    Resource,
    CSharp,
    Image,
    Audio,
    Data,
    Text,
    Document,
    Other,
}

impl FileCategory {
    /// Classify a bare extension (without the dot), case-insensitively
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "gd" => FileCategory::Script,
            "tscn" => FileCategory::Scene,
            "tres" | "res" => FileCategory::Resource,
            "cs" => FileCategory::CSharp,
            "png" | "jpg" => FileCategory::Image,
            "wav" | "ogg" | "mp3" => FileCategory::Audio,
            "json" => FileCategory::Data,
            "txt" => FileCategory::Text,
            "md" => FileCategory::Document,
            _ => FileCategory::Other,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileCategory::Other)
    }

    pub fn icon(self) -> &'static str {
        match self {
            FileCategory::Script => "🐍",
            FileCategory::Scene => "🎬",
            FileCategory::Resource => "📦",
            FileCategory::CSharp => "🔷",
            FileCategory::Image => "🖼️",
            FileCategory::Audio => "🔊",
            FileCategory::Data | FileCategory::Other => "📄",
            FileCategory::Text => "📝",
            FileCategory::Document => "📖",
        }
    }
}

pub const DIRECTORY_ICON: &str = "📁";
