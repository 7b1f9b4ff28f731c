use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "godot-mcp")]
#[command(about = "MCP server for inspecting and editing Godot projects", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Project directory every tool call is confined to
    #[arg(long, env = "GODOT_PROJECT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Godot executable used by `run_godot_cli` when a call does not name one
    #[arg(long, env = "GODOT_EXECUTABLE", default_value = "godot")]
    pub godot: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_win() {
        let config =
            ServerConfig::try_parse_from(["godot-mcp", "--root", "/games/rocks", "--godot", "godot4"])
                .unwrap();
        assert_eq!(config.root, PathBuf::from("/games/rocks"));
        assert_eq!(config.godot, "godot4");
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(ServerConfig::try_parse_from(["godot-mcp", "--depth", "3"]).is_err());
    }
}
