#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "analyze_project_structure",
        summary: "Directory tree (bounded) plus complete script/scene/resource lists.",
    },
    ToolDescriptor {
        name: "read_godot_project",
        summary: "project.godot name, versions and a shallow tree.",
    },
    ToolDescriptor {
        name: "read_gdscript",
        summary: "Structural summary (extends, functions, variables, signals) plus source.",
    },
    ToolDescriptor {
        name: "modify_gdscript",
        summary: "Replace or insert one named function, rest of the file untouched.",
    },
    ToolDescriptor {
        name: "create_gdscript",
        summary: "Write a new script (adds extends/class_name headers).",
    },
    ToolDescriptor {
        name: "create_scene_template",
        summary: "Write a one-node .tscn scene.",
    },
    ToolDescriptor {
        name: "read_resource",
        summary: "Read a .tres/.res file with a header summary.",
    },
    ToolDescriptor {
        name: "create_resource",
        summary: "Write a new .tres/.res file.",
    },
    ToolDescriptor {
        name: "modify_resource",
        summary: "Replace the content of an existing .tres/.res file.",
    },
    ToolDescriptor {
        name: "validate_project",
        summary: "Missing scripts, broken scene references, duplicate class names.",
    },
    ToolDescriptor {
        name: "generate_docs",
        summary: "Markdown overview of every script and scene.",
    },
    ToolDescriptor {
        name: "check_godot_version",
        summary: "Compare the declared engine version with an expected one.",
    },
    ToolDescriptor {
        name: "run_godot_cli",
        summary: "Run the Godot executable against the project.",
    },
];

/// Server instructions: one line per tool, in catalog order
pub(crate) fn instructions() -> String {
    let mut out = String::from(
        "Godot MCP inspects and edits one Godot project. All paths are relative to the \
         project root; paths escaping it are rejected. Use '.' as project_path for the root.\n",
    );
    for tool in TOOL_CATALOG {
        out.push_str(&format!("- {}: {}\n", tool.name, tool.summary));
    }
    out
}
