use crate::sections::{parse_resource_text, ExtResourceRef, MalformedLine, Section};

const RES_PREFIX: &str = "res://";

/// `[ext_resource ...]` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtResource {
    pub id: Option<String>,
    pub resource_type: Option<String>,
    pub path: String,
    pub line: usize,
}

impl ExtResource {
    pub fn is_script(&self) -> bool {
        self.resource_type.as_deref() == Some("Script") || self.path.ends_with(".gd")
    }

    /// Project-relative path for `res://` paths
    pub fn project_path(&self) -> Option<&str> {
        self.path.strip_prefix(RES_PREFIX)
    }
}

/// `[node ...]` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDecl {
    pub name: String,
    pub node_type: Option<String>,
    pub parent: Option<String>,
    pub line: usize,
}

impl NodeDecl {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Structural view of a `.tscn` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneFile {
    pub header: Option<Section>,
    pub ext_resources: Vec<ExtResource>,
    pub nodes: Vec<NodeDecl>,
    pub resource_refs: Vec<ExtResourceRef>,
    pub malformed: Vec<MalformedLine>,
}

impl SceneFile {
    pub fn parse(text: &str) -> Self {
        let parsed = parse_resource_text(text);
        let mut scene = SceneFile {
            resource_refs: parsed.ext_refs,
            malformed: parsed.malformed,
            ..SceneFile::default()
        };

        for section in parsed.sections {
            match section.kind.as_str() {
                "gd_scene" if scene.header.is_none() => scene.header = Some(section),
                "ext_resource" => match section.attr("path") {
                    Some(path) => scene.ext_resources.push(ExtResource {
                        id: section.attr("id").map(str::to_string),
                        resource_type: section.attr("type").map(str::to_string),
                        path: path.to_string(),
                        line: section.line,
                    }),
                    None => scene.malformed.push(missing_attr(&section, "path")),
                },
                "node" => match section.attr("name") {
                    Some(name) => scene.nodes.push(NodeDecl {
                        name: name.to_string(),
                        node_type: section.attr("type").map(str::to_string),
                        parent: section.attr("parent").map(str::to_string),
                        line: section.line,
                    }),
                    None => scene.malformed.push(missing_attr(&section, "name")),
                },
                _ => {}
            }
        }

        scene.malformed.sort_by_key(|m| m.line);
        scene
    }

    pub fn root_node(&self) -> Option<&NodeDecl> {
        self.nodes.iter().find(|node| node.is_root())
    }

    pub fn declares_ext_resource(&self, id: &str) -> bool {
        self.ext_resources
            .iter()
            .any(|res| res.id.as_deref() == Some(id))
    }
}

fn missing_attr(section: &Section, attr: &str) -> MalformedLine {
    MalformedLine {
        line: section.line,
        text: format!("[{} ...]", section.kind),
        reason: format!("missing {attr} attribute"),
    }
}

/// Minimal one-node scene
pub fn scene_template(scene_name: &str, root_node_type: &str) -> String {
    format!("[gd_scene load_steps=1 format=3]\n\n[node name=\"{scene_name}\" type=\"{root_node_type}\"]\n")
}
