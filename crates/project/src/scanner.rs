use crate::classify::{FileCategory, DIRECTORY_ICON};
use crate::guard::relative_slash_path;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Depth used by `analyze_project_structure` when the caller gives none
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// A subtree that could not be read. The walk continues without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    pub path: String,
    pub message: String,
}

impl ScanWarning {
    fn from_walk_error(root: &Path, err: &walkdir::Error) -> Self {
        let path = err
            .path()
            .and_then(|p| relative_slash_path(root, p))
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| ".".to_string());
        let message = err
            .io_error()
            .map(|io| io.to_string())
            .unwrap_or_else(|| err.to_string());
        log::warn!("skipping unreadable entry {path}: {message}");
        Self { path, message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FileCategory>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn directory(name: String) -> Self {
        Self {
            name,
            kind: NodeKind::Directory,
            category: None,
            children: Vec::new(),
        }
    }

    fn file(name: String) -> Self {
        let category = FileCategory::from_path(&name);
        Self {
            name,
            kind: NodeKind::File,
            category: Some(category),
            children: Vec::new(),
        }
    }

    /// Number of levels below this node (0 for a leaf)
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Depth-bounded view of a project tree for human-facing output.
///
/// Not complete by construction: anything below `max_depth` is absent. Use
/// [`ProjectInventory`] when every file matters.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayTree {
    pub root: TreeNode,
    pub max_depth: usize,
    pub warnings: Vec<ScanWarning>,
}

impl DisplayTree {
    /// Indented listing, two spaces per level
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Explicit stack of (node, indent); children pushed in reverse to keep order.
        let mut stack: Vec<(&TreeNode, usize)> =
            self.root.children.iter().rev().map(|c| (c, 0)).collect();
        while let Some((node, indent)) = stack.pop() {
            let pad = "  ".repeat(indent);
            match node.kind {
                NodeKind::Directory => {
                    let _ = writeln!(out, "{pad}{DIRECTORY_ICON} {}/", node.name);
                    stack.extend(node.children.iter().rev().map(|c| (c, indent + 1)));
                }
                NodeKind::File => {
                    let icon = node.category.unwrap_or(FileCategory::Other).icon();
                    let _ = writeln!(out, "{pad}{icon} {}", node.name);
                }
            }
        }
        for warning in &self.warnings {
            let _ = writeln!(out, "⚠️ unreadable: {} ({})", warning.path, warning.message);
        }
        out
    }

    /// Root-relative paths of every materialized entry, in display order
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack: Vec<(&TreeNode, String)> = self
            .root
            .children
            .iter()
            .rev()
            .map(|c| (c, c.name.clone()))
            .collect();
        while let Some((node, path)) = stack.pop() {
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|c| (c, format!("{path}/{}", c.name))),
            );
            out.push(path);
        }
        out
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Attach finished directories until the stack top sits at `depth - 1`.
fn fold_to_depth(stack: &mut Vec<TreeNode>, depth: usize) {
    while stack.len() > depth.max(1) {
        let Some(done) = stack.pop() else {
            break;
        };
        if let Some(parent) = stack.last_mut() {
            parent.children.push(done);
        }
    }
}

/// Build the display tree down to `max_depth` levels below `root`.
///
/// `max_depth = 0` yields an empty tree. Entries are sorted by name at every
/// level and dot-entries are skipped.
pub fn display_tree(root: &Path, max_depth: usize) -> DisplayTree {
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    let mut warnings = Vec::new();
    // stack[d] is the open directory at depth d.
    let mut stack = vec![TreeNode::directory(root_name)];

    if max_depth > 0 {
        let walker = WalkDir::new(root)
            .follow_links(true)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry));

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warnings.push(ScanWarning::from_walk_error(root, &err));
                    continue;
                }
            };
            fold_to_depth(&mut stack, entry.depth());
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type().is_dir() {
                stack.push(TreeNode::directory(name));
            } else if let Some(parent) = stack.last_mut() {
                parent.children.push(TreeNode::file(name));
            }
        }
    }

    fold_to_depth(&mut stack, 1);
    let root = stack
        .pop()
        .unwrap_or_else(|| TreeNode::directory(String::new()));
    log::debug!(
        "display tree for {} built with {} top-level entries",
        root.name,
        root.children.len()
    );

    DisplayTree {
        root,
        max_depth,
        warnings,
    }
}

/// Files found by an unbounded walk
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    pub files: Vec<String>,
    pub warnings: Vec<ScanWarning>,
}

fn walk_files(root: &Path, mut visit: impl FnMut(String), warnings: &mut Vec<ScanWarning>) {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warnings.push(ScanWarning::from_walk_error(root, &err));
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if let Some(rel) = relative_slash_path(root, entry.path()) {
            visit(rel);
        }
    }
}

fn has_extension(path: &str, ext: &str) -> bool {
    let ext = ext.trim_start_matches('.');
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Every file under `root` with extension `ext` (leading dot optional), sorted.
pub fn find_by_extension(root: &Path, ext: &str) -> Inventory {
    let mut inventory = Inventory::default();
    walk_files(
        root,
        |rel| {
            if has_extension(&rel, ext) {
                inventory.files.push(rel);
            }
        },
        &mut inventory.warnings,
    );
    inventory.files.sort();
    inventory
}

/// Complete script, scene and resource listings of a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectInventory {
    pub scripts: Vec<String>,
    pub scenes: Vec<String>,
    pub resources: Vec<String>,
    pub warnings: Vec<ScanWarning>,
}

impl ProjectInventory {
    /// One unbounded walk, partitioned by category
    pub fn collect(root: &Path) -> Self {
        let mut inventory = Self::default();
        let mut warnings = Vec::new();
        walk_files(
            root,
            |rel| match FileCategory::from_path(&rel) {
                FileCategory::Script => inventory.scripts.push(rel),
                FileCategory::Scene => inventory.scenes.push(rel),
                FileCategory::Resource => inventory.resources.push(rel),
                _ => {}
            },
            &mut warnings,
        );
        inventory.scripts.sort();
        inventory.scenes.sort();
        inventory.resources.sort();
        inventory.warnings = warnings;
        log::debug!(
            "inventory of {}: {} scripts, {} scenes, {} resources",
            root.display(),
            inventory.scripts.len(),
            inventory.scenes.len(),
            inventory.resources.len()
        );
        inventory
    }

    pub fn has_script(&self, rel: &str) -> bool {
        self.scripts.binary_search_by(|s| s.as_str().cmp(rel)).is_ok()
    }
}
