//! # Godot Project
//!
//! Read-mostly view of a Godot project tree.
//!
//! ## Pipeline
//!
//! ```text
//! ProjectRoot (path guard)
//!     │
//!     ├──> display_tree (depth-bounded, for humans)
//!     │
//!     └──> ProjectInventory (unbounded: .gd / .tscn / .tres)
//!            ├─> validate  → ValidationReport
//!            └─> docs      → markdown
//! ```
//!
//! Anything that needs every file goes through the inventory; the display
//! tree stops at its depth limit.
//!
//! ## Example
//!
//! ```no_run
//! use godot_project::{display_tree, validate, ProjectRoot};
//!
//! let root = ProjectRoot::new("/path/to/game").unwrap();
//! println!("{}", display_tree(root.path(), 3).render());
//! for issue in validate(root.path()).issues {
//!     println!("{}: {}", issue.location, issue.message);
//! }
//! ```

mod classify;
mod descriptor;
mod docs;
mod error;
mod files;
mod guard;
mod resource;
mod scanner;
mod scene;
mod sections;
mod validator;

pub use classify::{FileCategory, DIRECTORY_ICON};
pub use descriptor::{ProjectDescriptor, PROJECT_FILE, UNKNOWN};
pub use docs::{generate as generate_docs, DocReport};
pub use error::{ProjectError, Result};
pub use files::{read_bytes, read_text, require_extension, require_file, write_text};
pub use guard::{normalize_lexically, relative_slash_path, ProjectRoot};
pub use resource::{ResourceSummary, RESOURCE_EXTENSIONS};
pub use scanner::{
    display_tree, find_by_extension, DisplayTree, Inventory, NodeKind, ProjectInventory,
    ScanWarning, TreeNode, DEFAULT_MAX_DEPTH,
};
pub use scene::{scene_template, ExtResource, NodeDecl, SceneFile};
pub use sections::{parse_resource_text, ExtResourceRef, MalformedLine, ResourceText, Section};
pub use validator::{validate, IssueKind, ValidationIssue, ValidationReport};
