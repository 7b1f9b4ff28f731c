use crate::files::read_text;
use crate::guard::{normalize_lexically, relative_slash_path};
use crate::scanner::{ProjectInventory, ScanWarning};
use crate::scene::SceneFile;
use godot_script::analyze;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    MissingScriptReference,
    DuplicateClassName,
    BrokenSceneReference,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueKind::MissingScriptReference => "MissingScriptReference",
            IssueKind::DuplicateClassName => "DuplicateClassName",
            IssueKind::BrokenSceneReference => "BrokenSceneReference",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    /// `path` or `path:line`
    pub location: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
    pub scripts_checked: usize,
    pub scenes_checked: usize,
    pub warnings: Vec<ScanWarning>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Checked {} scripts and {} scenes.",
            self.scripts_checked, self.scenes_checked
        );
        if self.is_clean() {
            let _ = writeln!(out, "No issues found.");
        } else {
            let _ = writeln!(out, "Found {} issue(s):", self.issues.len());
            for issue in &self.issues {
                let _ = writeln!(
                    out,
                    "- [{}] {}: {}",
                    issue.kind, issue.location, issue.message
                );
            }
        }
        if !self.warnings.is_empty() {
            let _ = writeln!(out, "\nWarnings:");
            for warning in &self.warnings {
                let _ = writeln!(out, "- {}: {}", warning.path, warning.message);
            }
        }
        out
    }

    fn push(&mut self, kind: IssueKind, location: String, message: String) {
        self.issues.push(ValidationIssue {
            kind,
            location,
            message,
        });
    }
}

/// Cross-check scripts and scenes under `root`. Never writes.
pub fn validate(root: &Path) -> ValidationReport {
    let inventory = ProjectInventory::collect(root);
    let mut report = ValidationReport {
        warnings: inventory.warnings.clone(),
        ..ValidationReport::default()
    };

    check_class_names(root, &inventory, &mut report);
    for scene_path in &inventory.scenes {
        check_scene(root, scene_path, &inventory, &mut report);
    }

    log::info!(
        "validated {}: {} issues across {} scripts / {} scenes",
        root.display(),
        report.issues.len(),
        report.scripts_checked,
        report.scenes_checked
    );
    report
}

fn unreadable(report: &mut ValidationReport, rel: &str, err: &crate::ProjectError) {
    log::warn!("skipping unreadable file {rel}: {err}");
    report.warnings.push(ScanWarning {
        path: rel.to_string(),
        message: err.to_string(),
    });
}

fn check_class_names(root: &Path, inventory: &ProjectInventory, report: &mut ValidationReport) {
    let mut declared: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for script_path in &inventory.scripts {
        let source = match read_text(&root.join(script_path)) {
            Ok(source) => source,
            Err(err) => {
                unreadable(report, script_path, &err);
                continue;
            }
        };
        report.scripts_checked += 1;
        if let Some(class_name) = analyze(&source).class_name {
            declared
                .entry(class_name)
                .or_default()
                .push(script_path.clone());
        }
    }

    for (class_name, paths) in declared {
        if paths.len() < 2 {
            continue;
        }
        report.push(
            IssueKind::DuplicateClassName,
            paths[0].clone(),
            format!(
                "class_name {class_name} is declared by {} scripts: {}",
                paths.len(),
                paths.join(", ")
            ),
        );
    }
}

/// Root-relative slash form of a `res://` target, `None` once `..` leaves the root.
fn contained_target(root: &Path, target: &str) -> Option<String> {
    let root = normalize_lexically(root);
    relative_slash_path(&root, &normalize_lexically(&root.join(target)))
}

fn check_scene(
    root: &Path,
    scene_path: &str,
    inventory: &ProjectInventory,
    report: &mut ValidationReport,
) {
    let text = match read_text(&root.join(scene_path)) {
        Ok(text) => text,
        Err(err) => {
            unreadable(report, scene_path, &err);
            return;
        }
    };
    report.scenes_checked += 1;
    let scene = SceneFile::parse(&text);

    for bad in &scene.malformed {
        report.push(
            IssueKind::BrokenSceneReference,
            format!("{scene_path}:{}", bad.line),
            format!("malformed declaration {}: {}", bad.text, bad.reason),
        );
    }

    for resource in &scene.ext_resources {
        let location = format!("{scene_path}:{}", resource.line);
        let Some(target) = resource.project_path() else {
            report.push(
                IssueKind::BrokenSceneReference,
                location,
                format!("path {:?} is not a res:// path", resource.path),
            );
            continue;
        };

        let Some(target) = contained_target(root, target) else {
            report.push(
                IssueKind::BrokenSceneReference,
                location,
                format!("path {} points outside the project", resource.path),
            );
            continue;
        };

        if resource.is_script() {
            if !inventory.has_script(&target) {
                report.push(
                    IssueKind::MissingScriptReference,
                    location,
                    format!("script {} does not exist", resource.path),
                );
            }
        } else if !root.join(&target).exists() {
            report.push(
                IssueKind::BrokenSceneReference,
                location,
                format!("resource {} does not exist", resource.path),
            );
        }
    }

    for reference in &scene.resource_refs {
        if !scene.declares_ext_resource(&reference.id) {
            report.push(
                IssueKind::BrokenSceneReference,
                format!("{scene_path}:{}", reference.line),
                format!(
                    "ExtResource(\"{}\") has no matching [ext_resource] declaration",
                    reference.id
                ),
            );
        }
    }
}
