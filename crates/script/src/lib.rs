//! # Godot Script
//!
//! Structural analysis and surgical editing of GDScript source text.
//!
//! ## Philosophy
//!
//! Scripts are read line by line with a small set of prefix and pattern rules
//! rather than a real parser. That is enough to answer "what does this script
//! declare?" and to swap a single top-level function without disturbing the
//! rest of the file.
//!
//! ```text
//! Source Text
//!     │
//!     ├──> ScriptAnalyzer (per-line classification)
//!     │      └─> ScriptSummary (extends, class_name, funcs, vars, signals, annotations)
//!     │
//!     └──> mutate (find `func name(` span → replace / insert)
//!            └─> Mutation (new text + outcome)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use godot_script::{analyze, mutate, MutationOutcome};
//!
//! let source = "extends Node\nfunc foo():\n\tpass\n";
//! let edited = mutate(source, "foo", "func foo():\n\treturn 1\n", None).unwrap();
//! assert_eq!(edited.outcome, MutationOutcome::Replaced);
//!
//! let summary = analyze(&edited.text);
//! assert_eq!(summary.functions, vec!["foo"]);
//! ```

mod analyzer;
mod error;
mod mutator;
mod summary;

pub use analyzer::{analyze, classify_line, LineKind, PatternAnalyzer, ScriptAnalyzer};
pub use error::{Result, ScriptError};
pub use mutator::{find_function_span, mutate, Mutation, MutationOutcome, Placement};
pub use summary::{ScriptSummary, TypedVariable, UNKNOWN_EXTENDS};
