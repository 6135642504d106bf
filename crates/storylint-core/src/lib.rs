//! # storylint-core
//!
//! Validation and sanitization passes for branching-story JSON.
//!
//! This crate provides:
//! - `Scene` and `Choice` types (the document model, lossless round-trip)
//! - identifier classification (`[A-Za-z0-9_]+`, full-string)
//! - Unicode text normalization (NFC + a fixed ASCII-folding table)
//! - consistent identifier renaming (one map, applied document-wide)
//! - a read-only scan producing ordered issue records
//! - story file load/store with atomic writes
//!
//! It intentionally does not parse arguments or format reports. That
//! lives in `storylint-cli`.
//!
//! ## Data flow
//!
//! ```text
//! story.json
//!     → load_story → scan_story (report, read-only)
//!     → build_rename_map / apply_rename (optional, ids)
//!     → normalize_story (optional, prompts and labels)
//!     → write_story (only when a rewrite was requested)
//! ```

pub mod classify;
pub mod normalize;
pub mod sanitize;
pub mod scan;
pub mod scene;
pub mod store;

pub use classify::{is_clean_id, offending_chars};
pub use normalize::{REPLACEMENTS, normalize_story, normalize_text};
pub use sanitize::{
    ParseSanitizeModeError, RenameMap, SanitizeMode, apply_rename, build_rename_map, emptied_ids,
    rename_collisions, sanitize_id,
};
pub use scan::{Issue, IssueKind, describe_char, describe_chars, scan_story};
pub use scene::{Choice, Lenient, Scene};
pub use store::{StoreError, default_output_path, load_story, write_story};
