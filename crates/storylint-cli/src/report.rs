//! Boundary helpers: fatal-error exits and report rendering.

use std::path::{Path, PathBuf};

use serde_json::json;
use storylint_core::{
    Issue, RenameMap, SanitizeMode, Scene, StoreError, describe_chars, load_story,
    offending_chars, write_story,
};

/// Exit status for both fatal conditions: missing input and unparsable
/// input. Skipped fields are never fatal.
const FATAL_EXIT: i32 = 2;

pub fn parse_mode_or_exit(mode: &str) -> SanitizeMode {
    mode.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(FATAL_EXIT);
    })
}

pub fn load_story_or_exit(file: &str) -> Vec<Scene> {
    load_story(file).unwrap_or_else(|e| {
        match &e {
            StoreError::NotFound(path) => eprintln!("File not found: {}", path.display()),
            StoreError::Parse(_) | StoreError::Io(_) => eprintln!("error: {e}"),
        }
        std::process::exit(FATAL_EXIT);
    })
}

pub fn write_story_or_exit(path: &Path, scenes: &[Scene]) {
    write_story(path, scenes).unwrap_or_else(|e| {
        eprintln!("error: failed to write {}: {e}", path.display());
        std::process::exit(FATAL_EXIT);
    });
}

/// Human-readable scan report, one line per issue.
pub fn print_scan(issues: &[Issue], details: bool) {
    if issues.is_empty() {
        println!("No non-alphanumeric IDs found.");
        return;
    }
    println!("Found non-alphanumeric IDs:");
    for issue in issues {
        if details {
            let described = describe_chars(&issue.value);
            println!(
                "  {} @ {}: \"{}\" -> {described:?}",
                issue.kind, issue.location, issue.value
            );
        } else {
            let chars = offending_chars(&issue.value);
            println!(
                "  {} @ {}: \"{}\" (non-alnum chars: {chars:?})",
                issue.kind, issue.location, issue.value
            );
        }
    }
}

/// Human-readable rename summary plus non-fatal diagnostics.
pub fn print_rewrite(
    sanitize: bool,
    mapping: &RenameMap,
    collisions: &[(String, Vec<String>)],
    emptied: &[&str],
    out_path: &Path,
) {
    if !mapping.is_empty() {
        println!("\nApplied sanitization mapping (old -> new):");
        for (old, new) in mapping {
            println!("  {old} -> {new}");
        }
    } else if sanitize {
        println!("\nNo ids required sanitization.");
    }

    for (target, originals) in collisions {
        eprintln!("warning: distinct ids {originals:?} now share the id \"{target}\"");
    }
    for old in emptied {
        eprintln!("warning: id \"{old}\" sanitized to an empty string");
    }

    println!("Wrote sanitized file to {}", out_path.display());
}

/// One machine-readable payload for the whole run.
pub fn print_json(
    file: &str,
    mode: SanitizeMode,
    issues: &[Issue],
    sanitized_ids: bool,
    sanitized_text: bool,
    mapping: &RenameMap,
    collisions: &[(String, Vec<String>)],
    emptied: &[&str],
    out_path: Option<&PathBuf>,
) {
    let issue_entries: Vec<serde_json::Value> = issues
        .iter()
        .map(|issue| {
            json!({
                "kind": issue.kind,
                "location": issue.location,
                "value": issue.value,
                "chars": describe_chars(&issue.value),
            })
        })
        .collect();

    let payload = json!({
        "file": file,
        "mode": mode.to_string(),
        "issue_count": issues.len(),
        "issues": issue_entries,
        "sanitized_ids": sanitized_ids,
        "sanitized_text": sanitized_text,
        "mapping": mapping,
        "collisions": collisions
            .iter()
            .map(|(target, originals)| json!({"id": target, "originals": originals}))
            .collect::<Vec<_>>(),
        "emptied_ids": emptied,
        "output_path": out_path.map(|p| p.display().to_string()),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).expect("json serialization")
    );
}
