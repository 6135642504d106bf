//! Identifier sanitization: one rename map, applied everywhere.
//!
//! Pass 1 walks the whole document and computes the sanitized form of every
//! string-typed id, keeping only the entries that actually change. Pass 2
//! rewrites ids by exact match against that map, so the same malformed id
//! is renamed identically wherever it appears.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::scene::Scene;

/// How to rewrite a character outside the identifier alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeMode {
    /// Replace each disallowed character with `_`.
    Underscore,
    /// Delete each disallowed character.
    Remove,
}

/// Unknown sanitize mode string.
#[derive(Debug, thiserror::Error)]
#[error("unknown sanitize mode: {0} (expected underscore or remove)")]
pub struct ParseSanitizeModeError(String);

impl FromStr for SanitizeMode {
    type Err = ParseSanitizeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "underscore" => Ok(SanitizeMode::Underscore),
            "remove" => Ok(SanitizeMode::Remove),
            other => Err(ParseSanitizeModeError(other.to_string())),
        }
    }
}

impl fmt::Display for SanitizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanitizeMode::Underscore => write!(f, "underscore"),
            SanitizeMode::Remove => write!(f, "remove"),
        }
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Sanitize one identifier. Characters already in the alphabet are never
/// touched, so the transform is idempotent. Under `Remove` this can yield
/// an empty string; that is written through as-is.
pub fn sanitize_id(s: &str, mode: SanitizeMode) -> String {
    match mode {
        SanitizeMode::Underscore => s
            .chars()
            .map(|c| if is_id_char(c) { c } else { '_' })
            .collect(),
        SanitizeMode::Remove => s.chars().filter(|&c| is_id_char(c)).collect(),
    }
}

/// Rename map: original id to sanitized id, for ids that change.
pub type RenameMap = BTreeMap<String, String>;

/// Pass 1: collect the rename map over every scene id and choice id, in
/// document order. Identity entries are omitted.
pub fn build_rename_map(scenes: &[Scene], mode: SanitizeMode) -> RenameMap {
    let mut mapping = RenameMap::new();
    for scene in scenes {
        if let Some(sid) = scene.id_str() {
            record(&mut mapping, sid, mode);
        }
    }
    for scene in scenes {
        for choice in scene.choices() {
            if let Some(cid) = choice.id_str() {
                record(&mut mapping, cid, mode);
            }
        }
    }
    mapping
}

fn record(mapping: &mut RenameMap, id: &str, mode: SanitizeMode) {
    let sanitized = sanitize_id(id, mode);
    if sanitized != id {
        mapping.insert(id.to_string(), sanitized);
    }
}

/// Pass 2: rewrite every scene id and choice id that exactly matches a key
/// in the map. Distinct scenes sharing a malformed id collide on the same
/// sanitized id; that is accepted behavior, surfaced by
/// [`rename_collisions`], not prevented here.
pub fn apply_rename(scenes: &mut [Scene], mapping: &RenameMap) {
    for scene in scenes {
        if let Some(new) = scene.id_str().and_then(|sid| mapping.get(sid)).cloned() {
            if let Some(id) = scene.id.typed_mut() {
                *id = new;
            }
        }
        if let Some(choices) = scene.choices_mut() {
            for choice in choices {
                if let Some(new) = choice.id_str().and_then(|cid| mapping.get(cid)).cloned() {
                    if let Some(id) = choice.id.typed_mut() {
                        *id = new;
                    }
                }
            }
        }
    }
}

/// Sanitized ids reached from more than one distinct original, with the
/// originals that collide onto them. A non-fatal diagnostic.
pub fn rename_collisions(mapping: &RenameMap) -> Vec<(String, Vec<String>)> {
    let mut by_target: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (old, new) in mapping {
        by_target.entry(new).or_default().push(old.clone());
    }
    by_target
        .into_iter()
        .filter(|(_, originals)| originals.len() > 1)
        .map(|(target, originals)| (target.to_string(), originals))
        .collect()
}

/// Rename-map entries whose sanitized side is empty (only possible under
/// `Remove` when every character was disallowed).
pub fn emptied_ids(mapping: &RenameMap) -> Vec<&str> {
    mapping
        .iter()
        .filter(|(_, new)| new.is_empty())
        .map(|(old, _)| old.as_str())
        .collect()
}
