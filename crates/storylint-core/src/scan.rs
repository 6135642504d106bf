//! Read-only validation scan over a story document.

use std::fmt;

use serde::Serialize;

use crate::classify::{is_clean_id, offending_chars};
use crate::scene::Scene;

/// Which id field an issue was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    #[serde(rename = "scene.id")]
    SceneId,
    #[serde(rename = "choice.id")]
    ChoiceId,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::SceneId => write!(f, "scene.id"),
            IssueKind::ChoiceId => write!(f, "choice.id"),
        }
    }
}

/// One id that fails classification. Observational only; the scan never
/// mutates the document.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    /// `"i"` for scene i, `"i.j"` for choice j within scene i.
    pub location: String,
    pub value: String,
}

/// Scan every scene and choice id, in document order, and report the ones
/// that are string-typed but not clean. Absent or non-string ids are
/// skipped silently.
pub fn scan_story(scenes: &[Scene]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (i, scene) in scenes.iter().enumerate() {
        if let Some(sid) = scene.id_str()
            && !is_clean_id(sid)
        {
            issues.push(Issue {
                kind: IssueKind::SceneId,
                location: i.to_string(),
                value: sid.to_string(),
            });
        }
        for (j, choice) in scene.choices().iter().enumerate() {
            if let Some(cid) = choice.id_str()
                && !is_clean_id(cid)
            {
                issues.push(Issue {
                    kind: IssueKind::ChoiceId,
                    location: format!("{i}.{j}"),
                    value: cid.to_string(),
                });
            }
        }
    }
    issues
}

/// Describe one character as `'c' U+XXXX (NAME)`, with `UNNAMED` when the
/// Unicode database carries no name for the code point.
pub fn describe_char(c: char) -> String {
    let name = unicode_names2::name(c)
        .map(|n| n.to_string())
        .unwrap_or_else(|| "UNNAMED".to_string());
    format!("'{c}' U+{:04X} ({name})", c as u32)
}

/// Describe every offending character of `s`, in order.
pub fn describe_chars(s: &str) -> Vec<String> {
    offending_chars(s).into_iter().map(describe_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenes(value: serde_json::Value) -> Vec<Scene> {
        serde_json::from_value(value).expect("scenes fixture")
    }

    #[test]
    fn issues_follow_document_order() {
        let story = scenes(serde_json::json!([
            {"id": "ok", "choices": [{"id": "bad!"}, {"id": "fine"}, {"id": "wo rse"}]},
            {"id": "sc#2"}
        ]));
        let issues = scan_story(&story);
        let rendered: Vec<String> = issues
            .iter()
            .map(|i| format!("{} @ {}: {}", i.kind, i.location, i.value))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "choice.id @ 0.0: bad!",
                "choice.id @ 0.2: wo rse",
                "scene.id @ 1: sc#2",
            ]
        );
    }

    #[test]
    fn clean_document_yields_no_issues() {
        let story = scenes(serde_json::json!([
            {"id": "start", "choices": [{"id": "go_on", "label": "Go on"}]},
            {"id": "end_42"}
        ]));
        assert!(scan_story(&story).is_empty());
    }

    #[test]
    fn missing_and_non_string_ids_are_not_issues() {
        let story = scenes(serde_json::json!([
            {"choices": [{"id": 3}, {"label": "no id"}]},
            {"id": ["not", "a", "string"]}
        ]));
        assert!(scan_story(&story).is_empty());
    }

    #[test]
    fn describe_char_formats_codepoint_and_name() {
        assert_eq!(describe_char('#'), "'#' U+0023 (NUMBER SIGN)");
        assert_eq!(describe_char('\u{2014}'), "'\u{2014}' U+2014 (EM DASH)");
    }

    #[test]
    fn describe_chars_covers_each_offender() {
        let described = describe_chars("a!b!");
        assert_eq!(
            described,
            vec![
                "'!' U+0021 (EXCLAMATION MARK)",
                "'!' U+0021 (EXCLAMATION MARK)",
            ]
        );
    }
}
