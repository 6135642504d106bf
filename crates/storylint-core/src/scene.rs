//! Story document model: scenes and choices.
//!
//! A story file is a top-level JSON array of scenes. Each scene carries an
//! `id`, an optional `prompt`, and an optional list of choices; each choice
//! carries an `id` and an optional `label`. Everything else in a scene or
//! choice object is opaque payload that must survive a rewrite untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A known field that may be absent or hold a value of the wrong type.
///
/// The validation passes only ever look at well-typed values; a scene whose
/// `id` is a number or whose `choices` is an object is skipped, not an
/// error. Wrong-typed values (nulls included) are carried through verbatim
/// so rewriting the document never loses data it does not understand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Typed(T),
    Other(Value),
    #[serde(skip)]
    Absent,
}

impl<T> Default for Lenient<T> {
    fn default() -> Self {
        Lenient::Absent
    }
}

impl<T> Lenient<T> {
    /// The value, when present with the expected type.
    pub fn typed(&self) -> Option<&T> {
        match self {
            Lenient::Typed(value) => Some(value),
            Lenient::Other(_) | Lenient::Absent => None,
        }
    }

    /// Mutable access to the value, when present with the expected type.
    pub fn typed_mut(&mut self) -> Option<&mut T> {
        match self {
            Lenient::Typed(value) => Some(value),
            Lenient::Other(_) | Lenient::Absent => None,
        }
    }

    /// Whether the field was missing from the source object.
    pub fn is_absent(&self) -> bool {
        matches!(self, Lenient::Absent)
    }
}

/// One narrative unit: an identifier, optional prompt text, and choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Lenient::is_absent")]
    pub id: Lenient<String>,

    #[serde(default, skip_serializing_if = "Lenient::is_absent")]
    pub prompt: Lenient<String>,

    #[serde(default, skip_serializing_if = "Lenient::is_absent")]
    pub choices: Lenient<Vec<Choice>>,

    /// Fields this tool does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One option within a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, skip_serializing_if = "Lenient::is_absent")]
    pub id: Lenient<String>,

    #[serde(default, skip_serializing_if = "Lenient::is_absent")]
    pub label: Lenient<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Scene {
    /// The scene id, when present and string-typed.
    pub fn id_str(&self) -> Option<&str> {
        self.id.typed().map(String::as_str)
    }

    /// The choices, when present and list-typed. Absent or wrong-typed
    /// `choices` reads as an empty list.
    pub fn choices(&self) -> &[Choice] {
        self.choices.typed().map(Vec::as_slice).unwrap_or_default()
    }

    /// Mutable view of the choices, when present and list-typed.
    pub fn choices_mut(&mut self) -> Option<&mut Vec<Choice>> {
        self.choices.typed_mut()
    }
}

impl Choice {
    /// The choice id, when present and string-typed.
    pub fn id_str(&self) -> Option<&str> {
        self.id.typed().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_typed_fields_read_as_absent() {
        let mut scene: Scene =
            serde_json::from_value(serde_json::json!({"id": 7, "choices": "oops"}))
                .expect("scene should deserialize");
        assert_eq!(scene.id_str(), None);
        assert!(scene.choices().is_empty());
        assert!(scene.choices_mut().is_none());
    }

    #[test]
    fn missing_fields_are_absent_and_not_written_back() {
        let scene: Scene = serde_json::from_value(serde_json::json!({})).expect("scene");
        assert!(scene.id.is_absent());
        assert!(scene.choices.is_absent());
        assert_eq!(
            serde_json::to_value(&scene).expect("serialize"),
            serde_json::json!({})
        );
    }

    #[test]
    fn unknown_and_wrong_typed_fields_round_trip() {
        let input = serde_json::json!({
            "id": 7,
            "prompt": ["not", "text"],
            "mood": "tense",
            "choices": [{"id": "a", "label": null, "target": "b", "weight": 2}]
        });
        let scene: Scene = serde_json::from_value(input.clone()).expect("scene");
        let output = serde_json::to_value(&scene).expect("scene serializes");
        assert_eq!(output, input);
    }

    #[test]
    fn typed_fields_are_visible() {
        let scene: Scene = serde_json::from_value(serde_json::json!({
            "id": "start",
            "choices": [{"id": "go", "label": "Go"}]
        }))
        .expect("scene");
        assert_eq!(scene.id_str(), Some("start"));
        assert_eq!(scene.choices().len(), 1);
        assert_eq!(scene.choices()[0].id_str(), Some("go"));
    }
}
