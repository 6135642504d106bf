//! Unicode text normalization for prompts and labels.
//!
//! Authoring tools love to emit curly quotes, em dashes, and exotic spaces.
//! This pass composes the text to NFC and then folds a fixed set of
//! decorative code points down to plain ASCII so the story reads the same
//! in any terminal or diff. Characters outside the table are left alone.

use unicode_normalization::UnicodeNormalization;

use crate::scene::Scene;

/// The substitution table: decorative code point to ASCII replacement.
///
/// A closed list, not a Unicode-category sweep. Order is stable for
/// testability; no replacement value contains another entry's key, so
/// application order cannot change the result.
pub const REPLACEMENTS: &[(char, &str)] = &[
    // Dash-like
    ('\u{2010}', "-"),   // hyphen
    ('\u{2011}', "-"),   // non-breaking hyphen
    ('\u{2012}', "-"),   // figure dash
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2015}', "-"),   // horizontal bar
    ('\u{2212}', "-"),   // minus sign
    // Quote-like
    ('\u{2018}', "'"),   // left single quote
    ('\u{2019}', "'"),   // right single quote
    ('\u{201B}', "'"),   // single high-reversed-9 quote
    ('\u{2032}', "'"),   // prime
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{201F}', "\""),  // double high-reversed-9 quote
    ('\u{2033}', "\""),  // double prime
    // Ellipsis
    ('\u{2026}', "..."),
    // Space-like
    ('\u{00A0}', " "),   // no-break space
    ('\u{2000}', " "),   // en quad
    ('\u{2001}', " "),   // em quad
    ('\u{2002}', " "),   // en space
    ('\u{2003}', " "),   // em space
    ('\u{2004}', " "),   // three-per-em space
    ('\u{2005}', " "),   // four-per-em space
    ('\u{2006}', " "),   // six-per-em space
    ('\u{2007}', " "),   // figure space
    ('\u{2008}', " "),   // punctuation space
    ('\u{2009}', " "),   // thin space
    ('\u{200A}', " "),   // hair space
    ('\u{202F}', " "),   // narrow no-break space
    ('\u{205F}', " "),   // medium mathematical space
    ('\u{3000}', " "),   // ideographic space
    // Zero-width / invisible
    ('\u{00AD}', ""),    // soft hyphen
    ('\u{200B}', ""),    // zero-width space
    ('\u{200C}', ""),    // zero-width non-joiner
    ('\u{200D}', ""),    // zero-width joiner
    ('\u{2060}', ""),    // word joiner
    ('\u{FEFF}', ""),    // zero-width no-break space (BOM)
];

/// Normalize one free-text string: NFC composition, then the substitution
/// table. Idempotent.
pub fn normalize_text(s: &str) -> String {
    let mut out: String = s.nfc().collect();
    for &(from, to) in REPLACEMENTS {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

/// Normalize every string-typed scene `prompt` and choice `label` in place.
/// Absent or wrong-typed fields pass through unchanged.
pub fn normalize_story(scenes: &mut [Scene]) {
    for scene in scenes {
        if let Some(prompt) = scene.prompt.typed_mut() {
            *prompt = normalize_text(prompt);
        }
        if let Some(choices) = scene.choices_mut() {
            for choice in choices {
                if let Some(label) = choice.label.typed_mut() {
                    *label = normalize_text(label);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fancy_punctuation_folds_to_ascii() {
        assert_eq!(
            normalize_text("She said \u{201C}Hello\u{2014}world\u{2026}\u{201D}"),
            "She said \"Hello-world...\""
        );
    }

    #[test]
    fn spaces_and_invisibles() {
        assert_eq!(normalize_text("a\u{00A0}b\u{2009}c"), "a b c");
        assert_eq!(normalize_text("so\u{00AD}ft\u{200B}"), "soft");
        assert_eq!(normalize_text("\u{FEFF}lead"), "lead");
    }

    #[test]
    fn nfc_composes_before_lookup() {
        // e + combining acute composes to é; unlisted non-ASCII stays.
        assert_eq!(normalize_text("e\u{0301}"), "é");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_text("\u{2018}quo\u{2026}te\u{2019}\u{2014}\u{3000}");
        assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn plain_ascii_is_untouched() {
        let text = "Already clean: 'quotes', \"doubles\", dots... and-dash";
        assert_eq!(normalize_text(text), text);
    }

    #[test]
    fn table_has_the_full_closed_list() {
        assert_eq!(REPLACEMENTS.len(), 37);
        // No replacement re-triggers another entry.
        for &(_, to) in REPLACEMENTS {
            for &(from, _) in REPLACEMENTS {
                assert!(!to.contains(from));
            }
        }
    }

    #[test]
    fn normalize_story_touches_only_prompts_and_labels() {
        let mut scenes: Vec<Scene> = serde_json::from_value(serde_json::json!([
            {
                "id": "s\u{2014}1",
                "prompt": "Go\u{2026}",
                "note": "keep\u{2026}",
                "choices": [{"id": "c1", "label": "\u{201C}Yes\u{201D}", "hint": "raw\u{2014}"}]
            }
        ]))
        .expect("scenes");
        normalize_story(&mut scenes);
        let value = serde_json::to_value(&scenes).expect("serialize");
        assert_eq!(value[0]["prompt"], "Go...");
        assert_eq!(value[0]["choices"][0]["label"], "\"Yes\"");
        // Ids and unknown fields are not text fields.
        assert_eq!(value[0]["id"], "s\u{2014}1");
        assert_eq!(value[0]["note"], "keep\u{2026}");
        assert_eq!(value[0]["choices"][0]["hint"], "raw\u{2014}");
    }
}
