//! Word-level strike-through of checklist labels.
//!
//! Inspectors may strike individual words of a label ("fissure, ~~rayure~~,
//! déformation") to say which defects were actually looked for. The marks are
//! stored in `crossedOutWords` under the field key, independently of the
//! point status.

use crate::model::point::CrossedOutWords;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,.;:!?()/\-]+").expect("separator pattern is valid"));

/// One piece of a label: either a word or the separator run between words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    pub text: String,
    pub is_word: bool,
    pub struck: bool,
}

impl WordSpan {
    fn separator(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_word: false,
            struck: false,
        }
    }
}

/// Splits `label` into words and separators, marking the words struck under
/// `crossed[field_key]`. Joining every span's `text` gives back `label`.
pub fn annotate_label(label: &str, field_key: &str, crossed: &CrossedOutWords) -> Vec<WordSpan> {
    let marks = crossed.get(field_key);
    let is_struck = |word: &str| {
        marks
            .and_then(|m| m.get(word.trim()))
            .copied()
            .unwrap_or(false)
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for sep in SEPARATORS.find_iter(label) {
        if sep.start() > last {
            let word = &label[last..sep.start()];
            spans.push(WordSpan {
                text: word.to_string(),
                is_word: true,
                struck: is_struck(word),
            });
        }
        spans.push(WordSpan::separator(sep.as_str()));
        last = sep.end();
    }
    if last < label.len() {
        let word = &label[last..];
        spans.push(WordSpan {
            text: word.to_string(),
            is_word: true,
            struck: is_struck(word),
        });
    }
    spans
}

/// Distinct words of a label in first-seen order.
pub fn label_words(label: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in SEPARATORS.split(label).filter(|w| !w.is_empty()) {
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn crossed(key: &str, words: &[(&str, bool)]) -> CrossedOutWords {
        let mut map = CrossedOutWords::new();
        map.insert(
            key.to_string(),
            words
                .iter()
                .map(|(w, s)| (w.to_string(), *s))
                .collect::<BTreeMap<_, _>>(),
        );
        map
    }

    fn struck_words(spans: &[WordSpan]) -> Vec<&str> {
        spans
            .iter()
            .filter(|s| s.struck)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn marks_only_true_words_of_the_field() {
        let marks = crossed("calotte.etat", &[("rayure", true), ("fissure", false)]);
        let spans = annotate_label("Fissure, rayure ou déformation", "calotte.etat", &marks);
        assert_eq!(struck_words(&spans), vec!["rayure"]);
    }

    #[test]
    fn other_fields_are_not_affected() {
        let marks = crossed("calotte.etat", &[("rayure", true)]);
        let spans = annotate_label("rayure", "coiffe.etat", &marks);
        assert!(struck_words(&spans).is_empty());
    }

    #[test]
    fn spans_rebuild_the_label_and_separators_are_never_struck() {
        let label = "  Sangles (coupure / brûlure)  usure. ";
        let marks = crossed("s.f", &[("coupure", true), ("usure", true)]);
        let spans = annotate_label(label, "s.f", &marks);

        let rebuilt: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, label);
        assert!(spans.iter().filter(|s| !s.is_word).all(|s| !s.struck));
        assert_eq!(struck_words(&spans), vec!["coupure", "usure"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let marks = crossed("s.f", &[("Usure", true)]);
        let spans = annotate_label("usure", "s.f", &marks);
        assert!(struck_words(&spans).is_empty());
    }

    #[test]
    fn label_words_are_distinct_and_ordered() {
        assert_eq!(
            label_words("Doigt, ressort, doigt; ressort"),
            vec!["Doigt", "ressort", "doigt"]
        );
        assert!(label_words(" , ").is_empty());
    }
}
