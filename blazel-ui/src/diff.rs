//! Word-level diff between a draft's generated text and its edited version

use dioxus::prelude::*;
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Same,
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiffSpan {
    pub kind: DiffKind,
    pub text: String,
}

/// Compare two texts at word granularity.
///
/// Consecutive tokens with the same tag collapse into one span, so the
/// output is the minimal run-length form of the diff. Concatenating the
/// `Same` + `Removed` spans reproduces `original`; `Same` + `Added`
/// reproduces `edited`.
pub fn diff_words(original: &str, edited: &str) -> Vec<DiffSpan> {
    let diff = TextDiff::from_words(original, edited);
    let mut spans: Vec<DiffSpan> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => DiffKind::Same,
            ChangeTag::Delete => DiffKind::Removed,
            ChangeTag::Insert => DiffKind::Added,
        };

        match spans.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => spans.push(DiffSpan {
                kind,
                text: change.value().to_string(),
            }),
        }
    }

    spans
}

pub fn has_changes(spans: &[DiffSpan]) -> bool {
    spans.iter().any(|s| s.kind != DiffKind::Same)
}

/// Characters removed and added, summed over the non-`Same` spans
pub fn change_stats(spans: &[DiffSpan]) -> (usize, usize) {
    let removed = spans
        .iter()
        .filter(|s| s.kind == DiffKind::Removed)
        .map(|s| s.text.chars().count())
        .sum();
    let added = spans
        .iter()
        .filter(|s| s.kind == DiffKind::Added)
        .map(|s| s.text.chars().count())
        .sum();
    (removed, added)
}

#[component]
pub fn DiffView(original: String, edited: String) -> Element {
    let spans = diff_words(&original, &edited);

    if !has_changes(&spans) {
        return rsx! {
            div { class: "diff-empty", "No changes detected" }
        };
    }

    let (removed_chars, added_chars) = change_stats(&spans);

    rsx! {
        div { class: "diff-view",
            div { class: "diff-legend",
                span { class: "diff-legend-swatch diff-legend-removed" }
                span { "Removed" }
                span { class: "diff-legend-swatch diff-legend-added" }
                span { "Added" }
            }
            div { class: "diff-content",
                for span in spans {
                    match span.kind {
                        DiffKind::Same => rsx! {
                            span { "{span.text}" }
                        },
                        DiffKind::Removed => rsx! {
                            span { class: "diff-removed", "{span.text}" }
                        },
                        DiffKind::Added => rsx! {
                            span { class: "diff-added", "{span.text}" }
                        },
                    }
                }
            }
            div { class: "diff-stats",
                span { class: "diff-stat-removed", "-{removed_chars} chars" }
                span { class: "diff-stat-added", "+{added_chars} chars" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(spans: &[DiffSpan], keep: DiffKind) -> String {
        spans
            .iter()
            .filter(|s| s.kind == DiffKind::Same || s.kind == keep)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn sides_reconstruct_from_spans() {
        let original = "Leadership is about listening to your team every day.";
        let edited = "Leadership is mostly about listening closely to your people.";
        let spans = diff_words(original, edited);

        assert_eq!(reconstruct(&spans, DiffKind::Removed), original);
        assert_eq!(reconstruct(&spans, DiffKind::Added), edited);
    }

    #[test]
    fn diff_is_deterministic() {
        let original = "We shipped the feature on time.";
        let edited = "We finally shipped the big feature on time!";
        assert_eq!(diff_words(original, edited), diff_words(original, edited));
    }

    #[test]
    fn identical_inputs_have_no_changes() {
        let text = "Nothing to see here.";
        let spans = diff_words(text, text);
        assert!(!has_changes(&spans));
        assert_eq!(change_stats(&spans), (0, 0));
        assert_eq!(reconstruct(&spans, DiffKind::Added), text);
    }

    #[test]
    fn tokenizes_by_words_not_characters() {
        let spans = diff_words("Hello world", "Hello brave world");
        assert_eq!(
            spans,
            vec![
                DiffSpan {
                    kind: DiffKind::Same,
                    text: "Hello ".to_string(),
                },
                DiffSpan {
                    kind: DiffKind::Added,
                    text: "brave ".to_string(),
                },
                DiffSpan {
                    kind: DiffKind::Same,
                    text: "world".to_string(),
                },
            ]
        );
    }

    #[test]
    fn contiguous_insertions_coalesce_into_one_span() {
        let spans = diff_words("Hello world", "Hello brave new world");
        let added: Vec<_> = spans.iter().filter(|s| s.kind == DiffKind::Added).collect();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].text, "brave new ");
        assert!(spans.iter().all(|s| s.kind != DiffKind::Removed));
    }

    #[test]
    fn contiguous_deletions_coalesce_into_one_span() {
        let spans = diff_words("one two three four", "one four");
        let removed: Vec<_> = spans.iter().filter(|s| s.kind == DiffKind::Removed).collect();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].text, "two three ");
        assert!(spans.iter().all(|s| s.kind != DiffKind::Added));
    }

    #[test]
    fn stats_count_chars_not_bytes() {
        let spans = diff_words("café", "tea");
        let (removed, added) = change_stats(&spans);
        assert_eq!(removed, 4);
        assert_eq!(added, 3);
    }

    #[test]
    fn empty_original_is_all_additions() {
        let spans = diff_words("", "Brand new text");
        assert!(has_changes(&spans));
        assert!(spans.iter().all(|s| s.kind == DiffKind::Added));
        assert_eq!(reconstruct(&spans, DiffKind::Added), "Brand new text");
        assert_eq!(reconstruct(&spans, DiffKind::Removed), "");
    }
}
