//! Post editor: a contenteditable surface with light formatting and
//! selection-anchored comments.
//!
//! Formatting is presentation only. What flows back out through
//! `on_change` is the rendered plain text, which is what feedback
//! submission and diffing operate on.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::session::state::InlineComment;

const EDITOR_ID: &str = "post-editor";
const CHAR_LIMIT: usize = 3000;
const CHAR_WARN_AT: usize = 2700;
const HIGHLIGHT_COLOR: &str = "#fde68a";

// ── Plain text to editor HTML ─────────────────────────────────────────────────

/// Seed HTML for the editable surface: blank lines split paragraphs,
/// single newlines become line breaks.
pub fn text_to_editor_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.split("\n\n")
        .map(|p| p.trim_matches('\n'))
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("<p>{}</p>", escape_html(p).replace('\n', "<br>")))
        .collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Counter class: warn as the text nears the post length limit, flag it
/// once over.
pub fn char_counter_class(count: usize) -> &'static str {
    if count > CHAR_LIMIT {
        "char-counter char-counter-over"
    } else if count > CHAR_WARN_AT {
        "char-counter char-counter-warn"
    } else {
        "char-counter"
    }
}

// ── DOM access ────────────────────────────────────────────────────────────────

fn editor_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(EDITOR_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Rendered plain text of the surface: paragraph boundaries come back as
/// blank lines, `<br>` as single newlines.
fn editor_text() -> Option<String> {
    editor_element().map(|el| el.inner_text())
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

fn exec(command: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.exec_command(command);
    }
}

fn exec_with_value(command: &str, value: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.exec_command_with_show_ui_and_value(command, false, value);
    }
}

fn command_state(command: &str) -> bool {
    html_document()
        .and_then(|d| d.query_command_state(command).ok())
        .unwrap_or(false)
}

fn command_enabled(command: &str) -> bool {
    html_document()
        .and_then(|d| d.query_command_enabled(command).ok())
        .unwrap_or(false)
}

fn selection_text() -> String {
    web_sys::window()
        .and_then(|w| w.get_selection().ok().flatten())
        .map(|s| String::from(s.to_string()))
        .unwrap_or_default()
}

// ── Components ────────────────────────────────────────────────────────────────

#[component]
fn ToolbarButton(
    title: String,
    #[props(default)] active: bool,
    #[props(default)] disabled: bool,
    onpress: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: if active { "toolbar-button active" } else { "toolbar-button" },
            title: "{title}",
            disabled: disabled,
            // Keep the editor's selection alive while clicking
            onmousedown: move |e| e.prevent_default(),
            onclick: move |_| onpress.call(()),
            {children}
        }
    }
}

/// The edit surface plus its chrome. `content` seeds the DOM once per
/// mount; remount (via a key change upstream) to re-seed. `current_text`
/// only drives the character counter.
#[component]
pub fn EditorPane(
    content: String,
    current_text: String,
    inline_comments: Vec<InlineComment>,
    on_change: EventHandler<String>,
    on_add_inline_comment: EventHandler<(String, String)>,
    on_remove_inline_comment: EventHandler<String>,
) -> Element {
    let mut show_comment_input = use_signal(|| false);
    let mut comment_text = use_signal(String::new);
    let mut selected_text = use_signal(String::new);

    let char_count = current_text.chars().count();
    let comment_count = inline_comments.len();
    let seed_html = text_to_editor_html(&content);

    let open_comment_modal = move |_| {
        let selection = selection_text();
        if selection.trim().is_empty() {
            return;
        }
        exec_with_value("hiliteColor", HIGHLIGHT_COLOR);
        selected_text.set(selection);
        show_comment_input.set(true);
    };

    let submit_comment = move |_| {
        let comment = comment_text.read().trim().to_string();
        if comment.is_empty() {
            return;
        }
        on_add_inline_comment.call((selected_text(), comment));
        comment_text.set(String::new());
        selected_text.set(String::new());
        show_comment_input.set(false);
    };

    let comment_rows = inline_comments.iter().cloned().map(|ic| {
        let remove_id = ic.id.clone();
        rsx! {
            div { class: "inline-comment", key: "{ic.id}",
                div { class: "inline-comment-body",
                    span { class: "inline-comment-quote", "\"{ic.text}\"" }
                    p { class: "inline-comment-text", "{ic.comment}" }
                }
                button {
                    class: "inline-comment-remove",
                    title: "Remove comment",
                    onclick: move |_| on_remove_inline_comment.call(remove_id.clone()),
                    "×"
                }
            }
        }
    });

    rsx! {
        div { class: "editor",
            if show_comment_input() {
                div { class: "modal-overlay",
                    div { class: "comment-modal",
                        h3 { class: "modal-title", "Add Comment" }
                        div { class: "modal-quote",
                            span { class: "modal-quote-label", "Selected: " }
                            "\"{selected_text}\""
                        }
                        textarea {
                            class: "modal-input",
                            rows: "3",
                            autofocus: true,
                            placeholder: "What feedback do you have for this text?",
                            value: "{comment_text}",
                            oninput: move |e| comment_text.set(e.value()),
                        }
                        div { class: "modal-actions",
                            button {
                                class: "modal-cancel",
                                onclick: move |_| {
                                    comment_text.set(String::new());
                                    selected_text.set(String::new());
                                    show_comment_input.set(false);
                                },
                                "Cancel"
                            }
                            button {
                                class: "modal-confirm",
                                disabled: comment_text.read().trim().is_empty(),
                                onclick: submit_comment,
                                "Add Comment"
                            }
                        }
                    }
                }
            }

            div { class: "editor-toolbar",
                ToolbarButton {
                    title: "Bold (Ctrl+B)",
                    active: command_state("bold"),
                    onpress: move |_| exec("bold"),
                    strong { "B" }
                }
                ToolbarButton {
                    title: "Italic (Ctrl+I)",
                    active: command_state("italic"),
                    onpress: move |_| exec("italic"),
                    em { "I" }
                }
                ToolbarButton {
                    title: "Strikethrough",
                    active: command_state("strikeThrough"),
                    onpress: move |_| exec("strikeThrough"),
                    s { "S" }
                }
                span { class: "toolbar-divider" }
                ToolbarButton {
                    title: "Bullet List",
                    active: command_state("insertUnorderedList"),
                    onpress: move |_| exec("insertUnorderedList"),
                    "• List"
                }
                ToolbarButton {
                    title: "Numbered List",
                    active: command_state("insertOrderedList"),
                    onpress: move |_| exec("insertOrderedList"),
                    "1. List"
                }
                span { class: "toolbar-divider" }
                ToolbarButton {
                    title: "Undo (Ctrl+Z)",
                    disabled: !command_enabled("undo"),
                    onpress: move |_| exec("undo"),
                    "↶"
                }
                ToolbarButton {
                    title: "Redo (Ctrl+Shift+Z)",
                    disabled: !command_enabled("redo"),
                    onpress: move |_| exec("redo"),
                    "↷"
                }
                span { class: "toolbar-divider" }
                ToolbarButton {
                    title: "Add comment to selection",
                    onpress: open_comment_modal,
                    "💬 Comment"
                }
                span { class: "toolbar-spacer" }
                span { class: char_counter_class(char_count), "{char_count} / 3000" }
            }

            div {
                id: EDITOR_ID,
                class: "editor-surface",
                contenteditable: "true",
                "data-placeholder": "Start typing...",
                dangerous_inner_html: "{seed_html}",
                oninput: move |_| {
                    if let Some(text) = editor_text() {
                        on_change.call(text);
                    }
                },
            }

            if !inline_comments.is_empty() {
                div { class: "inline-comments",
                    h4 { class: "inline-comments-title", "Inline Comments ({comment_count})" }
                    div { class: "inline-comment-list", {comment_rows} }
                }
            }

            div { class: "editor-footer",
                p { "Tip: Select text to add inline comments or apply formatting" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_split_paragraphs() {
        assert_eq!(
            text_to_editor_html("First point.\n\nSecond point.\nStill second."),
            "<p>First point.</p><p>Second point.<br>Still second.</p>"
        );
    }

    #[test]
    fn extra_blank_lines_collapse() {
        assert_eq!(text_to_editor_html("a\n\n\nb"), "<p>a</p><p>b</p>");
        assert_eq!(text_to_editor_html("a\n\n\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn markup_in_drafts_is_escaped() {
        assert_eq!(
            text_to_editor_html("Ship <fast> & \"loud\""),
            "<p>Ship &lt;fast&gt; &amp; &quot;loud&quot;</p>"
        );
    }

    #[test]
    fn empty_text_renders_nothing() {
        assert_eq!(text_to_editor_html(""), "");
        assert_eq!(text_to_editor_html("\n\n"), "");
    }

    #[test]
    fn counter_warns_near_the_limit() {
        assert_eq!(char_counter_class(100), "char-counter");
        assert_eq!(char_counter_class(2700), "char-counter");
        assert_eq!(char_counter_class(2701), "char-counter char-counter-warn");
        assert_eq!(char_counter_class(3000), "char-counter char-counter-warn");
        assert_eq!(char_counter_class(3001), "char-counter char-counter-over");
    }
}
