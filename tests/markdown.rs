//! Integration tests over comrak-rendered Markdown.
//!
//! The filter sits downstream of a Markdown renderer, so these tests feed
//! it real renderer output. The tasklist extension stays off: markers must
//! arrive as literal text, exactly as they do from renderers without
//! native task-list support.

use comrak::{markdown_to_html, ComrakOptions};
use pretty_assertions::assert_eq;
use tickbox::{filter_fragment, FilteredHtml, TaskState};

fn render_and_filter(markdown: &str) -> FilteredHtml {
    let html = markdown_to_html(markdown, &ComrakOptions::default());
    assert!(
        html.contains('['),
        "renderer should leave markers as literal text: {html}"
    );
    filter_fragment(&html).expect("should filter rendered markdown")
}

#[test]
fn test_tight_list_renders_bare_items() {
    let out = render_and_filter("- [ ] buy milk\n- [x] drink milk\n");

    assert_eq!(out.items.len(), 2);
    assert_eq!(out.items[0].state, TaskState::Incomplete);
    assert_eq!(out.items[0].source_text, "[ ] buy milk");
    assert_eq!(out.items[1].state, TaskState::Complete);
    assert_eq!(out.items[1].source_text, "[x] drink milk");

    assert!(out.html.contains("<ul class=\"task-list\">"));
    assert!(out
        .html
        .contains("<li class=\"task-list-item\"><input type=\"checkbox\""));
}

#[test]
fn test_loose_list_renders_paragraph_wrapped_items() {
    let out = render_and_filter("- [ ] alpha\n\n- [x] beta\n");

    assert_eq!(out.items.len(), 2);
    assert_eq!(out.items[0].source_text, "[ ] alpha");
    assert_eq!(out.items[1].source_text, "[x] beta");

    // Loose rendering wraps item text in paragraphs; the checkbox goes
    // inside the paragraph while the class goes on the list item.
    assert!(out.html.contains("<li class=\"task-list-item\">"));
    assert!(out.html.contains("<p><input type=\"checkbox\""));
}

#[test]
fn test_tight_and_loose_forms_yield_identical_records() {
    let tight = render_and_filter("- [ ] alpha\n- [x] beta\n");
    let loose = render_and_filter("- [ ] alpha\n\n- [x] beta\n");

    assert_eq!(tight.items, loose.items);
}

#[test]
fn test_ordered_markdown_list() {
    let out = render_and_filter("1. [ ] first\n2. [x] second\n");

    assert!(out.html.contains("<ol class=\"task-list\">"));
    assert_eq!(out.items.len(), 2);
    assert!(!out.items[0].is_complete());
    assert!(out.items[1].is_complete());
}

#[test]
fn test_inline_markup_after_marker_is_preserved() {
    let out = render_and_filter("- [ ] buy **milk** and `eggs`\n");

    assert_eq!(out.items.len(), 1);
    assert_eq!(
        out.items[0].source_text,
        "[ ] buy <strong>milk</strong> and <code>eggs</code>"
    );
    assert!(out
        .html
        .contains("disabled=\"disabled\"> buy <strong>milk</strong> and <code>eggs</code>"));
}

#[test]
fn test_ordinary_markdown_list_is_not_a_task_list() {
    let md = "- plain item\n- another item\n";
    let html = markdown_to_html(md, &ComrakOptions::default());
    let out = filter_fragment(&html).expect("should filter");

    assert!(out.items.is_empty());
    assert!(!out.html.contains("task-list"));
}

#[test]
fn test_nested_markdown_task_list() {
    let out = render_and_filter("- [x] parent\n  - [ ] child\n");

    assert_eq!(out.items.len(), 2);
    assert!(out.items[0].source_text.starts_with("[x] parent"));
    assert_eq!(out.items[1].source_text, "[ ] child");
    assert_eq!(out.html.matches("<input type=\"checkbox\"").count(), 2);
}

#[test]
fn test_marker_in_plain_paragraph_is_ignored() {
    let out = render_and_filter("some text with [x] in the middle\n\n- [ ] real task\n");

    assert_eq!(out.items.len(), 1);
    assert_eq!(out.items[0].source_text, "[ ] real task");
    assert!(out.html.contains("some text with [x] in the middle"));
}
